//! AwakeSet - positions scheduled for rule evaluation
//!
//! A bitset over cell indices plus a population count. Iteration walks set
//! bits in index order, so a seeded run visits cells in the same order on
//! every platform.

use crate::spatial::grid::{Pos, NEIGHBOR_OFFSETS};

#[derive(Clone, Debug)]
pub struct AwakeSet {
    width: u32,
    height: u32,
    bits: Vec<u64>,
    len: usize,
}

impl AwakeSet {
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width as usize) * (height as usize);
        Self {
            width,
            height,
            bits: vec![0u64; (size + 63) / 64],
            len: 0,
        }
    }

    // === BitSet helpers ===

    #[inline(always)]
    fn word_bit(idx: usize) -> (usize, u64) {
        (idx >> 6, 1u64 << (idx & 63))
    }

    #[inline]
    fn index_of(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some((y as usize) * (self.width as usize) + (x as usize))
        } else {
            None
        }
    }

    // === Membership ===

    /// Mark `(x, y)` awake. Out-of-bounds positions are ignored.
    #[inline]
    pub fn insert(&mut self, x: i32, y: i32) -> bool {
        let Some(idx) = self.index_of(x, y) else {
            return false;
        };
        let (word, mask) = Self::word_bit(idx);
        if self.bits[word] & mask != 0 {
            return false;
        }
        self.bits[word] |= mask;
        self.len += 1;
        true
    }

    #[inline]
    pub fn remove(&mut self, x: i32, y: i32) -> bool {
        let Some(idx) = self.index_of(x, y) else {
            return false;
        };
        let (word, mask) = Self::word_bit(idx);
        if self.bits[word] & mask == 0 {
            return false;
        }
        self.bits[word] &= !mask;
        self.len -= 1;
        true
    }

    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        match self.index_of(x, y) {
            Some(idx) => {
                let (word, mask) = Self::word_bit(idx);
                self.bits[word] & mask != 0
            }
            None => false,
        }
    }

    /// Wake a position and its whole 8-neighbourhood.
    #[inline]
    pub fn wake_neighborhood(&mut self, x: i32, y: i32) {
        self.insert(x, y);
        for (dx, dy) in NEIGHBOR_OFFSETS {
            self.insert(x + dx, y + dy);
        }
    }

    pub fn clear(&mut self) {
        self.bits.fill(0);
        self.len = 0;
    }

    /// Wake every cell (used after bulk edits).
    pub fn fill(&mut self) {
        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                self.insert(x, y);
            }
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Awake positions in row-major index order.
    pub fn iter(&self) -> impl Iterator<Item = Pos> + '_ {
        let width = self.width as usize;
        self.bits.iter().enumerate().flat_map(move |(word_idx, &word)| {
            let mut rest = word;
            std::iter::from_fn(move || {
                if rest == 0 {
                    return None;
                }
                let bit = rest.trailing_zeros() as usize;
                rest &= rest - 1;
                let idx = (word_idx << 6) + bit;
                Some(((idx % width) as i32, (idx / width) as i32))
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_is_idempotent() {
        let mut set = AwakeSet::new(10, 10);
        assert!(set.insert(3, 4));
        assert!(!set.insert(3, 4));
        assert_eq!(set.len(), 1);
        assert!(set.contains(3, 4));
        assert!(set.remove(3, 4));
        assert!(set.is_empty());
    }

    #[test]
    fn ignores_out_of_bounds() {
        let mut set = AwakeSet::new(4, 4);
        assert!(!set.insert(-1, 0));
        assert!(!set.insert(0, 4));
        assert!(!set.contains(-1, 0));
        assert!(set.is_empty());
    }

    #[test]
    fn neighborhood_clips_at_corner() {
        let mut set = AwakeSet::new(8, 8);
        set.wake_neighborhood(0, 0);
        assert_eq!(set.len(), 4);
        set.clear();
        set.wake_neighborhood(4, 4);
        assert_eq!(set.len(), 9);
    }

    #[test]
    fn iterates_in_index_order_across_words() {
        let mut set = AwakeSet::new(100, 3);
        set.insert(99, 2);
        set.insert(70, 0);
        set.insert(1, 1);
        set.insert(5, 0);
        let got: Vec<Pos> = set.iter().collect();
        assert_eq!(got, vec![(5, 0), (70, 0), (1, 1), (99, 2)]);
    }

    #[test]
    fn fill_wakes_everything() {
        let mut set = AwakeSet::new(7, 5);
        set.fill();
        assert_eq!(set.len(), 35);
        assert_eq!(set.iter().count(), 35);
    }
}
