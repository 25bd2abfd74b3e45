use log::debug;

use crate::domain::{Cell, Material};

use super::Grid;

/// External injection of matter (mouse/keyboard in the shell).
///
/// Wakes the cell itself; when something was there before, its neighbours
/// wake too since their surroundings just changed.
pub(super) fn spawn(grid: &mut Grid, x: i32, y: i32, material: Material) -> bool {
    if !grid.cells.in_bounds(x, y) {
        return false;
    }

    let previous = grid.cells.get(x, y);
    let cell = Cell::new(material);
    grid.cells.set(x, y, cell);
    grid.touched.record((x, y), cell);

    if previous.is_empty() {
        grid.awake.insert(x, y);
    } else {
        grid.awake.wake_neighborhood(x, y);
    }
    true
}

/// Square cursor of side `size` centred on `(cx, cy)`. Returns cells written.
pub(super) fn spawn_brush(grid: &mut Grid, cx: i32, cy: i32, size: u32, material: Material) -> usize {
    let half = (size.max(1) / 2) as i32;
    let mut written = 0;
    for y in (cy - half)..=(cy + half) {
        for x in (cx - half)..=(cx + half) {
            if spawn(grid, x, y, material) {
                written += 1;
            }
        }
    }
    written
}

pub(super) fn clear(grid: &mut Grid) {
    debug!("clearing {}x{} grid at frame {}", grid.width(), grid.height(), grid.frame);
    grid.cells.clear();
    grid.awake.clear();
    grid.spare_awake.clear();
    grid.touched.clear();
    grid.frame = 0;
}
