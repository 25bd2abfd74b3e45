//! Zero-cost indexing macro for the hot cell-storage paths
//!
//! In debug builds: normal bounds-checked indexing (panics with a useful index).
//! In release builds: `get_unchecked` (no bounds check).
//!
//! Only use it after the caller has already validated the index, e.g. after
//! `CellGrid::index_of` returned `Some`.
//!
//! ```rust
//! use sandfall_engine::fast;
//! use sandfall_engine::domain::{Cell, Material};
//!
//! let mut cells = vec![Cell::EMPTY; 4];
//! fast!(cells, [2] = Cell::new(Material::Sand));
//! assert_eq!(fast!(cells, [2]).material, Material::Sand);
//! ```

#[macro_export]
macro_rules! fast {
    // Read: fast!(slice, [index])
    ($slice:expr, [$index:expr]) => {{
        #[cfg(debug_assertions)]
        {
            &$slice[$index]
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { $slice.get_unchecked($index) }
        }
    }};

    // Write: fast!(slice, [index] = value)
    ($slice:expr, [$index:expr] = $val:expr) => {{
        #[cfg(debug_assertions)]
        {
            $slice[$index] = $val;
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { *$slice.get_unchecked_mut($index) = $val; }
        }
    }};
}
