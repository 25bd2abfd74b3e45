/// Seed for grids built without an explicit one.
pub(super) fn entropy_seed() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        let hi = (js_sys::Math::random() * 4_294_967_296.0) as u64;
        let lo = (js_sys::Math::random() * 4_294_967_296.0) as u64;
        (hi << 32) | lo
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        rand::random::<u64>()
    }
}

/// Per-cell seed for one frame: evaluation order (and thread count) never
/// changes what a cell decides.
#[inline]
pub(super) fn cell_seed(frame_seed: u64, idx: usize) -> u64 {
    frame_seed ^ (idx as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}
