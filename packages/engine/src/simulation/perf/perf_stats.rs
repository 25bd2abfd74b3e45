use wasm_bindgen::prelude::*;

/// Per-step counters and timings. Zeros unless perf metrics are enabled.
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) evaluate_ms: f64,
    pub(super) apply_ms: f64,
    pub(super) awake_cells: u32,
    pub(super) next_awake_cells: u32,
    pub(super) actions_proposed: u32,
    pub(super) actions_applied: u32,
    pub(super) actions_conflicted: u32,
    pub(super) actions_rejected: u32,
    pub(super) touched_cells: u32,
}

impl PerfStats {
    pub(super) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn evaluate_ms(&self) -> f64 { self.evaluate_ms }
    #[wasm_bindgen(getter)]
    pub fn apply_ms(&self) -> f64 { self.apply_ms }
    #[wasm_bindgen(getter)]
    pub fn awake_cells(&self) -> u32 { self.awake_cells }
    #[wasm_bindgen(getter)]
    pub fn next_awake_cells(&self) -> u32 { self.next_awake_cells }
    #[wasm_bindgen(getter)]
    pub fn actions_proposed(&self) -> u32 { self.actions_proposed }
    #[wasm_bindgen(getter)]
    pub fn actions_applied(&self) -> u32 { self.actions_applied }
    #[wasm_bindgen(getter)]
    pub fn actions_conflicted(&self) -> u32 { self.actions_conflicted }
    #[wasm_bindgen(getter)]
    pub fn actions_rejected(&self) -> u32 { self.actions_rejected }
    #[wasm_bindgen(getter)]
    pub fn touched_cells(&self) -> u32 { self.touched_cells }
}
