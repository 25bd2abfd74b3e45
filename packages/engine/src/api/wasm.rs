use wasm_bindgen::prelude::*;

use crate::domain::Material;
use crate::simulation::{Grid, PerfStats};

/// JS-facing handle around the simulation [`Grid`].
#[wasm_bindgen]
pub struct World {
    core: Grid,
}

#[wasm_bindgen]
impl World {
    /// Create a new world with given dimensions
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Self {
        Self { core: Grid::new(width, height) }
    }

    #[wasm_bindgen(js_name = withSeed)]
    pub fn with_seed(width: u32, height: u32, seed: u64) -> Self {
        Self { core: Grid::with_seed(width, height, seed) }
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn awake_count(&self) -> u32 { self.core.awake_count() as u32 }

    /// Replace tunable constants from a JSON object.
    pub fn load_settings_json(&mut self, json: &str) -> Result<(), JsValue> {
        self.core
            .load_settings_json(json)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn settings_json(&self) -> String {
        self.core.settings().to_json()
    }

    /// Place a material (by id) at position. Unknown ids and positions outside the grid are ignored.
    pub fn spawn(&mut self, x: i32, y: i32, material: u8) -> bool {
        match Material::from_id(material) {
            Some(m) => self.core.spawn(x, y, m),
            None => false,
        }
    }

    pub fn remove(&mut self, x: i32, y: i32) -> bool {
        self.core.remove(x, y)
    }

    pub fn spawn_brush(&mut self, cx: i32, cy: i32, size: u32, material: u8) -> u32 {
        match Material::from_id(material) {
            Some(m) => self.core.spawn_brush(cx, cy, size, m) as u32,
            None => 0,
        }
    }

    pub fn remove_brush(&mut self, cx: i32, cy: i32, size: u32) -> u32 {
        self.core.remove_brush(cx, cy, size) as u32
    }

    pub fn clear(&mut self) {
        self.core.clear();
    }

    /// Material id at position (bedrock outside the grid).
    pub fn material_at(&self, x: i32, y: i32) -> u8 {
        self.core.get(x, y).material.id()
    }

    pub fn step(&mut self) {
        self.core.step();
    }

    /// Cells changed since the last step began, as `[x, y, material, color]` quadruples.
    pub fn touched_cells(&mut self) -> Vec<u32> {
        self.core.extract_touched().to_vec()
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.perf_stats()
    }
}

impl World {
    pub fn grid(&self) -> &Grid {
        &self.core
    }
}
