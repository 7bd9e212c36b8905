use wasm_bindgen::prelude::*;

use super::{WorldCore, BODY_STRIDE};

fn check_bounds(width: f64, height: f64) -> Result<(), JsValue> {
    if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
        return Err(JsValue::from_str(
            "arena dimensions must be finite and positive",
        ));
    }
    Ok(())
}

#[wasm_bindgen]
pub struct World {
    core: WorldCore,
}

#[wasm_bindgen]
impl World {
    /// Create a new world sized to the rendering surface.
    /// Fails fast on unusable dimensions; the host surfaces this to the
    /// user instead of degrading silently.
    #[wasm_bindgen(constructor)]
    pub fn new(width: f64, height: f64) -> Result<World, JsValue> {
        check_bounds(width, height)?;
        Ok(Self {
            core: WorldCore::new(width, height),
        })
    }

    /// Seeded constructor for reproducible spawn defaults.
    #[wasm_bindgen(js_name = withSeed)]
    pub fn with_seed(width: f64, height: f64, seed: u32) -> Result<World, JsValue> {
        check_bounds(width, height)?;
        Ok(Self {
            core: WorldCore::with_seed(width, height, seed),
        })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f64 {
        self.core.width()
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f64 {
        self.core.height()
    }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> usize {
        self.core.body_count()
    }

    /// Advance one frame. Call once per display refresh with the
    /// scheduler's monotonically increasing timestamp in milliseconds.
    pub fn tick(&mut self, timestamp_ms: f64) {
        self.core.tick(timestamp_ms);
    }

    /// Spawn a circle at (x, y). Pass `undefined` for radius/mass to get
    /// randomized-in-range defaults. Returns the body index.
    pub fn spawn_circle(&mut self, x: f64, y: f64, radius: Option<f64>, mass: Option<f64>) -> usize {
        self.core.spawn_circle(x, y, radius, mass)
    }

    /// Spawn a box at (x, y). Returns the body index.
    pub fn spawn_box(
        &mut self,
        x: f64,
        y: f64,
        width: Option<f64>,
        height: Option<f64>,
        mass: Option<f64>,
    ) -> usize {
        self.core.spawn_box(x, y, width, height, mass)
    }

    pub fn set_gravity(&mut self, x: f64, y: f64) {
        self.core.set_gravity(x, y);
    }

    /// Overwrite friction on every existing body and future spawns.
    pub fn set_global_friction(&mut self, friction: f64) {
        self.core.set_global_friction(friction);
    }

    /// Overwrite elasticity on every existing body and future spawns.
    pub fn set_global_elasticity(&mut self, elasticity: f64) {
        self.core.set_global_elasticity(elasticity);
    }

    /// Remove all bodies.
    pub fn clear_all(&mut self) {
        self.core.clear_all();
    }

    /// Flip between Running and Paused.
    pub fn toggle(&mut self) {
        self.core.toggle();
    }

    pub fn is_running(&self) -> bool {
        self.core.is_running()
    }

    /// Update arena bounds after a surface resize.
    pub fn set_bounds(&mut self, width: f64, height: f64) {
        self.core.set_bounds(width, height);
    }

    /// Index of the topmost body containing the point, if any.
    pub fn hit_test(&self, x: f64, y: f64) -> Option<usize> {
        self.core.hit_test(x, y)
    }

    // === RENDER SNAPSHOT API ===

    /// Refresh the body transfer buffer; returns the body count.
    /// Read the records via `bodies_ptr`/`bodies_len` over wasm memory.
    pub fn collect_bodies(&mut self) -> usize {
        self.core.collect_bodies()
    }

    /// Pointer to the body transfer buffer (for JS rendering).
    pub fn bodies_ptr(&self) -> *const f64 {
        self.core.bodies_ptr()
    }

    /// Length of the body transfer buffer in f64 elements.
    pub fn bodies_len(&self) -> usize {
        self.core.bodies_len()
    }

    /// f64 slots per body record in the transfer buffer.
    pub fn body_stride(&self) -> usize {
        BODY_STRIDE
    }

    /// Typed-array view over the transfer buffer.
    /// The view aliases wasm memory and is invalidated by memory growth;
    /// read it out before the next engine call.
    pub fn bodies_view(&self) -> js_sys::Float64Array {
        unsafe { js_sys::Float64Array::view(&self.core.body_transfer_buffer) }
    }

    /// JSON snapshot of all bodies (debug / low-rate consumers).
    pub fn bodies_json(&self) -> String {
        self.core.bodies_json()
    }
}
