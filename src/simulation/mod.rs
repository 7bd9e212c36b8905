//! World - orchestrates the per-frame rigid body pipeline.
//!
//! `WorldCore` is plain Rust and fully testable off-wasm; the
//! `#[wasm_bindgen]` facade in `facade.rs` is a thin delegation layer.
//!
//! Per tick (only while running):
//! 1. derive `dt` from consecutive host timestamps
//! 2. apply gravity as a force to every body, integrate
//! 3. clamp every body against the arena walls
//! 4. resolve pairwise collisions
//! 5. expose the updated bodies as a read-only snapshot
//!
//! Single-threaded by construction: the collision pass mutates shared body
//! state in place and depends on a deterministic sequential pair order.

use crate::core::random::Rng;
use crate::core::vec2::Vec2;
use crate::domain::body::Body;

mod commands;
mod facade;
mod settings;
mod snapshot;
mod step;


pub use facade::World;
pub use snapshot::{BodySnapshot, BODY_STRIDE};

/// Fixed nominal timestep used when no previous timestamp exists
/// (the very first tick, and the first tick after a resume).
pub const NOMINAL_DT: f64 = 1.0 / 60.0;

/// Randomized spawn ranges used when the caller omits parameters.
pub const RADIUS_RANGE: (f64, f64) = (10.0, 30.0);
pub const BOX_SIDE_RANGE: (f64, f64) = (20.0, 60.0);
pub const MASS_RANGE: (f64, f64) = (1.0, 5.0);

/// The simulation world. Exclusively owns every body; resolvers and the
/// snapshot layer only borrow them for the duration of one call.
pub struct WorldCore {
    bodies: Vec<Body>,
    gravity: Vec2,
    /// Global friction: default for new spawns, retroactively written to
    /// every live body by `set_global_friction`.
    friction: f64,
    /// Global elasticity, same retroactive semantics.
    elasticity: f64,
    running: bool,
    width: f64,
    height: f64,
    /// Timestamp of the previous tick (ms). `None` means the next tick
    /// uses `NOMINAL_DT`; cleared on pause so resume carries no time debt.
    last_timestamp: Option<f64>,
    rng: Rng,
    /// Flat per-body transfer buffer for the JS renderer, refreshed by
    /// `fill_body_buffer`.
    body_transfer_buffer: Vec<f64>,
}

impl WorldCore {
    pub fn new(width: f64, height: f64) -> Self {
        Self::with_seed(width, height, 12345)
    }

    /// Seeded constructor so tests can pin randomized spawn defaults.
    pub fn with_seed(width: f64, height: f64, seed: u32) -> Self {
        Self {
            bodies: Vec::new(),
            gravity: Vec2::new(0.0, 9.8),
            friction: 0.1,
            elasticity: 0.7,
            running: true,
            width,
            height,
            last_timestamp: None,
            rng: Rng::new(seed),
            body_transfer_buffer: Vec::new(),
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Scheduler entry point; see `step::tick`.
    pub fn tick(&mut self, timestamp_ms: f64) {
        step::tick(self, timestamp_ms);
    }

    /// One pipeline pass with a synthetic `dt` in seconds (test entry
    /// point; the facade only exposes `tick`).
    pub fn step(&mut self, dt: f64) {
        if self.running {
            step::step(self, dt);
        }
    }

    pub fn spawn_circle(&mut self, x: f64, y: f64, radius: Option<f64>, mass: Option<f64>) -> usize {
        commands::spawn_circle(self, x, y, radius, mass)
    }

    pub fn spawn_box(
        &mut self,
        x: f64,
        y: f64,
        width: Option<f64>,
        height: Option<f64>,
        mass: Option<f64>,
    ) -> usize {
        commands::spawn_box(self, x, y, width, height, mass)
    }

    pub fn clear_all(&mut self) {
        commands::clear_all(self);
    }

    pub fn hit_test(&self, x: f64, y: f64) -> Option<usize> {
        commands::hit_test(self, x, y)
    }

    pub fn set_gravity(&mut self, x: f64, y: f64) {
        settings::set_gravity(self, x, y);
    }

    pub fn set_global_friction(&mut self, friction: f64) {
        settings::set_global_friction(self, friction);
    }

    pub fn set_global_elasticity(&mut self, elasticity: f64) {
        settings::set_global_elasticity(self, elasticity);
    }

    pub fn set_bounds(&mut self, width: f64, height: f64) {
        settings::set_bounds(self, width, height);
    }

    pub fn toggle(&mut self) {
        settings::toggle(self);
    }

    pub fn is_running(&self) -> bool {
        settings::is_running(self)
    }

    pub fn snapshots(&self) -> Vec<BodySnapshot> {
        snapshot::snapshots(self)
    }

    /// Refresh the flat render buffer; returns the body count.
    pub fn collect_bodies(&mut self) -> usize {
        snapshot::fill_body_buffer(self)
    }

    pub fn bodies_ptr(&self) -> *const f64 {
        snapshot::bodies_ptr(self)
    }

    pub fn bodies_len(&self) -> usize {
        snapshot::bodies_len(self)
    }

    pub fn bodies_json(&self) -> String {
        snapshot::bodies_json(self)
    }
}
