//! Kinetica Engine - interactive 2D rigid body sandbox in WASM
//!
//! Architecture:
//! - core/       - Value types (Vec2, RNG)
//! - domain/     - Body and cosmetics
//! - systems/    - Boundary and pairwise collision resolvers
//! - simulation/ - World orchestration + wasm facade
//! - api/        - Standalone physics formulas exported to JS

pub mod api;
pub mod core;
pub mod domain;
pub mod simulation;
pub mod systems;

use wasm_bindgen::prelude::*;

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"🦀 Kinetica WASM Engine initialized!".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::vec2::Vec2;
pub use domain::body::{Body, Shape};
pub use simulation::{World, WorldCore};
