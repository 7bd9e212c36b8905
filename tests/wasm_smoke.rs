//! Browser-targeted facade smoke test. Run with `wasm-pack test --headless`.
#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use kinetica_engine::World;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn facade_constructs_and_ticks() {
    let mut world = World::new(800.0, 600.0).expect("valid dimensions");
    world.spawn_circle(400.0, 100.0, None, None);
    world.tick(16.0);
    world.tick(32.0);
    assert_eq!(world.body_count(), 1);

    let count = world.collect_bodies();
    assert_eq!(count, 1);
    assert_eq!(world.bodies_len(), world.body_stride());
}

#[wasm_bindgen_test]
fn facade_rejects_bad_dimensions() {
    assert!(World::new(0.0, 600.0).is_err());
    assert!(World::new(800.0, f64::NAN).is_err());
}

#[wasm_bindgen_test]
fn formulas_return_json() {
    let json = kinetica_engine::api::formulas::calculate_orbit(5.972e24, 6.771e6, 6.674e-11)
        .expect("orbit json");
    assert!(json.contains("velocity"));
}
