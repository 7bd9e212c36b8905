use crate::core::vec2::Vec2;

use super::WorldCore;

pub(super) fn set_gravity(world: &mut WorldCore, x: f64, y: f64) {
    world.gravity = Vec2::new(x, y);
}

/// Retroactive: overwrites friction on every live body, and becomes the
/// default for future spawns.
pub(super) fn set_global_friction(world: &mut WorldCore, friction: f64) {
    world.friction = friction;
    for body in world.bodies.iter_mut() {
        body.friction = friction;
    }
}

/// Same retroactive semantics as `set_global_friction`.
pub(super) fn set_global_elasticity(world: &mut WorldCore, elasticity: f64) {
    world.elasticity = elasticity;
    for body in world.bodies.iter_mut() {
        body.elasticity = elasticity;
    }
}

/// Arena resize from the rendering surface; takes effect on the next
/// boundary pass.
pub(super) fn set_bounds(world: &mut WorldCore, width: f64, height: f64) {
    world.width = width;
    world.height = height;
}

/// Flip Running/Paused. Pausing drops the timestamp baseline so the next
/// tick after a resume falls back to the nominal dt instead of replaying
/// the skipped wall-clock time.
pub(super) fn toggle(world: &mut WorldCore) {
    world.running = !world.running;
    if !world.running {
        world.last_timestamp = None;
    }
}

pub(super) fn is_running(world: &WorldCore) -> bool {
    world.running
}
