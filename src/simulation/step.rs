use crate::systems::{boundary, collision};

use super::{WorldCore, NOMINAL_DT};

/// Scheduler entry point. `timestamp_ms` is the host's monotonically
/// increasing frame timestamp; `dt` comes from consecutive values.
/// A paused world records nothing and mutates nothing.
pub(super) fn tick(world: &mut WorldCore, timestamp_ms: f64) {
    if !world.running {
        return;
    }

    let dt = match world.last_timestamp {
        Some(prev) => (timestamp_ms - prev) / 1000.0,
        None => NOMINAL_DT,
    };
    world.last_timestamp = Some(timestamp_ms);

    step(world, dt);
}

/// One full pipeline pass with a caller-supplied `dt` in seconds.
/// `dt` is not validated: a negative or oversized value produces
/// correspondingly reversed or exaggerated motion.
pub(super) fn step(world: &mut WorldCore, dt: f64) {
    let gravity = world.gravity;

    for body in world.bodies.iter_mut() {
        body.apply_force(gravity * body.mass);
        body.integrate(dt);
    }

    for body in world.bodies.iter_mut() {
        boundary::resolve(body, world.width, world.height);
    }

    collision::resolve_pairs(&mut world.bodies);
}
