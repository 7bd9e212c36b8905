use crate::core::vec2::Vec2;
use crate::domain::body::Body;
use crate::domain::palette;

use super::{WorldCore, BOX_SIDE_RANGE, MASS_RANGE, RADIUS_RANGE};

/// Append a circle. Omitted radius/mass are randomized in their
/// documented ranges. Values are not defensively validated; callers are
/// expected to supply sane positive numbers.
pub(super) fn spawn_circle(
    world: &mut WorldCore,
    x: f64,
    y: f64,
    radius: Option<f64>,
    mass: Option<f64>,
) -> usize {
    let radius = radius.unwrap_or_else(|| world.rng.range_f64(RADIUS_RANGE.0, RADIUS_RANGE.1));
    let mass = mass.unwrap_or_else(|| world.rng.range_f64(MASS_RANGE.0, MASS_RANGE.1));
    let color = palette::pick_color(&mut world.rng);

    let mut body = Body::new_circle(x, y, radius, mass, color);
    body.friction = world.friction;
    body.elasticity = world.elasticity;

    world.bodies.push(body);
    world.bodies.len() - 1
}

/// Append a box. Same randomized-default and leniency rules as circles.
pub(super) fn spawn_box(
    world: &mut WorldCore,
    x: f64,
    y: f64,
    width: Option<f64>,
    height: Option<f64>,
    mass: Option<f64>,
) -> usize {
    let width = width.unwrap_or_else(|| world.rng.range_f64(BOX_SIDE_RANGE.0, BOX_SIDE_RANGE.1));
    let height = height.unwrap_or_else(|| world.rng.range_f64(BOX_SIDE_RANGE.0, BOX_SIDE_RANGE.1));
    let mass = mass.unwrap_or_else(|| world.rng.range_f64(MASS_RANGE.0, MASS_RANGE.1));
    let color = palette::pick_color(&mut world.rng);

    let mut body = Body::new_box(x, y, width, height, mass, color);
    body.friction = world.friction;
    body.elasticity = world.elasticity;

    world.bodies.push(body);
    world.bodies.len() - 1
}

/// Remove all bodies. The only destruction path: there is no individual
/// removal and no expiry.
pub(super) fn clear_all(world: &mut WorldCore) {
    world.bodies.clear();
}

/// Topmost body containing the point, scanning newest-first so the most
/// recently spawned (drawn last, on top) body wins. Input handling only.
pub(super) fn hit_test(world: &WorldCore, x: f64, y: f64) -> Option<usize> {
    let p = Vec2::new(x, y);
    world
        .bodies
        .iter()
        .enumerate()
        .rev()
        .find(|(_, body)| body.contains_point(p))
        .map(|(idx, _)| idx)
}
