//! Boundary pass - clamps bodies against the four arena walls.
//!
//! Each wall check is independent and all four may fire in the same frame
//! (a corner contact clamps on both axes). No combined corner normal is
//! computed; that simplification is intentional. Boxes are tested with
//! their axis-aligned half extents, ignoring rotation.

use crate::domain::body::{Body, Shape};

/// Angular velocity multiplier applied to boxes touching the floor.
const GROUND_SPIN_DECAY: f64 = 0.8;

/// Clamp `body` inside the `width` x `height` arena, reflecting the normal
/// velocity component scaled by elasticity. The bottom wall additionally
/// drags the tangential velocity by `(1 - friction)` and damps box spin.
pub fn resolve(body: &mut Body, width: f64, height: f64) {
    let ex = body.half_extent_x();
    let ey = body.half_extent_y();

    // Left wall
    if body.pos.x - ex < 0.0 {
        body.pos.x = ex;
        body.velocity.x = -body.velocity.x * body.elasticity;
    }

    // Right wall
    if body.pos.x + ex > width {
        body.pos.x = width - ex;
        body.velocity.x = -body.velocity.x * body.elasticity;
    }

    // Top wall
    if body.pos.y - ey < 0.0 {
        body.pos.y = ey;
        body.velocity.y = -body.velocity.y * body.elasticity;
    }

    // Bottom wall (ground): restitution plus tangential drag.
    if body.pos.y + ey > height {
        body.pos.y = height - ey;
        body.velocity.y = -body.velocity.y * body.elasticity;
        body.velocity.x *= 1.0 - body.friction;

        if let Shape::Box {
            ref mut angular_vel,
            ..
        } = body.shape
        {
            *angular_vel *= GROUND_SPIN_DECAY;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::vec2::Vec2;
    use crate::domain::body::Body;

    const W: f64 = 800.0;
    const H: f64 = 600.0;

    #[test]
    fn bottom_wall_clamps_and_reflects() {
        let mut body = Body::new_circle(100.0, H - 5.0, 10.0, 1.0, 0);
        body.elasticity = 0.5;
        body.velocity = Vec2::new(0.0, 40.0);
        resolve(&mut body, W, H);
        assert_eq!(body.pos.y, H - 10.0);
        assert_eq!(body.velocity.y, -20.0);
    }

    #[test]
    fn bottom_wall_applies_ground_friction() {
        let mut body = Body::new_circle(100.0, H, 10.0, 1.0, 0);
        body.friction = 0.25;
        body.velocity = Vec2::new(80.0, 10.0);
        resolve(&mut body, W, H);
        assert_eq!(body.velocity.x, 60.0);
    }

    #[test]
    fn side_walls_do_not_apply_friction() {
        let mut body = Body::new_circle(5.0, 300.0, 10.0, 1.0, 0);
        body.elasticity = 1.0;
        body.friction = 0.5;
        body.velocity = Vec2::new(-30.0, 12.0);
        resolve(&mut body, W, H);
        assert_eq!(body.pos.x, 10.0);
        assert_eq!(body.velocity.x, 30.0);
        assert_eq!(body.velocity.y, 12.0);
    }

    #[test]
    fn corner_contact_clamps_both_axes() {
        let mut body = Body::new_circle(2.0, 2.0, 10.0, 1.0, 0);
        body.elasticity = 1.0;
        body.velocity = Vec2::new(-5.0, -5.0);
        resolve(&mut body, W, H);
        assert_eq!(body.pos, Vec2::new(10.0, 10.0));
        assert_eq!(body.velocity, Vec2::new(5.0, 5.0));
    }

    #[test]
    fn box_uses_axis_aligned_half_extents() {
        let mut body = Body::new_box(W - 4.0, 300.0, 40.0, 20.0, 1.0, 0);
        body.velocity = Vec2::new(10.0, 0.0);
        resolve(&mut body, W, H);
        assert_eq!(body.pos.x, W - 20.0);
    }

    #[test]
    fn box_spin_decays_on_ground_contact() {
        let mut body = Body::new_box(100.0, H, 20.0, 20.0, 1.0, 0);
        if let Shape::Box {
            ref mut angular_vel,
            ..
        } = body.shape
        {
            *angular_vel = 1.0;
        }
        resolve(&mut body, W, H);
        match body.shape {
            Shape::Box { angular_vel, .. } => assert!((angular_vel - 0.8).abs() < 1e-12),
            _ => unreachable!(),
        }
    }

    #[test]
    fn interior_body_is_untouched() {
        let mut body = Body::new_circle(400.0, 300.0, 10.0, 1.0, 0);
        body.velocity = Vec2::new(3.0, -7.0);
        resolve(&mut body, W, H);
        assert_eq!(body.pos, Vec2::new(400.0, 300.0));
        assert_eq!(body.velocity, Vec2::new(3.0, -7.0));
    }
}
