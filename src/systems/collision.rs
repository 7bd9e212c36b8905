//! Pairwise collision pass - impulse-based circle-circle resolution.
//!
//! Exhaustive O(n²) over unordered pairs, no broad phase. Pairs involving
//! a box are skipped: inter-object response is circle-circle only in the
//! current scope. Resolution mutates velocities in place, so the outcome
//! of pair (i, k) can depend on pair (i, j) having resolved first; the
//! single sequential pass over a stable insertion order keeps that
//! deterministic.

use crate::domain::body::{Body, Shape};

/// Fraction of the residual overlap pushed apart after the impulse.
/// Less than 1.0 so discrete-step interpenetration bleeds off over a few
/// frames instead of snapping.
const CORRECTION_FACTOR: f64 = 0.8;

/// Resolve all colliding pairs in `bodies`, in index order.
pub fn resolve_pairs(bodies: &mut [Body]) {
    for i in 0..bodies.len() {
        for j in (i + 1)..bodies.len() {
            let (head, tail) = bodies.split_at_mut(j);
            resolve_pair(&mut head[i], &mut tail[0]);
        }
    }
}

fn resolve_pair(a: &mut Body, b: &mut Body) {
    let (ra, rb) = match (a.shape, b.shape) {
        (Shape::Circle { radius: ra }, Shape::Circle { radius: rb }) => (ra, rb),
        // Box pairs are out of scope for inter-object response.
        _ => return,
    };

    let min_distance = ra + rb;
    let delta = a.pos - b.pos;
    let distance = delta.magnitude();
    if distance >= min_distance {
        return;
    }

    // Coincident centers normalize to the zero vector, which degenerates
    // to a zero impulse below. Accepted edge case.
    let normal = delta.normalize();

    let relative_velocity = a.velocity - b.velocity;
    let velocity_along_normal = relative_velocity.dot(normal);

    // Already separating - resolving would inject energy.
    if velocity_along_normal > 0.0 {
        return;
    }

    // The less bouncy body dominates.
    let restitution = a.elasticity.min(b.elasticity);

    let inv_mass_a = 1.0 / a.mass;
    let inv_mass_b = 1.0 / b.mass;
    let impulse = -(1.0 + restitution) * velocity_along_normal / (inv_mass_a + inv_mass_b);

    a.velocity = a.velocity + normal * (impulse * inv_mass_a);
    b.velocity = b.velocity - normal * (impulse * inv_mass_b);

    // Positional correction: push apart along the normal in proportion to
    // inverse mass, so the heavier body moves less.
    let overlap = min_distance - distance;
    let correction = normal * (CORRECTION_FACTOR * overlap / (inv_mass_a + inv_mass_b));
    a.pos = a.pos + correction * inv_mass_a;
    b.pos = b.pos - correction * inv_mass_b;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::vec2::Vec2;
    use crate::domain::body::Body;

    fn circle(x: f64, vx: f64, radius: f64, mass: f64, elasticity: f64) -> Body {
        let mut body = Body::new_circle(x, 100.0, radius, mass, 0);
        body.velocity = Vec2::new(vx, 0.0);
        body.elasticity = elasticity;
        body
    }

    fn kinetic_energy(bodies: &[Body]) -> f64 {
        bodies
            .iter()
            .map(|b| 0.5 * b.mass * b.velocity.magnitude_squared())
            .sum()
    }

    #[test]
    fn equal_mass_elastic_head_on_swaps_velocities() {
        let mut bodies = vec![
            circle(100.0, 10.0, 10.0, 2.0, 1.0),
            circle(118.0, -10.0, 10.0, 2.0, 1.0),
        ];
        let energy_before = kinetic_energy(&bodies);
        resolve_pairs(&mut bodies);
        assert!((bodies[0].velocity.x - -10.0).abs() < 1e-9);
        assert!((bodies[1].velocity.x - 10.0).abs() < 1e-9);
        assert!((kinetic_energy(&bodies) - energy_before).abs() < 1e-9);
    }

    #[test]
    fn perfectly_inelastic_pair_moves_together() {
        let mut bodies = vec![
            circle(100.0, 10.0, 10.0, 1.0, 0.0),
            circle(115.0, -10.0, 10.0, 1.0, 0.0),
        ];
        resolve_pairs(&mut bodies);
        assert!((bodies[0].velocity.x - bodies[1].velocity.x).abs() < 1e-9);
        let closing = (bodies[0].velocity - bodies[1].velocity)
            .dot((bodies[0].pos - bodies[1].pos).normalize());
        assert!(closing.abs() < 1e-9);
    }

    #[test]
    fn separating_pair_is_left_alone() {
        let mut bodies = vec![
            circle(100.0, -10.0, 10.0, 1.0, 1.0),
            circle(115.0, 10.0, 10.0, 1.0, 1.0),
        ];
        resolve_pairs(&mut bodies);
        assert_eq!(bodies[0].velocity.x, -10.0);
        assert_eq!(bodies[1].velocity.x, 10.0);
    }

    #[test]
    fn non_overlapping_pair_is_left_alone() {
        let mut bodies = vec![
            circle(100.0, 10.0, 10.0, 1.0, 1.0),
            circle(200.0, -10.0, 10.0, 1.0, 1.0),
        ];
        resolve_pairs(&mut bodies);
        assert_eq!(bodies[0].velocity.x, 10.0);
        assert_eq!(bodies[1].velocity.x, -10.0);
    }

    #[test]
    fn positional_correction_reduces_overlap() {
        let mut bodies = vec![
            circle(100.0, 1.0, 10.0, 1.0, 0.5),
            circle(110.0, -1.0, 10.0, 1.0, 0.5),
        ];
        let before = (bodies[0].pos - bodies[1].pos).magnitude();
        resolve_pairs(&mut bodies);
        let after = (bodies[0].pos - bodies[1].pos).magnitude();
        assert!(after > before);
        assert!(after >= 20.0 * 0.8);
    }

    #[test]
    fn heavier_body_moves_less_during_correction() {
        let mut bodies = vec![
            circle(100.0, 1.0, 10.0, 10.0, 0.5),
            circle(110.0, -1.0, 10.0, 1.0, 0.5),
        ];
        resolve_pairs(&mut bodies);
        let heavy_shift = (bodies[0].pos.x - 100.0).abs();
        let light_shift = (bodies[1].pos.x - 110.0).abs();
        assert!(light_shift > heavy_shift);
    }

    #[test]
    fn momentum_is_conserved_with_unequal_masses() {
        let mut bodies = vec![
            circle(100.0, 12.0, 10.0, 3.0, 0.6),
            circle(117.0, -4.0, 10.0, 1.0, 0.9),
        ];
        let momentum_before = bodies[0].velocity.x * 3.0 + bodies[1].velocity.x * 1.0;
        resolve_pairs(&mut bodies);
        let momentum_after = bodies[0].velocity.x * 3.0 + bodies[1].velocity.x * 1.0;
        assert!((momentum_after - momentum_before).abs() < 1e-9);
    }

    #[test]
    fn box_pairs_are_skipped() {
        let mut bodies = vec![
            Body::new_box(100.0, 100.0, 20.0, 20.0, 1.0, 0),
            circle(105.0, -10.0, 10.0, 1.0, 1.0),
        ];
        bodies[0].velocity = Vec2::new(10.0, 0.0);
        resolve_pairs(&mut bodies);
        assert_eq!(bodies[0].velocity.x, 10.0);
        assert_eq!(bodies[1].velocity.x, -10.0);
    }

    #[test]
    fn coincident_centers_do_not_panic() {
        let mut bodies = vec![
            circle(100.0, 0.0, 10.0, 1.0, 1.0),
            circle(100.0, 0.0, 10.0, 1.0, 1.0),
        ];
        resolve_pairs(&mut bodies);
        // Zero normal degenerates to a zero impulse; nothing moves.
        assert_eq!(bodies[0].velocity.x, 0.0);
        assert_eq!(bodies[1].velocity.x, 0.0);
    }
}
