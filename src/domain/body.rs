use crate::core::vec2::Vec2;

/// Geometry of a body. Closed set: the resolvers pattern-match on this
/// and shape-specific physics lives behind these two variants only.
#[derive(Clone, Copy, Debug)]
pub enum Shape {
    Circle {
        radius: f64,
    },
    Box {
        width: f64,
        height: f64,
        /// Rotation angle (radians)
        rotation: f64,
        /// Angular velocity (radians per second), decays on ground contact
        angular_vel: f64,
    },
}

/// Rigid body - a circle or box moving through the arena.
#[derive(Clone, Debug)]
pub struct Body {
    /// World position (center of mass)
    pub pos: Vec2,
    /// Velocity vector (pixels per second)
    pub velocity: Vec2,
    /// Per-frame force accumulator. Reset to zero by `integrate`, so it is
    /// only meaningful between force application and integration within one
    /// tick - never read it across ticks.
    pub acceleration: Vec2,
    /// Total mass, always > 0 (construction invariant, not re-checked)
    pub mass: f64,
    /// Coefficient of restitution (0.0 = no bounce, 1.0 = full elastic)
    pub elasticity: f64,
    /// Tangential damping on ground contact, in [0, 1]
    pub friction: f64,
    /// Cosmetic fill color (0xRRGGBB), fixed at spawn
    pub color: u32,
    pub shape: Shape,
}

impl Body {
    pub fn new_circle(x: f64, y: f64, radius: f64, mass: f64, color: u32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            velocity: Vec2::zero(),
            acceleration: Vec2::zero(),
            mass,
            elasticity: 0.7,
            friction: 0.1,
            color,
            shape: Shape::Circle { radius },
        }
    }

    pub fn new_box(x: f64, y: f64, width: f64, height: f64, mass: f64, color: u32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            velocity: Vec2::zero(),
            acceleration: Vec2::zero(),
            mass,
            elasticity: 0.7,
            friction: 0.1,
            color,
            shape: Shape::Box {
                width,
                height,
                rotation: 0.0,
                angular_vel: 0.0,
            },
        }
    }

    /// Accumulate a force into the per-frame acceleration scratch.
    pub fn apply_force(&mut self, force: Vec2) {
        self.acceleration = self.acceleration + force * (1.0 / self.mass);
    }

    /// Semi-implicit Euler step: velocity first, then position from the
    /// updated velocity. Boxes also integrate rotation. The acceleration
    /// accumulator is consumed and reset here.
    ///
    /// `dt` is in seconds and is not validated; a negative or huge `dt`
    /// produces correspondingly reversed or exaggerated motion.
    pub fn integrate(&mut self, dt: f64) {
        self.velocity = self.velocity + self.acceleration * dt;
        self.pos = self.pos + self.velocity * dt;

        if let Shape::Box {
            ref mut rotation,
            angular_vel,
            ..
        } = self.shape
        {
            *rotation += angular_vel * dt;
        }

        self.acceleration = Vec2::zero();
    }

    /// Hit test for input handling (spawn-at-click reuse checks).
    /// Not used by the physics passes.
    pub fn contains_point(&self, p: Vec2) -> bool {
        match self.shape {
            Shape::Circle { radius } => (p - self.pos).magnitude_squared() <= radius * radius,
            Shape::Box {
                width,
                height,
                rotation,
                ..
            } => {
                // Transform into the box's local frame via the inverse rotation.
                let d = p - self.pos;
                let (sin, cos) = (-rotation).sin_cos();
                let local_x = d.x * cos - d.y * sin;
                let local_y = d.x * sin + d.y * cos;
                local_x.abs() <= width / 2.0 && local_y.abs() <= height / 2.0
            }
        }
    }

    /// Axis-aligned horizontal extent used by the boundary pass.
    /// Box rotation is deliberately ignored here.
    pub fn half_extent_x(&self) -> f64 {
        match self.shape {
            Shape::Circle { radius } => radius,
            Shape::Box { width, .. } => width / 2.0,
        }
    }

    /// Axis-aligned vertical extent used by the boundary pass.
    pub fn half_extent_y(&self) -> f64 {
        match self.shape {
            Shape::Circle { radius } => radius,
            Shape::Box { height, .. } => height / 2.0,
        }
    }
}
