use glam::DVec2;
use thiserror::Error;

/// Errors raised when a body would violate its construction invariant
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum BodyError {
    #[error("body radius must be positive, got {0}")]
    NonPositiveRadius(f64),

    #[error("body speed cap must be positive, got {0}")]
    NonPositiveMaxSpeed(f64),

    #[error("body position and velocity must be finite")]
    NonFinite,
}

/// A circular rigid body in the arena
///
/// `position` and `velocity` are mutated freely by the physics step (and by
/// the driver between steps). Radius, mass and speed cap are fixed at
/// construction and only readable afterwards, so `mass == radius²` holds
/// for the whole lifetime of the body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    /// Center in arena coordinates
    pub position: DVec2,

    /// Displacement applied per tick
    pub velocity: DVec2,

    radius: f64,
    mass: f64,
    max_speed: f64,
}

impl Body {
    /// Create a new body, deriving its mass from the radius
    pub fn new(
        radius: f64,
        position: DVec2,
        velocity: DVec2,
        max_speed: f64,
    ) -> Result<Self, BodyError> {
        // Written as negated comparisons so NaN is rejected too
        if !(radius > 0.0) || !radius.is_finite() {
            return Err(BodyError::NonPositiveRadius(radius));
        }
        if !(max_speed > 0.0) || !max_speed.is_finite() {
            return Err(BodyError::NonPositiveMaxSpeed(max_speed));
        }
        if !position.is_finite() || !velocity.is_finite() {
            return Err(BodyError::NonFinite);
        }

        Ok(Self {
            position,
            velocity,
            radius,
            mass: radius * radius,
            max_speed,
        })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn max_speed(&self) -> f64 {
        self.max_speed
    }

    /// Current speed (length of the velocity vector)
    pub fn speed(&self) -> f64 {
        self.velocity.length()
    }

    /// Momentum `m·v`
    pub fn momentum(&self) -> DVec2 {
        self.velocity * self.mass
    }

    /// Kinetic energy `½·m·|v|²`
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.length_squared()
    }
}
