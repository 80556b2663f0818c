// Physics kernel: bodies, integration, pairwise collisions
//
// Everything here is plain data and free functions. The gravity flag and the
// arena bounds are passed into every call rather than stored, so the caller
// decides the regime of each tick.

pub mod body;
mod collision;
mod integrator;
mod world;

pub use body::{Body, BodyError};
pub use collision::{overlaps, resolve};
pub use integrator::{advance, wall_restitution};
pub use world::{step, StepStats};

/// Downward acceleration added to `velocity.y` per tick in gravity mode
pub const GRAVITY: f64 = 0.2;

/// Fraction of wall-normal speed kept after a bounce in gravity mode
pub const WALL_RESTITUTION_GRAVITY: f64 = 0.8;

/// Restitution of body-body impulses in free-flight mode
pub const BODY_RESTITUTION: f64 = 0.8;

/// Center distance below which two bodies are treated as coincident
pub const DEGENERATE_DISTANCE: f64 = 1e-4;

/// Size of the rectangular arena, with the origin in the top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArenaBounds {
    pub width: f64,
    pub height: f64,
}

impl ArenaBounds {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}
