use super::body::Body;
use super::{ArenaBounds, GRAVITY, WALL_RESTITUTION_GRAVITY};
use crate::core::math::cap_magnitude;

/// Advance a single body by one tick
///
/// Applies gravity (when enabled), clamps the speed to the body's cap, moves
/// the body and then keeps it inside the arena. Each axis is contained on its
/// own, so a body in a corner may be corrected on both axes in the same tick.
pub fn advance(body: &mut Body, bounds: ArenaBounds, gravity_enabled: bool) {
    if gravity_enabled {
        body.velocity.y += GRAVITY;
    }

    // Clamp before the wall checks so a bounce never exceeds the cap
    body.velocity = cap_magnitude(body.velocity, body.max_speed());

    let mut pos = body.position + body.velocity;
    let r = body.radius();
    let k = wall_restitution(gravity_enabled);

    if pos.x - r < 0.0 {
        pos.x = r;
        body.velocity.x = body.velocity.x.abs() * k;
    } else if pos.x + r > bounds.width {
        pos.x = bounds.width - r;
        body.velocity.x = -body.velocity.x.abs() * k;
    }

    if pos.y - r < 0.0 {
        pos.y = r;
        body.velocity.y = body.velocity.y.abs() * k;
    } else if pos.y + r > bounds.height {
        pos.y = bounds.height - r;
        body.velocity.y = -body.velocity.y.abs() * k;
    }

    body.position = pos;
}

/// Fraction of the normal speed kept after hitting a wall
pub fn wall_restitution(gravity_enabled: bool) -> f64 {
    if gravity_enabled {
        WALL_RESTITUTION_GRAVITY
    } else {
        1.0
    }
}
