use glam::DVec2;

use super::body::Body;
use super::{BODY_RESTITUTION, DEGENERATE_DISTANCE};

/// Check whether two bodies touch or interpenetrate
///
/// Exact tangency counts as a collision.
pub fn overlaps(a: &Body, b: &Body) -> bool {
    let min_distance = a.radius() + b.radius();
    a.position.distance_squared(b.position) <= min_distance * min_distance
}

/// Resolve a collision between two overlapping bodies
///
/// In gravity mode both bodies take the mass-weighted average velocity and
/// travel together afterwards. In free flight an impulse along the contact
/// normal is applied, unless the bodies are already separating. Either way
/// the bodies are then pushed apart so they no longer interpenetrate.
pub fn resolve(a: &mut Body, b: &mut Body, gravity_enabled: bool) {
    let (normal, distance) = contact_normal(a, b);

    if gravity_enabled {
        let total_mass = a.mass() + b.mass();
        let avg = (a.momentum() + b.momentum()) / total_mass;
        a.velocity = avg;
        b.velocity = avg;
    } else {
        apply_impulse(a, b, normal);
    }

    let overlap = a.radius() + b.radius() - distance;
    if overlap > 0.0 {
        let correction = normal * overlap * 0.5;
        a.position -= correction;
        b.position += correction;
    }
}

/// Unit vector from `a` towards `b` and the center distance
///
/// Coincident centers fall back to `(1, 0)` at distance 1.
fn contact_normal(a: &Body, b: &Body) -> (DVec2, f64) {
    let diff = b.position - a.position;
    let distance = diff.length();
    if distance < DEGENERATE_DISTANCE {
        (DVec2::X, 1.0)
    } else {
        (diff / distance, distance)
    }
}

fn apply_impulse(a: &mut Body, b: &mut Body, normal: DVec2) {
    // Velocity of b as seen from a; the normal points a -> b, so a positive
    // component means the pair is already separating.
    let relative = b.velocity - a.velocity;
    let v_along_normal = relative.dot(normal);

    if v_along_normal > 0.0 {
        log::trace!("separating pair, skipping impulse (v_n = {v_along_normal:.4})");
        return;
    }

    let j = -(1.0 + BODY_RESTITUTION) * v_along_normal / (1.0 / a.mass() + 1.0 / b.mass());
    let impulse = normal * j;
    a.velocity -= impulse / a.mass();
    b.velocity += impulse / b.mass();
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn body(radius: f64, x: f64, y: f64, vx: f64, vy: f64) -> Body {
        Body::new(radius, DVec2::new(x, y), DVec2::new(vx, vy), 100.0).unwrap()
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let cases = [
            (body(10.0, 0.0, 0.0, 0.0, 0.0), body(5.0, 14.0, 0.0, 0.0, 0.0)),
            (body(10.0, 0.0, 0.0, 0.0, 0.0), body(5.0, 16.0, 0.0, 0.0, 0.0)),
            (body(3.0, 1.0, 1.0, 0.0, 0.0), body(3.0, 4.0, 5.0, 0.0, 0.0)),
            (body(1.0, 7.0, -2.0, 0.0, 0.0), body(2.0, 7.0, -2.0, 0.0, 0.0)),
        ];
        for (a, b) in cases {
            assert_eq!(overlaps(&a, &b), overlaps(&b, &a));
        }
    }

    #[test]
    fn test_tangency_counts_as_overlap() {
        // 3-4-5 triangle keeps the squared distance exact
        let a = body(2.0, 0.0, 0.0, 0.0, 0.0);
        let b = body(3.0, 3.0, 4.0, 0.0, 0.0);
        assert!(overlaps(&a, &b));

        let c = body(3.0, 3.0, 4.001, 0.0, 0.0);
        assert!(!overlaps(&a, &c));
    }

    #[test]
    fn test_gravity_mode_merges_velocities_by_mass() {
        // mass 4 and mass 1
        let mut a = body(2.0, 0.0, 0.0, 2.0, 0.0);
        let mut b = body(1.0, 2.5, 0.0, -2.0, 0.0);
        assert!(overlaps(&a, &b));

        resolve(&mut a, &mut b, true);

        assert_relative_eq!(a.velocity.x, 1.2, epsilon = 1e-12);
        assert_relative_eq!(b.velocity.x, 1.2, epsilon = 1e-12);
        assert_abs_diff_eq!(a.velocity.y, 0.0);
        assert_abs_diff_eq!(b.velocity.y, 0.0);
    }

    #[test]
    fn test_gravity_mode_merges_even_when_separating() {
        let mut a = body(1.0, 0.0, 0.0, -1.0, 0.0);
        let mut b = body(1.0, 1.5, 0.0, 3.0, 0.0);
        resolve(&mut a, &mut b, true);
        assert_eq!(a.velocity, DVec2::new(1.0, 0.0));
        assert_eq!(b.velocity, DVec2::new(1.0, 0.0));
    }

    #[test]
    fn test_equal_mass_impulse_restitution_and_momentum() {
        let mut a = body(10.0, 0.0, 0.0, 1.0, 0.0);
        let mut b = body(10.0, 15.0, 0.0, -1.0, 0.0);
        let normal = DVec2::X;
        let v_n_before = (a.velocity - b.velocity).dot(normal);
        let momentum_before = a.momentum() + b.momentum();

        resolve(&mut a, &mut b, false);

        let v_n_after = (a.velocity - b.velocity).dot(normal);
        assert_relative_eq!(v_n_after, -BODY_RESTITUTION * v_n_before, epsilon = 1e-12);

        let momentum_after = a.momentum() + b.momentum();
        assert_abs_diff_eq!(momentum_after.x, momentum_before.x, epsilon = 1e-9);
        assert_abs_diff_eq!(momentum_after.y, momentum_before.y, epsilon = 1e-9);
        assert_relative_eq!(a.velocity.x, -0.8, epsilon = 1e-12);
        assert_relative_eq!(b.velocity.x, 0.8, epsilon = 1e-12);
    }

    #[test]
    fn test_unequal_mass_impulse_conserves_momentum() {
        let mut a = body(3.0, 0.0, 0.0, 2.0, 1.0);
        let mut b = body(1.0, 2.0, 2.0, -1.0, -0.5);
        assert!(overlaps(&a, &b));
        let momentum_before = a.momentum() + b.momentum();

        resolve(&mut a, &mut b, false);

        let momentum_after = a.momentum() + b.momentum();
        assert_abs_diff_eq!(momentum_after.x, momentum_before.x, epsilon = 1e-9);
        assert_abs_diff_eq!(momentum_after.y, momentum_before.y, epsilon = 1e-9);
    }

    #[test]
    fn test_separating_pair_keeps_velocity_but_is_pushed_apart() {
        let mut a = body(10.0, 0.0, 0.0, -1.0, 0.0);
        let mut b = body(10.0, 15.0, 0.0, 1.0, 0.0);

        resolve(&mut a, &mut b, false);

        assert_eq!(a.velocity, DVec2::new(-1.0, 0.0));
        assert_eq!(b.velocity, DVec2::new(1.0, 0.0));
        assert_relative_eq!(a.position.x, -2.5, epsilon = 1e-12);
        assert_relative_eq!(b.position.x, 17.5, epsilon = 1e-12);
    }

    #[test]
    fn test_no_overlap_remains_after_resolve() {
        let pairs = [
            (body(10.0, 0.0, 0.0, 1.0, 0.0), body(10.0, 5.0, 3.0, -1.0, 0.0), false),
            (body(4.0, 10.0, 10.0, 0.0, 2.0), body(7.0, 13.0, 16.0, 1.0, -3.0), true),
            (body(15.0, 100.0, 100.0, 3.0, 3.0), body(15.0, 129.0, 101.0, -2.0, 0.0), false),
        ];
        for (mut a, mut b, gravity) in pairs {
            assert!(overlaps(&a, &b));
            resolve(&mut a, &mut b, gravity);
            let distance = a.position.distance(b.position);
            assert!(distance >= a.radius() + b.radius() - 1e-9);
        }
    }

    #[test]
    fn test_coincident_centers_use_x_axis_fallback() {
        let mut a = body(5.0, 10.0, 10.0, 0.0, 0.0);
        let mut b = body(5.0, 10.0, 10.0, 0.0, 0.0);

        resolve(&mut a, &mut b, false);

        // distance falls back to 1, overlap = 10 - 1 = 9 split along +x
        assert!(a.position.is_finite() && b.position.is_finite());
        assert_relative_eq!(a.position.x, 5.5, epsilon = 1e-12);
        assert_relative_eq!(b.position.x, 14.5, epsilon = 1e-12);
        assert_eq!(a.position.y, 10.0);
        assert_eq!(b.position.y, 10.0);
    }
}
