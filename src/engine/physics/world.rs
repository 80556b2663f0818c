use super::body::Body;
use super::collision::{overlaps, resolve};
use super::integrator::advance;
use super::ArenaBounds;

/// Counters gathered during one simulation step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepStats {
    /// Unordered pairs tested for overlap
    pub pairs_checked: usize,

    /// Pairs that overlapped and were resolved
    pub collisions: usize,
}

/// Step the simulation forward by one tick
///
/// First every unordered pair `(i, j)` with `i < j` is tested in index order
/// and resolved if it overlaps, then every body is integrated once. Pairs are
/// visited a single time: a later pair sees the positions and velocities left
/// behind by earlier resolutions, and nothing is iterated to convergence.
pub fn step(bodies: &mut [Body], bounds: ArenaBounds, gravity_enabled: bool) -> StepStats {
    let mut stats = StepStats::default();

    for i in 0..bodies.len() {
        // Split so `a` and every later `b` are disjoint borrows
        let (head, tail) = bodies.split_at_mut(i + 1);
        let a = &mut head[i];
        for b in tail.iter_mut() {
            stats.pairs_checked += 1;
            if overlaps(a, b) {
                resolve(a, b, gravity_enabled);
                stats.collisions += 1;
            }
        }
    }

    for body in bodies.iter_mut() {
        advance(body, bounds, gravity_enabled);
    }

    if stats.collisions > 0 {
        log::trace!(
            "step resolved {} of {} pairs (gravity: {})",
            stats.collisions,
            stats.pairs_checked,
            gravity_enabled
        );
    }

    stats
}
