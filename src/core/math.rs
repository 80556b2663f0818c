// Math utilities and helper functions

use glam::DVec2;

/// Rescale `v` so its length does not exceed `max_len`
///
/// Vectors already within the cap are returned untouched, so a zero vector
/// never divides by its own length.
pub fn cap_magnitude(v: DVec2, max_len: f64) -> DVec2 {
    let len = v.length();
    if len > max_len {
        v * (max_len / len)
    } else {
        v
    }
}
