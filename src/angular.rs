//! Angular size (MOA) calculation
use crate::constants::MOA_PER_DEGREE;

const RADIANS_TO_DEGREES: f64 = 180.0 / std::f64::consts::PI;

/// Calculate the angular size in arcminutes of a target of `size_in` inches
/// viewed from `dist_in` inches away.
///
/// The target is treated as a chord subtending an angle at the observer:
/// half-angle = atan((size/2) / distance), full angle doubled and converted
/// to arcminutes. Exact for a flat target square to the line of sight;
/// drifts at extreme angular sizes, which is acceptable for this use.
///
/// A distance of zero returns 0.0 rather than dividing by zero.
pub fn angular_size_moa(size_in: f64, dist_in: f64) -> f64 {
    if dist_in == 0.0 {
        return 0.0;
    }

    let half_angle_rad = ((size_in / 2.0) / dist_in).atan();
    let degrees = 2.0 * half_angle_rad * RADIANS_TO_DEGREES;
    degrees * MOA_PER_DEGREE
}
