//! Forward scaling: real-world target and distance down to a dry-fire
//! equivalent that subtends the same angle.
use crate::angular::angular_size_moa;
use crate::units::{Length, Unit};

/// Inputs for a scale-down calculation
#[derive(Debug, Clone)]
pub struct ScalingInput {
    /// Real target width
    pub target_width: Length,
    /// Real target height
    pub target_height: Length,
    /// Distance to the real target
    pub real_distance: Length,
    /// Distance from shooter to the dry-fire target on the wall
    pub sim_distance: Length,
}

impl Default for ScalingInput {
    fn default() -> Self {
        // 18x24" target at 25 yd, practiced at 10 ft
        Self {
            target_width: Length::new(18.0, Unit::Inches),
            target_height: Length::new(24.0, Unit::Inches),
            real_distance: Length::new(25.0, Unit::Yards),
            sim_distance: Length::new(10.0, Unit::Feet),
        }
    }
}

/// Result of a scale-down calculation, dimensions in inches
#[derive(Debug, Clone, PartialEq)]
pub struct ScalingResult {
    pub width_in: f64,
    pub height_in: f64,
    /// Ratio of simulated to real distance
    pub scale: f64,
    /// Angular size of the real target at the real distance, which the
    /// scaled target reproduces at the simulated distance
    pub moa: f64,
}

/// Scale a real-world target down to its dry-fire equivalent.
///
/// scale = sim_distance / real_distance, applied to both dimensions after
/// converting everything to inches. A real distance of zero yields the
/// all-zero degenerate result instead of dividing by zero.
pub fn scale_down(input: &ScalingInput) -> ScalingResult {
    let real_dist_in = input.real_distance.to_inches();
    let sim_dist_in = input.sim_distance.to_inches();

    if real_dist_in == 0.0 {
        return ScalingResult {
            width_in: 0.0,
            height_in: 0.0,
            scale: 0.0,
            moa: 0.0,
        };
    }

    let scale = sim_dist_in / real_dist_in;
    let real_width_in = input.target_width.to_inches();
    let real_height_in = input.target_height.to_inches();

    ScalingResult {
        width_in: real_width_in * scale,
        height_in: real_height_in * scale,
        scale,
        moa: angular_size_moa(real_width_in, real_dist_in),
    }
}
