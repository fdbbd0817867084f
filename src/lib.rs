//! # DryFire Scaler
//!
//! Angular-size-preserving target scaling for dry-fire practice: convert a
//! real-world target and distance into a scaled equivalent for short indoor
//! distances, and project a dry-fire setup back out to real-world sizes.

// Re-export the main types and functions
pub use angular::angular_size_moa;
pub use presets::{find_preset, TargetPreset, CUSTOM_PRESET, TARGET_PRESETS};
pub use projection::{
    scale_up, ProjectedSize, ProjectionInput, ProjectionResult, ReferenceDistance,
    REFERENCE_DISTANCES,
};
pub use scaling::{scale_down, ScalingInput, ScalingResult};
pub use units::{to_inches, Length, ScalerError, Unit};

// Module declarations
pub mod angular;
pub mod constants;
pub mod presets;
pub mod projection;
pub mod scaling;
pub mod units;
