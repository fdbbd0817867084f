//! Static catalog of common competition and practice targets.
use crate::scaling::ScalingInput;
use crate::units::{Length, ScalerError, Unit};

/// Sentinel preset name meaning "leave the current dimensions alone"
pub const CUSTOM_PRESET: &str = "Custom";

/// A named target with its canonical dimensions
#[derive(Debug, Clone, Copy)]
pub struct TargetPreset {
    pub name: &'static str,
    pub width: f64,
    pub height: f64,
    pub unit: Unit,
}

/// Catalog of common targets, prefilled into scale-down inputs
pub const TARGET_PRESETS: &[TargetPreset] = &[
    TargetPreset { name: "IPSC Classic (Full)", width: 18.0, height: 22.5, unit: Unit::Inches },
    TargetPreset { name: "IPSC Metric (Full)", width: 18.0, height: 29.5, unit: Unit::Inches },
    TargetPreset { name: "USPSA/IPSC (A-Zone)", width: 6.0, height: 11.0, unit: Unit::Inches },
    TargetPreset { name: "IDPA (Body)", width: 18.0, height: 30.0, unit: Unit::Inches },
    TargetPreset { name: "IDPA (Down Zero)", width: 8.0, height: 8.0, unit: Unit::Inches },
    TargetPreset { name: "NRA B-8 (Bullseye)", width: 5.5, height: 5.5, unit: Unit::Inches },
    TargetPreset { name: "Steel Plate (8\")", width: 8.0, height: 8.0, unit: Unit::Inches },
    TargetPreset { name: "Steel Plate (10\")", width: 10.0, height: 10.0, unit: Unit::Inches },
];

impl TargetPreset {
    /// Overwrite the target dimensions of a scale-down input with this
    /// preset's canonical size
    pub fn apply(&self, input: &mut ScalingInput) {
        input.target_width = Length::new(self.width, self.unit);
        input.target_height = Length::new(self.height, self.unit);
    }
}

/// Look up a preset by name, case-insensitive.
///
/// `Custom` is not in the catalog; callers treat it as "no preset" before
/// reaching this lookup.
pub fn find_preset(name: &str) -> Result<&'static TargetPreset, ScalerError> {
    TARGET_PRESETS
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| ScalerError::UnknownPreset(name.to_string()))
}
