/// Physical constants used in target scaling calculations

/// Conversion factor: feet to inches
pub const FEET_TO_INCHES: f64 = 12.0;

/// Conversion factor: yards to inches
pub const YARDS_TO_INCHES: f64 = 36.0;

/// Conversion factor: millimeters to inches
pub const MM_TO_INCHES: f64 = 0.0393701;

/// Conversion factor: centimeters to inches
pub const CM_TO_INCHES: f64 = 0.393701;

/// Conversion factor: meters to inches
pub const METERS_TO_INCHES: f64 = 39.3701;

/// Arcminutes per degree
///
/// One minute of angle (MOA) is 1/60 of a degree. At 100 yards one MOA
/// subtends roughly 1.047 inches, which is why it is the standard angular
/// unit for target size in marksmanship.
pub const MOA_PER_DEGREE: f64 = 60.0;

// Numerical stability constants

/// General numerical tolerance for floating point comparisons
pub const NUMERICAL_TOLERANCE: f64 = 1e-9;

// Print-fit reference dimensions

/// US Letter paper width (inches), used to flag whether a scaled target
/// prints on a single sheet
pub const LETTER_PAPER_WIDTH_IN: f64 = 8.5;

/// US Letter paper height (inches)
pub const LETTER_PAPER_HEIGHT_IN: f64 = 11.0;
