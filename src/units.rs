// Unit handling - all internal math runs in inches; conversion happens
// only at the input/output boundary.
use crate::constants::{
    CM_TO_INCHES, FEET_TO_INCHES, METERS_TO_INCHES, MM_TO_INCHES, YARDS_TO_INCHES,
};
use std::error::Error;
use std::fmt;
use std::str::FromStr;

// Error type for scaler operations
#[derive(Debug, Clone, PartialEq)]
pub enum ScalerError {
    /// A unit symbol that is not one of in, ft, yd, mm, cm, m.
    ///
    /// Unknown symbols are rejected here rather than silently treated as
    /// inches; once a `Unit` value exists every conversion is total.
    InvalidUnit(String),
    /// A preset name with no entry in the target catalog.
    UnknownPreset(String),
}

impl fmt::Display for ScalerError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ScalerError::InvalidUnit(sym) => write!(f, "invalid unit symbol: {sym}"),
            ScalerError::UnknownPreset(name) => write!(f, "unknown target preset: {name}"),
        }
    }
}

impl Error for ScalerError {}

/// Length unit accepted for target dimensions and distances
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Inches,
    Feet,
    Yards,
    Millimeters,
    Centimeters,
    Meters,
}

impl Unit {
    /// Inches per one of this unit
    pub fn factor(self) -> f64 {
        match self {
            Unit::Inches => 1.0,
            Unit::Feet => FEET_TO_INCHES,
            Unit::Yards => YARDS_TO_INCHES,
            Unit::Millimeters => MM_TO_INCHES,
            Unit::Centimeters => CM_TO_INCHES,
            Unit::Meters => METERS_TO_INCHES,
        }
    }

    /// Short symbol as shown in range tables and CLI output
    pub fn symbol(self) -> &'static str {
        match self {
            Unit::Inches => "in",
            Unit::Feet => "ft",
            Unit::Yards => "yd",
            Unit::Millimeters => "mm",
            Unit::Centimeters => "cm",
            Unit::Meters => "m",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Unit {
    type Err = ScalerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "in" | "inch" | "inches" => Ok(Unit::Inches),
            "ft" | "foot" | "feet" => Ok(Unit::Feet),
            "yd" | "yard" | "yards" => Ok(Unit::Yards),
            "mm" => Ok(Unit::Millimeters),
            "cm" => Ok(Unit::Centimeters),
            "m" | "meter" | "meters" => Ok(Unit::Meters),
            _ => Err(ScalerError::InvalidUnit(s.to_string())),
        }
    }
}

/// Convert a value in the given unit to inches
pub fn to_inches(value: f64, unit: Unit) -> f64 {
    value * unit.factor()
}

/// A measured length: value plus unit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Length {
    pub value: f64,
    pub unit: Unit,
}

impl Length {
    pub fn new(value: f64, unit: Unit) -> Self {
        Self { value, unit }
    }

    pub fn to_inches(self) -> f64 {
        to_inches(self.value, self.unit)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit)
    }
}
