//! Physical units understood by the drawing surface.
//!
//! Coordinates handed to a surface always carry their unit, so the renderer
//! never has to agree with the surface on an implicit one. Conversions go
//! through inches, the unit the device layer reports in.
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// TeX points per inch.
pub const POINTS_PER_INCH: f64 = 72.27;
/// PostScript ("big") points per inch.
pub const BIG_POINTS_PER_INCH: f64 = 72.0;
pub const CM_PER_INCH: f64 = 2.54;
pub const MM_PER_INCH: f64 = 25.4;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnitError {
    #[error("Unknown unit: '{0}'")]
    Unknown(String),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum Unit {
    #[default]
    #[serde(rename = "inches", alias = "in")]
    Inches,
    #[serde(rename = "points", alias = "pt")]
    Points,
    #[serde(rename = "bigpts", alias = "bp")]
    BigPoints,
    #[serde(rename = "cm")]
    Centimeters,
    #[serde(rename = "mm")]
    Millimeters,
}

impl Unit {
    /// The canonical name of the unit, as a downstream surface expects it.
    pub fn name(self) -> &'static str {
        match self {
            Unit::Inches => "inches",
            Unit::Points => "points",
            Unit::BigPoints => "bigpts",
            Unit::Centimeters => "cm",
            Unit::Millimeters => "mm",
        }
    }

    fn per_inch(self) -> f64 {
        match self {
            Unit::Inches => 1.0,
            Unit::Points => POINTS_PER_INCH,
            Unit::BigPoints => BIG_POINTS_PER_INCH,
            Unit::Centimeters => CM_PER_INCH,
            Unit::Millimeters => MM_PER_INCH,
        }
    }

    pub fn to_inches(self, value: f64) -> f64 {
        value / self.per_inch()
    }

    /// Expresses a length given in inches in this unit.
    pub fn scale_inches(self, inches: f64) -> f64 {
        inches * self.per_inch()
    }

    /// Re-expresses `value`, given in `self`, in the `target` unit.
    pub fn convert(self, value: f64, target: Unit) -> f64 {
        if self == target {
            return value;
        }
        target.scale_inches(self.to_inches(value))
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Unit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "inches" | "in" => Ok(Unit::Inches),
            "points" | "pt" => Ok(Unit::Points),
            "bigpts" | "bp" => Ok(Unit::BigPoints),
            "cm" => Ok(Unit::Centimeters),
            "mm" => Ok(Unit::Millimeters),
            _ => Err(UnitError::Unknown(s.to_string())),
        }
    }
}
