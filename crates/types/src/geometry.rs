use crate::unit::Unit;
use serde::{Deserialize, Serialize};

/// A scalar tagged with the unit it is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnitValue {
    pub value: f64,
    pub unit: Unit,
}

impl UnitValue {
    pub fn new(value: f64, unit: Unit) -> Self {
        Self { value, unit }
    }

    pub fn inches(value: f64) -> Self {
        Self::new(value, Unit::Inches)
    }

    /// Returns the same length expressed in `target`.
    pub fn to_unit(self, target: Unit) -> Self {
        Self {
            value: self.unit.convert(self.value, target),
            unit: target,
        }
    }
}

/// A point whose coordinates carry units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnitPoint {
    pub x: UnitValue,
    pub y: UnitValue,
}

impl UnitPoint {
    pub fn new(x: f64, y: f64, unit: Unit) -> Self {
        Self {
            x: UnitValue::new(x, unit),
            y: UnitValue::new(y, unit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inches_constructor() {
        let v = UnitValue::inches(0.5);
        assert_eq!(v.value, 0.5);
        assert_eq!(v.unit, Unit::Inches);
    }

    #[test]
    fn test_to_unit_converts_value_and_tag() {
        let v = UnitValue::inches(2.0).to_unit(Unit::BigPoints);
        assert_eq!(v.unit, Unit::BigPoints);
        assert!((v.value - 144.0).abs() < 1e-9);
    }

    #[test]
    fn test_point_shares_unit() {
        let p = UnitPoint::new(1.0, 3.0, Unit::Centimeters);
        assert_eq!(p.x, UnitValue::new(1.0, Unit::Centimeters));
        assert_eq!(p.y, UnitValue::new(3.0, Unit::Centimeters));
    }
}
