pub mod geometry;
pub mod unit;

pub use geometry::{UnitPoint, UnitValue};
pub use unit::{Unit, UnitError};
