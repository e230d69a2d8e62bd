//! DrawingSurface trait for abstracting the graphics device.
//!
//! The renderer never draws anything itself; the only thing it needs from a
//! device while building drawables is string metrics, plus the device's
//! conversion from its own units into physical ones.

use sinab_style::FontFace;
use sinab_types::Unit;
use std::fmt::Debug;
use thiserror::Error;

/// Error type for surface queries.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SurfaceError {
    #[error("Font not supported by surface: {family} (face: {face:?})")]
    UnsupportedFont { family: String, face: FontFace },

    #[error("Failed to measure '{label}': {message}")]
    MeasurementFailed { label: String, message: String },
}

/// The font a string is measured in.
#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec<'a> {
    /// Family name; empty selects the device default.
    pub family: &'a str,
    pub face: FontFace,
    /// Size in big points.
    pub size: f64,
}

impl<'a> FontSpec<'a> {
    pub fn new(family: &'a str) -> Self {
        Self {
            family,
            face: FontFace::Plain,
            size: 12.0,
        }
    }

    pub fn with_face(mut self, face: FontFace) -> Self {
        self.face = face;
        self
    }

    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }
}

/// String extents. Units depend on who produced them: surfaces report
/// device units, the metrics probe hands out physical ones.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StringMetrics {
    pub width: f64,
    pub ascent: f64,
    pub descent: f64,
}

impl StringMetrics {
    pub fn height(&self) -> f64 {
        self.ascent + self.descent
    }
}

/// A graphics device that can answer metric queries.
///
/// # Implementations
///
/// - `FixedMetricsSurface`: deterministic metrics from a fixed advance width (always available)
pub trait DrawingSurface: Send + Sync + Debug {
    /// Measure `label` set in `font`, in device units.
    fn string_metrics(&self, label: &str, font: &FontSpec<'_>)
    -> Result<StringMetrics, SurfaceError>;

    /// Convert a horizontal device-unit length into `unit`.
    fn device_width_in(&self, value: f64, unit: Unit) -> f64;

    /// Returns a human-readable name for this surface (for logging/debugging).
    fn name(&self) -> &'static str;
}

/// A surface with synthetic, monospace-like metrics.
///
/// Every glyph advances by a fixed fraction of the font size; bold faces are
/// ten percent wider. Ascent and descent are fixed fractions of the size.
/// Useful wherever a real device is not available.
#[derive(Debug, Clone)]
pub struct FixedMetricsSurface {
    units_per_inch: f64,
    advance: f64,
    ascent: f64,
    descent: f64,
    unsupported_families: Vec<String>,
}

impl Default for FixedMetricsSurface {
    fn default() -> Self {
        Self {
            units_per_inch: 72.0,
            advance: 0.5,
            ascent: 0.75,
            descent: 0.25,
            unsupported_families: Vec::new(),
        }
    }
}

impl FixedMetricsSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the device resolution in device units per inch.
    pub fn with_resolution(mut self, units_per_inch: f64) -> Self {
        self.units_per_inch = units_per_inch;
        self
    }

    /// Sets the glyph advance as a fraction of the font size.
    pub fn with_advance(mut self, advance: f64) -> Self {
        self.advance = advance;
        self
    }

    /// Makes the surface refuse to measure strings in `family`.
    pub fn without_family(mut self, family: impl Into<String>) -> Self {
        self.unsupported_families.push(family.into());
        self
    }

    pub fn units_per_inch(&self) -> f64 {
        self.units_per_inch
    }
}

impl DrawingSurface for FixedMetricsSurface {
    fn string_metrics(
        &self,
        label: &str,
        font: &FontSpec<'_>,
    ) -> Result<StringMetrics, SurfaceError> {
        if self.unsupported_families.iter().any(|f| f == font.family) {
            return Err(SurfaceError::UnsupportedFont {
                family: font.family.to_string(),
                face: font.face,
            });
        }
        if !font.size.is_finite() || font.size <= 0.0 {
            return Err(SurfaceError::MeasurementFailed {
                label: label.to_string(),
                message: format!("invalid font size {}", font.size),
            });
        }

        let scale = self.units_per_inch / 72.0;
        let em = font.size * scale;
        let weight = if font.face.is_bold() { 1.1 } else { 1.0 };
        let glyphs = label.chars().count() as f64;

        Ok(StringMetrics {
            width: glyphs * em * self.advance * weight,
            ascent: if glyphs > 0.0 { em * self.ascent } else { 0.0 },
            descent: if glyphs > 0.0 { em * self.descent } else { 0.0 },
        })
    }

    fn device_width_in(&self, value: f64, unit: Unit) -> f64 {
        unit.scale_inches(value / self.units_per_inch)
    }

    fn name(&self) -> &'static str {
        "FixedMetricsSurface"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_fixed_surface_metrics() {
        let surface = FixedMetricsSurface::new();
        let m = surface
            .string_metrics("Hello!", &FontSpec::new("Helvetica"))
            .unwrap();

        assert!((m.width - 36.0).abs() < EPSILON);
        assert!((m.ascent - 9.0).abs() < EPSILON);
        assert!((m.descent - 3.0).abs() < EPSILON);
        assert!((m.height() - 12.0).abs() < EPSILON);
    }

    #[test]
    fn test_fixed_surface_bold_is_wider() {
        let surface = FixedMetricsSurface::new();
        let plain = surface.string_metrics("abc", &FontSpec::new("")).unwrap();
        let bold = surface
            .string_metrics("abc", &FontSpec::new("").with_face(FontFace::Bold))
            .unwrap();
        assert!(bold.width > plain.width);
        assert_eq!(bold.ascent, plain.ascent);
    }

    #[test]
    fn test_fixed_surface_empty_label() {
        let surface = FixedMetricsSurface::new();
        let m = surface.string_metrics("", &FontSpec::new("")).unwrap();
        assert_eq!(m, StringMetrics::default());
    }

    #[test]
    fn test_fixed_surface_resolution() {
        let surface = FixedMetricsSurface::new().with_resolution(144.0);
        let m = surface
            .string_metrics("ab", &FontSpec::new("").with_size(10.0))
            .unwrap();
        assert!((m.width - 20.0).abs() < EPSILON);
        assert!((surface.device_width_in(144.0, Unit::Inches) - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_device_width_in_units() {
        let surface = FixedMetricsSurface::new();
        assert!((surface.device_width_in(36.0, Unit::Inches) - 0.5).abs() < EPSILON);
        assert!((surface.device_width_in(72.0, Unit::BigPoints) - 72.0).abs() < EPSILON);
        assert!((surface.device_width_in(72.0, Unit::Centimeters) - 2.54).abs() < EPSILON);
    }

    #[test]
    fn test_unsupported_family() {
        let surface = FixedMetricsSurface::new().without_family("Wingdings");
        let err = surface
            .string_metrics("x", &FontSpec::new("Wingdings"))
            .unwrap_err();
        assert!(matches!(err, SurfaceError::UnsupportedFont { .. }));
        assert!(err.to_string().contains("Wingdings"));
    }

    #[test]
    fn test_invalid_size_fails_measurement() {
        let surface = FixedMetricsSurface::new();
        let err = surface
            .string_metrics("x", &FontSpec::new("").with_size(0.0))
            .unwrap_err();
        assert!(matches!(err, SurfaceError::MeasurementFailed { .. }));
    }

    #[test]
    fn test_surface_name() {
        assert_eq!(FixedMetricsSurface::new().name(), "FixedMetricsSurface");
    }
}
