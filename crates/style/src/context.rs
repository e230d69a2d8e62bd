//! The mutable graphics context that drawables are stamped with.
//!
//! A render pass keeps one live `StyleContext`, edits it as text and line
//! attributes change, and hands it to the drawable factory, which stores a
//! copy. Every field owns its data, so `clone()` always yields a fully
//! independent context.

use crate::error::StyleError;
use crate::font::FontFace;
use serde::{Deserialize, Serialize};

pub const DEFAULT_COLOR: &str = "black";
pub const DEFAULT_FILL: &str = "black";
pub const DEFAULT_FONT_SIZE: f64 = 12.0;
pub const DEFAULT_LINE_HEIGHT: f64 = 1.2;
pub const DEFAULT_LINE_TYPE: i32 = 1;
pub const DEFAULT_LINE_WIDTH: f64 = 1.0;

/// Highest line type code: 0 blank, 1 solid, 2 dashed, 3 dotted, 4 dotdash, 5 longdash, 6 twodash.
pub const MAX_LINE_TYPE: i32 = 6;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StyleContext {
    color: String,
    fill: String,
    font_family: String,
    font_face: FontFace,
    /// Font size in points.
    font_size: f64,
    /// Line height as a multiple of the font size.
    line_height: f64,
    line_type: i32,
    line_width: f64,
}

impl Default for StyleContext {
    fn default() -> Self {
        Self {
            color: DEFAULT_COLOR.to_string(),
            fill: DEFAULT_FILL.to_string(),
            font_family: String::new(),
            font_face: FontFace::Plain,
            font_size: DEFAULT_FONT_SIZE,
            line_height: DEFAULT_LINE_HEIGHT,
            line_type: DEFAULT_LINE_TYPE,
            line_width: DEFAULT_LINE_WIDTH,
        }
    }
}

fn check_color(field: &'static str, value: &str) -> Result<(), StyleError> {
    if value.trim().is_empty() {
        return Err(StyleError::invalid(field, value, "color must not be empty"));
    }
    Ok(())
}

fn check_positive(field: &'static str, value: f64) -> Result<(), StyleError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(StyleError::invalid(field, value, "must be a finite number greater than zero"));
    }
    Ok(())
}

fn check_line_type(value: i32) -> Result<(), StyleError> {
    if !(0..=MAX_LINE_TYPE).contains(&value) {
        return Err(StyleError::invalid("lineType", value, "expected a line type between 0 and 6"));
    }
    Ok(())
}

fn check_line_width(value: f64) -> Result<(), StyleError> {
    if !value.is_finite() || value < 0.0 {
        return Err(StyleError::invalid("lineWidth", value, "must be a finite, non-negative number"));
    }
    Ok(())
}

impl StyleContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn fill(&self) -> &str {
        &self.fill
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn font_face(&self) -> FontFace {
        self.font_face
    }

    pub fn font_size(&self) -> f64 {
        self.font_size
    }

    pub fn line_height(&self) -> f64 {
        self.line_height
    }

    pub fn line_type(&self) -> i32 {
        self.line_type
    }

    pub fn line_width(&self) -> f64 {
        self.line_width
    }

    pub fn set_color(&mut self, color: impl Into<String>) -> Result<(), StyleError> {
        let color = color.into();
        check_color("color", &color)?;
        self.color = color;
        Ok(())
    }

    pub fn set_fill(&mut self, fill: impl Into<String>) -> Result<(), StyleError> {
        let fill = fill.into();
        check_color("fill", &fill)?;
        self.fill = fill;
        Ok(())
    }

    /// An empty family selects the device's default font.
    pub fn set_font_family(&mut self, family: impl Into<String>) {
        self.font_family = family.into();
    }

    pub fn set_font_face(&mut self, face: FontFace) {
        self.font_face = face;
    }

    pub fn set_font_size(&mut self, size: f64) -> Result<(), StyleError> {
        check_positive("fontSize", size)?;
        self.font_size = size;
        Ok(())
    }

    pub fn set_line_height(&mut self, line_height: f64) -> Result<(), StyleError> {
        check_positive("lineHeight", line_height)?;
        self.line_height = line_height;
        Ok(())
    }

    pub fn set_line_type(&mut self, line_type: i32) -> Result<(), StyleError> {
        check_line_type(line_type)?;
        self.line_type = line_type;
        Ok(())
    }

    pub fn set_line_width(&mut self, line_width: f64) -> Result<(), StyleError> {
        check_line_width(line_width)?;
        self.line_width = line_width;
        Ok(())
    }

    /// Restores every field to its default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Distance between successive baselines, in points.
    pub fn baseline_skip(&self) -> f64 {
        self.font_size * self.line_height
    }

    /// Re-checks every field. Contexts built through the setters are always
    /// valid; deserialized ones have to be checked.
    pub fn validate(&self) -> Result<(), StyleError> {
        check_color("color", &self.color)?;
        check_color("fill", &self.fill)?;
        check_positive("fontSize", self.font_size)?;
        check_positive("lineHeight", self.line_height)?;
        check_line_type(self.line_type)?;
        check_line_width(self.line_width)
    }
}

/// A partial set of style changes, as carried by layout instructions.
///
/// Applying an override is all-or-nothing: if any field is rejected the
/// target context is left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StyleOverride {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_face: Option<FontFace>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_type: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_width: Option<f64>,
}

impl StyleOverride {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn apply_to(&self, ctx: &mut StyleContext) -> Result<(), StyleError> {
        let mut next = ctx.clone();
        if let Some(color) = &self.color {
            next.set_color(color.as_str())?;
        }
        if let Some(fill) = &self.fill {
            next.set_fill(fill.as_str())?;
        }
        if let Some(family) = &self.font_family {
            next.set_font_family(family.as_str());
        }
        if let Some(face) = self.font_face {
            next.set_font_face(face);
        }
        if let Some(size) = self.font_size {
            next.set_font_size(size)?;
        }
        if let Some(line_height) = self.line_height {
            next.set_line_height(line_height)?;
        }
        if let Some(line_type) = self.line_type {
            next.set_line_type(line_type)?;
        }
        if let Some(line_width) = self.line_width {
            next.set_line_width(line_width)?;
        }
        *ctx = next;
        Ok(())
    }

    /// Returns a copy of `base` with this override applied.
    pub fn applied(&self, base: &StyleContext) -> Result<StyleContext, StyleError> {
        let mut ctx = base.clone();
        self.apply_to(&mut ctx)?;
        Ok(ctx)
    }
}
