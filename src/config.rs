use crate::error::SinabError;
use serde::{Deserialize, Serialize};
use sinab_render_core::DEFAULT_INITIAL_CAPACITY;
use sinab_style::StyleContext;
use sinab_types::Unit;

/// Settings for a render pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderConfig {
    /// Number of drawable slots the collector reserves up front. The buffer
    /// doubles whenever it runs full, so this only trades a few early
    /// reallocations against a little unused memory per pass.
    ///
    /// Defaults to `5`.
    pub initial_capacity: usize,
    /// Unit that raw coordinates and measured metrics are expressed in.
    ///
    /// Defaults to inches.
    pub unit: Unit,
    /// The style the live context starts from (and returns to on reset).
    pub default_style: StyleContext,
    /// Glyph advance, as a fraction of the font size, used to estimate string
    /// widths when no drawing surface is attached.
    ///
    /// Defaults to `0.5`.
    pub fallback_char_width: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            unit: Unit::Inches,
            default_style: StyleContext::new(),
            fallback_char_width: 0.5,
        }
    }
}

impl RenderConfig {
    pub fn from_json_str(json: &str) -> Result<Self, SinabError> {
        let config: RenderConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), SinabError> {
        self.default_style
            .validate()
            .map_err(|e| SinabError::Config(format!("defaultStyle: {}", e)))?;
        if !self.fallback_char_width.is_finite() || self.fallback_char_width <= 0.0 {
            return Err(SinabError::Config(format!(
                "fallbackCharWidth must be greater than zero, got {}",
                self.fallback_char_width
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sinab_style::FontFace;

    #[test]
    fn test_default_config() {
        let config = RenderConfig::default();
        assert_eq!(config.initial_capacity, 5);
        assert_eq!(config.unit, Unit::Inches);
        assert_eq!(config.default_style, StyleContext::new());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_partial() {
        let config = RenderConfig::from_json_str(
            r#"{ "initialCapacity": 1, "unit": "cm", "defaultStyle": { "fontFamily": "Helvetica", "fontFace": 2 } }"#,
        )
        .unwrap();
        assert_eq!(config.initial_capacity, 1);
        assert_eq!(config.unit, Unit::Centimeters);
        assert_eq!(config.default_style.font_family(), "Helvetica");
        assert_eq!(config.default_style.font_face(), FontFace::Bold);
        assert_eq!(config.fallback_char_width, 0.5);
    }

    #[test]
    fn test_from_json_empty_object_is_default() {
        assert_eq!(RenderConfig::from_json_str("{}").unwrap(), RenderConfig::default());
    }

    #[test]
    fn test_invalid_default_style_is_config_error() {
        let err = RenderConfig::from_json_str(r#"{ "defaultStyle": { "lineWidth": -1 } }"#)
            .unwrap_err();
        assert!(matches!(err, SinabError::Config(_)));
        assert!(err.to_string().contains("lineWidth"));
    }

    #[test]
    fn test_invalid_fallback_width() {
        let err = RenderConfig::from_json_str(r#"{ "fallbackCharWidth": 0 }"#).unwrap_err();
        assert!(matches!(err, SinabError::Config(_)));
    }

    #[test]
    fn test_malformed_json() {
        let err = RenderConfig::from_json_str(r#"{ "unit": "furlongs" }"#).unwrap_err();
        assert!(matches!(err, SinabError::Json(_)));
    }
}
