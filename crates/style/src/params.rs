//! Graphical parameters in the shape a drawing surface consumes them.
use crate::context::StyleContext;
use serde::{Deserialize, Serialize};

/// The surface-facing view of a style snapshot. Unset fields inherit from
/// whatever the surface already has in effect.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphicsParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub col: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fontfamily: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fontface: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fontsize: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lineheight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lty: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lwd: Option<f64>,
}

impl GraphicsParams {
    /// A parameter set with nothing specified.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl From<&StyleContext> for GraphicsParams {
    fn from(ctx: &StyleContext) -> Self {
        Self {
            col: Some(ctx.color().to_string()),
            fill: Some(ctx.fill().to_string()),
            fontfamily: Some(ctx.font_family().to_string()),
            fontface: Some(ctx.font_face().code()),
            fontsize: Some(ctx.font_size()),
            lineheight: Some(ctx.line_height()),
            lty: Some(ctx.line_type()),
            lwd: Some(ctx.line_width()),
        }
    }
}

impl StyleContext {
    pub fn to_graphics_params(&self) -> GraphicsParams {
        GraphicsParams::from(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::FontFace;

    #[test]
    fn test_empty_params_serialize_to_empty_object() {
        let gp = GraphicsParams::empty();
        assert!(gp.is_empty());
        assert_eq!(serde_json::to_string(&gp).unwrap(), "{}");
    }

    #[test]
    fn test_params_from_context() {
        let mut gc = StyleContext::new();
        gc.set_color("blue").unwrap();
        gc.set_font_face(FontFace::BoldItalic);
        gc.set_line_type(3).unwrap();

        let gp = gc.to_graphics_params();
        assert_eq!(gp.col.as_deref(), Some("blue"));
        assert_eq!(gp.fill.as_deref(), Some("black"));
        assert_eq!(gp.fontfamily.as_deref(), Some(""));
        assert_eq!(gp.fontface, Some(4));
        assert_eq!(gp.fontsize, Some(12.0));
        assert_eq!(gp.lineheight, Some(1.2));
        assert_eq!(gp.lty, Some(3));
        assert_eq!(gp.lwd, Some(1.0));
        assert!(!gp.is_empty());
    }
}
