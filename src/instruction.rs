//! Resolved layout instructions, as handed over by the markup side.
use serde::{Deserialize, Serialize};
use sinab_style::StyleOverride;

/// One step of a render pass.
///
/// Coordinates are raw numbers in the pass unit. An inline `style` applies
/// to the drawable(s) of that instruction only; the live context is changed
/// only by `Style` and `ResetStyle`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum LayoutInstruction {
    /// Edits the live style context.
    Style(StyleOverride),
    /// Restores the live context to the configured default style.
    ResetStyle,
    Text {
        label: String,
        x: f64,
        y: f64,
        #[serde(default)]
        hjust: f64,
        #[serde(default)]
        vjust: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        style: Option<StyleOverride>,
    },
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        #[serde(default)]
        hjust: f64,
        #[serde(default)]
        vjust: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        style: Option<StyleOverride>,
    },
    Path {
        points: Vec<[f64; 2]>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        style: Option<StyleOverride>,
    },
    /// A paragraph wrapped into lines no wider than `max_width`. The first
    /// baseline sits at `y`; later lines move down.
    TextBlock {
        text: String,
        x: f64,
        y: f64,
        #[serde(rename = "maxWidth")]
        max_width: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        style: Option<StyleOverride>,
    },
}

impl LayoutInstruction {
    pub fn name(&self) -> &'static str {
        match self {
            LayoutInstruction::Style(_) => "style",
            LayoutInstruction::ResetStyle => "resetStyle",
            LayoutInstruction::Text { .. } => "text",
            LayoutInstruction::Rect { .. } => "rect",
            LayoutInstruction::Path { .. } => "path",
            LayoutInstruction::TextBlock { .. } => "textBlock",
        }
    }

    /// Parses a JSON array of instructions.
    pub fn list_from_json_str(json: &str) -> Result<Vec<LayoutInstruction>, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use sinab_style::FontFace;

    #[test]
    fn test_parse_text_with_defaults() {
        let instr: LayoutInstruction =
            serde_json::from_value(json!({ "type": "text", "label": "Hello", "x": 0.5, "y": 2 }))
                .unwrap();
        assert_eq!(
            instr,
            LayoutInstruction::Text {
                label: "Hello".to_string(),
                x: 0.5,
                y: 2.0,
                hjust: 0.0,
                vjust: 0.0,
                style: None,
            }
        );
        assert_eq!(instr.name(), "text");
    }

    #[test]
    fn test_parse_style_override() {
        let instr: LayoutInstruction = serde_json::from_value(
            json!({ "type": "style", "color": "blue", "fontFace": "bold", "fontSize": 14 }),
        )
        .unwrap();
        let LayoutInstruction::Style(ov) = instr else {
            panic!("expected a style instruction");
        };
        assert_eq!(ov.color.as_deref(), Some("blue"));
        assert_eq!(ov.font_face, Some(FontFace::Bold));
        assert_eq!(ov.font_size, Some(14.0));
        assert!(ov.fill.is_none());
    }

    #[test]
    fn test_parse_list() {
        let list = LayoutInstruction::list_from_json_str(
            r#"[
                { "type": "resetStyle" },
                { "type": "path", "points": [[0, 0], [1, 1]], "style": { "lineWidth": 2 } },
                { "type": "rect", "x": 0, "y": 0, "width": 1, "height": 1, "hjust": 0.5 },
                { "type": "textBlock", "text": "a b", "x": 0, "y": 0, "maxWidth": 2 }
            ]"#,
        )
        .unwrap();
        let names: Vec<_> = list.iter().map(|i| i.name()).collect();
        assert_eq!(names, vec!["resetStyle", "path", "rect", "textBlock"]);
        match &list[1] {
            LayoutInstruction::Path { points, style } => {
                assert_eq!(points, &vec![[0.0, 0.0], [1.0, 1.0]]);
                assert_eq!(style.as_ref().and_then(|s| s.line_width), Some(2.0));
            }
            other => panic!("unexpected instruction {:?}", other),
        }
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        let result: Result<LayoutInstruction, _> =
            serde_json::from_value(json!({ "type": "circle", "r": 1 }));
        assert!(result.is_err());
    }
}
