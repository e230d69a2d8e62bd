//! Drawables and the factory that stamps them with a style snapshot.
//!
//! A drawable is the final output for one visual primitive: unit-tagged
//! geometry plus a private copy of the style context that was live when it
//! was created. Editing the live context afterwards never reaches back into
//! drawables that already exist.

use serde::{Serialize, Serializer};
use sinab_style::{GraphicsParams, StyleContext};
use sinab_types::{Unit, UnitPoint, UnitValue};

fn serialize_style<S: Serializer>(style: &StyleContext, serializer: S) -> Result<S::Ok, S::Error> {
    GraphicsParams::from(style).serialize(serializer)
}

/// Horizontal and vertical justification, as fractions of the extent
/// (0 = left/bottom, 1 = right/top).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Justification {
    pub hjust: f64,
    pub vjust: f64,
}

impl Justification {
    pub const CENTER: Justification = Justification {
        hjust: 0.5,
        vjust: 0.5,
    };

    pub fn new(hjust: f64, vjust: f64) -> Self {
        Self { hjust, vjust }
    }
}

/// A run of text anchored at a point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextDrawable {
    label: String,
    x: UnitValue,
    y: UnitValue,
    #[serde(flatten)]
    just: Justification,
    #[serde(rename = "gp", serialize_with = "serialize_style")]
    style: StyleContext,
}

impl TextDrawable {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn x(&self) -> UnitValue {
        self.x
    }

    pub fn y(&self) -> UnitValue {
        self.y
    }

    pub fn justification(&self) -> Justification {
        self.just
    }

    pub fn style(&self) -> &StyleContext {
        &self.style
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RectDrawable {
    x: UnitValue,
    y: UnitValue,
    width: UnitValue,
    height: UnitValue,
    #[serde(flatten)]
    just: Justification,
    #[serde(rename = "gp", serialize_with = "serialize_style")]
    style: StyleContext,
}

impl RectDrawable {
    pub fn x(&self) -> UnitValue {
        self.x
    }

    pub fn y(&self) -> UnitValue {
        self.y
    }

    pub fn width(&self) -> UnitValue {
        self.width
    }

    pub fn height(&self) -> UnitValue {
        self.height
    }

    pub fn justification(&self) -> Justification {
        self.just
    }

    pub fn style(&self) -> &StyleContext {
        &self.style
    }
}

/// An open polyline through `points`, in order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathDrawable {
    points: Vec<UnitPoint>,
    #[serde(rename = "gp", serialize_with = "serialize_style")]
    style: StyleContext,
}

impl PathDrawable {
    pub fn points(&self) -> &[UnitPoint] {
        &self.points
    }

    pub fn style(&self) -> &StyleContext {
        &self.style
    }
}

/// The closed set of primitives a drawable list can hold.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Drawable {
    Text(TextDrawable),
    Rect(RectDrawable),
    Path(PathDrawable),
}

impl Drawable {
    /// The style snapshot captured when the drawable was made.
    pub fn style(&self) -> &StyleContext {
        match self {
            Drawable::Text(t) => &t.style,
            Drawable::Rect(r) => &r.style,
            Drawable::Path(p) => &p.style,
        }
    }

    pub fn as_text(&self) -> Option<&TextDrawable> {
        match self {
            Drawable::Text(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_rect(&self) -> Option<&RectDrawable> {
        match self {
            Drawable::Rect(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_path(&self) -> Option<&PathDrawable> {
        match self {
            Drawable::Path(p) => Some(p),
            _ => None,
        }
    }
}

impl std::fmt::Display for Drawable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Drawable::Text(t) => write!(f, "Text(\"{}\")", t.label),
            Drawable::Rect(_) => write!(f, "Rect"),
            Drawable::Path(p) => write!(f, "Path({} points)", p.points.len()),
        }
    }
}

/// Turns raw geometry plus the live style context into drawables.
///
/// Raw numbers are tagged with the factory's unit. The context is only
/// read; each drawable gets its own copy.
#[derive(Debug, Clone, Copy, Default)]
pub struct DrawableFactory {
    unit: Unit,
}

impl DrawableFactory {
    pub fn new(unit: Unit) -> Self {
        Self { unit }
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    fn wrap(&self, value: f64) -> UnitValue {
        UnitValue::new(value, self.unit)
    }

    /// An empty label is valid and yields a zero-width run.
    pub fn make_text(
        &self,
        label: impl Into<String>,
        x: f64,
        y: f64,
        just: Justification,
        ctx: &StyleContext,
    ) -> Drawable {
        Drawable::Text(TextDrawable {
            label: label.into(),
            x: self.wrap(x),
            y: self.wrap(y),
            just,
            style: ctx.clone(),
        })
    }

    pub fn make_rect(
        &self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        just: Justification,
        ctx: &StyleContext,
    ) -> Drawable {
        Drawable::Rect(RectDrawable {
            x: self.wrap(x),
            y: self.wrap(y),
            width: self.wrap(width),
            height: self.wrap(height),
            just,
            style: ctx.clone(),
        })
    }

    pub fn make_path<I>(&self, points: I, ctx: &StyleContext) -> Drawable
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        Drawable::Path(PathDrawable {
            points: points
                .into_iter()
                .map(|(x, y)| UnitPoint::new(x, y, self.unit))
                .collect(),
            style: ctx.clone(),
        })
    }
}
