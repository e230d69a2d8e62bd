//! sinab: accumulates style-stamped drawables for a drawing surface.
//!
//! A [`RenderPass`] keeps the live [`StyleContext`], turns
//! [`LayoutInstruction`]s into drawables and hands back a finalized
//! [`DrawableList`] in creation order.
//!
//! ```no_run
//! use sinab::{render_json, MetricsProbe, RenderConfig};
//!
//! let list = render_json(
//!     RenderConfig::default(),
//!     MetricsProbe::new(),
//!     r#"[
//!         { "type": "text", "label": "Hello", "x": 0.5, "y": 2 },
//!         { "type": "style", "color": "blue" },
//!         { "type": "text", "label": "World", "x": 0.95, "y": 2 }
//!     ]"#,
//! )?;
//! assert_eq!(list.len(), 2);
//! # Ok::<(), sinab::SinabError>(())
//! ```

pub mod config;
pub mod error;
pub mod instruction;
pub mod pass;

// Foundation crates
pub use sinab_render_core as render_core;
pub use sinab_style as style;
pub use sinab_traits as traits;
pub use sinab_types as types;

pub use config::RenderConfig;
pub use error::SinabError;
pub use instruction::LayoutInstruction;
pub use pass::{RenderPass, render, render_json};

pub use sinab_render_core::{
    Drawable, DrawableFactory, DrawableList, GrobCollector, Justification, MetricsProbe,
    RenderError,
};
pub use sinab_style::{FontFace, GraphicsParams, StyleContext, StyleError, StyleOverride};
pub use sinab_traits::{DrawingSurface, FixedMetricsSurface, StringMetrics, SurfaceError};
pub use sinab_types::{Unit, UnitError, UnitValue};
