//! Core of the sinab renderer.
//!
//! This crate turns resolved geometry into drawables and accumulates them:
//! - `DrawableFactory` stamps geometry with a snapshot of the live `StyleContext`
//! - `GrobCollector` collects drawables and finalizes them into a `DrawableList`
//! - `MetricsProbe` measures strings on an attached `DrawingSurface`

mod collector;
mod drawable;
mod error;
mod metrics;

pub use collector::{DEFAULT_INITIAL_CAPACITY, DRAWABLE_LIST_KIND, DrawableList, GrobCollector};
pub use drawable::{
    Drawable, DrawableFactory, Justification, PathDrawable, RectDrawable, TextDrawable,
};
pub use error::RenderError;
pub use metrics::MetricsProbe;
