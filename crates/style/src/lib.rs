pub mod context;
pub mod error;
pub mod font;
pub mod params;

pub use context::{StyleContext, StyleOverride};
pub use error::StyleError;
pub use font::FontFace;
pub use params::GraphicsParams;
