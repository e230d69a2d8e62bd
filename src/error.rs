// src/error.rs
use sinab_render_core::RenderError;
use sinab_style::StyleError;
use thiserror::Error;

/// Error type for a whole render pass.
#[derive(Error, Debug)]
pub enum SinabError {
    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("Invalid style: {0}")]
    Style(#[from] StyleError),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
