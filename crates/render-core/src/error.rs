use sinab_traits::SurfaceError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("Failed to allocate room for {requested} drawables")]
    AllocationFailure { requested: usize },
    #[error("Drawable collector used after finalize (operation: {operation})")]
    UseAfterFinalize { operation: &'static str },
    #[error("No drawing surface is attached")]
    NoActiveSurface,
    #[error("Surface error: {0}")]
    Surface(#[from] SurfaceError),
}
