//! String metrics in physical units, measured on an explicitly attached surface.
use crate::error::RenderError;
use log::trace;
use sinab_style::{FontFace, StyleContext};
use sinab_traits::{DrawingSurface, FontSpec, StringMetrics};
use sinab_types::Unit;
use std::sync::Arc;

/// Asks the attached drawing surface how large a string is.
///
/// The probe holds the surface it queries; nothing is looked up globally.
/// Without a surface every query fails with `NoActiveSurface`, which callers
/// are expected to handle (e.g. by estimating).
#[derive(Debug, Clone, Default)]
pub struct MetricsProbe {
    surface: Option<Arc<dyn DrawingSurface>>,
}

impl MetricsProbe {
    /// A probe with no surface attached.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_surface(surface: Arc<dyn DrawingSurface>) -> Self {
        Self {
            surface: Some(surface),
        }
    }

    /// Attaches `surface`, returning the previously attached one.
    pub fn attach(&mut self, surface: Arc<dyn DrawingSurface>) -> Option<Arc<dyn DrawingSurface>> {
        self.surface.replace(surface)
    }

    pub fn detach(&mut self) -> Option<Arc<dyn DrawingSurface>> {
        self.surface.take()
    }

    pub fn is_attached(&self) -> bool {
        self.surface.is_some()
    }

    pub fn surface_name(&self) -> Option<&'static str> {
        self.surface.as_ref().map(|s| s.name())
    }

    /// Measures `label` and converts width, ascent and descent into `unit`.
    pub fn measure(
        &self,
        label: &str,
        font_family: &str,
        font_face: FontFace,
        font_size: f64,
        unit: Unit,
    ) -> Result<StringMetrics, RenderError> {
        let surface = self.surface.as_ref().ok_or(RenderError::NoActiveSurface)?;
        let font = FontSpec::new(font_family)
            .with_face(font_face)
            .with_size(font_size);
        let device = surface.string_metrics(label, &font)?;
        trace!(
            "Measured '{}' on {}: {:?} device units",
            label,
            surface.name(),
            device
        );

        Ok(StringMetrics {
            width: surface.device_width_in(device.width, unit),
            ascent: surface.device_width_in(device.ascent, unit),
            descent: surface.device_width_in(device.descent, unit),
        })
    }

    /// Measures `label` in the font described by `ctx`.
    pub fn measure_style(
        &self,
        label: &str,
        ctx: &StyleContext,
        unit: Unit,
    ) -> Result<StringMetrics, RenderError> {
        self.measure(label, ctx.font_family(), ctx.font_face(), ctx.font_size(), unit)
    }
}
