pub mod surface;

pub use surface::{DrawingSurface, FixedMetricsSurface, FontSpec, StringMetrics, SurfaceError};
