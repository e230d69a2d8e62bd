#![allow(dead_code)]

use serde_json::Value;
use sinab::{
    DrawableList, FixedMetricsSurface, LayoutInstruction, MetricsProbe, RenderConfig, SinabError,
    render,
};
use std::sync::Arc;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub const EPSILON: f64 = 1e-9;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A probe backed by the deterministic 72 units-per-inch surface.
pub fn fixed_probe() -> MetricsProbe {
    MetricsProbe::with_surface(Arc::new(FixedMetricsSurface::new()))
}

/// Renders a JSON array of instructions with the default configuration.
pub fn render_value(instructions: Value, probe: MetricsProbe) -> Result<DrawableList, SinabError> {
    let instructions: Vec<LayoutInstruction> = serde_json::from_value(instructions)?;
    render(RenderConfig::default(), probe, &instructions)
}

/// Labels of all text drawables, in order.
pub fn text_labels(list: &DrawableList) -> Vec<String> {
    list.iter()
        .filter_map(|d| d.as_text().map(|t| t.label().to_string()))
        .collect()
}

pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}
