use sinab::{FixedMetricsSurface, MetricsProbe, RenderConfig, SinabError, render_json};
use std::env;
use std::sync::Arc;

const INSTRUCTIONS: &str = r#"[
    { "type": "text", "label": "Hello", "x": 0.5, "y": 2 },
    { "type": "style", "color": "blue" },
    { "type": "text", "label": "World", "x": 0.95, "y": 2 },
    { "type": "resetStyle" },
    { "type": "rect", "x": 0.4, "y": 1.8, "width": 1.2, "height": 0.4, "style": { "fill": "lightgrey" } },
    {
        "type": "textBlock",
        "text": "Every drawable keeps a copy of the style that was live when it was made.",
        "x": 0.5,
        "y": 1.5,
        "maxWidth": 2.5,
        "style": { "fontSize": 10, "fontFace": "italic" }
    }
]"#;

fn main() -> Result<(), SinabError> {
    if env::var("RUST_LOG").is_err() {
        unsafe {
            env::set_var("RUST_LOG", "sinab=info");
        }
    }
    env_logger::init();

    println!("Running hello world render pass...");

    let probe = MetricsProbe::with_surface(Arc::new(FixedMetricsSurface::new()));
    let list = render_json(RenderConfig::default(), probe, INSTRUCTIONS)?;

    for drawable in &list {
        println!("  {} ({})", drawable, drawable.style().color());
    }
    println!("{}", serde_json::to_string_pretty(&list)?);
    Ok(())
}
