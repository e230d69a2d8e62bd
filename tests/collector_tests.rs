mod common;

use common::{TestResult, init_logger};
use sinab::{
    DrawableFactory, GrobCollector, Justification, RenderConfig, RenderError, RenderPass,
    StyleContext,
};

fn factory_text(factory: &DrawableFactory, label: &str, style: &StyleContext) -> sinab::Drawable {
    factory.make_text(label, 0.0, 0.0, Justification::default(), style)
}

#[test]
fn test_growth_keeps_every_drawable() -> TestResult {
    init_logger();

    let factory = DrawableFactory::default();
    let mut style = StyleContext::new();
    let mut collector = GrobCollector::new()?;
    let mut capacities = Vec::new();

    for i in 0..11 {
        style.set_font_size(10.0 + i as f64)?;
        collector.append(factory_text(&factory, &format!("t{}", i), &style))?;
        capacities.push(collector.capacity());
    }
    assert_eq!(capacities, vec![5, 5, 5, 5, 5, 10, 10, 10, 10, 10, 20]);

    let list = collector.finalize()?;
    assert_eq!(list.len(), 11);
    for (i, drawable) in list.iter().enumerate() {
        let text = drawable.as_text().ok_or("expected text")?;
        assert_eq!(text.label(), format!("t{}", i));
        assert_eq!(text.style().font_size(), 10.0 + i as f64);
    }
    Ok(())
}

#[test]
fn test_finalize_is_single_use() -> TestResult {
    init_logger();

    let mut collector = GrobCollector::with_capacity(2)?;
    collector.append(factory_text(&DrawableFactory::default(), "x", &StyleContext::new()))?;
    let list = collector.finalize()?;
    assert_eq!(list.len(), 1);

    let err = collector.finalize().unwrap_err();
    assert_eq!(err, RenderError::UseAfterFinalize { operation: "finalize" });
    assert!(err.to_string().contains("finalize"));
    Ok(())
}

#[test]
fn test_empty_pass_yields_empty_list() -> TestResult {
    init_logger();

    let list = RenderPass::new(RenderConfig::default())?.finish()?;
    assert!(list.is_empty());
    assert_eq!(list.kind(), "drawable-list");
    Ok(())
}

#[test]
fn test_configured_initial_capacity() -> TestResult {
    init_logger();

    let config = RenderConfig::from_json_str(r#"{ "initialCapacity": 0 }"#)?;
    let mut pass = RenderPass::new(config)?;
    for i in 0..3 {
        pass.draw_text(&i.to_string(), 0.0, 0.0, Justification::default())?;
    }
    let list = pass.finish()?;
    assert_eq!(list.len(), 3);
    assert_eq!(list[2].as_text().map(|t| t.label()), Some("2"));
    Ok(())
}
