//! A single render pass: live style, drawable factory, metrics probe and
//! collector wired together behind an instruction interpreter.
use crate::config::RenderConfig;
use crate::error::SinabError;
use crate::instruction::LayoutInstruction;
use log::{debug, info, trace, warn};
use sinab_render_core::{
    DrawableFactory, DrawableList, GrobCollector, Justification, MetricsProbe, RenderError,
};
use sinab_style::{StyleContext, StyleError, StyleOverride};
use sinab_traits::StringMetrics;
use sinab_types::Unit;
use std::borrow::Cow;

/// Ascent of the estimated metrics, as a fraction of the font size.
const ESTIMATED_ASCENT: f64 = 0.75;
const ESTIMATED_DESCENT: f64 = 0.25;

/// Resolves the style for one drawable: the live context, or a copy of it
/// with an inline override applied.
fn resolve_style<'a>(
    live: &'a StyleContext,
    inline: Option<&StyleOverride>,
) -> Result<Cow<'a, StyleContext>, StyleError> {
    match inline {
        Some(ov) if !ov.is_empty() => ov.applied(live).map(Cow::Owned).inspect_err(|e| {
            warn!("Rejected inline style: {}", e);
        }),
        _ => Ok(Cow::Borrowed(live)),
    }
}

pub struct RenderPass {
    config: RenderConfig,
    factory: DrawableFactory,
    probe: MetricsProbe,
    style: StyleContext,
    collector: GrobCollector,
}

impl RenderPass {
    pub fn new(config: RenderConfig) -> Result<Self, SinabError> {
        config.validate()?;
        let collector = GrobCollector::with_capacity(config.initial_capacity)?;
        debug!(
            "Starting render pass (unit: {}, initial capacity: {})",
            config.unit, config.initial_capacity
        );
        Ok(Self {
            factory: DrawableFactory::new(config.unit),
            probe: MetricsProbe::new(),
            style: config.default_style.clone(),
            collector,
            config,
        })
    }

    pub fn with_probe(mut self, probe: MetricsProbe) -> Self {
        self.probe = probe;
        self
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn unit(&self) -> Unit {
        self.config.unit
    }

    pub fn probe(&self) -> &MetricsProbe {
        &self.probe
    }

    pub fn probe_mut(&mut self) -> &mut MetricsProbe {
        &mut self.probe
    }

    /// The live style context new drawables are stamped with.
    pub fn style(&self) -> &StyleContext {
        &self.style
    }

    pub fn style_mut(&mut self) -> &mut StyleContext {
        &mut self.style
    }

    /// Number of drawables collected so far.
    pub fn len(&self) -> usize {
        self.collector.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collector.is_empty()
    }

    pub fn draw_text(
        &mut self,
        label: &str,
        x: f64,
        y: f64,
        just: Justification,
    ) -> Result<(), SinabError> {
        let drawable = self.factory.make_text(label, x, y, just, &self.style);
        self.collector.append(drawable)?;
        Ok(())
    }

    pub fn draw_rect(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        just: Justification,
    ) -> Result<(), SinabError> {
        let drawable = self.factory.make_rect(x, y, width, height, just, &self.style);
        self.collector.append(drawable)?;
        Ok(())
    }

    pub fn draw_path<I>(&mut self, points: I) -> Result<(), SinabError>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let drawable = self.factory.make_path(points, &self.style);
        self.collector.append(drawable)?;
        Ok(())
    }

    /// Measures `label` in the live style, in the pass unit.
    pub fn measure_text(&self, label: &str) -> Result<StringMetrics, SinabError> {
        Ok(self.measure_with(label, &self.style)?)
    }

    /// Asks the probe; without a surface the metrics are estimated from the
    /// configured fallback advance.
    fn measure_with(&self, label: &str, style: &StyleContext) -> Result<StringMetrics, RenderError> {
        match self.probe.measure_style(label, style, self.config.unit) {
            Err(RenderError::NoActiveSurface) => Ok(self.estimate(label, style)),
            other => other,
        }
    }

    fn estimate(&self, label: &str, style: &StyleContext) -> StringMetrics {
        let glyphs = label.chars().count();
        if glyphs == 0 {
            return StringMetrics::default();
        }
        let size = style.font_size();
        let to_unit = |points: f64| Unit::BigPoints.convert(points, self.config.unit);
        StringMetrics {
            width: to_unit(glyphs as f64 * self.config.fallback_char_width * size),
            ascent: to_unit(ESTIMATED_ASCENT * size),
            descent: to_unit(ESTIMATED_DESCENT * size),
        }
    }

    /// Greedily packs the words of `text` into lines no wider than
    /// `max_width`. A word that is wider on its own still gets a line.
    fn wrap_lines(
        &self,
        text: &str,
        max_width: f64,
        style: &StyleContext,
    ) -> Result<Vec<String>, RenderError> {
        let mut lines = Vec::new();
        let mut current = String::new();
        for word in text.split_whitespace() {
            if current.is_empty() {
                current.push_str(word);
                continue;
            }
            let candidate = format!("{} {}", current, word);
            if self.measure_with(&candidate, style)?.width > max_width {
                lines.push(std::mem::replace(&mut current, word.to_string()));
            } else {
                current = candidate;
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
        Ok(lines)
    }

    pub fn execute(&mut self, instruction: &LayoutInstruction) -> Result<(), SinabError> {
        trace!("Executing {} instruction", instruction.name());
        match instruction {
            LayoutInstruction::Style(ov) => {
                ov.apply_to(&mut self.style).inspect_err(|e| {
                    warn!("Rejected style change: {}", e);
                })?;
            }
            LayoutInstruction::ResetStyle => {
                self.style = self.config.default_style.clone();
            }
            LayoutInstruction::Text {
                label,
                x,
                y,
                hjust,
                vjust,
                style,
            } => {
                let ctx = resolve_style(&self.style, style.as_ref())?;
                let just = Justification::new(*hjust, *vjust);
                let drawable = self.factory.make_text(label.as_str(), *x, *y, just, &ctx);
                self.collector.append(drawable)?;
            }
            LayoutInstruction::Rect {
                x,
                y,
                width,
                height,
                hjust,
                vjust,
                style,
            } => {
                let ctx = resolve_style(&self.style, style.as_ref())?;
                let just = Justification::new(*hjust, *vjust);
                let drawable = self.factory.make_rect(*x, *y, *width, *height, just, &ctx);
                self.collector.append(drawable)?;
            }
            LayoutInstruction::Path { points, style } => {
                let ctx = resolve_style(&self.style, style.as_ref())?;
                let drawable = self
                    .factory
                    .make_path(points.iter().map(|[x, y]| (*x, *y)), &ctx);
                self.collector.append(drawable)?;
            }
            LayoutInstruction::TextBlock {
                text,
                x,
                y,
                max_width,
                style,
            } => {
                let ctx = resolve_style(&self.style, style.as_ref())?.into_owned();
                if !self.probe.is_attached() {
                    debug!("No drawing surface attached, estimating text block metrics");
                }
                let lines = self.wrap_lines(text, *max_width, &ctx)?;
                let skip = Unit::BigPoints.convert(ctx.baseline_skip(), self.config.unit);
                for (i, line) in lines.into_iter().enumerate() {
                    let line_y = *y - i as f64 * skip;
                    let drawable =
                        self.factory
                            .make_text(line, *x, line_y, Justification::default(), &ctx);
                    self.collector.append(drawable)?;
                }
            }
        }
        Ok(())
    }

    /// Executes `instructions` in order, stopping at the first failure.
    pub fn run<'a, I>(&mut self, instructions: I) -> Result<(), SinabError>
    where
        I: IntoIterator<Item = &'a LayoutInstruction>,
    {
        for instruction in instructions {
            self.execute(instruction)?;
        }
        Ok(())
    }

    /// Ends the pass and returns the drawables in creation order.
    pub fn finish(self) -> Result<DrawableList, SinabError> {
        let list = self.collector.into_drawable_list()?;
        info!("Render pass finished with {} drawables", list.len());
        Ok(list)
    }
}

/// Runs `instructions` through a fresh pass.
pub fn render(
    config: RenderConfig,
    probe: MetricsProbe,
    instructions: &[LayoutInstruction],
) -> Result<DrawableList, SinabError> {
    let mut pass = RenderPass::new(config)?.with_probe(probe);
    pass.run(instructions)?;
    pass.finish()
}

/// Like [`render`], reading the instructions from a JSON array.
pub fn render_json(
    config: RenderConfig,
    probe: MetricsProbe,
    json: &str,
) -> Result<DrawableList, SinabError> {
    let instructions = LayoutInstruction::list_from_json_str(json)?;
    render(config, probe, &instructions)
}
