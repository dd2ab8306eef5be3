//! The render pass: generate every layer, then replay it on a pen.

use crate::config::RenderConfig;
use crate::families::{background, Family};
use crate::pen::{draw_segment, Pen};
use crate::types::{Color, Segment};
use std::fmt;

/// Segments that share one color and thickness
#[derive(Clone, Debug, PartialEq)]
pub struct Layer {
    pub name: &'static str,
    /// `None` for the background grid
    pub family: Option<Family>,
    pub color: Color,
    pub thickness: f64,
    pub segments: Vec<Segment>,
}

/// Segment counts per layer from one render pass
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderStats {
    pub layers: Vec<(&'static str, usize)>,
}

impl RenderStats {
    pub fn total(&self) -> usize {
        self.layers.iter().map(|(_, count)| count).sum()
    }
}

impl fmt::Display for RenderStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .layers
            .iter()
            .map(|(name, count)| format!("{} {}", name, count))
            .collect();
        write!(f, "{} segments ({})", self.total(), parts.join(", "))
    }
}

/// All layers of a drawing in paint order: background grid (if enabled),
/// horizontal, vertical, NW diagonal, NE diagonal
pub fn layers(config: &RenderConfig) -> Vec<Layer> {
    let grid = config.grid();
    let mut layers = Vec::with_capacity(5);

    if config.background.enabled {
        layers.push(Layer {
            name: "background",
            family: None,
            color: config.background.color,
            thickness: config.background.thickness,
            segments: background(&grid),
        });
    }

    for family in Family::DRAW_ORDER {
        let family_config = config.family(family);
        layers.push(Layer {
            name: family.name(),
            family: Some(family),
            color: family_config.color,
            thickness: family_config.thickness,
            segments: family.generate(&grid, &family_config.patterns),
        });
    }

    layers
}

/// Draw the configured pattern with `pen`.
///
/// Each layer sets the pen's color and thickness before its segments are
/// drawn. The pen is updated after every layer, or only once at the end
/// when `no_animation` is set.
pub fn render<P: Pen + ?Sized>(config: &RenderConfig, pen: &mut P) -> RenderStats {
    let mut stats = RenderStats::default();

    for layer in layers(config) {
        pen.set_color(layer.color);
        pen.set_thickness(layer.thickness);
        for segment in &layer.segments {
            draw_segment(pen, segment);
        }
        if !config.no_animation {
            pen.update();
        }
        stats.layers.push((layer.name, layer.segments.len()));
    }

    if config.no_animation {
        pen.update();
    }

    log::debug!("rendered {}", stats);
    stats
}
