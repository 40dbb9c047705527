//! Drawing surface contract.
//! The render pipeline produces `PlotElement`s; surfaces turn them into pixels.

use crate::config::{ChartConfig, DrawStyle};
use crate::error::PlotResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// Dashed horizontal guide at y = 0, never in the legend
    ZeroLine,
    Line,
    Points,
}

impl From<DrawStyle> for ElementKind {
    fn from(style: DrawStyle) -> Self {
        match style {
            DrawStyle::Line => ElementKind::Line,
            DrawStyle::Points => ElementKind::Points,
        }
    }
}

/// One drawable item of the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotElement {
    pub kind: ElementKind,
    pub label: Option<String>,
    pub line_type: usize,
    pub points: Vec<[f64; 2]>,
}

impl PlotElement {
    pub fn zero_line(x_range: (f64, f64)) -> Self {
        Self {
            kind: ElementKind::ZeroLine,
            label: None,
            line_type: 0,
            points: vec![[x_range.0, 0.0], [x_range.1, 0.0]],
        }
    }

    /// Legend entry text, `None` for unlabelled elements.
    pub fn legend(&self) -> Option<&str> {
        self.label.as_deref().filter(|l| !l.is_empty())
    }
}

/// Backend that receives a configured chart and its elements in draw order.
pub trait ChartSurface {
    fn configure(&mut self, chart: &ChartConfig) -> PlotResult<()>;

    fn draw(&mut self, element: PlotElement) -> PlotResult<()>;

    /// Produce the output. Interactive surfaces block here until dismissed.
    fn finish(&mut self) -> PlotResult<()>;
}

/// Surface that only records what it was asked to draw.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub chart: Option<ChartConfig>,
    pub elements: Vec<PlotElement>,
    pub finished: bool,
}

#[cfg(test)]
impl ChartSurface for RecordingSurface {
    fn configure(&mut self, chart: &ChartConfig) -> PlotResult<()> {
        self.chart = Some(chart.clone());
        Ok(())
    }

    fn draw(&mut self, element: PlotElement) -> PlotResult<()> {
        self.elements.push(element);
        Ok(())
    }

    fn finish(&mut self) -> PlotResult<()> {
        self.finished = true;
        Ok(())
    }
}
