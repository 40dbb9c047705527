//! Render Pipeline
//! Applies the chart configuration, draws the zero line, then loads and draws
//! each series in order before handing control to the surface.

use crate::charts::{ChartSurface, ElementKind, PlotElement};
use crate::config::PlotSpec;
use crate::data::{DataLoader, DataProcessor};
use crate::error::{PlotError, PlotResult};
use tracing::{debug, info, warn};

/// Progress of a single render call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderState {
    Unconfigured,
    Configured,
    Rendering,
    AwaitingDismissal,
    Closed,
}

/// Summary of a finished render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderReport {
    /// Point count per drawn element, zero line first
    pub point_counts: Vec<usize>,
}

impl RenderReport {
    pub fn element_count(&self) -> usize {
        self.point_counts.len()
    }
}

pub struct ChartRenderer {
    state: RenderState,
}

impl Default for ChartRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartRenderer {
    pub fn new() -> Self {
        Self {
            state: RenderState::Unconfigured,
        }
    }

    pub fn state(&self) -> RenderState {
        self.state
    }

    /// Draw `spec` onto `surface` and wait for the surface to finish.
    ///
    /// Any error closes the renderer; series after the failing one are never
    /// loaded.
    pub fn render<S: ChartSurface>(
        &mut self,
        spec: &PlotSpec,
        surface: &mut S,
    ) -> PlotResult<RenderReport> {
        let result = self.run(spec, surface);
        if let Err(err) = &result {
            warn!(error = %err, state = ?self.state, "render aborted");
        }
        self.state = RenderState::Closed;
        result
    }

    fn run<S: ChartSurface>(&mut self, spec: &PlotSpec, surface: &mut S) -> PlotResult<RenderReport> {
        if self.state != RenderState::Unconfigured {
            return Err(PlotError::Configuration(
                "a renderer draws a single chart".to_string(),
            ));
        }
        spec.validate()?;
        surface.configure(&spec.chart)?;
        self.state = RenderState::Configured;

        let mut point_counts = Vec::with_capacity(spec.series.len() + 1);

        self.state = RenderState::Rendering;
        let zero = PlotElement::zero_line(spec.chart.x_range);
        point_counts.push(zero.points.len());
        surface.draw(zero)?;

        for (idx, series) in spec.series.iter().enumerate() {
            let table = DataLoader::load_table(&series.file)?;
            if table.is_empty() {
                warn!(path = %series.file.display(), "data file has no rows, drawing empty series");
            }
            let points = DataProcessor::extract_points(&table, series)?;

            let element = PlotElement {
                kind: ElementKind::from(series.style),
                label: Some(series.label.clone()).filter(|l| !l.is_empty()),
                line_type: series.line_type.unwrap_or(idx + 1),
                points,
            };
            debug!(
                series = idx + 1,
                path = %series.file.display(),
                kind = ?element.kind,
                points = element.points.len(),
                "drawing series"
            );
            point_counts.push(element.points.len());
            surface.draw(element)?;
        }

        self.state = RenderState::AwaitingDismissal;
        info!(elements = point_counts.len(), "chart ready");
        surface.finish()?;

        Ok(RenderReport { point_counts })
    }
}
