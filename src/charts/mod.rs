//! Charts module - Chart rendering

mod pipeline;
mod plotter;
mod renderer;
mod style;
mod surface;

pub use pipeline::ChartRenderer;
pub use plotter::ChartPlotter;
pub use renderer::StaticChartRenderer;
pub use style::{tick_count, MAX_TICKS};
pub use surface::{ChartSurface, ElementKind, PlotElement};

#[cfg(test)]
pub use surface::RecordingSurface;
