//! Chart Viewer Widget
//! Central panel showing the overlay chart.

use crate::charts::{ChartPlotter, PlotElement};
use crate::config::ChartConfig;
use egui::{Color32, RichText};

/// Holds the finished chart for display.
pub struct ChartViewer {
    pub chart: ChartConfig,
    pub elements: Vec<PlotElement>,
    bounds_pinned: bool,
}

impl ChartViewer {
    pub fn new(chart: ChartConfig, elements: Vec<PlotElement>) -> Self {
        Self {
            chart,
            elements,
            bounds_pinned: false,
        }
    }

    pub fn show(&mut self, ui: &mut egui::Ui) {
        let reset_bounds = !self.bounds_pinned;
        self.bounds_pinned = true;
        ui.vertical(|ui| {
            ui.label(
                RichText::new("Esc or Q to close")
                    .size(11.0)
                    .color(Color32::GRAY),
            );
            ChartPlotter::draw_overlay_chart(ui, &self.chart, &self.elements, reset_bounds);
        });
    }
}
