//! Chart Window
//! eframe window that shows the chart and blocks until the user closes it.

use crate::charts::{ChartSurface, PlotElement};
use crate::config::ChartConfig;
use crate::error::{PlotError, PlotResult};
use crate::gui::ChartViewer;
use eframe::egui;
use tracing::info;

/// Main application window.
pub struct HmixPlotApp {
    chart_viewer: ChartViewer,
}

impl HmixPlotApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, chart_viewer: ChartViewer) -> Self {
        Self { chart_viewer }
    }

    /// Escape or Q dismisses the chart.
    fn dismiss_requested(ctx: &egui::Context) -> bool {
        ctx.input(|i| i.key_pressed(egui::Key::Escape) || i.key_pressed(egui::Key::Q))
    }
}

impl eframe::App for HmixPlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if Self::dismiss_requested(ctx) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.chart_viewer.show(ui);
        });
    }
}

/// Interactive surface: collects elements, opens the window in `finish`.
pub struct WindowSurface {
    title: String,
    chart: Option<ChartConfig>,
    elements: Vec<PlotElement>,
}

impl WindowSurface {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            chart: None,
            elements: Vec::new(),
        }
    }
}

impl ChartSurface for WindowSurface {
    fn configure(&mut self, chart: &ChartConfig) -> PlotResult<()> {
        self.chart = Some(chart.clone());
        Ok(())
    }

    fn draw(&mut self, element: PlotElement) -> PlotResult<()> {
        self.elements.push(element);
        Ok(())
    }

    /// Blocks until the window is closed. No timeout.
    fn finish(&mut self) -> PlotResult<()> {
        let chart = self
            .chart
            .take()
            .ok_or_else(|| PlotError::Backend("chart was never configured".to_string()))?;
        let viewer = ChartViewer::new(chart, std::mem::take(&mut self.elements));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([900.0, 650.0])
                .with_min_inner_size([480.0, 360.0])
                .with_title(self.title.as_str()),
            ..Default::default()
        };

        info!("waiting for the chart window to close");
        eframe::run_native(
            &self.title,
            options,
            Box::new(move |cc| Ok(Box::new(HmixPlotApp::new(cc, viewer)))),
        )
        .map_err(|e| PlotError::Backend(format!("chart window: {e}")))?;

        info!("chart window closed");
        Ok(())
    }
}
