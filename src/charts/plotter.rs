//! Chart Plotter Module
//! Draws the overlay chart interactively using egui_plot.

use crate::charts::style::{format_tick, line_type_rgb, tick_positions};
use crate::charts::{ElementKind, PlotElement};
use crate::config::ChartConfig;
use egui::Color32;
use egui_plot::{
    Corner, GridMark, Legend, Line, LineStyle, Plot, PlotBounds, PlotPoints, Points,
};

/// Creates the mixing enthalpy chart using egui_plot.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Color for a line-type index.
    pub fn line_type_color(line_type: usize) -> Color32 {
        let (r, g, b) = line_type_rgb(line_type);
        Color32::from_rgb(r, g, b)
    }

    /// Grid marks at multiples of `step` inside the visible bounds. None when
    /// zoomed out so far that they would crowd the axis.
    pub fn grid_marks(bounds: (f64, f64), step: f64) -> Vec<GridMark> {
        tick_positions(bounds.0, bounds.1, step)
            .into_iter()
            .map(|value| GridMark {
                value,
                step_size: step,
            })
            .collect()
    }

    /// The configured x and y ranges, ignoring where the data lies.
    pub fn display_bounds(config: &ChartConfig) -> PlotBounds {
        PlotBounds::from_min_max(
            [config.x_range.0, config.y_range.0],
            [config.x_range.1, config.y_range.1],
        )
    }

    /// Draw all elements in order over a fixed-range plot.
    ///
    /// `reset_bounds` pins the view to the configured ranges; pass it on the
    /// first frame, after that the user may pan and zoom.
    pub fn draw_overlay_chart(
        ui: &mut egui::Ui,
        config: &ChartConfig,
        elements: &[PlotElement],
        reset_bounds: bool,
    ) {
        let x_tick = config.x_tick;
        let y_tick = config.y_tick;
        let bounds = Self::display_bounds(config);

        Plot::new("hmix_chart")
            .legend(Legend::default().position(Corner::RightTop))
            .x_axis_label(config.x_label.clone())
            .y_axis_label(config.y_label.clone())
            .include_x(config.x_range.0)
            .include_x(config.x_range.1)
            .include_y(config.y_range.0)
            .include_y(config.y_range.1)
            .auto_bounds(egui::Vec2b::FALSE)
            .allow_double_click_reset(false)
            .x_grid_spacer(move |input| Self::grid_marks(input.bounds, x_tick))
            .y_grid_spacer(move |input| Self::grid_marks(input.bounds, y_tick))
            .x_axis_formatter(move |mark, _range| format_tick(mark.value, x_tick))
            .y_axis_formatter(move |mark, _range| format_tick(mark.value, y_tick))
            .show(ui, |plot_ui| {
                if reset_bounds {
                    plot_ui.set_plot_bounds(bounds);
                }
                for element in elements {
                    let color = Self::line_type_color(element.line_type);
                    let points = PlotPoints::from(element.points.clone());

                    match element.kind {
                        ElementKind::ZeroLine => {
                            plot_ui.line(
                                Line::new(points)
                                    .color(color)
                                    .width(1.0)
                                    .style(LineStyle::Dashed { length: 8.0 }),
                            );
                        }
                        ElementKind::Line => {
                            let mut line = Line::new(points).color(color).width(2.0);
                            if let Some(label) = element.legend() {
                                line = line.name(label);
                            }
                            plot_ui.line(line);
                        }
                        ElementKind::Points => {
                            let mut markers = Points::new(points).radius(4.0).color(color);
                            if let Some(label) = element.legend() {
                                markers = markers.name(label);
                            }
                            plot_ui.points(markers);
                        }
                    }
                }
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_marks_use_configured_step() {
        let marks = ChartPlotter::grid_marks((-11.0, 7.0), 2.0);
        assert_eq!(marks.len(), 9);
        assert!(marks.iter().all(|m| m.step_size == 2.0));
        assert_eq!(marks[0].value, -10.0);
    }

    #[test]
    fn grid_marks_are_dropped_when_too_dense() {
        assert!(ChartPlotter::grid_marks((0.0, 1000.0), 0.1).is_empty());
    }

    #[test]
    fn grid_marks_stay_bounded_when_zoomed_far_out() {
        assert!(ChartPlotter::grid_marks((-5e7, 5e7), 0.1).is_empty());
    }

    #[test]
    fn display_bounds_ignore_data_outside_range() {
        let config = ChartConfig::default();
        let bounds = ChartPlotter::display_bounds(&config);
        assert_eq!(bounds.min(), [0.0, -11.0]);
        assert_eq!(bounds.max(), [1.0, 7.0]);
    }

    #[test]
    fn zero_line_is_grey() {
        assert_eq!(
            ChartPlotter::line_type_color(0),
            Color32::from_rgb(160, 160, 160)
        );
    }
}
