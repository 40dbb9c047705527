//! Static Chart Renderer
//! Writes the chart to a PNG or SVG file with plotters.
//!
//! Layout:
//! 1. Axes with descriptions, tick labels at exact multiples of the tick interval
//! 2. Light grid at the same positions
//! 3. Elements in draw order (zero line first)
//! 4. Legend box in the upper right, labelled series only

use crate::charts::style::{self, format_tick, tick_positions};
use crate::charts::{ChartSurface, ElementKind, PlotElement};
use crate::config::ChartConfig;
use crate::error::{PlotError, PlotResult};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::{Path, PathBuf};
use tracing::info;

const GRID: RGBColor = RGBColor(225, 225, 225);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Svg,
}

impl ImageFormat {
    /// `.svg` selects SVG, everything else is a bitmap.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("svg") => ImageFormat::Svg,
            _ => ImageFormat::Png,
        }
    }
}

/// File surface: collects elements, writes the image in `finish`.
pub struct StaticChartRenderer {
    path: PathBuf,
    size: (u32, u32),
    chart: Option<ChartConfig>,
    elements: Vec<PlotElement>,
}

impl StaticChartRenderer {
    pub fn new(path: impl Into<PathBuf>, size: (u32, u32)) -> Self {
        Self {
            path: path.into(),
            size,
            chart: None,
            elements: Vec::new(),
        }
    }

    fn draw_chart<DB>(
        root: DrawingArea<DB, Shift>,
        config: &ChartConfig,
        elements: &[PlotElement],
    ) -> Result<(), Box<dyn std::error::Error>>
    where
        DB: DrawingBackend,
        DB::ErrorType: 'static,
    {
        root.fill(&WHITE)?;

        let (x_min, x_max) = config.x_range;
        let (y_min, y_max) = config.y_range;
        let x_ticks = tick_positions(x_min, x_max, config.x_tick);
        let y_ticks = tick_positions(y_min, y_max, config.y_tick);

        let mut chart = ChartBuilder::on(&root)
            .margin(25)
            .set_label_area_size(LabelAreaPosition::Left, 70)
            .set_label_area_size(LabelAreaPosition::Bottom, 55)
            .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

        // Ticks and grid go at exact multiples of the interval, drawn below
        chart
            .configure_mesh()
            .disable_mesh()
            .x_labels(2)
            .y_labels(2)
            .x_label_formatter(&|_| String::new())
            .y_label_formatter(&|_| String::new())
            .set_tick_mark_size(LabelAreaPosition::Left, 0)
            .set_tick_mark_size(LabelAreaPosition::Bottom, 0)
            .x_desc(config.x_label.as_str())
            .y_desc(config.y_label.as_str())
            .axis_desc_style(("sans-serif", 20))
            .draw()?;

        for &x in &x_ticks {
            chart.draw_series(std::iter::once(PathElement::new(
                vec![(x, y_min), (x, y_max)],
                GRID.stroke_width(1),
            )))?;
        }
        for &y in &y_ticks {
            chart.draw_series(std::iter::once(PathElement::new(
                vec![(x_min, y), (x_max, y)],
                GRID.stroke_width(1),
            )))?;
        }

        let tick_font = TextStyle::from(("sans-serif", 15).into_font()).color(&BLACK);
        for &x in &x_ticks {
            let (px, py) = chart.backend_coord(&(x, y_min));
            root.draw(&Text::new(
                format_tick(x, config.x_tick),
                (px, py + 8),
                tick_font.clone().pos(Pos::new(HPos::Center, VPos::Top)),
            ))?;
        }
        for &y in &y_ticks {
            let (px, py) = chart.backend_coord(&(x_min, y));
            root.draw(&Text::new(
                format_tick(y, config.y_tick),
                (px - 8, py),
                tick_font.clone().pos(Pos::new(HPos::Right, VPos::Center)),
            ))?;
        }

        for element in elements {
            let (r, g, b) = style::line_type_rgb(element.line_type);
            let color = RGBColor(r, g, b);
            let coords = element.points.iter().map(|p| (p[0], p[1]));

            match element.kind {
                ElementKind::ZeroLine => {
                    chart.draw_series(DashedLineSeries::new(
                        coords,
                        8,
                        6,
                        color.stroke_width(1),
                    ))?;
                }
                ElementKind::Line => {
                    let anno =
                        chart.draw_series(LineSeries::new(coords, color.stroke_width(2)))?;
                    if let Some(label) = element.legend() {
                        anno.label(label).legend(move |(x, y)| {
                            PathElement::new(vec![(x, y), (x + 24, y)], color.stroke_width(2))
                        });
                    }
                }
                ElementKind::Points => {
                    let anno = chart
                        .draw_series(coords.map(|c| Circle::new(c, 4, color.filled())))?;
                    if let Some(label) = element.legend() {
                        anno.label(label)
                            .legend(move |(x, y)| Circle::new((x + 12, y), 4, color.filled()));
                    }
                }
            }
        }

        if elements.iter().any(|e| e.legend().is_some()) {
            chart
                .configure_series_labels()
                .position(SeriesLabelPosition::UpperRight)
                .background_style(&WHITE.mix(0.8))
                .border_style(&BLACK)
                .label_font(("sans-serif", 15))
                .draw()?;
        }

        root.present()?;
        Ok(())
    }
}

impl ChartSurface for StaticChartRenderer {
    fn configure(&mut self, chart: &ChartConfig) -> PlotResult<()> {
        if self.size.0 == 0 || self.size.1 == 0 {
            return Err(PlotError::Configuration(format!(
                "image size {}x{} is empty",
                self.size.0, self.size.1
            )));
        }
        self.chart = Some(chart.clone());
        Ok(())
    }

    fn draw(&mut self, element: PlotElement) -> PlotResult<()> {
        self.elements.push(element);
        Ok(())
    }

    fn finish(&mut self) -> PlotResult<()> {
        let config = self
            .chart
            .as_ref()
            .ok_or_else(|| PlotError::Backend("chart was never configured".to_string()))?;

        let result = match ImageFormat::from_path(&self.path) {
            ImageFormat::Png => {
                let root = BitMapBackend::new(&self.path, self.size).into_drawing_area();
                Self::draw_chart(root, config, &self.elements)
            }
            ImageFormat::Svg => {
                let root = SVGBackend::new(&self.path, self.size).into_drawing_area();
                Self::draw_chart(root, config, &self.elements)
            }
        };
        result.map_err(|e| PlotError::Backend(format!("{}: {}", self.path.display(), e)))?;

        info!(path = %self.path.display(), "chart written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_follows_extension() {
        assert_eq!(ImageFormat::from_path(Path::new("hmix.svg")), ImageFormat::Svg);
        assert_eq!(ImageFormat::from_path(Path::new("hmix.SVG")), ImageFormat::Svg);
        assert_eq!(ImageFormat::from_path(Path::new("hmix.png")), ImageFormat::Png);
        assert_eq!(ImageFormat::from_path(Path::new("hmix")), ImageFormat::Png);
    }

    #[test]
    fn finish_without_configure_fails() {
        let mut surface = StaticChartRenderer::new("unused.png", (1024, 768));
        assert!(matches!(surface.finish(), Err(PlotError::Backend(_))));
    }

    fn render_svg(name: &str, elements: Vec<PlotElement>) -> String {
        let dir = std::env::temp_dir().join(format!("hmix-plot-svg-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        let config = ChartConfig::default();

        let mut surface = StaticChartRenderer::new(&path, (640, 480));
        surface.configure(&config).unwrap();
        surface.draw(PlotElement::zero_line(config.x_range)).unwrap();
        for element in elements {
            surface.draw(element).unwrap();
        }
        surface.finish().unwrap();

        assert!(path.exists());
        std::fs::read_to_string(&path).unwrap()
    }

    fn element(kind: ElementKind, label: Option<&str>, line_type: usize) -> PlotElement {
        PlotElement {
            kind,
            label: label.map(str::to_string),
            line_type,
            points: vec![[0.0, 0.0], [0.5, -5.5], [1.0, 0.0]],
        }
    }

    #[test]
    fn writes_svg_with_legend_for_labelled_series_only() {
        let labelled = render_svg(
            "labelled.svg",
            vec![
                element(ElementKind::Points, Some("h1 exp"), 7),
                element(ElementKind::Line, None, 8),
            ],
        );
        let unlabelled = render_svg(
            "unlabelled.svg",
            vec![
                element(ElementKind::Points, None, 7),
                element(ElementKind::Line, None, 8),
            ],
        );

        assert!(labelled.contains("<svg"));
        assert_eq!(labelled.matches("h1 exp").count(), 1);
        assert!(labelled.contains("H / (kJ/mol)"));
        // One extra text node: the legend entry of the labelled series
        assert_eq!(
            labelled.matches("<text").count(),
            unlabelled.matches("<text").count() + 1
        );
    }

    #[test]
    fn empty_image_size_is_rejected() {
        let mut surface = StaticChartRenderer::new("unused.png", (0, 600));
        let err = surface.configure(&ChartConfig::default()).unwrap_err();
        assert!(matches!(err, PlotError::Configuration(_)));
    }
}
