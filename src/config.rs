//! Chart Configuration Module
//! Axis settings, series descriptors and the built-in plot presets.

use crate::charts::{tick_count, MAX_TICKS};
use crate::error::{PlotError, PlotResult};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Axis labels, tick spacing and display ranges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub x_label: String,
    pub y_label: String,
    pub x_tick: f64,
    pub y_tick: f64,
    /// Mole fraction domain
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            x_label: "x2".to_string(),
            y_label: "H / (kJ/mol)".to_string(),
            x_tick: 0.1,
            y_tick: 2.0,
            x_range: (0.0, 1.0),
            y_range: (-11.0, 7.0),
        }
    }
}

impl ChartConfig {
    pub fn validate(&self) -> PlotResult<()> {
        if self.x_label.trim().is_empty() || self.y_label.trim().is_empty() {
            return Err(PlotError::Configuration(
                "axis labels must not be empty".to_string(),
            ));
        }
        for (axis, tick) in [("x", self.x_tick), ("y", self.y_tick)] {
            if !(tick.is_finite() && tick > 0.0) {
                return Err(PlotError::Configuration(format!(
                    "{axis} tick interval must be positive, got {tick}"
                )));
            }
        }
        for (axis, (min, max)) in [("x", self.x_range), ("y", self.y_range)] {
            if !(min.is_finite() && max.is_finite() && min < max) {
                return Err(PlotError::Configuration(format!(
                    "{axis} range [{min}, {max}] must satisfy min < max"
                )));
            }
        }
        for (axis, (min, max), tick) in [
            ("x", self.x_range, self.x_tick),
            ("y", self.y_range, self.y_tick),
        ] {
            let count = tick_count(min, max, tick);
            if count > MAX_TICKS {
                return Err(PlotError::Configuration(format!(
                    "{axis} tick interval {tick} gives {count} ticks over [{min}, {max}], at most {MAX_TICKS} allowed"
                )));
            }
        }
        Ok(())
    }
}

/// Which columns of a data file feed a series (1-indexed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Columns {
    /// y from one column, x is the row ordinal
    Single(usize),
    /// x and y columns
    Pair(usize, usize),
}

impl Columns {
    pub fn highest(&self) -> usize {
        match *self {
            Columns::Single(y) => y,
            Columns::Pair(x, y) => x.max(y),
        }
    }
}

/// Elementwise unit conversion applied to the y column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Transform {
    #[default]
    None,
    /// J/mol to kJ/mol
    #[serde(rename = "divide_by_1000")]
    DivideBy1000,
}

impl Transform {
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Transform::None => value,
            Transform::DivideBy1000 => value / 1000.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawStyle {
    #[default]
    Line,
    Points,
}

/// One plotted trace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesSpec {
    pub file: PathBuf,
    pub columns: Columns,
    #[serde(default)]
    pub transform: Transform,
    #[serde(default)]
    pub style: DrawStyle,
    /// Empty label keeps the series out of the legend.
    #[serde(default)]
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_type: Option<usize>,
}

impl SeriesSpec {
    pub fn new(file: impl Into<PathBuf>, columns: Columns) -> Self {
        Self {
            file: file.into(),
            columns,
            transform: Transform::None,
            style: DrawStyle::Line,
            label: String::new(),
            line_type: None,
        }
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    pub fn with_style(mut self, style: DrawStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_line_type(mut self, line_type: usize) -> Self {
        self.line_type = Some(line_type);
        self
    }
}

/// Complete plot description: chart settings plus the ordered series.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PlotSpec {
    #[serde(default)]
    pub chart: ChartConfig,
    pub series: Vec<SeriesSpec>,
}

impl PlotSpec {
    /// Read a JSON plot description.
    pub fn from_json_file(path: &Path) -> PlotResult<Self> {
        let text = fs::read_to_string(path).map_err(|e| PlotError::SpecFile {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        serde_json::from_str(&text).map_err(|e| PlotError::SpecFile {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    pub fn to_json(&self) -> PlotResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| PlotError::Configuration(e.to_string()))
    }

    /// Chart settings and column indices. Data files are not checked here.
    pub fn validate(&self) -> PlotResult<()> {
        self.chart.validate()?;
        for (i, series) in self.series.iter().enumerate() {
            let zero_based = match series.columns {
                Columns::Single(y) => y == 0,
                Columns::Pair(x, y) => x == 0 || y == 0,
            };
            if zero_based {
                return Err(PlotError::Configuration(format!(
                    "series {} ({}): columns are numbered from 1",
                    i + 1,
                    series.file.display()
                )));
            }
        }
        Ok(())
    }
}

/// Red, blue and black in the line-type palette
const LINE_TYPE_H1: usize = 7;
const LINE_TYPE_H2: usize = 6;
const LINE_TYPE_HE: usize = 8;

/// Built-in variants of the mixing enthalpy chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Preset {
    /// All files hold J/mol values
    #[default]
    Joule,
    /// The fitted curve file is already in kJ/mol
    Kilojoule,
}

impl Preset {
    /// Chart for the `<stem>_h1.out`, `<stem>_h2.out` and `<stem>_hrk.out` files.
    pub fn plot_spec(self, stem: &str) -> PlotSpec {
        let h1 = format!("{stem}_h1.out");
        let h2 = format!("{stem}_h2.out");
        let hrk = format!("{stem}_hrk.out");
        let fit_transform = match self {
            Preset::Joule => Transform::DivideBy1000,
            Preset::Kilojoule => Transform::None,
        };

        // Each component keeps one colour for its data and its fit
        let series = vec![
            SeriesSpec::new(h1, Columns::Pair(1, 2))
                .with_transform(Transform::DivideBy1000)
                .with_style(DrawStyle::Points)
                .with_label("h1 exp")
                .with_line_type(LINE_TYPE_H1),
            SeriesSpec::new(h2, Columns::Pair(1, 2))
                .with_transform(Transform::DivideBy1000)
                .with_style(DrawStyle::Points)
                .with_label("h2 exp")
                .with_line_type(LINE_TYPE_H2),
            SeriesSpec::new(&hrk, Columns::Pair(1, 2))
                .with_transform(fit_transform)
                .with_label("h1")
                .with_line_type(LINE_TYPE_H1),
            SeriesSpec::new(&hrk, Columns::Pair(1, 3))
                .with_transform(fit_transform)
                .with_label("h2")
                .with_line_type(LINE_TYPE_H2),
            SeriesSpec::new(&hrk, Columns::Pair(1, 4))
                .with_transform(fit_transform)
                .with_label("HE")
                .with_line_type(LINE_TYPE_HE),
        ];

        PlotSpec {
            chart: ChartConfig::default(),
            series,
        }
    }
}
