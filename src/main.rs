//! hmix-plot - Mixing enthalpy chart viewer
//!
//! Overlays experimental partial molar enthalpies and fitted curves from the
//! calorimetry fit output files on one chart.

mod charts;
mod config;
mod data;
mod error;
mod gui;

use anyhow::{Context, Result};
use charts::{ChartRenderer, StaticChartRenderer};
use clap::{ArgAction, Parser, ValueHint};
use config::{PlotSpec, Preset};
use gui::WindowSurface;
use std::io;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Plot mixing enthalpy data of a binary mixture", long_about = None)]
struct Cli {
    /// Data set stem; reads <stem>_h1.out, <stem>_h2.out and <stem>_hrk.out
    #[arg(default_value = "dioxane")]
    stem: String,

    /// Built-in series layout
    #[arg(long, value_enum, default_value_t = Preset::Joule)]
    preset: Preset,

    /// JSON plot description replacing the preset
    #[arg(long, value_hint = ValueHint::FilePath)]
    spec: Option<PathBuf>,

    /// Write the chart to this file (.png or .svg) instead of opening a window
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    output: Option<PathBuf>,

    /// Y axis range as MIN:MAX
    #[arg(long, allow_hyphen_values = true, value_parser = parse_range)]
    y_range: Option<(f64, f64)>,

    /// Image size for --output as WIDTHxHEIGHT
    #[arg(long, value_parser = parse_size, default_value = "1024x768")]
    size: (u32, u32),

    /// Print the effective plot description as JSON and exit
    #[arg(long, action = ArgAction::SetTrue)]
    dump_spec: bool,

    /// Debug logging
    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,
}

fn parse_range(s: &str) -> Result<(f64, f64), String> {
    let (min, max) = s
        .split_once(':')
        .ok_or_else(|| format!("expected MIN:MAX, got '{s}'"))?;
    let min = min
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("bad range minimum '{min}': {e}"))?;
    let max = max
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("bad range maximum '{max}': {e}"))?;
    Ok((min, max))
}

fn parse_size(s: &str) -> Result<(u32, u32), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
    let w = w.trim().parse::<u32>().map_err(|e| format!("bad width '{w}': {e}"))?;
    let h = h.trim().parse::<u32>().map_err(|e| format!("bad height '{h}': {e}"))?;
    Ok((w, h))
}

/// Preset or JSON description, then command line overrides.
fn build_spec(cli: &Cli) -> Result<PlotSpec> {
    let mut spec = match &cli.spec {
        Some(path) => PlotSpec::from_json_file(path)?,
        None => cli.preset.plot_spec(&cli.stem),
    };
    if let Some(range) = cli.y_range {
        spec.chart.y_range = range;
    }
    spec.validate()?;
    Ok(spec)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .try_init();

    let spec = build_spec(&cli).context("invalid plot description")?;

    if cli.dump_spec {
        println!("{}", spec.to_json()?);
        return Ok(());
    }

    let mut renderer = ChartRenderer::new();
    let report = match &cli.output {
        Some(path) => renderer.render(&spec, &mut StaticChartRenderer::new(path, cli.size)),
        None => renderer.render(&spec, &mut WindowSurface::new("hmix-plot")),
    }
    .context("failed to render mixing enthalpy chart")?;

    info!(
        elements = report.element_count(),
        points = report.point_counts.iter().sum::<usize>(),
        "done"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Transform;

    #[test]
    fn parses_negative_range() {
        assert_eq!(parse_range("-11:7"), Ok((-11.0, 7.0)));
        assert_eq!(parse_range(" -0.5 : 2.5 "), Ok((-0.5, 2.5)));
        assert!(parse_range("-11,7").is_err());
        assert!(parse_range("a:7").is_err());
    }

    #[test]
    fn parses_image_size() {
        assert_eq!(parse_size("800x600"), Ok((800, 600)));
        assert_eq!(parse_size("800X600"), Ok((800, 600)));
        assert!(parse_size("800").is_err());
    }

    #[test]
    fn no_arguments_selects_joule_preset() {
        let cli = Cli::try_parse_from(["hmix-plot"]).unwrap();
        assert_eq!(cli.stem, "dioxane");
        assert_eq!(cli.preset, Preset::Joule);
        assert!(cli.output.is_none());
        assert_eq!(cli.size, (1024, 768));

        let spec = build_spec(&cli).unwrap();
        assert_eq!(spec, Preset::Joule.plot_spec("dioxane"));
    }

    #[test]
    fn y_range_override_is_applied() {
        let cli = Cli::try_parse_from(["hmix-plot", "--y-range", "-20:10", "water"]).unwrap();
        let spec = build_spec(&cli).unwrap();
        assert_eq!(spec.chart.y_range, (-20.0, 10.0));
        assert_eq!(spec.series[0].file, PathBuf::from("water_h1.out"));
    }

    #[test]
    fn inverted_y_range_is_rejected() {
        let cli = Cli::try_parse_from(["hmix-plot", "--y-range", "7:-11"]).unwrap();
        assert!(build_spec(&cli).is_err());
    }

    #[test]
    fn kilojoule_preset_leaves_fit_unscaled() {
        let cli = Cli::try_parse_from(["hmix-plot", "--preset", "kilojoule"]).unwrap();
        let spec = build_spec(&cli).unwrap();
        assert_eq!(spec.series[2].transform, Transform::None);
        assert_eq!(spec.series[0].transform, Transform::DivideBy1000);
    }
}
