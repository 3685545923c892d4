use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;

use super::loader;

// ---------------------------------------------------------------------------
// PlotStyle – rendering options
// ---------------------------------------------------------------------------

/// Appearance of a rendered free-energy profile.
#[derive(Clone, Debug)]
pub struct PlotStyle {
    pub width: u32,
    pub height: u32,
    pub background: RGBColor,
    pub series: RGBColor,
    pub caption: String,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            width: 900,
            height: 500,
            background: WHITE,
            series: BLUE,
            caption: "Free energy".to_string(),
        }
    }
}

/// Load a result file and render reaction coordinate vs. free energy as a
/// PNG next to it (`results.txt` → `results.png`). Returns the image path.
pub fn plot_results(path: &Path, style: &PlotStyle) -> Result<PathBuf> {
    let profile = loader::load_results(path)?;
    if profile.is_empty() {
        bail!("{}: nothing to plot, result table is empty", path.display());
    }
    let out_path = path.with_extension("png");
    render_profile(profile.position(), profile.free_energy(), &out_path, style)?;
    log::info!("rendered {}", out_path.display());
    Ok(out_path)
}

/// Render an x/y series to `out_path` as a PNG line plot.
pub fn render_profile(x: &[f64], y: &[f64], out_path: &Path, style: &PlotStyle) -> Result<()> {
    let root =
        BitMapBackend::new(out_path, (style.width, style.height)).into_drawing_area();
    root.fill(&style.background).map_err(plot_err)?;

    let (x_min, x_max) = axis_bounds(x);
    let (y_min, y_max) = axis_bounds(y);

    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .caption(&style.caption, ("sans-serif", 20).into_font())
        .set_label_area_size(LabelAreaPosition::Left, 45)
        .set_label_area_size(LabelAreaPosition::Bottom, 40)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(plot_err)?;
    chart.configure_mesh().draw().map_err(plot_err)?;
    chart
        .draw_series(LineSeries::new(
            x.iter().copied().zip(y.iter().copied()),
            &style.series,
        ))
        .map_err(plot_err)?;
    root.present().map_err(plot_err)?;
    Ok(())
}

/// Axis range with a fallback so a flat profile still renders.
fn axis_bounds(values: &[f64]) -> (f64, f64) {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if (max - min).abs() < f64::EPSILON {
        (min - 1.0, max + 1.0)
    } else {
        (min, max)
    }
}

fn plot_err<E: std::error::Error + Send + Sync>(err: DrawingAreaErrorKind<E>) -> anyhow::Error {
    anyhow::anyhow!("failed to render plot: {err:?}")
}
