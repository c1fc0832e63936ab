//! SVG rendering of the energy path.
//!
//! The chart is drawn into an in-memory string, so the engine never touches the
//! filesystem. Callers decide whether to persist or embed it.

use super::config::PlotConfig;
use super::energy_path::EnergyPath;
use plotters::prelude::*;
use thiserror::Error;

const CAPTION: &str = "Protein Folding Energy Path";
const X_DESC: &str = "Amino Acid Position";
const Y_DESC: &str = "Relative Energy (kcal/mol)";
const Y_PADDING: f64 = 0.25;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Energy path is empty; nothing to plot")]
    EmptyPath,

    #[error("Failed to draw energy plot: {0}")]
    Drawing(String),
}

fn drawing_error<E: std::error::Error>(err: E) -> RenderError {
    RenderError::Drawing(err.to_string())
}

fn value_range(path: &EnergyPath) -> (f64, f64) {
    let (lo, hi) = path
        .energies
        .iter()
        .fold((0.0f64, 0.0f64), |(lo, hi), e| (lo.min(*e), hi.max(*e)));
    (lo - Y_PADDING, hi + Y_PADDING)
}

/// Renders the path as a filled line chart with stable positions marked.
///
/// Returns an empty string when plotting is disabled.
pub fn render_energy_plot(path: &EnergyPath, config: &PlotConfig) -> Result<String, RenderError> {
    if !config.enabled {
        return Ok(String::new());
    }
    if path.is_empty() {
        return Err(RenderError::EmptyPath);
    }

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (config.width, config.height))
            .into_drawing_area();
        root.fill(&WHITE).map_err(drawing_error)?;

        let x_max = (path.len().saturating_sub(1)).max(1) as f64;
        let (y_min, y_max) = value_range(path);

        let mut chart = ChartBuilder::on(&root)
            .caption(CAPTION, ("sans-serif", 18))
            .margin(12)
            .x_label_area_size(40)
            .y_label_area_size(56)
            .build_cartesian_2d(0f64..x_max, y_min..y_max)
            .map_err(drawing_error)?;

        chart
            .configure_mesh()
            .x_desc(X_DESC)
            .y_desc(Y_DESC)
            .light_line_style(BLACK.mix(0.05))
            .draw()
            .map_err(drawing_error)?;

        let points: Vec<(f64, f64)> = path.points().map(|(i, e)| (i as f64, e)).collect();

        chart
            .draw_series(AreaSeries::new(
                points.iter().copied(),
                0.0,
                BLUE.mix(0.3).filled(),
            ))
            .map_err(drawing_error)?;

        chart
            .draw_series(LineSeries::new(points, BLUE.stroke_width(2)))
            .map_err(drawing_error)?
            .label("Folding Energy")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE.stroke_width(2)));

        if !path.stable_positions.is_empty() {
            chart
                .draw_series(
                    path.stable_points()
                        .map(|(i, e)| Circle::new((i as f64, e), 3, GREEN.mix(0.7).filled())),
                )
                .map_err(drawing_error)?
                .label("Stable Regions")
                .legend(|(x, y)| Circle::new((x + 10, y), 3, GREEN.mix(0.7).filled()));
        }

        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(drawing_error)?;

        root.present().map_err(drawing_error)?;
    }

    Ok(svg)
}
