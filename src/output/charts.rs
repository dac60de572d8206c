use crate::analysis::sweep::SweepPoint;
use crate::models::Trajectory;
use crate::sim::SimulationErrors;
use log::info;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::ops::Range;
use std::path::Path;

const FLIGHT_PROFILE_SIZE: (u32, u32) = (1200, 900);
const SPEED_SWEEP_SIZE: (u32, u32) = (1500, 500);

struct Series<'a> {
    label: &'a str,
    values: &'a [f64],
    color: RGBColor,
}

struct Panel<'a> {
    title: &'a str,
    x_desc: &'a str,
    y_desc: &'a str,
    xs: &'a [f64],
    series: Vec<Series<'a>>,
}

fn plot_error<E: std::fmt::Display>(err: E) -> SimulationErrors {
    SimulationErrors::Plot(err.to_string())
}

/// Bounds of all values, padded so flat series still get a visible axis.
fn axis_range<'a>(values: impl IntoIterator<Item = &'a f64>) -> Range<f64> {
    let (min, max) = values
        .into_iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(*v), hi.max(*v))
        });
    if !min.is_finite() || !max.is_finite() {
        return 0.0..1.0;
    }
    let pad = if max > min { (max - min) * 0.05 } else { min.abs().max(1.0) * 0.05 };
    (min - pad)..(max + pad)
}

fn draw_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    panel: &Panel,
) -> Result<(), SimulationErrors> {
    let x_range = axis_range(panel.xs);
    let y_range = axis_range(panel.series.iter().flat_map(|s| s.values.iter()));

    let mut chart = ChartBuilder::on(area)
        .caption(panel.title, ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(35)
        .y_label_area_size(70)
        .build_cartesian_2d(x_range, y_range)
        .map_err(plot_error)?;

    chart
        .configure_mesh()
        .x_desc(panel.x_desc)
        .y_desc(panel.y_desc)
        .draw()
        .map_err(plot_error)?;

    for series in &panel.series {
        let color = series.color;
        chart
            .draw_series(LineSeries::new(
                panel.xs.iter().copied().zip(series.values.iter().copied()),
                color,
            ))
            .map_err(plot_error)?
            .label(series.label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    if panel.series.len() > 1 {
        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(plot_error)?;
    }

    Ok(())
}

fn render_panels(
    path: &Path,
    size: (u32, u32),
    layout: (usize, usize),
    panels: &[Panel],
) -> Result<(), SimulationErrors> {
    let root = SVGBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE).map_err(plot_error)?;

    for (area, panel) in root.split_evenly(layout).iter().zip(panels) {
        draw_panel(area, panel)?;
    }

    root.present().map_err(plot_error)?;
    Ok(())
}

/// Velocity, altitude, energy and turn radius against time on a 2x2 grid.
pub fn render_flight_profile(path: &Path, trajectory: &Trajectory) -> Result<(), SimulationErrors> {
    if trajectory.is_empty() {
        return Err(SimulationErrors::EmptySeries("trajectory"));
    }

    let times = trajectory.times();
    let velocities = trajectory.velocities();
    let altitudes = trajectory.altitudes();
    let kinetic = trajectory.kinetic_energies();
    let potential = trajectory.potential_energies();
    let radii = trajectory.turn_radii();

    let panels = [
        Panel {
            title: "Velocity vs Time",
            x_desc: "Time (s)",
            y_desc: "Velocity (m/s)",
            xs: &times,
            series: vec![Series { label: "Velocity", values: &velocities, color: BLUE }],
        },
        Panel {
            title: "Altitude vs Time",
            x_desc: "Time (s)",
            y_desc: "Altitude (m)",
            xs: &times,
            series: vec![Series { label: "Altitude", values: &altitudes, color: GREEN }],
        },
        Panel {
            title: "Energy vs Time",
            x_desc: "Time (s)",
            y_desc: "Energy (J)",
            xs: &times,
            series: vec![
                Series { label: "Kinetic Energy", values: &kinetic, color: RED },
                Series { label: "Potential Energy", values: &potential, color: MAGENTA },
            ],
        },
        Panel {
            title: "Turn Radius vs Time",
            x_desc: "Time (s)",
            y_desc: "Turn Radius (m)",
            xs: &times,
            series: vec![Series { label: "Turn Radius", values: &radii, color: CYAN }],
        },
    ];

    render_panels(path, FLIGHT_PROFILE_SIZE, (2, 2), &panels)?;
    info!("Flight profile chart has been written to {}", path.display());
    Ok(())
}

/// Kinetic energy, turn rate and turn radius against speed, side by side.
pub fn render_speed_sweep(path: &Path, points: &[SweepPoint]) -> Result<(), SimulationErrors> {
    if points.is_empty() {
        return Err(SimulationErrors::EmptySeries("speed sweep"));
    }

    let speeds: Vec<f64> = points.iter().map(|p| p.speed).collect();
    let kinetic: Vec<f64> = points.iter().map(|p| p.kinetic_energy).collect();
    let rates: Vec<f64> = points.iter().map(|p| p.turn_rate).collect();
    let radii: Vec<f64> = points.iter().map(|p| p.turn_radius).collect();

    let panels = [
        Panel {
            title: "Kinetic Energy vs Speed",
            x_desc: "Speed (m/s)",
            y_desc: "Kinetic Energy (J)",
            xs: &speeds,
            series: vec![Series { label: "Kinetic Energy", values: &kinetic, color: BLUE }],
        },
        Panel {
            title: "Turn Rate vs Speed",
            x_desc: "Speed (m/s)",
            y_desc: "Turn Rate (rad/s)",
            xs: &speeds,
            series: vec![Series { label: "Turn Rate", values: &rates, color: GREEN }],
        },
        Panel {
            title: "Turn Radius vs Speed",
            x_desc: "Speed (m/s)",
            y_desc: "Turn Radius (m)",
            xs: &speeds,
            series: vec![Series { label: "Turn Radius", values: &radii, color: RED }],
        },
    ];

    render_panels(path, SPEED_SWEEP_SIZE, (1, 3), &panels)?;
    info!("Speed sweep chart has been written to {}", path.display());
    Ok(())
}
