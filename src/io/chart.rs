//! Kinematic chart rendering via plotters.
//!
//! Four θ-domain line charts (displacement, velocity, acceleration, jerk)
//! in one 2×2 SVG grid. Each call renders into a fresh backend; nothing is
//! retained between computations.

use crate::cam::MotionSample;
use crate::float_types::Real;
use crate::io::IoError;
use core::ops::Range;
use plotters::chart::{ChartBuilder, LabelAreaPosition};
use plotters::drawing::IntoDrawingArea;
use plotters::prelude::{BLACK, IntoFont, LineSeries, SVGBackend, WHITE, YELLOW};
use plotters::style::Color;

const GRID_SIZE: (u32, u32) = (900, 700);

fn chart_error<E: std::fmt::Display>(error: E) -> IoError {
    IoError::Chart(error.to_string())
}

/// Series y-range with a 5 % pad; degenerate flat series get ±1.
fn padded_range(values: impl Iterator<Item = Real>) -> Range<Real> {
    let mut lo = Real::INFINITY;
    let mut hi = Real::NEG_INFINITY;
    for value in values {
        lo = lo.min(value);
        hi = hi.max(value);
    }
    if !lo.is_finite() || !hi.is_finite() {
        return -1.0..1.0;
    }
    if lo == hi {
        return (lo - 1.0)..(hi + 1.0);
    }
    let pad = (hi - lo) * 0.05;
    (lo - pad)..(hi + pad)
}

/// Render the four kinematic charts as an SVG string.
pub fn kinematics_svg(samples: &[MotionSample]) -> Result<String, IoError> {
    let panels: [(&str, fn(&MotionSample) -> Real); 4] = [
        ("Displacement s(θ) [mm]", |s| s.displacement),
        ("Velocity v(θ) [mm/s]", |s| s.velocity),
        ("Acceleration a(θ) [mm/s²]", |s| s.acceleration),
        ("Jerk j(θ) [mm/s³]", |s| s.jerk),
    ];

    let mut buffer = String::new();
    {
        let root = SVGBackend::with_string(&mut buffer, GRID_SIZE).into_drawing_area();
        root.fill(&BLACK.mix(0.9)).map_err(chart_error)?;
        let areas = root.split_evenly((2, 2));

        for (area, (title, component)) in areas.iter().zip(panels.iter()) {
            let x_range: Range<Real> = 0.0..360.0;
            let y_range = padded_range(samples.iter().map(|sample| component(sample)));

            let mut chart = ChartBuilder::on(area)
                .margin(12)
                .caption(*title, ("sans-serif", 16).into_font().color(&WHITE))
                .set_label_area_size(LabelAreaPosition::Bottom, 32)
                .set_label_area_size(LabelAreaPosition::Left, 60)
                .build_cartesian_2d(x_range, y_range)
                .map_err(chart_error)?;

            chart
                .configure_mesh()
                .x_desc("θ (°)")
                .x_labels(9)
                .y_labels(7)
                .label_style(("sans-serif", 11).into_font().color(&WHITE))
                .bold_line_style(WHITE.mix(0.2))
                .light_line_style(WHITE.mix(0.1))
                .draw()
                .map_err(chart_error)?;

            chart
                .draw_series(LineSeries::new(
                    samples
                        .iter()
                        .map(|sample| (sample.angle_deg, component(sample))),
                    &YELLOW,
                ))
                .map_err(chart_error)?;
        }

        root.present().map_err(chart_error)?;
    }
    Ok(buffer)
}

/// Render the four kinematic charts straight to a file.
pub fn write_kinematics_svg<P: AsRef<std::path::Path>>(
    path: P,
    samples: &[MotionSample],
) -> Result<(), IoError> {
    let rendered = kinematics_svg(samples)?;
    std::fs::write(path, rendered)?;
    Ok(())
}
