//! Cam profile rendering to SVG.
//!
//! Base circle, pitch curve and physical outline on a fixed square surface,
//! auto-scaled and centered with a constant pad. White is the manufactured
//! profile, blue the roller-center pitch curve, the faint circle is Rb.

use crate::cam::CamSolution;
use crate::float_types::Real;
use crate::io::IoError;
use geo::{BoundingRect, LineString, Rect, coord};
use svg::Document;
use svg::node::element::path::Data;
use svg::node::element::{Circle, Path, Rectangle, Text};

/// Edge length of the square drawing surface (SVG user units).
pub const SURFACE_SIZE: Real = 480.0;
const PAD: Real = 30.0;

const BACKGROUND: &str = "#101418";
const PROFILE_STROKE: &str = "rgba(255,255,255,.92)";
const PITCH_STROKE: &str = "rgba(80,170,255,.85)";
const BASE_STROKE: &str = "rgba(255,255,255,.25)";

/// World → surface transform: uniform scale about the bounds center, y up.
struct Mapping {
    scale: Real,
    center_x: Real,
    center_y: Real,
}

impl Mapping {
    fn fit(bounds: &Rect<Real>) -> Self {
        let span = |value: Real| if value == 0.0 { 1.0 } else { value };
        let span_x = span(bounds.max().x - bounds.min().x);
        let span_y = span(bounds.max().y - bounds.min().y);
        let usable = SURFACE_SIZE - 2.0 * PAD;
        Mapping {
            scale: (usable / span_x).min(usable / span_y),
            center_x: (bounds.min().x + bounds.max().x) / 2.0,
            center_y: (bounds.min().y + bounds.max().y) / 2.0,
        }
    }

    fn apply(&self, x: Real, y: Real) -> (Real, Real) {
        (
            SURFACE_SIZE / 2.0 + (x - self.center_x) * self.scale,
            SURFACE_SIZE / 2.0 - (y - self.center_y) * self.scale,
        )
    }
}

fn merged_bounds(solution: &CamSolution) -> Option<Rect<Real>> {
    match (
        solution.pitch.bounding_rect(),
        solution.profile.bounding_rect(),
    ) {
        (Some(a), Some(b)) => Some(Rect::new(
            coord! { x: a.min().x.min(b.min().x), y: a.min().y.min(b.min().y) },
            coord! { x: a.max().x.max(b.max().x), y: a.max().y.max(b.max().y) },
        )),
        (Some(a), None) => Some(a),
        (None, Some(b)) => Some(b),
        (None, None) => None,
    }
}

fn closed_path(line: &LineString<Real>, mapping: &Mapping, stroke: &str, width: Real) -> Path {
    let mut data = Data::new();
    for (i, point) in line.0.iter().enumerate() {
        let (x, y) = mapping.apply(point.x, point.y);
        data = if i == 0 {
            data.move_to((x, y))
        } else {
            data.line_to((x, y))
        };
    }
    data = data.close();

    Path::new()
        .set("fill", "none")
        .set("stroke", stroke)
        .set("stroke-width", width)
        .set("d", data)
}

fn legend(x: Real, y: Real, fill: &str, text: &str) -> Text {
    Text::new(text)
        .set("x", x)
        .set("y", y)
        .set("fill", fill)
        .set("font-size", 12)
        .set("font-family", "sans-serif")
}

/// Build the profile view as an in-memory SVG document.
pub fn profile_document(solution: &CamSolution) -> Document {
    let mut document = Document::new()
        .set("width", SURFACE_SIZE)
        .set("height", SURFACE_SIZE)
        .set("viewBox", (0.0, 0.0, SURFACE_SIZE, SURFACE_SIZE))
        .add(
            Rectangle::new()
                .set("width", SURFACE_SIZE)
                .set("height", SURFACE_SIZE)
                .set("fill", BACKGROUND),
        );

    let Some(bounds) = merged_bounds(solution) else {
        return document;
    };
    let mapping = Mapping::fit(&bounds);

    // base circle, centered on the cam axis
    document = document.add(
        Circle::new()
            .set("cx", SURFACE_SIZE / 2.0)
            .set("cy", SURFACE_SIZE / 2.0)
            .set("r", (solution.spec.base_radius * mapping.scale).abs())
            .set("fill", "none")
            .set("stroke", BASE_STROKE)
            .set("stroke-width", 1),
    );

    document = document
        .add(closed_path(&solution.pitch, &mapping, PITCH_STROKE, 1.5))
        .add(closed_path(&solution.profile, &mapping, PROFILE_STROKE, 2.0))
        .add(legend(12.0, 18.0, PROFILE_STROKE, "White: cam profile"))
        .add(legend(12.0, 34.0, PITCH_STROKE, "Blue: pitch (roller center)"));

    document
}

/// Render the profile view straight to a file.
pub fn write_profile_svg<P: AsRef<std::path::Path>>(
    path: P,
    solution: &CamSolution,
) -> Result<(), IoError> {
    svg::save(path, &profile_document(solution))?;
    Ok(())
}
