#![cfg(feature = "chart-io")]

use mechrs::cam::kinematics;
use mechrs::io::chart::kinematics_svg;
use mechrs::{CamSpec, MotionLaw};

#[test]
fn kinematic_charts_render_four_panels() {
    let spec = CamSpec {
        lift: 30.0,
        shaft_rpm: 60.0,
        dwell_low_deg: 60.0,
        rise_deg: 90.0,
        return_deg: 90.0,
        base_radius: 35.0,
        follower_radius: 8.0,
        offset: 0.0,
        samples: 121,
    };
    let samples = kinematics::solve(&spec, MotionLaw::Cycloidal).unwrap();
    let rendered = kinematics_svg(&samples).unwrap();

    assert!(rendered.contains("<svg"));
    for title in [
        "Displacement s(θ) [mm]",
        "Velocity v(θ) [mm/s]",
        "Acceleration a(θ) [mm/s²]",
        "Jerk j(θ) [mm/s³]",
    ] {
        assert!(rendered.contains(title), "missing panel: {title}");
    }
}
