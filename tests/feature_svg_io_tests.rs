#![cfg(feature = "svg-io")]

use mechrs::io::svg::profile_document;
use mechrs::{CamSpec, DesignLimits, MotionLaw, synthesize};

fn preset() -> CamSpec {
    CamSpec {
        lift: 30.0,
        shaft_rpm: 60.0,
        dwell_low_deg: 60.0,
        rise_deg: 90.0,
        return_deg: 90.0,
        base_radius: 35.0,
        follower_radius: 8.0,
        offset: 0.0,
        samples: 181,
    }
}

#[test]
fn profile_view_renders_both_curves() {
    let limits = DesignLimits {
        max_acceleration: 1.0e9,
        max_jerk: 1.0e12,
    };
    let solution = synthesize(&preset(), MotionLaw::Poly345, &limits).unwrap();
    let rendered = profile_document(&solution).to_string();

    assert!(rendered.contains("<svg"));
    // base circle + two closed outlines + two legend entries
    assert_eq!(rendered.matches("<path").count(), 2);
    assert_eq!(rendered.matches("<circle").count(), 1);
    assert_eq!(rendered.matches("<text").count(), 2);
}

#[test]
fn profile_view_carries_the_legend() {
    let limits = DesignLimits {
        max_acceleration: 1.0e9,
        max_jerk: 1.0e12,
    };
    let solution = synthesize(&preset(), MotionLaw::Harmonic, &limits).unwrap();
    let rendered = profile_document(&solution).to_string();

    assert!(rendered.contains("White: cam profile"));
    assert!(rendered.contains("Blue: pitch (roller center)"));
}
