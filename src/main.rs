// main.rs
//
// Minimal example of each calculator in mechrs: synthesizes the preset cam
// under all three motion laws, writes the profile/chart artifacts, then
// runs one pneumatic and one conveyor sizing.

use std::fs;

use mechrs::conveyor::{self, Slope, SpeedUnit};
use mechrs::pneumatic::{self, AirCylinder, Stroke, TorqueUnit};
use mechrs::{CamSpec, DesignLimits, MotionLaw, synthesize};
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    // Ensure the /out folder exists
    let _ = fs::create_dir_all("out");

    let spec = CamSpec {
        lift: 30.0,
        shaft_rpm: 60.0,
        dwell_low_deg: 60.0,
        rise_deg: 90.0,
        return_deg: 90.0,
        base_radius: 35.0,
        follower_radius: 8.0,
        offset: 0.0,
        samples: 361,
    };
    let limits = DesignLimits {
        max_acceleration: 2.0e4,
        max_jerk: 5.0e6,
    };

    for law in MotionLaw::ALL {
        let solution = synthesize(&spec, law, &limits)?;
        info!(law = law.key(), "cam synthesized");

        println!("--- {} ---", law.guidance());
        println!("{}", solution.summary());
        for line in solution.report.messages() {
            println!("{line}");
        }
        println!();

        #[cfg(feature = "svg-io")]
        mechrs::io::svg::write_profile_svg(
            format!("out/profile-{}.svg", law.key()),
            &solution,
        )?;

        #[cfg(feature = "chart-io")]
        mechrs::io::chart::write_kinematics_svg(
            format!("out/kinematics-{}.svg", law.key()),
            &solution.samples,
        )?;
    }

    // Pneumatics: pull a catalogue force, sweep a lever, size a bore
    let force = pneumatic::interpolated_force(50.0, 6, Stroke::Extend);
    let sweep = pneumatic::torque_sweep(force, 250.0, 15.0, 75.0)?;
    println!(
        "Ø50 @ 6 bar: {force:.1} kgf → lever torque {:.2}..{:.2} N·m over 15–75°",
        sweep.min_nm, sweep.max_nm
    );
    if let Some(bore) =
        pneumatic::recommend_bore(40.0, TorqueUnit::NewtonMeter, 250.0, 6, Stroke::Extend)?
    {
        println!("smallest bore for 40 N·m on a 250 mm lever @ 6 bar: Ø{bore:.0}");
    }

    let budget = pneumatic::air_budget(
        &[AirCylinder {
            bore_mm: 32.0,
            rod_mm: Some(12.0),
            stroke_mm: 100.0,
            cycles_per_min: 10.0,
        }],
        6.0,
        1.15,
        1.3,
    )?;
    println!(
        "air demand: {:.1} NL/min ({:.1} with losses, {:.1} with compressor margin)",
        budget.total_nl_min, budget.with_losses_nl_min, budget.with_margin_nl_min
    );

    // Conveyor: speed, throughput, drive
    let belt = conveyor::kinematics::from_rpm(200.0, 30.0)?;
    let throughput = conveyor::capacity_from_speed(200.0, 100.0, belt.speed_m_min)?;
    let power = conveyor::drive_power(
        120.0,
        0.25,
        Slope::Inclined { angle_deg: 10.0 },
        belt.speed_ms,
        SpeedUnit::MetersPerSecond,
        0.8,
    )?;
    println!(
        "belt {:.2} m/min → {:.1} products/min, drive {:.2} kW",
        belt.speed_m_min,
        throughput.products_per_min,
        power.power_kw()
    );

    Ok(())
}
