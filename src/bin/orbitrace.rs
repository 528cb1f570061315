//! Sample an elliptical orbit and emit the animation scene as JSON.
//!
//! Stands in for the interactive front end: every flag maps onto one of its
//! controls, and the JSON on stdout is the payload a renderer animates.

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use orbitrace::{
    bodies::EARTH,
    constants::DEFAULT_SAMPLE_COUNT,
    orbit_type::keplerian_element::KeplerianElements,
    scene::{DisplayState, OrbitScene},
    trajectory::sample_orbit,
};

#[derive(Parser, Debug)]
#[command(
    name = "orbitrace",
    version,
    about = "Sample one period of a satellite orbit around Earth and print the animation scene as JSON"
)]
struct Args {
    /// Semi-major axis in km
    #[arg(long, default_value_t = 7078.0)]
    semi_major_axis: f64,

    /// Eccentricity, 0 (circular) to just below 1
    #[arg(long, default_value_t = 0.1)]
    eccentricity: f64,

    /// Inclination in degrees
    #[arg(long, default_value_t = 45.0)]
    inclination: f64,

    /// Right ascension of the ascending node in degrees
    #[arg(long, default_value_t = 0.0)]
    raan: f64,

    /// Argument of perigee in degrees
    #[arg(long, default_value_t = 0.0)]
    argument_of_perigee: f64,

    /// True anomaly at epoch in degrees
    #[arg(long, default_value_t = 0.0)]
    true_anomaly: f64,

    /// Number of samples (and animation frames) over one period
    #[arg(long, default_value_t = DEFAULT_SAMPLE_COUNT)]
    samples: usize,

    /// Marker size of the central body
    #[arg(long, default_value_t = 15)]
    body_size: u32,

    /// Marker size of the satellite
    #[arg(long, default_value_t = 6)]
    satellite_size: u32,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let elements = KeplerianElements::from_degrees(
        args.semi_major_axis,
        args.eccentricity,
        args.inclination,
        args.raan,
        args.argument_of_perigee,
        args.true_anomaly,
    );

    let trajectory = sample_orbit(&elements, &EARTH, args.samples)
        .context("cannot sample the requested orbit")?;
    info!(
        "sampled {} points over one period of {:.1} s",
        trajectory.len(),
        trajectory.period()
    );

    let display = DisplayState {
        body_marker_size: args.body_size,
        satellite_marker_size: args.satellite_size,
    };
    let scene = OrbitScene::build(&trajectory, &EARTH, display);

    println!("{}", serde_json::to_string_pretty(&scene)?);
    Ok(())
}
