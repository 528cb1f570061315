//! # Trajectory sampling
//!
//! This module turns classical orbital elements into the time-ordered
//! sequence of body-centered positions the rendering side consumes: the
//! orbital period is computed from Kepler's third law, the period is cut
//! into evenly spaced time offsets (both endpoints included, so the last
//! sample coincides with the first and closes the loop), and every offset
//! is propagated through the two-body solver.
//!
//! Sampling is a pure function of the elements, the central body, and the
//! sample count. Nothing is cached between calls; a parameter change on the
//! interactive side simply recomputes the whole trajectory.

use itertools::Itertools;
use nalgebra::Vector3;
use serde::Serialize;

use crate::{
    bodies::CentralBody,
    constants::{Seconds, DEFAULT_SAMPLE_COUNT},
    orbit_errors::OrbitError,
    orbit_type::{
        equinoctial_element::EquinoctialElements, keplerian_element::KeplerianElements,
    },
};

/// One trajectory point: a time offset from the epoch and the body-centered
/// inertial position at that offset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrajectorySample {
    /// Seconds past the epoch of the elements, in `[0, period]`.
    pub time_offset: Seconds,
    /// Position in km.
    pub position: Vector3<f64>,
}

/// A sampled orbit: one full period of positions, strictly increasing in
/// time, first sample at `t = 0`, last at `t = period`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trajectory {
    period: Seconds,
    samples: Vec<TrajectorySample>,
}

impl Trajectory {
    /// Orbital period in seconds.
    pub fn period(&self) -> Seconds {
        self.period
    }

    /// The samples, in time order.
    pub fn samples(&self) -> &[TrajectorySample] {
        &self.samples
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The sampled positions, in time order.
    pub fn positions(&self) -> impl Iterator<Item = &Vector3<f64>> {
        self.samples.iter().map(|sample| &sample.position)
    }
}

/// Sample one orbital period at `sample_count` evenly spaced time offsets.
///
/// Arguments
/// ---------
/// * `elements` – Classical orbital elements of the satellite.
/// * `body` – Central body (gravitational parameter and radius).
/// * `sample_count` – Number of samples over `[0, period]`, at least 2.
///
/// Return
/// ------
/// * A [`Trajectory`] with exactly `sample_count` samples, or an
///   [`OrbitError`] if the elements or the count are out of domain. No
///   partial trajectory is ever returned.
///
/// See also
/// --------
/// * [`sample_orbit_default`] – same, with the default sample count.
pub fn sample_orbit(
    elements: &KeplerianElements,
    body: &CentralBody,
    sample_count: usize,
) -> Result<Trajectory, OrbitError> {
    elements.validate(body)?;
    if sample_count < 2 {
        return Err(OrbitError::InvalidSampleCount(sample_count));
    }

    let period = elements.period(body);
    let equinoctial: EquinoctialElements = elements.into();
    let step = period / (sample_count - 1) as f64;

    let mut samples = Vec::with_capacity(sample_count);
    for index in 0..sample_count {
        // Pin the endpoint so the loop closes exactly on the first sample.
        let time_offset = if index == sample_count - 1 {
            period
        } else {
            index as f64 * step
        };
        let (position, _) = equinoctial.solve_two_body_problem(body.mu, time_offset)?;
        samples.push(TrajectorySample {
            time_offset,
            position,
        });
    }

    debug_assert!(samples
        .iter()
        .tuple_windows()
        .all(|(a, b)| a.time_offset < b.time_offset));

    Ok(Trajectory { period, samples })
}

/// [`sample_orbit`] with the default sample count of 100, one animation
/// frame per sample.
pub fn sample_orbit_default(
    elements: &KeplerianElements,
    body: &CentralBody,
) -> Result<Trajectory, OrbitError> {
    sample_orbit(elements, body, DEFAULT_SAMPLE_COUNT)
}
