//! Central-body definitions.
//!
//! A [`CentralBody`] carries the two quantities the two-body problem needs:
//! the gravitational parameter GM that drives the dynamics, and the body
//! radius used to reject orbits that would intersect the surface.

use serde::Serialize;

use crate::constants::{Kilometer, EARTH_MU_KM3_S2, EARTH_RADIUS_KM};

/// A spherically symmetric central body.
///
/// Units
/// -----
/// * `radius`: kilometers (equatorial).
/// * `mu`: km³/s² (gravitational parameter GM).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CentralBody {
    pub name: &'static str,
    pub radius: Kilometer,
    pub mu: f64,
}

/// Earth, the default central body of the visualization.
pub const EARTH: CentralBody = CentralBody {
    name: "Earth",
    radius: EARTH_RADIUS_KM,
    mu: EARTH_MU_KM3_S2,
};

impl CentralBody {
    /// Altitude above the body surface for a given geocentric distance (km).
    pub fn altitude(&self, distance: Kilometer) -> Kilometer {
        distance - self.radius
    }
}
