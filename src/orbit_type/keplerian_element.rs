//! # Keplerian orbital elements
//!
//! This module defines the [`KeplerianElements`] struct, the **classical
//! orbital element representation** the interactive controls of the
//! visualization map onto directly.
//!
//! ## What are Keplerian elements?
//!
//! The six elements used here are:
//!
//! 1. **a** – Semi-major axis (km)
//! 2. **e** – Eccentricity (unitless)
//! 3. **i** – Inclination (radians)
//! 4. **Ω** – Longitude of ascending node (radians)
//! 5. **ω** – Argument of periapsis (radians)
//! 6. **ν** – True anomaly at epoch (radians)
//!
//! Together with a [`CentralBody`] these fully describe a two-body orbit.
//! Only bound elliptical orbits are supported (`0 ≤ e < 1`), and the orbit
//! must clear the body surface (`a > R`); [`KeplerianElements::validate`]
//! enforces both before any propagation runs.
//!
//! ## Units
//!
//! - Lengths: **km**
//! - Angles: **radians** internally; [`KeplerianElements::from_degrees`]
//!   accepts the degree-based values the external interface exchanges.
//!
//! ## Degeneracies
//!
//! Classical elements are singular for circular (`e → 0`) and equatorial
//! (`i → 0`) orbits. Propagation therefore runs in the regularized
//! [`EquinoctialElements`](crate::orbit_type::equinoctial_element::EquinoctialElements)
//! form, obtained through the [`From`] conversions below.
//!
//! ## See also
//!
//! - [`crate::kepler`] – anomaly conversions used by the forward mapping.
//! - Milani & Gronchi, *Theory of Orbit Determination* (2010).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    bodies::CentralBody,
    constants::{Degree, Kilometer, Radian, Seconds, DPI, RADEG},
    kepler::{mean_from_true, principal_angle},
    orbit_errors::OrbitError,
    orbit_type::equinoctial_element::EquinoctialElements,
};

/// Keplerian orbital elements (osculating, two-body).
///
/// Units
/// -----
/// * `semi_major_axis`: kilometers.
/// * `eccentricity`: unitless, `[0, 1)` for the supported elliptical case.
/// * `inclination`: radians.
/// * `ascending_node_longitude`: radians (Ω).
/// * `periapsis_argument`: radians (ω).
/// * `true_anomaly`: radians (ν, position along the orbit at epoch).
///
/// Notes
/// -----
/// This is the user-facing representation; propagation converts to
/// equinoctial form for numerical robustness near `e = 0` and `i = 0`.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub struct KeplerianElements {
    pub semi_major_axis: Kilometer,
    pub eccentricity: f64,
    pub inclination: Radian,
    pub ascending_node_longitude: Radian,
    pub periapsis_argument: Radian,
    pub true_anomaly: Radian,
}

impl KeplerianElements {
    /// Build elements from the degree-based values the external interface
    /// exchanges (sliders, CLI flags).
    ///
    /// Arguments
    /// ---------
    /// * `semi_major_axis` – Semi-major axis (km).
    /// * `eccentricity` – Eccentricity (unitless).
    /// * `inclination` – Inclination (degrees).
    /// * `ascending_node_longitude` – RAAN Ω (degrees).
    /// * `periapsis_argument` – Argument of perigee ω (degrees).
    /// * `true_anomaly` – True anomaly at epoch ν (degrees).
    ///
    /// Return
    /// ------
    /// * A new [`KeplerianElements`] with all angles converted to radians
    ///   and normalized to `[0, 2π)`.
    pub fn from_degrees(
        semi_major_axis: Kilometer,
        eccentricity: f64,
        inclination: Degree,
        ascending_node_longitude: Degree,
        periapsis_argument: Degree,
        true_anomaly: Degree,
    ) -> Self {
        Self {
            semi_major_axis,
            eccentricity,
            inclination: principal_angle(inclination * RADEG),
            ascending_node_longitude: principal_angle(ascending_node_longitude * RADEG),
            periapsis_argument: principal_angle(periapsis_argument * RADEG),
            true_anomaly: principal_angle(true_anomaly * RADEG),
        }
    }

    /// Check the elements against the supported elliptical domain.
    ///
    /// The orbit must not intersect the central body (`a > R`) and must be
    /// bound and non-degenerate (`0 ≤ e < 1`).
    pub fn validate(&self, body: &CentralBody) -> Result<(), OrbitError> {
        if !(self.semi_major_axis > body.radius) {
            return Err(OrbitError::InvalidSemiMajorAxis {
                semi_major_axis: self.semi_major_axis,
                body: body.name,
                radius: body.radius,
            });
        }
        if !(0.0..1.0).contains(&self.eccentricity) {
            return Err(OrbitError::InvalidEccentricity(self.eccentricity));
        }
        Ok(())
    }

    /// Orbital period from Kepler's third law: T = 2π·sqrt(a³/μ).
    ///
    /// Arguments
    /// ---------
    /// * `body` – Central body supplying the gravitational parameter μ.
    ///
    /// Return
    /// ------
    /// * Period in seconds.
    pub fn period(&self, body: &CentralBody) -> Seconds {
        DPI * (self.semi_major_axis.powi(3) / body.mu).sqrt()
    }

    /// Mean anomaly at epoch, derived from the true anomaly.
    pub fn mean_anomaly(&self) -> Radian {
        mean_from_true(self.true_anomaly, self.eccentricity)
    }

    /// Geocentric distance at perigee, `a·(1 − e)` (km).
    pub fn perigee_radius(&self) -> Kilometer {
        self.semi_major_axis * (1.0 - self.eccentricity)
    }

    /// Geocentric distance at apogee, `a·(1 + e)` (km).
    pub fn apogee_radius(&self) -> Kilometer {
        self.semi_major_axis * (1.0 + self.eccentricity)
    }
}

impl Default for KeplerianElements {
    /// The starting orbit of the viewer: 700 km perigee altitude,
    /// e = 0.1, i = 45°.
    fn default() -> Self {
        KeplerianElements::from_degrees(7078.0, 0.1, 45.0, 0.0, 0.0, 0.0)
    }
}

impl From<&KeplerianElements> for EquinoctialElements {
    /// Forward conversion to equinoctial elements (by reference).
    ///
    /// Arguments
    /// ---------
    /// * `k` – Reference to Keplerian elements `(a, e, i, Ω, ω, ν)`.
    ///
    /// Return
    /// ------
    /// * [`EquinoctialElements`] with components `(a, h, k, p, q, λ)`,
    ///   where λ = Ω + ω + M is built from the mean anomaly.
    fn from(k: &KeplerianElements) -> Self {
        let periapsis_longitude = k.ascending_node_longitude + k.periapsis_argument;
        let tan_half_incl = (k.inclination / 2.0).tan();

        EquinoctialElements {
            semi_major_axis: k.semi_major_axis,
            eccentricity_sin_lon: k.eccentricity * periapsis_longitude.sin(),
            eccentricity_cos_lon: k.eccentricity * periapsis_longitude.cos(),
            tan_half_incl_sin_node: tan_half_incl * k.ascending_node_longitude.sin(),
            tan_half_incl_cos_node: tan_half_incl * k.ascending_node_longitude.cos(),
            mean_longitude: principal_angle(periapsis_longitude + k.mean_anomaly()),
        }
    }
}

impl From<KeplerianElements> for EquinoctialElements {
    /// Forward conversion to equinoctial elements (by value).
    fn from(k: KeplerianElements) -> Self {
        (&k).into()
    }
}

impl fmt::Display for KeplerianElements {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rad_to_deg = 1.0 / RADEG;
        writeln!(f, "Keplerian Elements")?;
        writeln!(f, "-------------------------------------------")?;
        writeln!(
            f,
            "  a   (semi-major axis)       = {:.3} km",
            self.semi_major_axis
        )?;
        writeln!(
            f,
            "  e   (eccentricity)          = {:.6}",
            self.eccentricity
        )?;
        writeln!(
            f,
            "  i   (inclination)           = {:.6} rad ({:.3}°)",
            self.inclination,
            self.inclination * rad_to_deg
        )?;
        writeln!(
            f,
            "  Ω   (longitude of node)     = {:.6} rad ({:.3}°)",
            self.ascending_node_longitude,
            self.ascending_node_longitude * rad_to_deg
        )?;
        writeln!(
            f,
            "  ω   (argument of periapsis) = {:.6} rad ({:.3}°)",
            self.periapsis_argument,
            self.periapsis_argument * rad_to_deg
        )?;
        writeln!(
            f,
            "  ν   (true anomaly)          = {:.6} rad ({:.3}°)",
            self.true_anomaly,
            self.true_anomaly * rad_to_deg
        )
    }
}

#[cfg(test)]
pub(crate) mod test_keplerian_element {
    use std::f64::consts::PI;

    use approx::assert_relative_eq;

    use super::*;
    use crate::bodies::EARTH;

    #[test]
    fn test_from_degrees_normalizes_angles() {
        let kep = KeplerianElements::from_degrees(7078.0, 0.1, 45.0, 370.0, -90.0, 0.0);

        assert_relative_eq!(kep.inclination, PI / 4.0, epsilon = 1e-12);
        assert_relative_eq!(
            kep.ascending_node_longitude,
            10.0 * RADEG,
            epsilon = 1e-12
        );
        assert_relative_eq!(kep.periapsis_argument, 1.5 * PI, epsilon = 1e-12);
        assert_eq!(kep.true_anomaly, 0.0);
    }

    #[test]
    fn test_validate_rejects_out_of_domain_elements() {
        let mut kep = KeplerianElements::default();
        assert_eq!(kep.validate(&EARTH), Ok(()));

        kep.semi_major_axis = 6000.0;
        assert!(matches!(
            kep.validate(&EARTH),
            Err(OrbitError::InvalidSemiMajorAxis { .. })
        ));

        kep = KeplerianElements::default();
        kep.eccentricity = 1.2;
        assert_eq!(
            kep.validate(&EARTH),
            Err(OrbitError::InvalidEccentricity(1.2))
        );

        kep.eccentricity = -0.1;
        assert_eq!(
            kep.validate(&EARTH),
            Err(OrbitError::InvalidEccentricity(-0.1))
        );
    }

    #[test]
    fn test_period_of_default_orbit() {
        // 2π·sqrt(7078³ / 398600.4418)
        let period = KeplerianElements::default().period(&EARTH);
        assert_relative_eq!(period, 5926.2, epsilon = 0.5);
    }

    #[test]
    fn test_apsis_radii() {
        let kep = KeplerianElements::default();
        assert_relative_eq!(kep.perigee_radius(), 6370.2, epsilon = 1e-9);
        assert_relative_eq!(kep.apogee_radius(), 7785.8, epsilon = 1e-9);
    }

    #[test]
    fn test_equinoctial_conversion_at_perigee() {
        let kep = KeplerianElements::from_degrees(7078.0, 0.1, 45.0, 0.0, 0.0, 0.0);
        let equ: EquinoctialElements = (&kep).into();

        assert_eq!(equ.semi_major_axis, 7078.0);
        // ϖ = 0, so h = 0 and k = e; M = ν = 0 at perigee, so λ = 0.
        assert_relative_eq!(equ.eccentricity_sin_lon, 0.0, epsilon = 1e-12);
        assert_relative_eq!(equ.eccentricity_cos_lon, 0.1, epsilon = 1e-12);
        assert_relative_eq!(equ.tan_half_incl_sin_node, 0.0, epsilon = 1e-12);
        assert_relative_eq!(
            equ.tan_half_incl_cos_node,
            (PI / 8.0).tan(),
            epsilon = 1e-12
        );
        assert_relative_eq!(equ.mean_longitude, 0.0, epsilon = 1e-12);
    }
}
