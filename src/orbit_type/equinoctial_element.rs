use core::f64;
use std::f64::consts::PI;

use nalgebra::Vector3;
use roots::{find_root_newton_raphson, SimpleConvergency};

use crate::{
    constants::{Kilometer, Seconds, DPI},
    kepler::principal_angle,
    orbit_errors::OrbitError,
};

/// Equinoctial orbital elements.
/// Units:
/// - a: km
/// - h, k: dimensionless (related to eccentricity)
/// - p, q: dimensionless (related to inclination)
/// - lambda: radians (mean longitude at epoch)
#[derive(Debug, PartialEq)]
pub struct EquinoctialElements {
    pub semi_major_axis: Kilometer,  // Semi-major axis (km)
    pub eccentricity_sin_lon: f64,   // h = e * sin(Ω + ω)
    pub eccentricity_cos_lon: f64,   // k = e * cos(Ω + ω)
    pub tan_half_incl_sin_node: f64, // p = tan(i/2) * sin(Ω)
    pub tan_half_incl_cos_node: f64, // q = tan(i/2) * cos(Ω)
    pub mean_longitude: f64,         // λ = Ω + ω + M
}

impl EquinoctialElements {
    fn solve_kepler_equation(
        &self,
        mean_longitude_t1: f64,
        longitude_of_periastre: f64,
    ) -> Result<f64, OrbitError> {
        // R(F) = F - k·sin(F) + h·cos(F) - lambda
        let f = |fval: f64| -> f64 {
            fval - self.eccentricity_cos_lon * fval.sin() + self.eccentricity_sin_lon * fval.cos()
                - mean_longitude_t1
        };

        // R'(F)
        let df = |fval: f64| -> f64 {
            1.0 - self.eccentricity_cos_lon * fval.cos() - self.eccentricity_sin_lon * fval.sin()
        };

        // Starting point past the periapsis longitude
        let x0 = PI + longitude_of_periastre;

        let mut tol = SimpleConvergency {
            eps: f64::EPSILON * 1e2, // ~2e-14
            max_iter: 25,
        };

        Ok(find_root_newton_raphson(x0, &f, &df, &mut tol)?)
    }

    fn compute_cartesian_position_and_velocity(
        &self,
        mean_motion: f64,
        eccentric_anomaly: f64,
        eccentricity_pow2: f64,
    ) -> (Vector3<f64>, Vector3<f64>) {
        let beta = 1. / (1. + (1. - eccentricity_pow2).sqrt());

        let beta_ecc_term = beta * self.eccentricity_sin_lon * self.eccentricity_cos_lon;

        let sin_ecc_anom = eccentric_anomaly.sin();
        let cos_ecc_anom = eccentric_anomaly.cos();

        let xe = self.semi_major_axis
            * ((1. - beta * self.eccentricity_sin_lon.powi(2)) * cos_ecc_anom
                + beta_ecc_term * sin_ecc_anom
                - self.eccentricity_cos_lon);

        let ye = self.semi_major_axis
            * ((1. - beta * self.eccentricity_cos_lon.powi(2)) * sin_ecc_anom
                + beta_ecc_term * cos_ecc_anom
                - self.eccentricity_sin_lon);

        let u = 1. + self.tan_half_incl_sin_node.powi(2) + self.tan_half_incl_cos_node.powi(2);
        let inv_u = 1.0 / u;

        let common_component =
            2. * self.tan_half_incl_sin_node * self.tan_half_incl_cos_node * inv_u;

        let f_vector = Vector3::new(
            (1. - self.tan_half_incl_sin_node.powi(2) + self.tan_half_incl_cos_node.powi(2))
                * inv_u,
            common_component,
            -2. * self.tan_half_incl_sin_node * inv_u,
        );

        let g_vector = Vector3::new(
            common_component,
            (1. + self.tan_half_incl_sin_node.powi(2) - self.tan_half_incl_cos_node.powi(2))
                * inv_u,
            2. * self.tan_half_incl_cos_node * inv_u,
        );

        let cartesian_position = xe * f_vector + ye * g_vector;

        let v_const = mean_motion * self.semi_major_axis.powi(2) / (xe.powi(2) + ye.powi(2)).sqrt();

        let v_xe = v_const
            * (beta_ecc_term * cos_ecc_anom
                - (1. - beta * self.eccentricity_sin_lon.powi(2)) * sin_ecc_anom);
        let v_ye = v_const
            * ((1. - beta * self.eccentricity_cos_lon.powi(2)) * cos_ecc_anom
                - beta_ecc_term * sin_ecc_anom);
        let cartesian_velocity = v_xe * f_vector + v_ye * g_vector;

        (cartesian_position, cartesian_velocity)
    }

    /// Two-body position and velocity `dt` seconds past the epoch.
    ///
    /// Arguments
    /// ---------
    /// * `mu` – Gravitational parameter of the central body (km³/s²).
    /// * `dt` – Time offset from the epoch of the elements (s).
    ///
    /// Return
    /// ------
    /// * Body-centered inertial position (km) and velocity (km/s).
    pub(crate) fn solve_two_body_problem(
        &self,
        mu: f64,
        dt: Seconds,
    ) -> Result<(Vector3<f64>, Vector3<f64>), OrbitError> {
        let mean_motion = (mu / self.semi_major_axis.powi(3)).sqrt();
        let mut mean_longitude_t1 = self.mean_longitude + mean_motion * dt;

        let eccentricity_pow2 =
            self.eccentricity_sin_lon.powi(2) + self.eccentricity_cos_lon.powi(2);
        let epsilon = f64::EPSILON * 1e2;

        let mut longitude_of_periastre = 0.0;
        if eccentricity_pow2 > epsilon {
            longitude_of_periastre =
                principal_angle(self.eccentricity_sin_lon.atan2(self.eccentricity_cos_lon));
        }

        mean_longitude_t1 = principal_angle(mean_longitude_t1);
        if mean_longitude_t1 < longitude_of_periastre {
            mean_longitude_t1 += DPI;
        }

        let eccentric_anomaly =
            self.solve_kepler_equation(mean_longitude_t1, longitude_of_periastre)?;

        Ok(self.compute_cartesian_position_and_velocity(
            mean_motion,
            eccentric_anomaly,
            eccentricity_pow2,
        ))
    }
}

#[cfg(test)]
mod test_equinoctial_element {
    use approx::assert_relative_eq;

    use super::*;
    use crate::{
        bodies::EARTH,
        orbit_type::keplerian_element::KeplerianElements,
    };

    fn equ(a: f64, e: f64, i_deg: f64, raan_deg: f64, argp_deg: f64, nu_deg: f64) -> EquinoctialElements {
        (&KeplerianElements::from_degrees(a, e, i_deg, raan_deg, argp_deg, nu_deg)).into()
    }

    #[test]
    fn test_circular_orbit_stays_on_its_sphere() {
        let elements = equ(7000.0, 0.0, 0.0, 0.0, 0.0, 0.0);

        let (pos0, vel0) = elements.solve_two_body_problem(EARTH.mu, 0.0).unwrap();
        assert_relative_eq!(pos0.x, 7000.0, epsilon = 1e-6);
        assert_relative_eq!(pos0.y, 0.0, epsilon = 1e-6);
        assert_relative_eq!(pos0.z, 0.0, epsilon = 1e-6);

        // Circular speed sqrt(μ/a), along +y at the epoch.
        let v_circ = (EARTH.mu / 7000.0_f64).sqrt();
        assert_relative_eq!(vel0.norm(), v_circ, epsilon = 1e-9);
        assert_relative_eq!(vel0.y, v_circ, epsilon = 1e-9);

        for dt in [500.0, 1234.5, 4000.0] {
            let (pos, _) = elements.solve_two_body_problem(EARTH.mu, dt).unwrap();
            assert_relative_eq!(pos.norm(), 7000.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_elliptical_orbit_apsides() {
        let elements = equ(7078.0, 0.1, 45.0, 0.0, 0.0, 0.0);
        let period = KeplerianElements::from_degrees(7078.0, 0.1, 45.0, 0.0, 0.0, 0.0).period(&EARTH);

        // Epoch is at perigee (ν = 0), on the +x axis for Ω = ω = 0.
        let (perigee, _) = elements.solve_two_body_problem(EARTH.mu, 0.0).unwrap();
        assert_relative_eq!(perigee.x, 7078.0 * 0.9, epsilon = 1e-6);
        assert_relative_eq!(perigee.y, 0.0, epsilon = 1e-6);
        assert_relative_eq!(perigee.z, 0.0, epsilon = 1e-6);

        // Half a period later the satellite sits at apogee.
        let (apogee, _) = elements
            .solve_two_body_problem(EARTH.mu, period / 2.0)
            .unwrap();
        assert_relative_eq!(apogee.norm(), 7078.0 * 1.1, epsilon = 1e-3);

        // One full period closes the loop.
        let (closed, _) = elements.solve_two_body_problem(EARTH.mu, period).unwrap();
        assert_relative_eq!(closed.x, perigee.x, epsilon = 1e-3);
        assert_relative_eq!(closed.y, perigee.y, epsilon = 1e-3);
        assert_relative_eq!(closed.z, perigee.z, epsilon = 1e-3);
    }

    #[test]
    fn test_angular_momentum_is_conserved() {
        let elements = equ(9000.0, 0.3, 63.4, 40.0, 270.0, 10.0);
        let h_expected = (EARTH.mu * 9000.0 * (1.0 - 0.3_f64 * 0.3)).sqrt();

        for dt in [0.0, 600.0, 2500.0, 7000.0] {
            let (pos, vel) = elements.solve_two_body_problem(EARTH.mu, dt).unwrap();
            assert_relative_eq!(pos.cross(&vel).norm(), h_expected, max_relative = 1e-9);
        }
    }

    #[test]
    fn test_inclination_bounds_out_of_plane_motion() {
        let elements = equ(7078.0, 0.1, 45.0, 0.0, 0.0, 0.0);
        let sin_i = (45.0_f64).to_radians().sin();

        for dt in [0.0, 900.0, 1800.0, 2700.0, 3600.0, 4500.0] {
            let (pos, _) = elements.solve_two_body_problem(EARTH.mu, dt).unwrap();
            // |z| ≤ r·sin(i) for any point of an inclined orbit.
            assert!(pos.z.abs() <= pos.norm() * sin_i + 1e-6);
        }
    }
}
