use crate::constants::DPI;

/// Returns the principal value of an angle in radians, in [0, 2π).
pub fn principal_angle(a: f64) -> f64 {
    a.rem_euclid(DPI)
}

/// Eccentric anomaly E from true anomaly ν for an elliptical orbit.
///
/// Uses the half-angle form, well behaved for every ν including ±π:
/// tan(E/2) = sqrt((1 − e) / (1 + e)) · tan(ν/2).
pub fn eccentric_from_true(true_anomaly: f64, eccentricity: f64) -> f64 {
    let half = true_anomaly / 2.0;
    2.0 * ((1.0 - eccentricity).sqrt() * half.sin()).atan2((1.0 + eccentricity).sqrt() * half.cos())
}

/// True anomaly ν from eccentric anomaly E (inverse of [`eccentric_from_true`]).
pub fn true_from_eccentric(eccentric_anomaly: f64, eccentricity: f64) -> f64 {
    let half = eccentric_anomaly / 2.0;
    2.0 * ((1.0 + eccentricity).sqrt() * half.sin()).atan2((1.0 - eccentricity).sqrt() * half.cos())
}

/// Mean anomaly M from eccentric anomaly E (Kepler's equation, forward direction).
pub fn mean_from_eccentric(eccentric_anomaly: f64, eccentricity: f64) -> f64 {
    eccentric_anomaly - eccentricity * eccentric_anomaly.sin()
}

/// Mean anomaly M from true anomaly ν, normalized to [0, 2π).
pub fn mean_from_true(true_anomaly: f64, eccentricity: f64) -> f64 {
    principal_angle(mean_from_eccentric(
        eccentric_from_true(true_anomaly, eccentricity),
        eccentricity,
    ))
}
