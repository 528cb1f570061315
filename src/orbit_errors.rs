use thiserror::Error;

/// Errors surfaced at the sampling boundary.
///
/// The first three variants cover invalid orbital parameters or sample
/// counts; they are raised before any propagation work so a caller either
/// gets a complete trajectory or nothing. The last variant wraps the
/// Newton-Raphson solver used for the Kepler equation.
#[derive(Error, Debug, PartialEq)]
pub enum OrbitError {
    #[error("semi-major axis {semi_major_axis} km does not clear the {body} surface ({radius} km)")]
    InvalidSemiMajorAxis {
        semi_major_axis: f64,
        body: &'static str,
        radius: f64,
    },

    #[error("eccentricity {0} is outside the supported elliptical range [0, 1)")]
    InvalidEccentricity(f64),

    #[error("sample count {0} is too small (at least 2 samples are required to close the loop)")]
    InvalidSampleCount(usize),

    #[error("Kepler equation solver did not converge: {0}")]
    KeplerEquationNotConverged(#[from] roots::SearchError),
}
