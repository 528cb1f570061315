//! # Orbital element representations
//!
//! This module defines the two orbital element sets used by the crate and
//! the conversions between them:
//!
//! - [`keplerian_element`](crate::orbit_type::keplerian_element) — Classical Keplerian elements
//!   `(a, e, i, Ω, ω, ν)`, the user-facing parameterization the interactive
//!   controls map onto directly.
//! - [`equinoctial_element`](crate::orbit_type::equinoctial_element) — Equinoctial elements
//!   `(a, h, k, p, q, λ)`, a **non-singular formulation** used internally for
//!   propagation so that circular (`e → 0`) and equatorial (`i → 0`) orbits
//!   need no special-casing.
//!
//! ## Typical workflow
//!
//! ```rust, no_run
//! use orbitrace::bodies::EARTH;
//! use orbitrace::orbit_type::keplerian_element::KeplerianElements;
//!
//! // 700 km perigee, 45° inclination
//! let elements = KeplerianElements::from_degrees(7078.0, 0.1, 45.0, 0.0, 0.0, 0.0);
//! println!("period = {:.1} s", elements.period(&EARTH));
//! ```

/// Equinoctial orbital elements and the two-body propagation core.
pub mod equinoctial_element;

/// Classical Keplerian elements structure and utilities.
pub mod keplerian_element;
