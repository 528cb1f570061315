//! # Constants and type definitions for orbitrace
//!
//! This module centralizes the **physical constants**, **conversion factors**, and **common type
//! definitions** used throughout the `orbitrace` library.
//!
//! ## Overview
//!
//! - Geophysical constants of the default central body (Earth)
//! - Unit conversions (degrees ↔ radians)
//! - Core type aliases used across the crate
//!
//! All lengths are kilometers and all durations are seconds, matching the
//! interface consumed by the rendering side (body-centered positions in km,
//! orbital period in s).

// -------------------------------------------------------------------------------------------------
// Physical constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

/// Earth equatorial radius in kilometers (GRS1980/WGS84)
pub const EARTH_RADIUS_KM: f64 = 6_378.137;

/// Earth gravitational parameter GM in km³/s² (IAU 2009/EGM2008)
pub const EARTH_MU_KM3_S2: f64 = 398_600.4418;

/// Default number of samples per orbital period
pub const DEFAULT_SAMPLE_COUNT: usize = 100;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in radians
pub type Radian = f64;
/// Distance in kilometers
pub type Kilometer = f64;
/// Duration in seconds
pub type Seconds = f64;
