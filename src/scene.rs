//! # Scene assembly
//!
//! Builds the pure-data payload an external renderer animates: the static
//! orbit path, the central-body marker at the origin, and one animation
//! frame per trajectory sample that pins the satellite marker to that
//! sample's position. Marker sizes travel in a [`DisplayState`] that is
//! independent of the orbital elements, so a size change never forces a
//! resampling of the trajectory.

use nalgebra::Vector3;
use serde::Serialize;

use crate::{
    bodies::CentralBody,
    constants::Seconds,
    trajectory::Trajectory,
};

/// Marker sizing chosen by the display controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DisplayState {
    pub body_marker_size: u32,
    pub satellite_marker_size: u32,
}

impl Default for DisplayState {
    fn default() -> Self {
        DisplayState {
            body_marker_size: 15,
            satellite_marker_size: 6,
        }
    }
}

/// One animation frame: the path and the central body stay fixed, only the
/// satellite marker moves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnimationFrame {
    pub index: usize,
    pub satellite_position: Vector3<f64>,
}

/// Everything the renderer needs to draw and animate one orbit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrbitScene {
    /// Orbital period in seconds, for pacing the animation.
    pub period: Seconds,
    /// Central body sitting at the origin of the frame.
    pub body: CentralBody,
    /// The closed orbit path (km), first and last point coincide.
    pub path: Vec<Vector3<f64>>,
    /// Satellite position in the first frame.
    pub initial_satellite_position: Vector3<f64>,
    /// One frame per trajectory sample.
    pub frames: Vec<AnimationFrame>,
    pub display: DisplayState,
}

impl OrbitScene {
    /// Assemble a scene from a sampled trajectory.
    ///
    /// Arguments
    /// ---------
    /// * `trajectory` – Sampled orbit, at least 2 samples (the sampler
    ///   guarantees this).
    /// * `body` – Central body to render at the origin.
    /// * `display` – Marker sizes for the two bodies.
    pub fn build(trajectory: &Trajectory, body: &CentralBody, display: DisplayState) -> Self {
        let path: Vec<Vector3<f64>> = trajectory.positions().copied().collect();

        let frames = trajectory
            .samples()
            .iter()
            .enumerate()
            .map(|(index, sample)| AnimationFrame {
                index,
                satellite_position: sample.position,
            })
            .collect();

        OrbitScene {
            period: trajectory.period(),
            body: *body,
            initial_satellite_position: path[0],
            path,
            frames,
            display,
        }
    }
}

#[cfg(test)]
mod scene_test {
    use super::*;
    use crate::{
        bodies::EARTH,
        orbit_type::keplerian_element::KeplerianElements,
        trajectory::sample_orbit,
    };

    fn sampled(count: usize) -> Trajectory {
        sample_orbit(&KeplerianElements::default(), &EARTH, count).unwrap()
    }

    #[test]
    fn test_one_frame_per_sample_pinned_to_it() {
        let trajectory = sampled(25);
        let scene = OrbitScene::build(&trajectory, &EARTH, DisplayState::default());

        assert_eq!(scene.frames.len(), trajectory.len());
        assert_eq!(scene.path.len(), trajectory.len());
        for (frame, sample) in scene.frames.iter().zip(trajectory.samples()) {
            assert_eq!(frame.satellite_position, sample.position);
        }
        assert_eq!(scene.initial_satellite_position, scene.path[0]);
        assert_eq!(scene.period, trajectory.period());
    }

    #[test]
    fn test_path_is_closed() {
        let scene = OrbitScene::build(&sampled(50), &EARTH, DisplayState::default());

        let first = scene.path.first().unwrap();
        let last = scene.path.last().unwrap();
        assert!((first - last).norm() < 1e-3);
    }

    #[test]
    fn test_display_state_passes_through() {
        let display = DisplayState {
            body_marker_size: 30,
            satellite_marker_size: 2,
        };
        let scene = OrbitScene::build(&sampled(10), &EARTH, display);
        assert_eq!(scene.display, display);
    }

    #[test]
    fn test_scene_serializes_for_the_renderer() {
        let scene = OrbitScene::build(&sampled(4), &EARTH, DisplayState::default());
        let value = serde_json::to_value(&scene).unwrap();

        assert_eq!(value["frames"].as_array().unwrap().len(), 4);
        assert_eq!(value["path"][0].as_array().unwrap().len(), 3);
        assert_eq!(value["body"]["name"], "Earth");
        assert_eq!(value["display"]["satellite_marker_size"], 6);
    }
}
