use glam::Vec3;

use crate::camera::Camera;
use crate::error::CameraError;
use crate::traits::CameraRig;

// Sideways sway of the look-at target, in radians per second and world units
const WOBBLE_FREQUENCY: f32 = 0.6;
const WOBBLE_AMPLITUDE: f32 = 2.0;

/// Camera drifting along a fixed direction at constant speed
///
/// Pose is a pure function of the timestamp passed to [`DirectionalCamera::update`].
#[derive(Debug, Clone)]
pub struct DirectionalCamera {
    camera: Camera,
    direction: Vec3,
    speed: f32,
    start_position: Vec3,
    start_target: Vec3,
}

impl DirectionalCamera {
    pub fn new(
        position: Vec3,
        target: Vec3,
        direction: Vec3,
        speed: f32,
        field_of_view: f32,
        aspect_ratio: f32,
    ) -> Result<Self, CameraError> {
        let normalized = direction
            .try_normalize()
            .ok_or(CameraError::DegenerateDirection { direction })?;

        log::debug!(
            "directional camera: position {} target {} direction {} speed {}",
            position,
            target,
            normalized,
            speed
        );

        Ok(Self {
            camera: Camera::new(position, target, field_of_view, aspect_ratio),
            direction: normalized,
            speed,
            start_position: position,
            start_target: target,
        })
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Unit-length movement direction
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    pub fn start_position(&self) -> Vec3 {
        self.start_position
    }

    pub fn start_target(&self) -> Vec3 {
        self.start_target
    }

    pub fn set_field_of_view(&mut self, field_of_view: f32) {
        self.camera.set_field_of_view(field_of_view);
    }

    pub fn set_aspect_ratio(&mut self, aspect_ratio: f32) {
        self.camera.set_aspect_ratio(aspect_ratio);
    }

    /// Move to where the camera is `timestamp_ms` milliseconds after the start
    pub fn update(&mut self, timestamp_ms: f64) {
        let t = (timestamp_ms / 1000.0) as f32;
        let travel = self.direction * self.speed * t;

        let position = self.start_position + travel;
        let mut target = self.start_target + travel;
        target.x += (t * WOBBLE_FREQUENCY).sin() * WOBBLE_AMPLITUDE;

        self.camera.set_pose(position, target);
    }
}

impl CameraRig for DirectionalCamera {
    fn update(&mut self, timestamp_ms: f64) {
        DirectionalCamera::update(self, timestamp_ms);
    }

    fn camera(&self) -> &Camera {
        &self.camera
    }

    fn set_aspect_ratio(&mut self, aspect_ratio: f32) {
        self.camera.set_aspect_ratio(aspect_ratio);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_4;

    fn drifting(direction: Vec3, speed: f32) -> DirectionalCamera {
        DirectionalCamera::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -5.0), direction, speed, FRAC_PI_4, 1.5)
            .unwrap()
    }

    #[test]
    fn test_direction_is_normalized() {
        let cam = drifting(Vec3::new(3.0, 0.0, 4.0), 1.0);
        assert!((cam.direction().length() - 1.0).abs() < 1e-6);
        assert!(cam.direction().abs_diff_eq(Vec3::new(0.6, 0.0, 0.8), 1e-6));
    }

    #[test]
    fn test_zero_direction_rejected() {
        let result = DirectionalCamera::new(Vec3::ZERO, Vec3::NEG_Z, Vec3::ZERO, 1.0, FRAC_PI_4, 1.0);
        assert_eq!(
            result.unwrap_err(),
            CameraError::DegenerateDirection { direction: Vec3::ZERO }
        );
    }

    #[test]
    fn test_nan_direction_rejected() {
        let result = DirectionalCamera::new(
            Vec3::ZERO,
            Vec3::NEG_Z,
            Vec3::new(f32::NAN, 0.0, 0.0),
            1.0,
            FRAC_PI_4,
            1.0,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_linear_travel() {
        let mut cam = drifting(Vec3::X, 2.0);
        cam.update(1000.0);

        assert!(cam.camera().position().abs_diff_eq(Vec3::new(2.0, 0.0, 0.0), 1e-6));
    }

    #[test]
    fn test_target_wobbles_on_x_only() {
        let mut cam = drifting(Vec3::X, 2.0);
        cam.update(1000.0);

        let wobble = 0.6f32.sin() * 2.0;
        let expected = Vec3::new(2.0 + wobble, 0.0, -5.0);
        assert!(
            cam.camera().target().abs_diff_eq(expected, 1e-5),
            "target {:?} != {:?}",
            cam.camera().target(),
            expected
        );
    }

    #[test]
    fn test_update_is_idempotent() {
        let mut cam = drifting(Vec3::new(1.0, 0.5, -1.0), 3.0);
        cam.update(5000.0);
        let position = cam.camera().position();
        let target = cam.camera().target();
        let matrix = cam.camera().inverse_view_projection_matrix();

        cam.update(5000.0);
        assert_eq!(cam.camera().position(), position);
        assert_eq!(cam.camera().target(), target);
        assert_eq!(cam.camera().inverse_view_projection_matrix(), matrix);
    }

    #[test]
    fn test_updates_do_not_accumulate() {
        let mut stepped = drifting(Vec3::NEG_Z, 1.5);
        for ms in (0..=4000).step_by(16) {
            stepped.update(ms as f64);
        }
        stepped.update(4000.0);

        let mut direct = drifting(Vec3::NEG_Z, 1.5);
        direct.update(4000.0);

        assert_eq!(stepped.camera().position(), direct.camera().position());
        assert_eq!(stepped.camera().target(), direct.camera().target());
    }

    #[test]
    fn test_zero_timestamp_returns_to_start() {
        let mut cam = drifting(Vec3::Y, 4.0);
        cam.update(2500.0);
        cam.update(0.0);

        assert_eq!(cam.camera().position(), cam.start_position());
        assert_eq!(cam.camera().target(), cam.start_target());
    }

    #[test]
    fn test_rig_has_no_move_handler() {
        let mut cam = drifting(Vec3::X, 1.0);
        assert!(cam.as_move_handler().is_none());
    }
}
