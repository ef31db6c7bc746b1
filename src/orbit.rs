use glam::Vec3;
use std::f32::consts::FRAC_PI_2;

use crate::camera::Camera;
use crate::traits::{CameraRig, InputKind, MoveDelta, MoveHandler};
use crate::types::Viewport;

/// Elevation stays this far away from the poles, where the look-at basis degenerates
pub const POLE_MARGIN: f32 = 0.01;
pub const MAX_ELEVATION: f32 = FRAC_PI_2 - POLE_MARGIN;
pub const MIN_RADIUS: f32 = 1.0;
/// Default elevation floor: the camera stays at or above the target's horizon
pub const DEFAULT_MIN_ELEVATION: f32 = 0.0;

/// Radians (or radius units for the wheel) per unit of input
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitSensitivity {
    pub mouse: f32,
    pub touch: f32,
    pub wheel: f32,
}

impl OrbitSensitivity {
    fn rotation(&self, kind: InputKind) -> f32 {
        match kind {
            InputKind::Mouse => self.mouse,
            InputKind::Touch => self.touch,
            InputKind::Wheel => 0.0,
        }
    }
}

impl Default for OrbitSensitivity {
    fn default() -> Self {
        Self {
            mouse: 0.002,
            touch: 0.01,
            wheel: 0.01,
        }
    }
}

/// Camera orbiting a fixed target on a sphere
///
/// `azimuth` rotates around the Y axis, `elevation` is measured from the horizontal plane.
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    camera: Camera,
    azimuth: f32,
    elevation: f32,
    radius: f32,
    min_elevation: Option<f32>,
    sensitivity: OrbitSensitivity,
}

impl OrbitCamera {
    pub fn new(
        target: Vec3,
        field_of_view: f32,
        viewport: Viewport,
        elevation: f32,
        azimuth: f32,
        radius: f32,
    ) -> Self {
        let camera = Camera::new(Vec3::ZERO, target, field_of_view, viewport.aspect_ratio());
        let mut orbit = Self {
            camera,
            azimuth,
            elevation,
            radius,
            min_elevation: Some(DEFAULT_MIN_ELEVATION),
            sensitivity: OrbitSensitivity::default(),
        };
        orbit.update();
        orbit
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn azimuth(&self) -> f32 {
        self.azimuth
    }

    pub fn elevation(&self) -> f32 {
        self.elevation
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn min_elevation(&self) -> Option<f32> {
        self.min_elevation
    }

    /// Floor for the elevation, applied on the next input; `None` allows orbiting below the target
    pub fn set_min_elevation(&mut self, min_elevation: Option<f32>) {
        self.min_elevation = min_elevation;
    }

    pub fn sensitivity(&self) -> OrbitSensitivity {
        self.sensitivity
    }

    pub fn set_sensitivity(&mut self, sensitivity: OrbitSensitivity) {
        self.sensitivity = sensitivity;
    }

    pub fn set_field_of_view(&mut self, field_of_view: f32) {
        self.camera.set_field_of_view(field_of_view);
    }

    pub fn set_aspect_ratio(&mut self, aspect_ratio: f32) {
        self.camera.set_aspect_ratio(aspect_ratio);
    }

    /// Recompute the camera position from the current angles and radius
    pub fn update(&mut self) {
        let (sin_az, cos_az) = self.azimuth.sin_cos();
        let (sin_el, cos_el) = self.elevation.sin_cos();
        let offset = Vec3::new(sin_az * cos_el, sin_el, cos_az * cos_el) * self.radius;
        let target = self.camera.target();
        self.camera.set_position(target + offset);
    }
}

impl MoveHandler for OrbitCamera {
    fn handle_move(&mut self, delta: MoveDelta) {
        let rotation = self.sensitivity.rotation(delta.kind);
        self.azimuth += delta.dx * rotation;
        self.elevation += delta.dy * rotation;

        self.elevation = self.elevation.clamp(-MAX_ELEVATION, MAX_ELEVATION);
        if let Some(floor) = self.min_elevation {
            self.elevation = self.elevation.max(floor);
        }

        self.radius = (self.radius + delta.wheel * self.sensitivity.wheel).max(MIN_RADIUS);

        self.update();
    }
}

impl CameraRig for OrbitCamera {
    fn update(&mut self, _timestamp_ms: f64) {
        OrbitCamera::update(self);
    }

    fn camera(&self) -> &Camera {
        &self.camera
    }

    fn as_move_handler(&mut self) -> Option<&mut dyn MoveHandler> {
        Some(self)
    }

    fn set_aspect_ratio(&mut self, aspect_ratio: f32) {
        self.camera.set_aspect_ratio(aspect_ratio);
    }
}
