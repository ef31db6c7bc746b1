use glam::{Mat4, Vec2, Vec3};

use crate::types::{CameraUniform, Viewport};

pub const DEFAULT_NEAR_PLANE: f32 = 0.1;
pub const DEFAULT_FAR_PLANE: f32 = 100.0;

/// Perspective camera with cached view/projection matrices
///
/// Pose and projection parameters can only change through the setters, and every
/// setter leaves all four derived matrices consistent with the new inputs.
#[derive(Debug, Clone)]
pub struct Camera {
    position: Vec3,
    target: Vec3,
    up: Vec3,
    field_of_view: f32,
    aspect_ratio: f32,
    near_plane: f32,
    far_plane: f32,
    view: Mat4,
    projection: Mat4,
    view_projection: Mat4,
    inverse_view_projection: Mat4,
}

impl Camera {
    /// Create a camera at `position` looking at `target`
    ///
    /// `field_of_view` is the vertical FOV in radians, `aspect_ratio` is width / height.
    pub fn new(position: Vec3, target: Vec3, field_of_view: f32, aspect_ratio: f32) -> Self {
        let mut camera = Self {
            position,
            target,
            up: Vec3::Y,
            field_of_view,
            aspect_ratio,
            near_plane: DEFAULT_NEAR_PLANE,
            far_plane: DEFAULT_FAR_PLANE,
            view: Mat4::IDENTITY,
            projection: Mat4::IDENTITY,
            view_projection: Mat4::IDENTITY,
            inverse_view_projection: Mat4::IDENTITY,
        };
        camera.update_projection();
        camera.update_view();
        camera
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn field_of_view(&self) -> f32 {
        self.field_of_view
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    pub fn near_plane(&self) -> f32 {
        self.near_plane
    }

    pub fn far_plane(&self) -> f32 {
        self.far_plane
    }

    pub fn view_matrix(&self) -> Mat4 {
        self.view
    }

    pub fn projection_matrix(&self) -> Mat4 {
        self.projection
    }

    pub fn view_projection_matrix(&self) -> Mat4 {
        self.view_projection
    }

    /// Matrix the raymarching shader uses to turn clip-space points back into world space
    pub fn inverse_view_projection_matrix(&self) -> Mat4 {
        self.inverse_view_projection
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        self.update_view();
    }

    pub fn set_target(&mut self, target: Vec3) {
        self.target = target;
        self.update_view();
    }

    /// Set position and target together with a single recompute
    pub fn set_pose(&mut self, position: Vec3, target: Vec3) {
        self.position = position;
        self.target = target;
        self.update_view();
    }

    /// Change the vertical FOV, keeping the stored aspect ratio
    pub fn set_field_of_view(&mut self, field_of_view: f32) {
        self.field_of_view = field_of_view;
        self.update_projection();
    }

    pub fn set_aspect_ratio(&mut self, aspect_ratio: f32) {
        self.aspect_ratio = aspect_ratio;
        self.update_projection();
    }

    pub fn set_clip_planes(&mut self, near_plane: f32, far_plane: f32) {
        self.near_plane = near_plane;
        self.far_plane = far_plane;
        self.update_projection();
    }

    /// World-space ray through a point in normalized device coordinates
    ///
    /// Returns `(origin, direction)`; mirrors the per-pixel reconstruction done in the
    /// fragment shader (unproject the near and far plane points, then normalize the difference).
    pub fn ray_through(&self, ndc: Vec2) -> (Vec3, Vec3) {
        let near = self
            .inverse_view_projection
            .project_point3(Vec3::new(ndc.x, ndc.y, -1.0));
        let far = self
            .inverse_view_projection
            .project_point3(Vec3::new(ndc.x, ndc.y, 1.0));
        (self.position, (far - near).normalize())
    }

    /// Build the uniform block a renderer uploads for this frame
    pub fn to_uniform(&self, time: f32, viewport: Viewport) -> CameraUniform {
        CameraUniform {
            inverse_view_projection: self.inverse_view_projection.to_cols_array_2d(),
            camera_position: self.position.to_array(),
            time,
            resolution: viewport.resolution(),
            aspect: viewport.aspect_ratio(),
            _pad: 0.0,
        }
    }

    fn update_projection(&mut self) {
        self.projection = Mat4::perspective_rh_gl(
            self.field_of_view,
            self.aspect_ratio,
            self.near_plane,
            self.far_plane,
        );
        self.update_view_projection();
    }

    fn update_view(&mut self) {
        self.view = Mat4::look_at_rh(self.position, self.target, self.up);
        self.update_view_projection();
    }

    fn update_view_projection(&mut self) {
        self.view_projection = self.projection * self.view;
        self.inverse_view_projection = self.view_projection.inverse();
    }
}
