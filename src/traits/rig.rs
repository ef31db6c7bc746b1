use crate::camera::Camera;

use super::input::MoveHandler;

/// Camera movement policy driven once per frame
pub trait CameraRig {
    /// Advance to an absolute timestamp in milliseconds
    fn update(&mut self, timestamp_ms: f64);

    /// Camera whose matrices reflect the latest update
    fn camera(&self) -> &Camera;

    /// Input receiver, for rigs that react to pointer/touch/wheel movement
    fn as_move_handler(&mut self) -> Option<&mut dyn MoveHandler> {
        None
    }

    /// Viewport resize
    fn set_aspect_ratio(&mut self, aspect_ratio: f32);
}
