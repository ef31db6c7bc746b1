use glam::Vec3;
use thiserror::Error;

/// Errors raised while constructing cameras
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CameraError {
    /// Movement direction has zero length (or is not finite) and cannot be normalized
    #[error("direction {direction} cannot be normalized")]
    DegenerateDirection { direction: Vec3 },
}
