pub mod camera;
pub mod cli;
pub mod core;
pub mod directional;
pub mod error;
pub mod frame;
pub mod orbit;
pub mod scene;
pub mod traits;
pub mod types;

pub use camera::Camera;
pub use directional::DirectionalCamera;
pub use error::CameraError;
pub use orbit::{OrbitCamera, OrbitSensitivity};
pub use scene::{CameraDescriptor, SceneCatalog, SceneDescriptor};
pub use traits::{CameraRig, InputKind, InputSource, MoveDelta, MoveHandler};
pub use types::{CameraUniform, Viewport};
