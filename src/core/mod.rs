pub mod fps;
pub mod input_adapter;

pub use fps::FpsCounter;
pub use input_adapter::{PointerLockRequest, WinitInputAdapter, PIXELS_PER_LINE};
