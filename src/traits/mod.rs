pub mod input;
pub mod rig;

pub use input::*;
pub use rig::*;
