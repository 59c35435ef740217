pub mod animate;
pub mod camera;
pub mod constants;
pub mod frame;
pub mod input;
pub mod scene;

pub use animate::*;
pub use camera::*;
pub use constants::*;
pub use frame::*;
pub use input::*;
pub use scene::*;
