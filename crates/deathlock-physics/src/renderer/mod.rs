pub mod instance;
pub mod camera;

pub use camera::{CameraTransform, PixelCamera};
pub use instance::{Color, DebugRect, DebugSurface, BLUE, MAGENTA, RED};
