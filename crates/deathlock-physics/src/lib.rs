pub mod api;
pub mod core;
pub mod config;
pub mod level;
pub mod body;
pub mod renderer;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::types::{Direction, Facing, SoundEvent};
pub use body::{Body, BodyDesc, Gravity, Puncher, PunchFeedback};
pub use config::{
    PhysicsConfig, CHECK_STEPS, GRAVITY, HIT_SOUND_COUNT, INVULN_LENGTH,
    PUNCHER_DECELERATION, PUNCHER_DOWN_VEL, PUNCHER_UP_VEL, PUNCHER_X_VEL,
};
pub use core::kinematics::Kinematics;
pub use core::rect::PixelRect;
pub use level::{HorizontalSide, Level, Tile, TileGrid, TileKind, VerticalSide};
pub use renderer::camera::{CameraTransform, PixelCamera};
pub use renderer::instance::{Color, DebugRect, DebugSurface, BLUE, MAGENTA, RED};
pub use systems::debug::debug_draw_bodies;
pub use systems::effects::{Bounce, BounceEffects, SoundPool, BOUNCE_DISTANCE, BOUNCE_LENGTH};
