pub mod effects;
pub mod debug;
