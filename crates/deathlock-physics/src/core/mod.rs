pub mod kinematics;
pub mod rect;
