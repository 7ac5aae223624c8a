//! Tile-colliding bodies.
//!
//! A `Body` always carries a kinematic integrator and a collision box.
//! Gravity and punch-zone interaction are optional modules chosen at
//! construction. One `update()` per tick runs them in a fixed order:
//!
//! 1. gravity derives this tick's vertical acceleration (airborne only)
//! 2. the stage sweep resolves contact against the level (unless `ignore_collision`)
//! 3. velocity and position integrate, launch velocity decays and applies
//! 4. vertical speed is clamped to terminal velocity
//! 5. punch zones are checked (unless `ignore_collision`)
//!
//! The level and the feedback collaborator are lent to each call; a body
//! never stores either.

mod collision;
mod gravity;
mod puncher;
#[cfg(test)]
mod scenarios;

pub use gravity::Gravity;
pub use puncher::{Puncher, PunchFeedback};

use glam::{IVec2, Vec2};

use crate::api::types::Facing;
use crate::config::PhysicsConfig;
use crate::core::kinematics::{truncate, Kinematics};
use crate::core::rect::PixelRect;
use crate::level::Level;
use crate::renderer::camera::CameraTransform;
use crate::renderer::instance::{Color, DebugSurface, BLUE, RED};

/// Builder for describing a body before creation.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyDesc {
    pub position: IVec2,
    pub width: i32,
    pub height: i32,
    /// Hitbox margin on each side of the gridbox.
    pub extend: IVec2,
    /// `Some` attaches the gravity module with this terminal fall speed.
    pub terminal_velocity: Option<f32>,
    /// Attach the punch-zone module.
    pub punchable: bool,
    pub collide_deathlock: bool,
    pub ignore_collision: bool,
    pub ignore_gravity: bool,
    pub config: PhysicsConfig,
}

impl BodyDesc {
    /// A collision-only body (no gravity, no punch zones) of the given size.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            position: IVec2::ZERO,
            width,
            height,
            extend: IVec2::ZERO,
            terminal_velocity: None,
            punchable: false,
            collide_deathlock: true,
            ignore_collision: false,
            ignore_gravity: false,
            config: PhysicsConfig::default(),
        }
    }

    /// A gravity body with the given terminal fall speed.
    pub fn gravity(width: i32, height: i32, terminal_velocity: f32) -> Self {
        Self::new(width, height).with_gravity(terminal_velocity)
    }

    /// A gravity body that also reacts to punch zones.
    pub fn punchable(width: i32, height: i32, terminal_velocity: f32) -> Self {
        Self::gravity(width, height, terminal_velocity).with_punch_zones(true)
    }

    pub fn with_position(mut self, pos: IVec2) -> Self {
        self.position = pos;
        self
    }

    pub fn with_extend(mut self, extend_x: i32, extend_y: i32) -> Self {
        self.extend = IVec2::new(extend_x, extend_y);
        self
    }

    pub fn with_gravity(mut self, terminal_velocity: f32) -> Self {
        self.terminal_velocity = Some(terminal_velocity);
        self
    }

    pub fn with_punch_zones(mut self, enabled: bool) -> Self {
        self.punchable = enabled;
        self
    }

    pub fn with_collide_deathlock(mut self, collide: bool) -> Self {
        self.collide_deathlock = collide;
        self
    }

    pub fn with_ignore_collision(mut self, ignore: bool) -> Self {
        self.ignore_collision = ignore;
        self
    }

    pub fn with_ignore_gravity(mut self, ignore: bool) -> Self {
        self.ignore_gravity = ignore;
        self
    }

    pub fn with_config(mut self, config: PhysicsConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(&self) -> Body {
        Body::new(self)
    }
}

/// A tile-sized body moving through a level.
#[derive(Debug, Clone)]
pub struct Body {
    kinematics: Kinematics,
    size: IVec2,
    extend: IVec2,
    gridbox: PixelRect,
    hitbox: PixelRect,
    /// Skip the stage sweep and punch zones (e.g. while dead).
    pub ignore_collision: bool,
    /// Suspend gravity acceleration. Terminal velocity still applies.
    pub ignore_gravity: bool,
    /// Treat deathlock hazard tiles as solid.
    pub collide_deathlock: bool,
    gravity: Option<Gravity>,
    puncher: Option<Puncher>,
    config: PhysicsConfig,
}

impl Body {
    /// Create a body from a description. Bad sizes, terminal velocities and
    /// sweep settings are clamped with a warning.
    pub fn new(desc: &BodyDesc) -> Self {
        if desc.width <= 0 || desc.height <= 0 {
            log::warn!("Body: invalid size {}x{}, clamping to 1", desc.width, desc.height);
        }
        let size = IVec2::new(desc.width.max(1), desc.height.max(1));
        let gridbox = PixelRect::new(desc.position.x, desc.position.y, size.x, size.y);

        let gravity = desc.terminal_velocity.map(|terminal| {
            if terminal < 0.0 {
                log::warn!("Body: negative terminal velocity {terminal}, clamping to 0");
            }
            Gravity::new(terminal)
        });

        Self {
            kinematics: Kinematics::new(desc.position),
            size,
            extend: desc.extend,
            gridbox,
            hitbox: gridbox.inflate(desc.extend),
            ignore_collision: desc.ignore_collision,
            ignore_gravity: desc.ignore_gravity,
            collide_deathlock: desc.collide_deathlock,
            gravity,
            puncher: desc.punchable.then(Puncher::default),
            config: desc.config.validated(),
        }
    }

    /// Advance one tick.
    pub fn update<L, F>(&mut self, level: &L, feedback: &mut F)
    where
        L: Level + ?Sized,
        F: PunchFeedback + ?Sized,
    {
        self.apply_gravity(level);
        if !self.ignore_collision {
            self.resolve_stage_collision(level);
        }
        self.integrate(level);
        self.clamp_fall_speed();
        if !self.ignore_collision {
            self.collide_punch_zones(level, feedback);
        }
    }

    fn integrate<L: Level + ?Sized>(&mut self, level: &L) {
        self.kinematics.accelerate();
        self.set_position(self.kinematics.displaced());

        // Launch decay sees the freshly integrated position.
        if self.puncher.is_some() {
            let grounded = self.grounded(level);
            let deceleration = self.config.puncher_deceleration;
            if let Some(puncher) = self.puncher.as_mut() {
                if grounded {
                    puncher.decay(deceleration);
                }
                let launch = puncher.launch_x_vel;
                self.set_x(truncate(self.x() as f32 + launch));
            }
        }

        self.kinematics.refresh_facing();
    }

    // -- Position --

    /// The only way to move a body: updates gridbox and hitbox with it.
    pub fn set_position(&mut self, pos: IVec2) {
        self.kinematics.set_pos(pos);
        self.gridbox.x = pos.x;
        self.gridbox.y = pos.y;
        self.hitbox = self.gridbox.inflate(self.extend);
    }

    /// Move horizontally, keeping `y`.
    pub fn set_x(&mut self, x: i32) {
        self.set_position(IVec2::new(x, self.y()));
    }

    /// Move vertically, keeping `x`.
    pub fn set_y(&mut self, y: i32) {
        self.set_position(IVec2::new(self.x(), y));
    }

    /// Top-left corner of the gridbox.
    pub fn pos(&self) -> IVec2 {
        self.kinematics.pos()
    }

    /// Left edge.
    pub fn x(&self) -> i32 {
        self.kinematics.x()
    }

    /// Top edge.
    pub fn y(&self) -> i32 {
        self.kinematics.y()
    }

    /// Gridbox width in pixels.
    pub fn width(&self) -> i32 {
        self.size.x
    }

    /// Gridbox height in pixels.
    pub fn height(&self) -> i32 {
        self.size.y
    }

    /// Horizontal center, rounded toward the left edge.
    pub fn center_x(&self) -> i32 {
        self.x().saturating_add(self.size.x / 2)
    }

    /// Vertical center, rounded toward the top edge.
    pub fn center_y(&self) -> i32 {
        self.y().saturating_add(self.size.y / 2)
    }

    /// Both centers as a point.
    pub fn center_pos(&self) -> IVec2 {
        IVec2::new(self.center_x(), self.center_y())
    }

    /// Move so that `center_x()` becomes `center_x`.
    pub fn set_center_x(&mut self, center_x: i32) {
        self.set_x(center_x.saturating_sub(self.size.x / 2));
    }

    /// Move so that `center_y()` becomes `center_y`.
    pub fn set_center_y(&mut self, center_y: i32) {
        self.set_y(center_y.saturating_sub(self.size.y / 2));
    }

    /// Box used for tile collision. Always at `pos()` with the body's size.
    pub fn gridbox(&self) -> PixelRect {
        self.gridbox
    }

    /// Gridbox grown by the sensor margins, for overlap tests with other entities.
    pub fn hitbox(&self) -> PixelRect {
        self.hitbox
    }

    // -- Motion --

    /// The underlying integrator state.
    pub fn kinematics(&self) -> &Kinematics {
        &self.kinematics
    }

    /// Velocity in pixels per tick, launch velocity excluded.
    pub fn velocity(&self) -> Vec2 {
        self.kinematics.vel
    }

    /// Replace both velocity components.
    pub fn set_velocity(&mut self, vel: Vec2) {
        self.kinematics.vel = vel;
    }

    /// Replace the horizontal velocity.
    pub fn set_x_vel(&mut self, x_vel: f32) {
        self.kinematics.vel.x = x_vel;
    }

    /// Replace the vertical velocity.
    pub fn set_y_vel(&mut self, y_vel: f32) {
        self.kinematics.vel.y = y_vel;
    }

    /// Acceleration applied at the next integration step.
    pub fn acceleration(&self) -> Vec2 {
        self.kinematics.acc
    }

    /// Replace both acceleration components.
    pub fn set_acceleration(&mut self, acc: Vec2) {
        self.kinematics.acc = acc;
    }

    /// Horizontal direction of travel at the last integration step.
    pub fn facing_x(&self) -> Facing {
        self.kinematics.facing_x()
    }

    /// Vertical direction of travel at the last integration step.
    pub fn facing_y(&self) -> Facing {
        self.kinematics.facing_y()
    }

    /// Horizontal position expected next tick, launch velocity included.
    pub fn predict_next_x(&self) -> f32 {
        self.kinematics.predict_next_x() + self.launch_x_vel()
    }

    /// Vertical position expected next tick.
    pub fn predict_next_y(&self) -> f32 {
        self.kinematics.predict_next_y()
    }

    /// Halt horizontal motion, launch velocity included.
    pub fn stop_x(&mut self) {
        self.kinematics.stop_x();
        if let Some(puncher) = self.puncher.as_mut() {
            puncher.launch_x_vel = 0.0;
        }
    }

    /// Halt vertical motion.
    pub fn stop_y(&mut self) {
        self.kinematics.stop_y();
    }

    // -- Modules --

    /// Constants this body was built with.
    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    /// Whether the gravity module is attached.
    pub fn has_gravity(&self) -> bool {
        self.gravity.is_some()
    }

    /// Terminal fall speed, for gravity bodies.
    pub fn terminal_velocity(&self) -> Option<f32> {
        self.gravity.map(|g| g.terminal_velocity())
    }

    /// Whether the punch-zone module is attached.
    pub fn is_punchable(&self) -> bool {
        self.puncher.is_some()
    }

    /// Remaining ticks of punch-zone immunity (0 for non-punchable bodies).
    pub fn invuln_frames(&self) -> u32 {
        self.puncher.map_or(0, |p| p.invuln_frames)
    }

    /// Horizontal velocity from the last launch (0 for non-punchable bodies).
    pub fn launch_x_vel(&self) -> f32 {
        self.puncher.map_or(0.0, |p| p.launch_x_vel)
    }

    /// Drop any launch velocity without touching ordinary horizontal motion.
    pub fn cancel_launch(&mut self) {
        if let Some(puncher) = self.puncher.as_mut() {
            puncher.launch_x_vel = 0.0;
        }
    }

    // -- Debug drawing --

    /// Push the camera-transformed gridbox onto `surface`.
    pub fn draw_gridbox<C: CameraTransform + ?Sized>(&self, surface: &mut DebugSurface, cam: &C, color: Color) {
        surface.push(cam.move_rect(self.gridbox), color);
    }

    /// Push the camera-transformed hitbox onto `surface`.
    pub fn draw_hitbox<C: CameraTransform + ?Sized>(&self, surface: &mut DebugSurface, cam: &C, color: Color) {
        surface.push(cam.move_rect(self.hitbox), color);
    }

    /// Default debug view: the gridbox in red.
    pub fn draw<C: CameraTransform + ?Sized>(&self, surface: &mut DebugSurface, cam: &C) {
        self.draw_gridbox(surface, cam, RED);
    }

    /// Both regions: hitbox in blue underneath, gridbox in red on top.
    pub fn draw_regions<C: CameraTransform + ?Sized>(&self, surface: &mut DebugSurface, cam: &C) {
        self.draw_hitbox(surface, cam, BLUE);
        self.draw_gridbox(surface, cam, RED);
    }
}
