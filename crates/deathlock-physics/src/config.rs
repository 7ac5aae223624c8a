use serde::{Deserialize, Serialize};

/// Downward acceleration applied each airborne tick (pixels/tick²).
pub const GRAVITY: f32 = 0.55;
/// Sub-steps per tick in the stage sweep.
pub const CHECK_STEPS: u32 = 4;
/// Ticks of punch-zone immunity after a launch.
pub const INVULN_LENGTH: u32 = 5;
/// Horizontal launch speed given by a left/right punch zone.
pub const PUNCHER_X_VEL: f32 = 5.0;
/// Upward launch speed given by an up punch zone.
pub const PUNCHER_UP_VEL: f32 = 12.0;
/// Downward launch speed given by a down punch zone.
pub const PUNCHER_DOWN_VEL: f32 = 7.0;
/// Per-tick decay of the launch velocity while grounded.
pub const PUNCHER_DECELERATION: f32 = 0.5;
/// Size of the hit sound pool.
pub const HIT_SOUND_COUNT: u32 = 3;

/// Tunable physics constants shared by every body built from the same config.
///
/// Missing fields fall back to the defaults above, so a partial JSON
/// document only needs to name what it overrides.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    pub gravity: f32,
    /// Vertical sweep resolution. The horizontal sweep always works in quarters.
    pub check_steps: u32,
    pub invuln_length: u32,
    pub puncher_x_vel: f32,
    pub puncher_up_vel: f32,
    pub puncher_down_vel: f32,
    pub puncher_deceleration: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            check_steps: CHECK_STEPS,
            invuln_length: INVULN_LENGTH,
            puncher_x_vel: PUNCHER_X_VEL,
            puncher_up_vel: PUNCHER_UP_VEL,
            puncher_down_vel: PUNCHER_DOWN_VEL,
            puncher_deceleration: PUNCHER_DECELERATION,
        }
    }
}

impl PhysicsConfig {
    /// Parse a config from a JSON string. Out-of-range values are clamped (see [`Self::validated`]).
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Self>(json).map(Self::validated)
    }

    /// Clamp values the sweep cannot work with, logging each correction.
    /// `check_steps == 0` would skip the stage sweep entirely, so it is raised to 1.
    pub fn validated(mut self) -> Self {
        if self.check_steps == 0 {
            log::warn!("PhysicsConfig: check_steps 0, clamping to 1");
            self.check_steps = 1;
        }
        self
    }

    /// Parse a config, falling back to defaults if the document is unparseable.
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Failed to parse physics config: {e}, using defaults");
                Self::default()
            }
        }
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
