//! Data-driven game balance
//!
//! Every gameplay constant the simulation reads comes from [`Tuning`]. The
//! defaults reproduce the classic feel; a JSON document can override any
//! subset of fields.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Tuning load/validation errors
#[derive(thiserror::Error, Debug)]
pub enum TuningError {
    /// JSON could not be parsed
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A field holds a value the simulation cannot run with
    #[error("Invalid tuning value for `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Game balance parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Road ===
    pub lane_width: f32,
    pub lane_count: u32,

    // === Player ===
    pub player_width: f32,
    pub player_height: f32,
    pub player_bottom_offset: f32,
    pub player_accel: f32,
    pub player_friction: f32,
    pub player_max_speed: f32,

    // === Traffic ===
    pub car_width: f32,
    pub car_height: f32,
    pub truck_width: f32,
    pub truck_height: f32,
    pub enemy_speed: f32,
    pub max_enemies: usize,
    pub boost_multiplier: f32,

    // === Spawning ===
    /// Probability per tick of a spawn attempt
    pub spawn_chance: f32,
    pub spawn_tries: u32,
    pub spawn_min_gap_y: f32,
    pub spawn_jitter: f32,
    pub spawn_height_range: f32,

    // === Lane dashes ===
    pub dash_period: f32,
    pub dash_step: f32,

    // === Persistence ===
    pub highscore_ttl_days: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            lane_width: LANE_WIDTH,
            lane_count: LANE_COUNT,

            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            player_bottom_offset: PLAYER_BOTTOM_OFFSET,
            player_accel: PLAYER_ACCEL,
            player_friction: PLAYER_FRICTION,
            player_max_speed: PLAYER_MAX_SPEED,

            car_width: CAR_WIDTH,
            car_height: CAR_HEIGHT,
            truck_width: TRUCK_WIDTH,
            truck_height: TRUCK_HEIGHT,
            enemy_speed: ENEMY_SPEED,
            max_enemies: MAX_ENEMIES,
            boost_multiplier: BOOST_MULTIPLIER,

            spawn_chance: SPAWN_CHANCE,
            spawn_tries: SPAWN_TRIES,
            spawn_min_gap_y: SPAWN_MIN_GAP_Y,
            spawn_jitter: SPAWN_JITTER,
            spawn_height_range: SPAWN_HEIGHT_RANGE,

            dash_period: DASH_PERIOD,
            dash_step: DASH_STEP,

            highscore_ttl_days: HIGHSCORE_TTL_DAYS,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Serialize to pretty JSON (for shipping a tuning file alongside the game)
    pub fn to_json(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("lane_width", self.lane_width),
            ("player_width", self.player_width),
            ("player_height", self.player_height),
            ("car_width", self.car_width),
            ("car_height", self.car_height),
            ("truck_width", self.truck_width),
            ("truck_height", self.truck_height),
            ("dash_period", self.dash_period),
        ];
        for (field, value) in positive {
            if !(value > 0.0) {
                return Err(TuningError::Invalid {
                    field,
                    reason: "must be greater than zero",
                });
            }
        }

        if self.lane_count == 0 {
            return Err(TuningError::Invalid {
                field: "lane_count",
                reason: "road needs at least one lane",
            });
        }
        if !(0.0..=1.0).contains(&self.spawn_chance) {
            return Err(TuningError::Invalid {
                field: "spawn_chance",
                reason: "must be a probability in [0, 1]",
            });
        }
        if !(0.0..=1.0).contains(&self.player_friction) {
            return Err(TuningError::Invalid {
                field: "player_friction",
                reason: "must be in [0, 1]",
            });
        }
        if self.player_max_speed < 0.0 {
            return Err(TuningError::Invalid {
                field: "player_max_speed",
                reason: "must not be negative",
            });
        }
        if self.spawn_jitter < 0.0 || self.spawn_height_range < 0.0 {
            return Err(TuningError::Invalid {
                field: "spawn_jitter",
                reason: "spawn ranges must not be negative",
            });
        }
        Ok(())
    }

    /// Total drivable width of all lanes
    pub fn road_width(&self) -> f32 {
        self.lane_width * self.lane_count as f32
    }

    /// Scroll speed of traffic this tick
    pub fn enemy_speed(&self, boosting: bool) -> f32 {
        if boosting {
            self.enemy_speed * self.boost_multiplier
        } else {
            self.enemy_speed
        }
    }

    /// Lane dash advance this tick
    pub fn dash_step(&self, boosting: bool) -> f32 {
        if boosting {
            self.dash_step * self.boost_multiplier
        } else {
            self.dash_step
        }
    }
}
