//! Traffic Racer - a single-screen lane-dodging arcade game
//!
//! Core modules:
//! - `sim`: Seeded simulation (player, enemy traffic, spawning, collisions)
//! - `session`: Running/Paused/GameOver state machine driving the frame loop
//! - `renderer`: Canvas abstraction, scene painter and WebGPU pipeline
//! - `platform`: Frame scheduling and keyboard state
//! - `persistence`: Key/value storage with expiry
//! - `tuning`: Data-driven game balance

pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod session;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use session::{Collaborators, Session, SessionPhase};
pub use tuning::Tuning;
pub use ui::{Command, ControlsState, Hud};

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    /// Road layout
    pub const LANE_WIDTH: f32 = 80.0;
    pub const LANE_COUNT: u32 = 5;

    /// Player car
    pub const PLAYER_WIDTH: f32 = 50.0;
    pub const PLAYER_HEIGHT: f32 = 100.0;
    /// Distance from the bottom of the viewport to the player's top edge
    pub const PLAYER_BOTTOM_OFFSET: f32 = 150.0;
    pub const PLAYER_ACCEL: f32 = 1.0;
    /// Velocity multiplier applied per tick when no steering key is held
    pub const PLAYER_FRICTION: f32 = 0.8;
    pub const PLAYER_MAX_SPEED: f32 = 10.0;

    /// Enemy traffic
    pub const CAR_WIDTH: f32 = 50.0;
    pub const CAR_HEIGHT: f32 = 100.0;
    pub const TRUCK_WIDTH: f32 = 70.0;
    pub const TRUCK_HEIGHT: f32 = 160.0;
    pub const ENEMY_SPEED: f32 = 5.0;
    pub const MAX_ENEMIES: usize = 4;

    /// Spawning
    pub const SPAWN_CHANCE: f32 = 0.02;
    pub const SPAWN_TRIES: u32 = 15;
    pub const SPAWN_MIN_GAP_Y: f32 = 200.0;
    pub const SPAWN_JITTER: f32 = 10.0;
    /// Extra random height above the viewport that enemies may start at
    pub const SPAWN_HEIGHT_RANGE: f32 = 300.0;

    /// Shift-held speed multiplier for traffic and lane dashes
    pub const BOOST_MULTIPLIER: f32 = 2.0;

    /// Lane divider animation (30 on / 30 off)
    pub const DASH_PERIOD: f32 = 60.0;
    pub const DASH_STEP: f32 = 10.0;

    /// Highscore persistence
    pub const HIGHSCORE_KEY: &str = "trafficRacerHighscore";
    pub const HIGHSCORE_TTL_DAYS: u32 = 365;
}
