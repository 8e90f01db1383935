//! Seeded simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One tick per display refresh, no wall-clock time
//! - Seeded RNG only
//! - No rendering, storage or platform dependencies

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Rect, is_colliding};
pub use spawn::{SpawnOutcome, can_spawn_at, spawn_enemy};
pub use state::{Color, GameState, Player, Road, Vehicle, VehicleKind, Viewport};
pub use tick::{TickInput, TickOutcome, tick};
