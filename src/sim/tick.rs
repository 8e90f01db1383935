//! Per-frame simulation step
//!
//! One call advances the road by exactly one display refresh. Rendering and
//! rescheduling are the session's job; this module only mutates state.

use rand::Rng;

use super::collision::is_colliding;
use super::spawn::spawn_enemy;
use super::state::GameState;

/// Steering keys held for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
}

/// Result of a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Survived; `new_highscore` is set when the highscore moved this tick
    Advanced { new_highscore: bool },
    /// Player hit traffic. Score was not incremented.
    Crashed,
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) -> TickOutcome {
    let boosting = state.boosting;

    // Lane dash scroll
    state.lane_offset += state.tuning.dash_step(boosting);
    if state.lane_offset >= state.tuning.dash_period {
        state.lane_offset = 0.0;
    }

    steer_player(state, input);

    // Traffic scrolls down; anything past the bottom edge is gone
    let enemy_speed = state.tuning.enemy_speed(boosting);
    for enemy in &mut state.enemies {
        enemy.y += enemy_speed;
    }
    let bottom = state.viewport.height;
    state.enemies.retain(|enemy| enemy.y <= bottom);

    if state.rng.random::<f32>() < state.tuning.spawn_chance {
        spawn_enemy(state);
    }

    let player = state.player.rect();
    if state
        .enemies
        .iter()
        .any(|enemy| is_colliding(&player, &enemy.rect()))
    {
        return TickOutcome::Crashed;
    }

    state.score += 1;
    let new_highscore = state.score > state.highscore;
    if new_highscore {
        state.highscore = state.score;
    }
    TickOutcome::Advanced { new_highscore }
}

/// Apply steering, friction, speed cap and road bounds
fn steer_player(state: &mut GameState, input: &TickInput) {
    let road = state.road();
    let tuning = &state.tuning;
    let player = &mut state.player;

    if input.left {
        player.speed_x -= tuning.player_accel;
    }
    if input.right {
        player.speed_x += tuning.player_accel;
    }
    if !input.left && !input.right {
        player.speed_x *= tuning.player_friction;
    }

    player.speed_x = player.speed_x.clamp(-player.max_speed_x, player.max_speed_x);

    let vehicle = &mut player.vehicle;
    vehicle.x = road.clamp_x(vehicle.x + player.speed_x, vehicle.width);
}
