//! Enemy traffic placement
//!
//! Spawning is deliberately loose: a candidate is rejected only when an
//! existing enemy is close on both axes at once, and a call that runs out of
//! tries simply spawns nothing. The tick retries stochastically.

use rand::Rng;

use super::collision::Rect;
use super::state::{Color, GameState, Vehicle, VehicleKind};

/// Category draw table: three cars to every truck
const KIND_TABLE: [VehicleKind; 4] = [
    VehicleKind::Car,
    VehicleKind::Car,
    VehicleKind::Car,
    VehicleKind::Truck,
];

/// What a spawn attempt did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnOutcome {
    /// A new enemy was pushed onto the road
    Spawned,
    /// Enemy cap already reached
    AtCapacity,
    /// Every try was blocked or landed on the reserved lane
    NoRoom,
}

/// Whether a candidate keeps clear of existing traffic.
///
/// Blocked only if some enemy is within `candidate.width` horizontally AND
/// within `min_gap_y` vertically (top edges compared).
pub fn can_spawn_at(candidate: &Rect, enemies: &[Vehicle], min_gap_y: f32) -> bool {
    !enemies.iter().any(|enemy| {
        let dx = (enemy.x - candidate.x).abs();
        let dy = (enemy.y - candidate.y).abs();
        dx < candidate.width && dy < min_gap_y
    })
}

/// Try to place one enemy above the visible area
pub fn spawn_enemy(state: &mut GameState) -> SpawnOutcome {
    let road = state.road();
    let GameState {
        tuning,
        enemies,
        rng,
        ..
    } = state;

    if enemies.len() >= tuning.max_enemies {
        return SpawnOutcome::AtCapacity;
    }

    let kind = KIND_TABLE[rng.random_range(0..KIND_TABLE.len())];
    let (width, height) = kind.size(tuning);

    // Picked once per call and skipped as a candidate. Lanes already holding
    // traffic are not checked against it.
    let empty_lane = rng.random_range(0..tuning.lane_count);

    for _ in 0..tuning.spawn_tries {
        let lane = rng.random_range(0..tuning.lane_count);
        if lane == empty_lane {
            continue;
        }

        let jitter = rng.random::<f32>() * 2.0 * tuning.spawn_jitter - tuning.spawn_jitter;
        let x = road.lane_center(lane) - width / 2.0 + jitter;
        let y = -height - rng.random::<f32>() * tuning.spawn_height_range;
        let candidate = Rect::new(x, y, width, height);

        if can_spawn_at(&candidate, enemies, tuning.spawn_min_gap_y) {
            let color = Color::random_pastel(rng);
            log::debug!("Spawned {:?} in lane {} at ({:.1}, {:.1})", kind, lane, x, y);
            enemies.push(Vehicle {
                x,
                y,
                width,
                height,
                color,
                kind,
            });
            return SpawnOutcome::Spawned;
        }
    }

    log::debug!("Spawn attempt exhausted {} tries", tuning.spawn_tries);
    SpawnOutcome::NoRoom
}
