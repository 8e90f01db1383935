//! Game state and core simulation types
//!
//! Everything one run needs lives in [`GameState`]: the player, live traffic,
//! score counters and the seeded RNG that drives spawning.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::collision::Rect;
use crate::tuning::Tuning;

/// 8-bit RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS `rgb(r,g,b)` form
    pub fn to_css(&self) -> String {
        format!("rgb({},{},{})", self.r, self.g, self.b)
    }

    /// Linear-space RGBA for sRGB render targets
    pub fn to_linear_rgba(&self) -> [f32; 4] {
        fn channel(c: u8) -> f32 {
            let c = c as f32 / 255.0;
            if c <= 0.04045 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        [channel(self.r), channel(self.g), channel(self.b), 1.0]
    }

    /// Random light colour, each channel in 128..=254
    pub fn random_pastel(rng: &mut impl Rng) -> Self {
        Self::rgb(
            rng.random_range(128..=254),
            rng.random_range(128..=254),
            rng.random_range(128..=254),
        )
    }
}

/// Vehicle category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VehicleKind {
    Car,
    Truck,
}

impl VehicleKind {
    /// (width, height) for this category
    pub fn size(self, tuning: &Tuning) -> (f32, f32) {
        match self {
            VehicleKind::Car => (tuning.car_width, tuning.car_height),
            VehicleKind::Truck => (tuning.truck_width, tuning.truck_height),
        }
    }
}

/// A car or truck on the road
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    /// Top-left corner
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub color: Color,
    pub kind: VehicleKind,
}

impl Vehicle {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// The player's car plus its steering state
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub vehicle: Vehicle,
    /// Horizontal velocity (units per tick)
    pub speed_x: f32,
    pub max_speed_x: f32,
}

impl Player {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            vehicle: Vehicle {
                x: 0.0,
                y: 0.0,
                width: tuning.player_width,
                height: tuning.player_height,
                color: Color::rgb(0x00, 0xaa, 0xff),
                kind: VehicleKind::Car,
            },
            speed_x: 0.0,
            max_speed_x: tuning.player_max_speed,
        }
    }

    pub fn rect(&self) -> Rect {
        self.vehicle.rect()
    }
}

/// Drawing surface dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Lane layout derived from the viewport width
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Road {
    pub lane_width: f32,
    pub lane_count: u32,
    /// Sidewalk width on each side (never negative)
    pub margin: f32,
    pub viewport_width: f32,
}

impl Road {
    /// Centre the lanes in the viewport. A viewport narrower than the road
    /// gets zero margins instead of negative ones.
    pub fn for_viewport(viewport_width: f32, tuning: &Tuning) -> Self {
        let margin = ((viewport_width - tuning.road_width()) / 2.0).max(0.0);
        Self {
            lane_width: tuning.lane_width,
            lane_count: tuning.lane_count,
            margin,
            viewport_width,
        }
    }

    /// Whether the full road fits in the viewport
    pub fn fits(&self) -> bool {
        self.viewport_width >= self.lane_width * self.lane_count as f32
    }

    /// Leftmost x the player may occupy
    pub fn left_bound(&self) -> f32 {
        self.margin
    }

    /// Rightmost x the player's right edge may reach
    pub fn right_bound(&self) -> f32 {
        self.viewport_width - self.margin
    }

    /// Keep a body of `width` on the road. When the body is wider than the
    /// road the left edge wins, so x never drops below `left_bound`.
    pub fn clamp_x(&self, x: f32, width: f32) -> f32 {
        x.min(self.right_bound() - width).max(self.left_bound())
    }

    /// Horizontal centre of a lane
    pub fn lane_center(&self, lane: u32) -> f32 {
        self.margin + lane as f32 * self.lane_width + self.lane_width / 2.0
    }

    /// x of the divider between `lane - 1` and `lane`
    pub fn divider_x(&self, lane: u32) -> f32 {
        self.margin + lane as f32 * self.lane_width
    }
}

/// Complete state of one play-through (plus the carried-over highscore)
#[derive(Debug, Clone)]
pub struct GameState {
    pub tuning: Tuning,
    pub viewport: Viewport,
    pub player: Player,
    /// Live traffic, in spawn order
    pub enemies: Vec<Vehicle>,
    /// Ticks survived this run
    pub score: u64,
    pub highscore: u64,
    /// Shift held
    pub boosting: bool,
    /// Lane dash scroll offset, wraps at `dash_period`
    pub lane_offset: f32,
    /// Run RNG (spawning, colours)
    pub rng: Pcg32,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64, tuning: Tuning, viewport: Viewport) -> Self {
        let mut state = Self {
            player: Player::new(&tuning),
            tuning,
            viewport,
            enemies: Vec::new(),
            score: 0,
            highscore: 0,
            boosting: false,
            lane_offset: 0.0,
            rng: Pcg32::seed_from_u64(seed),
        };
        state.place_player();
        state
    }

    /// Current lane layout
    pub fn road(&self) -> Road {
        Road::for_viewport(self.viewport.width, &self.tuning)
    }

    /// Reset everything a new run starts from. Highscore carries over.
    pub fn reset_run(&mut self) {
        self.enemies.clear();
        self.score = 0;
        self.boosting = false;
        self.lane_offset = 0.0;
        self.player.speed_x = 0.0;
        self.player.vehicle.color = Color::random_pastel(&mut self.rng);
        self.place_player();
    }

    /// Pull the player back inside the current road bounds
    pub fn clamp_player_to_road(&mut self) {
        let road = self.road();
        let vehicle = &mut self.player.vehicle;
        vehicle.x = road.clamp_x(vehicle.x, vehicle.width);
    }

    /// Put the player in the middle lane near the bottom edge
    pub fn place_player(&mut self) {
        let road = self.road();
        let middle = self.tuning.lane_count / 2;
        let vehicle = &mut self.player.vehicle;
        vehicle.x = road.lane_center(middle) - vehicle.width / 2.0;
        vehicle.y = self.viewport.height - self.tuning.player_bottom_offset;
        self.clamp_player_to_road();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_road_margin_for_wide_viewport() {
        let road = Road::for_viewport(1000.0, &Tuning::default());
        assert_eq!(road.margin, 300.0);
        assert!(road.fits());
        assert_eq!(road.left_bound(), 300.0);
        assert_eq!(road.right_bound(), 700.0);
        assert_eq!(road.lane_center(0), 340.0);
        assert_eq!(road.divider_x(1), 380.0);
    }

    #[test]
    fn test_road_margin_clamped_for_narrow_viewport() {
        let road = Road::for_viewport(320.0, &Tuning::default());
        assert_eq!(road.margin, 0.0);
        assert!(!road.fits());
        assert_eq!(road.right_bound(), 320.0);
    }

    #[test]
    fn test_clamp_x_prefers_left_edge_when_too_narrow() {
        let road = Road::for_viewport(1000.0, &Tuning::default());
        assert_eq!(road.clamp_x(100.0, 50.0), 300.0);
        assert_eq!(road.clamp_x(690.0, 50.0), 650.0);
        assert_eq!(road.clamp_x(500.0, 50.0), 500.0);

        let tiny = Road::for_viewport(30.0, &Tuning::default());
        assert_eq!(tiny.clamp_x(-20.0, 50.0), 0.0);
        assert_eq!(tiny.clamp_x(10.0, 50.0), 0.0);
    }

    #[test]
    fn test_clamp_player_after_viewport_shrinks() {
        let mut state = GameState::new(3, Tuning::default(), Viewport::new(1000.0, 800.0));
        state.player.vehicle.x = 640.0;
        state.viewport = Viewport::new(600.0, 800.0);
        state.clamp_player_to_road();
        // Road now spans 100..500
        assert_eq!(state.player.vehicle.x, 450.0);
    }

    #[test]
    fn test_new_state_places_player_in_middle_lane() {
        let state = GameState::new(1, Tuning::default(), Viewport::new(1000.0, 800.0));
        assert_eq!(state.player.vehicle.x, 475.0);
        assert_eq!(state.player.vehicle.y, 650.0);
        assert_eq!(state.player.speed_x, 0.0);
        assert!(state.enemies.is_empty());
    }

    #[test]
    fn test_reset_run_keeps_highscore() {
        let mut state = GameState::new(7, Tuning::default(), Viewport::new(1000.0, 800.0));
        state.score = 321;
        state.highscore = 321;
        state.boosting = true;
        state.lane_offset = 40.0;
        state.player.speed_x = 6.0;
        state.player.vehicle.x = 310.0;
        state.enemies.push(Vehicle {
            x: 400.0,
            y: 10.0,
            width: 50.0,
            height: 100.0,
            color: Color::rgb(200, 200, 200),
            kind: VehicleKind::Car,
        });

        state.reset_run();

        assert_eq!(state.score, 0);
        assert_eq!(state.highscore, 321);
        assert!(!state.boosting);
        assert_eq!(state.lane_offset, 0.0);
        assert_eq!(state.player.speed_x, 0.0);
        assert_eq!(state.player.vehicle.x, 475.0);
        assert!(state.enemies.is_empty());
    }

    #[test]
    fn test_pastel_channels_in_range() {
        let mut rng = Pcg32::seed_from_u64(99);
        for _ in 0..200 {
            let c = Color::random_pastel(&mut rng);
            for channel in [c.r, c.g, c.b] {
                assert!((128..=254).contains(&channel));
            }
        }
    }

    #[test]
    fn test_color_css() {
        assert_eq!(Color::rgb(1, 22, 255).to_css(), "rgb(1,22,255)");
    }
}
