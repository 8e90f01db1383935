//! Session state machine
//!
//! Owns the game state and the injected collaborators, and decides when the
//! simulation runs. Exactly one frame request is outstanding while Running;
//! every transition cancels it before touching state, and frames that arrive
//! with any other handle are dropped.

use crate::highscores::{load_highscore, save_highscore};
use crate::persistence::KeyValueStore;
use crate::platform::input::is_boost_key;
use crate::platform::{FrameHandle, FrameScheduler, KeyState};
use crate::renderer::{Canvas, render};
use crate::sim::{GameState, TickOutcome, Viewport, tick};
use crate::tuning::Tuning;
use crate::ui::{Command, ControlsState, Hud};

/// Lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Constructed, no run started yet
    Idle,
    Running,
    Paused,
    /// Crashed; frozen until restarted
    GameOver,
}

/// Everything the session talks to outside the simulation
pub struct Collaborators<C, H, S, F> {
    pub canvas: C,
    pub hud: H,
    pub store: S,
    pub scheduler: F,
}

pub struct Session<C, H, S, F> {
    state: GameState,
    phase: SessionPhase,
    keys: KeyState,
    pending_frame: Option<FrameHandle>,
    io: Collaborators<C, H, S, F>,
}

impl<C, H, S, F> Session<C, H, S, F>
where
    C: Canvas,
    H: Hud,
    S: KeyValueStore,
    F: FrameScheduler,
{
    /// Build a session and load the persisted highscore. Nothing runs until
    /// [`Session::start_game`].
    pub fn new(
        mut io: Collaborators<C, H, S, F>,
        tuning: Tuning,
        viewport: Viewport,
        seed: u64,
    ) -> Self {
        let mut state = GameState::new(seed, tuning, viewport);
        state.highscore = load_highscore(&io.store);
        log::info!("Loaded highscore: {}", state.highscore);
        io.hud.set_highscore(state.highscore);
        io.hud.set_score(0);

        let session = Self {
            state,
            phase: SessionPhase::Idle,
            keys: KeyState::new(),
            pending_frame: None,
            io,
        };
        session.warn_if_road_clipped();
        session
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct access for scripted traffic (tests, demos)
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn keys(&self) -> &KeyState {
        &self.keys
    }

    /// Frame the session is waiting for, if any
    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.pending_frame
    }

    pub fn collaborators(&self) -> &Collaborators<C, H, S, F> {
        &self.io
    }

    pub fn collaborators_mut(&mut self) -> &mut Collaborators<C, H, S, F> {
        &mut self.io
    }

    /// Tear down, handing the collaborators back
    pub fn into_collaborators(mut self) -> Collaborators<C, H, S, F> {
        self.cancel_pending();
        self.io
    }

    /// Begin a fresh run from any phase
    pub fn start_game(&mut self) {
        self.cancel_pending();
        self.state.reset_run();
        self.phase = SessionPhase::Running;

        self.io.hud.set_score(0);
        self.io.hud.hide_overlay();
        self.io.hud.set_controls(ControlsState::ShowPause);
        log::info!("Run started (highscore {})", self.state.highscore);

        self.schedule_next();
    }

    /// Running -> Paused; anything else is ignored
    pub fn pause_game(&mut self) {
        if self.phase != SessionPhase::Running {
            return;
        }
        self.cancel_pending();
        self.phase = SessionPhase::Paused;
        self.io.hud.set_controls(ControlsState::ShowPlay);
        log::info!("Paused at score {}", self.state.score);
    }

    /// Paused -> Running; a no-op in every other phase, GameOver included
    pub fn resume_game(&mut self) {
        if self.phase != SessionPhase::Paused {
            return;
        }
        self.phase = SessionPhase::Running;
        self.io.hud.set_controls(ControlsState::ShowPause);
        log::info!("Resumed at score {}", self.state.score);
        if self.pending_frame.is_none() {
            self.schedule_next();
        }
    }

    /// HUD button dispatch
    pub fn handle_command(&mut self, command: Command) {
        match command {
            Command::Play => self.resume_game(),
            Command::Pause => self.pause_game(),
            Command::Restart => {
                if self.phase != SessionPhase::GameOver {
                    self.start_game();
                }
            }
            Command::OverlayRestart => {
                self.io.hud.hide_overlay();
                self.start_game();
            }
        }
    }

    /// Scheduler callback: one simulation tick plus its render
    pub fn on_frame(&mut self, handle: FrameHandle) {
        if self.pending_frame != Some(handle) {
            log::debug!("Dropping stale frame {}", handle.0);
            return;
        }
        self.pending_frame = None;
        if self.phase != SessionPhase::Running {
            return;
        }

        let input = self.keys.tick_input();
        match tick(&mut self.state, &input) {
            TickOutcome::Crashed => self.end_game(),
            TickOutcome::Advanced { new_highscore } => {
                self.io.hud.set_score(self.state.score);
                if new_highscore {
                    self.record_highscore();
                }
                render(&self.state, &mut self.io.canvas);
                self.schedule_next();
            }
        }
    }

    pub fn key_down(&mut self, key: &str) {
        if is_boost_key(key) {
            self.state.boosting = true;
        }
        self.keys.key_down(key);
    }

    pub fn key_up(&mut self, key: &str) {
        if is_boost_key(key) {
            self.state.boosting = false;
        }
        self.keys.key_up(key);
    }

    /// Drop held keys (window lost focus)
    pub fn release_keys(&mut self) {
        self.keys.clear();
        self.state.boosting = false;
    }

    /// New drawing surface size. Redraws whatever is on screen.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.state.viewport = Viewport::new(width, height);
        self.state.clamp_player_to_road();
        self.warn_if_road_clipped();
        if self.phase != SessionPhase::Idle {
            render(&self.state, &mut self.io.canvas);
        }
    }

    fn end_game(&mut self) {
        self.cancel_pending();
        self.phase = SessionPhase::GameOver;
        self.io
            .hud
            .show_game_over(self.state.score, self.state.highscore);
        self.io.hud.set_controls(ControlsState::Hidden);
        // Freeze the crash frame on screen
        render(&self.state, &mut self.io.canvas);
        log::info!(
            "Game over: score {}, highscore {}",
            self.state.score,
            self.state.highscore
        );
    }

    fn record_highscore(&mut self) {
        let highscore = self.state.highscore;
        self.io.hud.set_highscore(highscore);
        if let Err(e) = save_highscore(
            &mut self.io.store,
            highscore,
            self.state.tuning.highscore_ttl_days,
        ) {
            log::warn!("Failed to save highscore {}: {}", highscore, e);
        }
    }

    fn schedule_next(&mut self) {
        debug_assert!(self.pending_frame.is_none());
        self.pending_frame = Some(self.io.scheduler.request_frame());
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending_frame.take() {
            self.io.scheduler.cancel_frame(handle);
        }
    }

    fn warn_if_road_clipped(&self) {
        let road = self.state.road();
        if !road.fits() {
            log::warn!(
                "Viewport {}px is narrower than the {}px road; lanes will be clipped",
                self.state.viewport.width,
                self.state.tuning.road_width()
            );
        }
    }
}
