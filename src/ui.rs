//! HUD collaborator: score readouts, game-over overlay and control buttons

/// Which transport buttons are visible
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlsState {
    /// Running: pause and restart available
    ShowPause,
    /// Paused: play and restart available
    ShowPlay,
    /// Game over: only the overlay's restart button
    Hidden,
}

/// User commands from the HUD buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Play,
    Pause,
    /// Toolbar restart (ignored while the game-over overlay is up)
    Restart,
    /// Restart from the game-over overlay
    OverlayRestart,
}

/// Text and visibility surface shown around the playfield
pub trait Hud {
    fn set_score(&mut self, score: u64);
    fn set_highscore(&mut self, highscore: u64);
    fn show_game_over(&mut self, score: u64, highscore: u64);
    fn hide_overlay(&mut self);
    fn set_controls(&mut self, controls: ControlsState);
}

/// Overlay body text
pub fn game_over_summary(score: u64, highscore: u64) -> String {
    format!("Score: {}\nHighscore: {}", score, highscore)
}

/// Remembers what would be on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryHud {
    pub score: u64,
    pub highscore: u64,
    /// Overlay text while visible
    pub overlay: Option<String>,
    pub controls: ControlsState,
}

impl Default for MemoryHud {
    fn default() -> Self {
        Self {
            score: 0,
            highscore: 0,
            overlay: None,
            controls: ControlsState::ShowPause,
        }
    }
}

impl MemoryHud {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Hud for MemoryHud {
    fn set_score(&mut self, score: u64) {
        self.score = score;
    }

    fn set_highscore(&mut self, highscore: u64) {
        self.highscore = highscore;
    }

    fn show_game_over(&mut self, score: u64, highscore: u64) {
        self.overlay = Some(game_over_summary(score, highscore));
    }

    fn hide_overlay(&mut self) {
        self.overlay = None;
    }

    fn set_controls(&mut self, controls: ControlsState) {
        self.controls = controls;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_text() {
        assert_eq!(game_over_summary(12, 40), "Score: 12\nHighscore: 40");
    }

    #[test]
    fn test_memory_hud_overlay() {
        let mut hud = MemoryHud::new();
        hud.show_game_over(3, 9);
        assert_eq!(hud.overlay.as_deref(), Some("Score: 3\nHighscore: 9"));
        hud.hide_overlay();
        assert_eq!(hud.overlay, None);
    }
}
