use crate::apple::AppleKind;
use crate::engine::CollisionKind;
use crate::events::{FrameSnapshot, GameObserver};

/// Game-over details kept for the popup.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GameOverNotice {
    pub final_score: u32,
    pub reason: CollisionKind,
}

/// Observer that keeps what the terminal renderer needs between ticks.
#[derive(Debug, Clone, Default)]
pub struct TerminalPresenter {
    last_frame: Option<FrameSnapshot>,
    score: u32,
    bonus_apples: u32,
    game_over: Option<GameOverNotice>,
}

impl TerminalPresenter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent frame, if any tick ran yet.
    #[must_use]
    pub fn last_frame(&self) -> Option<&FrameSnapshot> {
        self.last_frame.as_ref()
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn bonus_apples(&self) -> u32 {
        self.bonus_apples
    }

    #[must_use]
    pub fn game_over(&self) -> Option<GameOverNotice> {
        self.game_over
    }
}

impl GameObserver for TerminalPresenter {
    fn on_frame_render(&mut self, frame: &FrameSnapshot) {
        self.last_frame = Some(frame.clone());
    }

    fn on_score_changed(&mut self, score: u32) {
        self.score = score;
    }

    fn on_apple_eaten(&mut self, kind: AppleKind) {
        if kind == AppleKind::Bonus {
            self.bonus_apples += 1;
        }
    }

    fn on_game_over(&mut self, final_score: u32, reason: CollisionKind) {
        self.game_over = Some(GameOverNotice {
            final_score,
            reason,
        });
    }

    fn on_reset(&mut self) {
        self.game_over = None;
        self.bonus_apples = 0;
    }
}
