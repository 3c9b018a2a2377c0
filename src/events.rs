use crate::apple::{Apple, AppleKind};
use crate::engine::CollisionKind;
use crate::game::SessionStatus;
use crate::grid::Cell;

/// Read-only view of one executed tick, handed to the presentation side.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSnapshot {
    /// Recorded body cells, head first.
    pub body: Vec<Cell>,
    pub apple: Apple,
    pub score: u32,
    pub target_length: usize,
    pub frame_limit: u32,
    pub status: SessionStatus,
}

/// Something observable that happened during a tick.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// Emitted once per executed tick, after all state changes.
    Frame(FrameSnapshot),
    ScoreChanged(u32),
    /// An apple was consumed and resolved as `kind`.
    AppleEaten(AppleKind),
    GameOver {
        final_score: u32,
        reason: CollisionKind,
    },
}

/// Receiver of game output. Every hook defaults to a no-op.
pub trait GameObserver {
    fn on_frame_render(&mut self, _frame: &FrameSnapshot) {}

    fn on_score_changed(&mut self, _score: u32) {}

    fn on_apple_eaten(&mut self, _kind: AppleKind) {}

    fn on_game_over(&mut self, _final_score: u32, _reason: CollisionKind) {}

    /// Called after the session was re-initialised.
    fn on_reset(&mut self) {}
}

impl GameObserver for () {}

/// Forwards `events` to `observer` in emission order.
pub fn dispatch<O: GameObserver + ?Sized>(events: &[GameEvent], observer: &mut O) {
    for event in events {
        match event {
            GameEvent::Frame(frame) => observer.on_frame_render(frame),
            GameEvent::ScoreChanged(score) => observer.on_score_changed(*score),
            GameEvent::AppleEaten(kind) => observer.on_apple_eaten(*kind),
            GameEvent::GameOver {
                final_score,
                reason,
            } => observer.on_game_over(*final_score, *reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::apple::{Apple, AppleKind};
    use crate::engine::CollisionKind;
    use crate::game::SessionStatus;
    use crate::grid::Cell;

    use super::{dispatch, FrameSnapshot, GameEvent, GameObserver};

    #[derive(Default)]
    struct Tally {
        frames: usize,
        scores: Vec<u32>,
        eaten: Vec<AppleKind>,
        game_over: Option<(u32, CollisionKind)>,
    }

    impl GameObserver for Tally {
        fn on_frame_render(&mut self, _frame: &FrameSnapshot) {
            self.frames += 1;
        }

        fn on_score_changed(&mut self, score: u32) {
            self.scores.push(score);
        }

        fn on_apple_eaten(&mut self, kind: AppleKind) {
            self.eaten.push(kind);
        }

        fn on_game_over(&mut self, final_score: u32, reason: CollisionKind) {
            self.game_over = Some((final_score, reason));
        }
    }

    #[test]
    fn dispatch_forwards_every_event_in_order() {
        let frame = FrameSnapshot {
            body: vec![Cell::new(0, 0)],
            apple: Apple::normal(Cell::new(10, 0)),
            score: 11,
            target_length: 1,
            frame_limit: 18,
            status: SessionStatus::Over,
        };
        let events = vec![
            GameEvent::AppleEaten(AppleKind::Bonus),
            GameEvent::ScoreChanged(10),
            GameEvent::ScoreChanged(11),
            GameEvent::GameOver {
                final_score: 11,
                reason: CollisionKind::Boundary,
            },
            GameEvent::Frame(frame),
        ];
        let mut tally = Tally::default();

        dispatch(&events, &mut tally);

        assert_eq!(tally.frames, 1);
        assert_eq!(tally.scores, vec![10, 11]);
        assert_eq!(tally.eaten, vec![AppleKind::Bonus]);
        assert_eq!(tally.game_over, Some((11, CollisionKind::Boundary)));
    }

    #[test]
    fn unit_observer_ignores_events() {
        dispatch(&[GameEvent::ScoreChanged(3)], &mut ());
    }
}
