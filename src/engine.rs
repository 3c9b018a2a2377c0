use rand::Rng;

use crate::apple::{self, AppleKind};
use crate::events::GameEvent;
use crate::game::{GameSession, SessionStatus};

/// What ended a session.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum CollisionKind {
    Boundary,
    SelfCollision,
}

impl GameSession {
    /// Ends the session when the advanced head left the grid.
    ///
    /// Returns `true` when the session ended here. A boundary exit wins over
    /// everything else the tick would have resolved.
    pub(crate) fn check_boundary(&mut self, events: &mut Vec<GameEvent>) -> bool {
        if self.grid.is_within_bounds(self.snake.head()) {
            return false;
        }

        self.end_session(CollisionKind::Boundary, events);
        true
    }

    /// Walks the recorded body head to tail. Any segment sitting on the
    /// apple consumes it, and each segment is compared against every later
    /// one to find a self intersection.
    ///
    /// The apple may be replaced mid-walk, so later segments are checked
    /// against the new position.
    pub(crate) fn resolve_body_pass(&mut self, events: &mut Vec<GameEvent>) {
        let mut index = 0;
        while let Some(cell) = self.snake.segment(index) {
            if self.status == SessionStatus::Running && cell == self.apple.position {
                self.consume_apple(events);
            }

            if !self.is_halted()
                && self
                    .snake
                    .segments()
                    .skip(index + 1)
                    .any(|other| *other == cell)
            {
                self.end_session(CollisionKind::SelfCollision, events);
            }

            index += 1;
        }
    }

    /// Resolves one apple consumption.
    ///
    /// A bonus roll adds the bonus points and places a bonus apple. Otherwise
    /// the snake grows by one, the frame limit drops by one (down to its
    /// floor) and a normal apple is placed.
    pub(crate) fn consume_apple(&mut self, events: &mut Vec<GameEvent>) {
        let bonus = self.rng.gen_bool(self.config.bonus_chance);

        if bonus {
            self.score = self.score.saturating_add(self.config.bonus_points);
        } else {
            self.snake.grow(1);
            self.frame_limit = self
                .frame_limit
                .saturating_sub(1)
                .max(self.config.min_frame_limit);
            self.score = self.score.saturating_add(1);
        }

        let kind = if bonus {
            AppleKind::Bonus
        } else {
            AppleKind::Normal
        };
        log::debug!(
            "apple eaten as {kind:?}: score {}, target length {}, frame limit {}",
            self.score,
            self.snake.target_length(),
            self.frame_limit
        );

        let placement = self.placement();
        self.apple = apple::randomize(&mut self.rng, self.grid, &self.snake, placement, bonus);

        events.push(GameEvent::AppleEaten(kind));
        events.push(GameEvent::ScoreChanged(self.score));
    }

    fn end_session(&mut self, reason: CollisionKind, events: &mut Vec<GameEvent>) {
        self.status = SessionStatus::Over;
        log::info!(
            "game over after {} ticks ({reason:?}), final score {}",
            self.tick_count,
            self.score
        );

        events.push(GameEvent::GameOver {
            final_score: self.score,
            reason,
        });
    }
}
