use std::time::{Duration, Instant};

use crate::events::{dispatch, GameObserver};
use crate::game::{GameSession, SessionStatus};
use crate::input::GameInput;

/// Whether the driver should keep refreshing.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum LoopControl {
    Continue,
    Quit,
}

/// Drives a [`GameSession`] from display refresh callbacks.
///
/// Every refresh bumps a frame counter; a logical tick only runs on the
/// callback where the counter reaches the session's frame limit. Tick output
/// is forwarded to the observer.
#[derive(Debug)]
pub struct GameLoop<O> {
    session: GameSession,
    observer: O,
    frame_counter: u32,
}

impl<O: GameObserver> GameLoop<O> {
    /// Wraps `session` and hands the observer its initial frame.
    #[must_use]
    pub fn new(session: GameSession, mut observer: O) -> Self {
        observer.on_frame_render(&session.snapshot());
        Self {
            session,
            observer,
            frame_counter: 0,
        }
    }

    /// One display refresh. Returns `true` when a logical tick ran.
    pub fn on_refresh(&mut self) -> bool {
        self.frame_counter += 1;
        if self.frame_counter < self.session.frame_limit {
            return false;
        }

        self.frame_counter = 0;
        let events = self.session.tick();
        dispatch(&events, &mut self.observer);
        true
    }

    /// Re-initialises the session and tells the observer about it.
    pub fn reset(&mut self) {
        self.session.reset();
        self.observer.on_reset();
        self.observer.on_score_changed(self.session.score);
        self.observer.on_frame_render(&self.session.snapshot());
    }

    /// Routes one input event: in-game inputs go to the session, confirm
    /// restarts a finished session and quit stops the driver.
    pub fn handle_input(&mut self, input: GameInput) -> LoopControl {
        match input {
            GameInput::Quit => return LoopControl::Quit,
            GameInput::Confirm if self.session.status == SessionStatus::Over => self.reset(),
            other => self.session.apply_input(other),
        }
        LoopControl::Continue
    }

    #[must_use]
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    #[must_use]
    pub fn observer(&self) -> &O {
        &self.observer
    }
}

/// Fixed-timestep refresh scheduler standing in for the display's refresh
/// callback.
#[derive(Debug, Clone, Copy)]
pub struct RefreshClock {
    interval: Duration,
    next_refresh: Instant,
}

impl RefreshClock {
    #[must_use]
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            next_refresh: now + interval,
        }
    }

    /// Time left until the next refresh is due.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Duration {
        self.next_refresh.saturating_duration_since(now)
    }

    /// Schedules the following refresh. A caller that fell behind by more
    /// than one interval resynchronises instead of bursting.
    pub fn advance(&mut self, now: Instant) {
        self.next_refresh += self.interval;
        if self.next_refresh < now {
            self.next_refresh = now + self.interval;
        }
    }
}
