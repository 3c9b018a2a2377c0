use std::collections::VecDeque;

use crate::grid::Cell;
use crate::input::{accepts_turn, Direction};

/// Mutable snake state: head position, heading, recorded trail and the
/// length the trail is growing toward.
///
/// The head is advanced independently of the trail. A tick moves the head
/// with [`Snake::advance`] and only then records it with
/// [`Snake::record_trail`], so growth is latent: raising the target length
/// keeps the tail for one more tick instead of adding a segment at once.
#[derive(Debug, Clone)]
pub struct Snake {
    head: Cell,
    heading: Option<Direction>,
    pending_heading: Option<Direction>,
    body: VecDeque<Cell>,
    target_length: usize,
    cell_size: i32,
}

impl Snake {
    /// Creates a stationary one-cell snake at `start`.
    #[must_use]
    pub fn new(start: Cell, cell_size: u16) -> Self {
        let mut body = VecDeque::new();
        body.push_front(start);

        Self {
            head: start,
            heading: None,
            pending_heading: None,
            body,
            target_length: 1,
            cell_size: i32::from(cell_size),
        }
    }

    /// Creates a snake from explicit body segments (front is head) that
    /// already moves in `heading`. The target length matches the segments.
    ///
    /// Returns `None` for an empty segment list.
    #[must_use]
    pub fn from_segments(segments: Vec<Cell>, heading: Direction, cell_size: u16) -> Option<Self> {
        let head = *segments.first()?;
        let target_length = segments.len();

        Some(Self {
            head,
            heading: Some(heading),
            pending_heading: None,
            body: VecDeque::from(segments),
            target_length,
            cell_size: i32::from(cell_size),
        })
    }

    /// Requests a heading change for the next tick.
    ///
    /// Returns `false` without side effects when a change is already pending
    /// this tick or when `direction` does not switch axis.
    pub fn set_heading(&mut self, direction: Direction) -> bool {
        if self.pending_heading.is_some() || !accepts_turn(self.heading, direction) {
            return false;
        }

        self.pending_heading = Some(direction);
        true
    }

    /// Applies the pending heading and reopens input for the coming tick.
    pub fn apply_pending_heading(&mut self) {
        if let Some(direction) = self.pending_heading.take() {
            log::debug!("heading changed to {direction:?}");
            self.heading = Some(direction);
        }
    }

    /// Moves the head one cell along the heading. A stationary snake stays put.
    pub fn advance(&mut self) {
        self.head = self.head.offset(self.velocity());
    }

    /// Records the head at the front of the trail and drops tail cells beyond
    /// the target length.
    pub fn record_trail(&mut self) {
        self.body.push_front(self.head);
        self.body.truncate(self.target_length);
    }

    /// Raises the target length; the trail catches up on later ticks.
    pub fn grow(&mut self, by: usize) {
        self.target_length += by;
    }

    /// Per-tick displacement in pixel units; zero before the first turn.
    #[must_use]
    pub fn velocity(&self) -> (i32, i32) {
        self.heading.map_or((0, 0), |direction| {
            let (dx, dy) = direction.unit();
            (dx * self.cell_size, dy * self.cell_size)
        })
    }

    /// Returns the most recently computed head position.
    #[must_use]
    pub fn head(&self) -> Cell {
        self.head
    }

    #[must_use]
    pub fn heading(&self) -> Option<Direction> {
        self.heading
    }

    #[must_use]
    pub fn pending_heading(&self) -> Option<Direction> {
        self.pending_heading
    }

    #[must_use]
    pub fn target_length(&self) -> usize {
        self.target_length
    }

    /// Returns true if any recorded segment occupies `cell`.
    #[must_use]
    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Returns the recorded segment at `index`, counted from the head.
    #[must_use]
    pub fn segment(&self, index: usize) -> Option<Cell> {
        self.body.get(index).copied()
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Cell> {
        self.body.iter()
    }
}
