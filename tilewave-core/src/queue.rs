use std::collections::VecDeque;

/// FIFO worklist of cell coordinates with unique membership.
///
/// Pushing a coordinate that is already queued removes the old occurrence
/// and appends it at the back, so the most recent request wins position and
/// the queue never holds duplicates.
#[derive(Debug, Clone, Default)]
pub struct PropagationQueue {
    pending: VecDeque<(usize, usize)>,
}

impl PropagationQueue {
    /// Creates an empty queue.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pending: VecDeque::new(),
        }
    }

    /// Appends a coordinate, moving it to the back if already queued.
    pub fn push(&mut self, coord: (usize, usize)) {
        if let Some(pos) = self.pending.iter().position(|&queued| queued == coord) {
            self.pending.remove(pos);
        }
        self.pending.push_back(coord);
    }

    /// Removes and returns the front coordinate.
    pub fn pop(&mut self) -> Option<(usize, usize)> {
        self.pending.pop_front()
    }

    /// Whether the queue holds no coordinates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Number of queued coordinates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Drops all queued coordinates.
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
