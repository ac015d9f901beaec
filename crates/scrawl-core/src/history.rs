//! Undo/redo snapshot log.

/// Generic snapshot history with a cursor.
///
/// Snapshots are full copies of the tracked state. Entries after the
/// cursor are the redo future and are discarded by the next commit. The
/// cursor is always a valid index: the log never empties.
#[derive(Debug, Clone)]
pub struct History<T> {
    snapshots: Vec<T>,
    cursor: usize,
}

impl<T> History<T> {
    /// Start a log holding `initial` as its only snapshot.
    pub fn new(initial: T) -> Self {
        Self {
            snapshots: vec![initial],
            cursor: 0,
        }
    }

    /// Snapshot at the cursor.
    pub fn current(&self) -> &T {
        &self.snapshots[self.cursor]
    }

    /// Record `next` as a new entry, discarding any redo future.
    pub fn commit(&mut self, next: T) {
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(next);
        self.cursor += 1;
    }

    /// Replace the entry at the cursor without growing the log.
    ///
    /// In-progress strokes funnel every pointer sample through here, so
    /// one stroke stays one undo step.
    pub fn amend(&mut self, next: T) {
        self.snapshots[self.cursor] = next;
    }

    /// Step back one entry. Does nothing and returns false at the start.
    pub fn undo(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Step forward one entry. Does nothing and returns false at the end.
    pub fn redo(&mut self) -> bool {
        if self.cursor + 1 >= self.snapshots.len() {
            return false;
        }
        self.cursor += 1;
        true
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    /// Number of snapshots held, across past, present, and redo future.
    pub fn snapshot_count(&self) -> usize {
        self.snapshots.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undo_walks_back() {
        let mut history = History::new(0);
        history.commit(1);
        history.commit(2);

        assert!(history.undo());
        assert_eq!(*history.current(), 1);
        assert!(history.undo());
        assert_eq!(*history.current(), 0);
        assert!(!history.undo());
        assert_eq!(*history.current(), 0);
    }

    #[test]
    fn test_commit_discards_redo_future() {
        let mut history = History::new(0);
        history.commit(1);
        history.commit(2);
        history.undo();

        assert_eq!(*history.current(), 1);
        history.commit(3);
        assert!(!history.redo());
        assert_eq!(*history.current(), 3);
        assert_eq!(history.snapshot_count(), 3);
    }

    #[test]
    fn test_amend_replaces_in_place() {
        let mut history = History::new(0);
        history.commit(1);
        history.amend(9);
        history.amend(10);

        assert_eq!(*history.current(), 10);
        assert_eq!(history.snapshot_count(), 2);
        assert!(history.undo());
        assert_eq!(*history.current(), 0);
        assert!(history.redo());
        assert_eq!(*history.current(), 10);
    }

    #[test]
    fn test_redo_requires_future() {
        let mut history = History::new(0);
        assert!(!history.redo());
        history.commit(1);
        assert!(!history.redo());
        history.undo();
        assert!(history.can_redo());
        assert!(history.redo());
        assert_eq!(*history.current(), 1);
    }

    #[test]
    fn test_can_undo_tracks_cursor() {
        let mut history = History::new(0);
        assert!(!history.can_undo());
        history.commit(1);
        assert!(history.can_undo());
        history.undo();
        assert!(!history.can_undo());
    }
}
