//! Bounded most-recent-first record of recognized opcodes.

use crate::opcode::Opcode;
use std::collections::VecDeque;
use tracing::debug;

/// Maximum number of opcodes kept in the history.
pub const HISTORY_CAPACITY: usize = 5;

/// The last [`HISTORY_CAPACITY`] recognized opcodes, newest first.
///
/// Owned by the caller across decode calls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandHistory {
    entries: VecDeque<Opcode>,
}

impl CommandHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self {
            entries: VecDeque::with_capacity(HISTORY_CAPACITY + 1),
        }
    }

    /// Record an opcode at the front, evicting the oldest entry on overflow.
    ///
    /// Returns `false` and leaves the history untouched when the opcode is
    /// not a recognized one.
    pub fn insert(&mut self, opcode: Opcode) -> bool {
        if !opcode.is_recognized() {
            debug!(opcode = %opcode, "refusing to record unrecognized opcode");
            return false;
        }

        self.entries.push_front(opcode);
        if self.entries.len() > HISTORY_CAPACITY {
            if let Some(evicted) = self.entries.pop_back() {
                debug!(opcode = %evicted, "evicted oldest history entry");
            }
        }
        true
    }

    /// Iterate from most recent to oldest.
    pub fn iter(&self) -> impl Iterator<Item = &Opcode> + '_ {
        self.entries.iter()
    }

    /// Most recently recorded opcode.
    pub fn latest(&self) -> Option<&Opcode> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        HISTORY_CAPACITY
    }

    /// Copy of the entries, newest first.
    pub fn to_vec(&self) -> Vec<Opcode> {
        self.entries.iter().cloned().collect()
    }
}

impl<'a> IntoIterator for &'a CommandHistory {
    type Item = &'a Opcode;
    type IntoIter = std::collections::vec_deque::Iter<'a, Opcode>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
