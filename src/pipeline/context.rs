//! Run-scoped walk state. Owned by one engine for one run, never shared.

use std::path::{Path, PathBuf};

/// Initial capacity of the pending-directory stack.
const PENDING_STACK_CAP: usize = 20;

#[derive(Debug)]
pub struct RunState {
    /// Directories not yet explored. LIFO; sibling order is not a contract.
    pub pending: Vec<PathBuf>,
    pub directories_visited: u64,
    pub files_recorded: u64,
}

impl RunState {
    /// Fresh state with the stack seeded with `root`.
    pub fn new(root: &Path) -> Self {
        let mut pending = Vec::with_capacity(PENDING_STACK_CAP);
        pending.push(root.to_path_buf());
        RunState {
            pending,
            directories_visited: 0,
            files_recorded: 0,
        }
    }

    /// Drop all remaining work (cancellation).
    pub fn abandon(&mut self) {
        self.pending.clear();
    }
}
