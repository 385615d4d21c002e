//! Completion gate
//!
//! Opens once the final step's completion settles; stays open until the
//! user acknowledges it. No auto-dismiss, no timeout.

/// Terminal "guide complete" flag for one wizard instance
#[derive(Debug, Default)]
pub struct CompletionGate {
    open: bool,
}

impl CompletionGate {
    /// Whether the completion modal should be showing
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Close after an explicit user acknowledgement
    pub fn acknowledge(&mut self) {
        self.open = false;
    }

    /// Opened only by the controller when the final step settles
    pub(super) fn open(&mut self) {
        self.open = true;
    }
}
