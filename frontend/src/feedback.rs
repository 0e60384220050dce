//! "Copied!" acknowledgment shown after a clipboard write.

/// Which item was copied last.
///
/// Only one acknowledgment is visible at a time. Every copy bumps the
/// generation, and an expiry only clears the acknowledgment it was
/// scheduled for, so an old timer cannot hide a newer copy.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CopyAck {
    item: Option<String>,
    generation: u64,
}

impl CopyAck {
    /// Mark `item` as copied and return the generation to expire later.
    pub fn acknowledge(&mut self, item: &str) -> u64 {
        self.generation += 1;
        self.item = Some(item.to_string());
        self.generation
    }

    /// Clear the acknowledgment if it still belongs to `generation`.
    pub fn expire(&mut self, generation: u64) {
        if self.generation == generation {
            self.item = None;
        }
    }

    pub fn is_copied(&self, item: &str) -> bool {
        self.item.as_deref() == Some(item)
    }

    pub fn current(&self) -> Option<&str> {
        self.item.as_deref()
    }
}

/// Clipboard key of the n-th keyword chip.
pub fn keyword_key(index: usize) -> String {
    format!("keyword-{}", index)
}
