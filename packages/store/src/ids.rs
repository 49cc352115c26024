//! Monotonic, prefixed record ids.

/// Hands out ids of the form `<prefix><n>` with `n` zero-padded to four
/// digits, starting at 1. Ids are never reused, even if records were ever
/// removed from the owning collection.
///
/// The counter is a `u64`; one id per nanosecond would take centuries to
/// exhaust it.
#[derive(Debug, Clone)]
pub struct IdSequence {
    prefix: &'static str,
    next: u64,
}

impl IdSequence {
    /// Creates a sequence whose first id is `<prefix>0001`.
    #[must_use]
    pub const fn new(prefix: &'static str) -> Self {
        Self { prefix, next: 1 }
    }

    /// Returns the next id and advances the sequence.
    pub fn next_id(&mut self) -> String {
        let id = format!("{}{:04}", self.prefix, self.next);
        self.next += 1;
        id
    }
}
