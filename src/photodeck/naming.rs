//! Photo name assignment.
//!
//! Names double as file stems and as the identity used for favorite and removal
//! lookups, so they must never repeat within a catalog. Capture timestamps alone
//! collide when two photos land in the same millisecond; [`TimestampNamer`] bumps
//! the clock forward instead of reusing a value.

use chrono::Utc;

pub trait PhotoNamer: Send + Sync {
    fn next_name(&mut self) -> String;
}

/// Epoch milliseconds, strictly increasing for the life of the namer.
#[derive(Debug, Default)]
pub struct TimestampNamer {
    last: i64,
}

impl TimestampNamer {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_millis(&mut self, now: i64) -> i64 {
        let next = now.max(self.last + 1);
        self.last = next;
        next
    }
}

impl PhotoNamer for TimestampNamer {
    fn next_name(&mut self) -> String {
        let now = Utc::now().timestamp_millis();
        self.next_millis(now).to_string()
    }
}

/// Fixed counter, for reproducible names.
#[derive(Debug)]
pub struct SequenceNamer {
    next: u64,
}

impl SequenceNamer {
    pub fn starting_at(first: u64) -> Self {
        Self { next: first }
    }
}

impl PhotoNamer for SequenceNamer {
    fn next_name(&mut self) -> String {
        let name = self.next.to_string();
        self.next += 1;
        name
    }
}
