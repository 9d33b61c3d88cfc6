// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Source of the current time, injected so write timestamps and the
/// slug fallback token are controllable in tests.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
