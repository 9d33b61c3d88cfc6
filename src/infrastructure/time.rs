use crate::application::ports::time::Clock;
use chrono::{DateTime, Utc};

/// Wall-clock implementation used outside of tests.
#[derive(Default, Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
