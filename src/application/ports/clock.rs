use time::OffsetDateTime;

/// Source of the current wall-clock time.
///
/// Session expiry is always decided against this, never against the
/// system clock directly, so tests can pin time.
pub trait Clock: Send + Sync {
    fn now(&self) -> OffsetDateTime;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }
}
