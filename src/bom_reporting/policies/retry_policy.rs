use std::time::Duration;

/// RetryPolicy for transient failures of a single distributor call
///
/// A call is attempted once, then retried up to `max_retries` times with a
/// fixed `delay` between attempts. Only failures the caller classifies as
/// transient are retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_retries: u32,
    delay: Duration,
}

impl RetryPolicy {
    pub const DEFAULT_MAX_RETRIES: u32 = 3;
    pub const DEFAULT_DELAY_MS: u64 = 1000;
    /// Upper bound accepted from the command line and config file
    pub const MAX_RETRIES: u32 = 10;

    pub fn new(max_retries: u32, delay: Duration) -> Self {
        Self { max_retries, delay }
    }

    /// Single attempt, no waiting
    pub fn no_retry() -> Self {
        Self::new(0, Duration::ZERO)
    }

    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Whether another attempt is allowed after `attempt` (1-based) failed
    pub fn should_retry(&self, attempt: u32) -> bool {
        attempt < self.max_attempts()
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_MAX_RETRIES,
            Duration::from_millis(Self::DEFAULT_DELAY_MS),
        )
    }
}
