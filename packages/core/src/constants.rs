// ABOUTME: Constants shared by eval job scheduling
// ABOUTME: Default delay before a new trace is evaluated

use std::time::Duration;

/// Milliseconds to wait after a trace is created before evaluating it, so
/// that its child observations have time to arrive
pub const DEFAULT_TRACE_JOB_DELAY: u64 = 10_000;

pub fn default_trace_job_delay() -> Duration {
    Duration::from_millis(DEFAULT_TRACE_JOB_DELAY)
}
