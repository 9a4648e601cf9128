//! Monotonic clock for timing compiler passes.

use std::sync::OnceLock;
use std::time::Instant;

static EPOCH: OnceLock<Instant> = OnceLock::new();

/// Seconds elapsed on a monotonic clock.
///
/// The origin is the first call in the process, so only differences between
/// two readings are meaningful.
pub fn now() -> f64 {
    EPOCH.get_or_init(Instant::now).elapsed().as_secs_f64()
}

/// Measures how long a pass takes.
#[derive(Copy, Clone, Debug)]
pub struct Stopwatch {
    started: f64,
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::start()
    }
}

impl Stopwatch {
    pub fn start() -> Self {
        Stopwatch { started: now() }
    }

    /// Seconds since [`Stopwatch::start`].
    pub fn elapsed(&self) -> f64 {
        now() - self.started
    }

    /// Log the elapsed time for `pass` and return it.
    pub fn finish(self, pass: &str) -> f64 {
        let seconds = self.elapsed();
        tracing::debug!(pass, seconds, "pass finished");
        seconds
    }
}

#[cfg(test)]
mod tests;
