//! Elapsed-time instrumentation.

use std::time::Instant;

use log::info;

/// A labeled wall-clock stopwatch.
///
/// Purely observational: `stop` reports the elapsed time for the running
/// label through the `log` facade and has no effect on anything else.
///
/// # Examples
///
/// ```
/// use sieva::util::timer::Stopwatch;
///
/// let mut sw = Stopwatch::start("dfa build");
/// assert!(sw.is_started());
/// // ... timed work ...
/// sw.stop();
/// assert!(!sw.is_started());
/// ```
#[derive(Debug, Default)]
pub struct Stopwatch {
    running: Option<(String, Instant)>,
}

impl Stopwatch {
    /// Create an idle stopwatch.
    pub fn new() -> Self {
        Stopwatch::default()
    }

    /// Create a stopwatch and start it immediately.
    pub fn start<S: Into<String>>(label: S) -> Self {
        let mut sw = Stopwatch::new();
        sw.restart(label);
        sw
    }

    /// Start timing under `label`, discarding any running measurement.
    pub fn restart<S: Into<String>>(&mut self, label: S) {
        self.running = Some((label.into(), Instant::now()));
    }

    /// Stop the running measurement and log its elapsed time.
    ///
    /// A no-op when idle.
    pub fn stop(&mut self) {
        if let Some((label, started)) = self.running.take() {
            info!("{label}: {:.3?} elapsed", started.elapsed());
        }
    }

    /// Whether a measurement is running.
    pub fn is_started(&self) -> bool {
        self.running.is_some()
    }
}
