//! Utility modules.

pub mod timer;

pub use timer::Stopwatch;
