//! Pacing between rounds

use std::time::Duration;

/// Waits between rounds so a renderer can keep up
pub trait Pacer {
    fn wait(&mut self, interval: Duration);
}

/// Blocks the current thread for the interval
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadPacer;

impl Pacer for ThreadPacer {
    fn wait(&mut self, interval: Duration) {
        if !interval.is_zero() {
            std::thread::sleep(interval);
        }
    }
}

/// Headless mode: never waits
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPacer;

impl Pacer for NoPacer {
    fn wait(&mut self, _interval: Duration) {}
}

/// Records requested waits without sleeping
#[derive(Debug, Clone, Default)]
pub struct RecordingPacer {
    pub waits: Vec<Duration>,
}

impl Pacer for RecordingPacer {
    fn wait(&mut self, interval: Duration) {
        self.waits.push(interval);
    }
}
