use bevy::prelude::*;

/// Simulation clock passed to every core operation.
///
/// Time is kept in whole milliseconds since the scene started, the same
/// unit effect life spans and animation intervals use.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct SimContext {
    millitime: u64,
    tick: u64,
    time_scale: f64,
}

impl Default for SimContext {
    fn default() -> Self {
        Self::new()
    }
}

impl SimContext {
    pub fn new() -> Self {
        Self {
            millitime: 0,
            tick: 0,
            time_scale: 1.0,
        }
    }

    /// Context frozen at a given time, mostly useful in tests
    pub fn at(millitime: u64) -> Self {
        Self {
            millitime,
            ..Self::new()
        }
    }

    /// Advance by `delta_ms` of wall time, scaled by the time scale
    pub fn advance(&mut self, delta_ms: u64) {
        let scaled = (delta_ms as f64 * self.time_scale).round() as u64;
        self.millitime = self.millitime.saturating_add(scaled);
        self.tick += 1;
    }

    pub fn now_ms(&self) -> u64 {
        self.millitime
    }

    pub fn now_sec(&self) -> f64 {
        self.millitime as f64 / 1000.0
    }

    /// Absolute time `delta_ms` from now
    pub fn after(&self, delta_ms: u64) -> u64 {
        self.millitime.saturating_add(delta_ms)
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    pub fn set_time_scale(&mut self, scale: f64) {
        self.time_scale = scale.max(0.0);
    }

    pub fn reset(&mut self) {
        self.millitime = 0;
        self.tick = 0;
    }
}
