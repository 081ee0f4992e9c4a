use std::time::Duration;

/// Wall-clock cost of one paced tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickTimings {
    pub advance: Duration,
    pub render: Duration,
    pub total: Duration,
}

/// Optional hook for capturing per-tick timings. Knows nothing about the model being driven.
pub trait Profiler {
    fn on_tick(&mut self, _step: u32, _timings: TickTimings) {}
}

/// A profiler that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopProfiler;

impl Profiler for NoopProfiler {}
