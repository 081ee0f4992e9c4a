use std::time::{Duration, Instant};

use engine::{
    app::{FrameControl, FrameHandler},
    graphics::Renderer2d,
    profiling::{NoopProfiler, Profiler, TickTimings},
};

use crate::{
    compositor::BoardCompositor,
    model::{Advance, Model},
    pacer::{FramePacer, PaceDecision},
    stats::{StatsPanel, format_model_stats},
};

/// Result of feeding one timestamp to the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// No tick this refresh (first timestamp, or the interval has not elapsed).
    Idle,
    /// One advance and one render pass ran.
    Ticked(Advance),
    Stopped,
}

/// Drives a model from a timestamp stream and paints it.
pub struct Viewer<M: Model> {
    model: M,
    pacer: FramePacer,
    compositor: BoardCompositor,
    stats_panel: StatsPanel,
    stats_text: String,
    reported_exhaustion: bool,
}

impl<M: Model> Viewer<M> {
    pub fn new(model: M, pacer: FramePacer, compositor: BoardCompositor) -> Self {
        let geometry = compositor.geometry();
        let stats_panel = StatsPanel::new(geometry.text_region(), geometry.cell_size() / 2);
        let stats_text = format_model_stats(&model);
        Self {
            model,
            pacer,
            compositor,
            stats_panel,
            stats_text,
            reported_exhaustion: false,
        }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn pacer(&self) -> &FramePacer {
        &self.pacer
    }

    pub fn compositor(&self) -> &BoardCompositor {
        &self.compositor
    }

    /// Text most recently produced for the stats region.
    pub fn stats_text(&self) -> &str {
        &self.stats_text
    }

    /// Stops issuing ticks; every later frame reports `Stopped`.
    pub fn stop(&mut self) {
        if !self.pacer.is_stopped() {
            tracing::info!(steps = self.model.total_steps(), "viewer stopped");
        }
        self.pacer.stop();
    }

    /// Paints the current model state without advancing it.
    pub fn render_now(&mut self, gfx: &mut dyn Renderer2d) {
        self.compositor.render_model(gfx, &self.model);
        self.stats_text = format_model_stats(&self.model);
        self.stats_panel
            .render(gfx, self.compositor.theme(), &self.stats_text);
    }

    pub fn on_timestamp(&mut self, now: Duration, gfx: &mut dyn Renderer2d) -> FrameOutcome {
        self.on_timestamp_profiled(now, gfx, &mut NoopProfiler)
    }

    pub fn on_timestamp_profiled<P: Profiler + ?Sized>(
        &mut self,
        now: Duration,
        gfx: &mut dyn Renderer2d,
        profiler: &mut P,
    ) -> FrameOutcome {
        match self.pacer.observe(now) {
            PaceDecision::Stopped => FrameOutcome::Stopped,
            PaceDecision::Primed => {
                tracing::debug!(now_ms = now.as_millis() as u64, "pacer primed");
                FrameOutcome::Idle
            }
            PaceDecision::Wait => {
                tracing::trace!(now_ms = now.as_millis() as u64, "waiting for interval");
                FrameOutcome::Idle
            }
            PaceDecision::Tick { elapsed } => {
                let advance = self.tick(gfx, profiler);
                tracing::debug!(
                    step = self.model.total_steps(),
                    elapsed_ms = elapsed.as_millis() as u64,
                    ?advance,
                    "tick"
                );
                FrameOutcome::Ticked(advance)
            }
        }
    }

    fn tick<P: Profiler + ?Sized>(&mut self, gfx: &mut dyn Renderer2d, profiler: &mut P) -> Advance {
        let total_start = Instant::now();

        let advance_start = Instant::now();
        let advance = self.model.advance();
        let advance_dt = advance_start.elapsed();

        if advance == Advance::Exhausted && !self.reported_exhaustion {
            self.reported_exhaustion = true;
            tracing::info!(
                steps = self.model.total_steps(),
                "model input exhausted; holding the last state"
            );
        }

        let render_start = Instant::now();
        self.render_now(gfx);
        let render_dt = render_start.elapsed();

        profiler.on_tick(
            self.model.total_steps(),
            TickTimings {
                advance: advance_dt,
                render: render_dt,
                total: total_start.elapsed(),
            },
        );
        advance
    }
}

impl<M: Model> FrameHandler for Viewer<M> {
    fn init(&mut self, gfx: &mut dyn Renderer2d) {
        self.render_now(gfx);
    }

    fn on_frame(&mut self, now: Duration, gfx: &mut dyn Renderer2d) -> FrameControl {
        match self.on_timestamp(now, gfx) {
            FrameOutcome::Stopped => FrameControl::Exit,
            FrameOutcome::Idle | FrameOutcome::Ticked(_) => FrameControl::Continue,
        }
    }

    fn on_escape(&mut self) {
        self.stop();
    }
}
