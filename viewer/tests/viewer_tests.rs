mod common;

use std::time::Duration;

use common::ScriptedModel;
use engine::{
    app::{FrameControl, FrameHandler},
    graphics::pixel_at,
    profiling::{Profiler, TickTimings},
    surface::{RgbaBufferSurface, Surface},
};
use viewer::{
    cell::PieceKind,
    compositor::BoardCompositor,
    geometry::{GridGeometry, Region},
    model::{Advance, Model},
    pacer::FramePacer,
    palette::{PIECE_PALETTE, Theme},
    viewer::{FrameOutcome, Viewer},
};

const CS: u32 = 8;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn viewer_for(model: ScriptedModel, threshold_ms: u64) -> (Viewer<ScriptedModel>, RgbaBufferSurface) {
    let geometry = GridGeometry::new(CS);
    let surface = RgbaBufferSurface::new(geometry.window_size());
    let viewer = Viewer::new(
        model,
        FramePacer::new(ms(threshold_ms)),
        BoardCompositor::new(geometry, Theme::DEFAULT),
    );
    (viewer, surface)
}

fn feed(
    viewer: &mut Viewer<ScriptedModel>,
    surface: &mut RgbaBufferSurface,
    stamps: &[u64],
) -> Vec<FrameOutcome> {
    stamps
        .iter()
        .map(|&t| viewer.on_timestamp(ms(t), &mut surface.renderer()))
        .collect()
}

#[test]
fn advances_once_after_interval_elapses() {
    let (mut viewer, mut surface) = viewer_for(ScriptedModel::with_steps(10), 60);

    let outcomes = feed(&mut viewer, &mut surface, &[0, 10, 20, 70]);

    assert_eq!(
        outcomes,
        vec![
            FrameOutcome::Idle,
            FrameOutcome::Idle,
            FrameOutcome::Idle,
            FrameOutcome::Ticked(Advance::Stepped),
        ]
    );
    assert_eq!(viewer.model().total_steps(), 1);
}

#[test]
fn ticks_measure_from_the_last_tick() {
    let (mut viewer, mut surface) = viewer_for(ScriptedModel::with_steps(10), 60);

    feed(&mut viewer, &mut surface, &[0, 30, 65, 100, 126]);

    // 65 ticks (65 > 60 since 0); 100 is only 35 after 65; 126 is 61 after 65.
    assert_eq!(viewer.model().total_steps(), 2);
}

#[test]
fn interval_exactly_equal_to_threshold_does_not_tick() {
    let (mut viewer, mut surface) = viewer_for(ScriptedModel::with_steps(10), 60);

    let outcomes = feed(&mut viewer, &mut surface, &[0, 60]);

    assert_eq!(outcomes, vec![FrameOutcome::Idle, FrameOutcome::Idle]);
    assert_eq!(viewer.model().total_steps(), 0);
}

#[test]
fn stop_ends_ticking_and_requests_exit() {
    let (mut viewer, mut surface) = viewer_for(ScriptedModel::with_steps(10), 60);
    feed(&mut viewer, &mut surface, &[0, 100]);
    assert_eq!(viewer.model().total_steps(), 1);

    viewer.on_escape();

    assert_eq!(
        viewer.on_timestamp(ms(1_000), &mut surface.renderer()),
        FrameOutcome::Stopped
    );
    assert_eq!(
        viewer.on_frame(ms(2_000), &mut surface.renderer()),
        FrameControl::Exit
    );
    assert_eq!(viewer.model().total_steps(), 1);
}

#[test]
fn exhausted_model_keeps_rendering() {
    let (mut viewer, mut surface) = viewer_for(ScriptedModel::with_steps(1), 10);

    let outcomes = feed(&mut viewer, &mut surface, &[0, 20, 40, 60]);

    assert_eq!(
        outcomes,
        vec![
            FrameOutcome::Idle,
            FrameOutcome::Ticked(Advance::Stepped),
            FrameOutcome::Ticked(Advance::Exhausted),
            FrameOutcome::Ticked(Advance::Exhausted),
        ]
    );
    assert_eq!(viewer.model().total_steps(), 1);
    assert!(!viewer.pacer().is_stopped());
}

#[test]
fn stats_text_follows_the_model() {
    let mut model = ScriptedModel::with_steps(3);
    model.cleared_per_step = vec![1, 4, 0];
    let (mut viewer, mut surface) = viewer_for(model, 10);
    assert!(viewer.stats_text().ends_with("Pieces: 0"));

    feed(&mut viewer, &mut surface, &[0, 20, 40, 60]);

    let lines: Vec<&str> = viewer.stats_text().lines().collect();
    assert_eq!(lines[0], "Single: 1");
    assert_eq!(lines[3], "Quad:   1");
    assert_eq!(lines[5], "Lines:  5");
    assert_eq!(lines[6], "Pieces: 3");
}

#[test]
fn init_paints_before_any_timestamp() {
    let mut model = ScriptedModel::empty();
    model.set_active(5, 5, PieceKind::O);
    let (mut viewer, mut surface) = viewer_for(model, 60);

    viewer.init(&mut surface.renderer());

    let rect = GridGeometry::new(CS).cell_rect(Region::Board, 5, 5);
    assert_eq!(
        pixel_at(surface.frame(), surface.size(), rect.x + 1, rect.y + 1),
        Some(PIECE_PALETTE.o)
    );
    // Stats text lands in the region to the right of the board surface.
    let text = viewer.compositor().geometry().text_region();
    let painted = (text.y..text.bottom())
        .flat_map(|y| (text.x..text.right()).map(move |x| (x, y)))
        .any(|(x, y)| {
            pixel_at(surface.frame(), surface.size(), x, y) == Some(Theme::DEFAULT.text)
        });
    assert!(painted);
}

#[derive(Default)]
struct RecordingProfiler {
    steps: Vec<u32>,
}

impl Profiler for RecordingProfiler {
    fn on_tick(&mut self, step: u32, timings: TickTimings) {
        assert!(timings.total >= timings.render);
        self.steps.push(step);
    }
}

#[test]
fn profiler_sees_every_tick() {
    let (mut viewer, mut surface) = viewer_for(ScriptedModel::with_steps(5), 10);
    let mut profiler = RecordingProfiler::default();

    for t in [0, 5, 20, 25, 40] {
        viewer.on_timestamp_profiled(ms(t), &mut surface.renderer(), &mut profiler);
    }

    assert_eq!(profiler.steps, vec![1, 2]);
}
