//! Property tests for the cell layout and the color resolver.
//!
//! 1. Distinct cells never overlap, within a region or across the board and preview.
//! 2. Every board cell sits inside the frame bars and on the surface.
//! 3. Drawn preview rows stay above the top frame bar.
//! 4. Terrain always decides the color when present.
//! 5. The pacer never ticks twice within one interval.

use std::time::Duration;

use proptest::prelude::*;
use viewer::{
    cell::{BOARD_HEIGHT, BOARD_WIDTH, Cell, PREVIEW_HEIGHT, PREVIEW_WIDTH},
    geometry::{GridGeometry, PREVIEW_FIRST_ROW, Region},
    pacer::{FramePacer, PaceDecision},
    palette::{Theme, resolve},
};

fn cell_strategy() -> impl Strategy<Value = Cell> {
    prop::sample::select(Cell::ALL.to_vec())
}

fn board_pos() -> impl Strategy<Value = (usize, usize)> {
    (0..BOARD_HEIGHT, 0..BOARD_WIDTH)
}

/// Preview cells that are actually drawn.
fn preview_pos() -> impl Strategy<Value = (usize, usize)> {
    (PREVIEW_FIRST_ROW..PREVIEW_HEIGHT, 0..PREVIEW_WIDTH)
}

proptest! {
    #[test]
    fn distinct_board_cells_do_not_overlap(
        cs in 1u32..=64,
        a in board_pos(),
        b in board_pos(),
    ) {
        prop_assume!(a != b);
        let geo = GridGeometry::new(cs);
        let ra = geo.cell_rect(Region::Board, a.0, a.1);
        let rb = geo.cell_rect(Region::Board, b.0, b.1);
        prop_assert!(!ra.intersects(&rb), "{:?} overlaps {:?}", ra, rb);
    }
}

proptest! {
    #[test]
    fn distinct_preview_cells_do_not_overlap(
        cs in 1u32..=64,
        a in preview_pos(),
        b in preview_pos(),
    ) {
        prop_assume!(a != b);
        let geo = GridGeometry::new(cs);
        let ra = geo.cell_rect(Region::Preview, a.0, a.1);
        let rb = geo.cell_rect(Region::Preview, b.0, b.1);
        prop_assert!(!ra.intersects(&rb), "{:?} overlaps {:?}", ra, rb);
    }
}

proptest! {
    #[test]
    fn preview_and_board_cells_do_not_overlap(
        cs in 1u32..=64,
        board in board_pos(),
        preview in preview_pos(),
    ) {
        let geo = GridGeometry::new(cs);
        let rb = geo.cell_rect(Region::Board, board.0, board.1);
        let rp = geo.cell_rect(Region::Preview, preview.0, preview.1);
        prop_assert!(!rb.intersects(&rp), "board {:?} overlaps preview {:?}", rb, rp);
    }
}

proptest! {
    #[test]
    fn board_cells_sit_inside_the_frame(cs in 1u32..=64, pos in board_pos()) {
        let geo = GridGeometry::new(cs);
        let rect = geo.cell_rect(Region::Board, pos.0, pos.1);
        let surface = geo.surface_rect();
        prop_assert!(rect.right() <= surface.right());
        prop_assert!(rect.bottom() <= surface.bottom());
        for bar in geo.frame_rects() {
            prop_assert!(!bar.intersects(&rect), "bar {:?} covers cell {:?}", bar, rect);
        }
    }
}

proptest! {
    #[test]
    fn preview_rows_stay_above_the_frame(
        cs in 1u32..=64,
        row in PREVIEW_FIRST_ROW..PREVIEW_HEIGHT,
        col in 0..PREVIEW_WIDTH,
    ) {
        let geo = GridGeometry::new(cs);
        let rect = geo.cell_rect(Region::Preview, row, col);
        prop_assert!(rect.right() <= geo.surface_rect().right());
        let [top_bar, ..] = geo.frame_rects();
        prop_assert!(rect.bottom() <= top_bar.y);
    }
}

proptest! {
    #[test]
    fn terrain_decides_when_present(terrain in cell_strategy(), overlay in cell_strategy()) {
        let color = resolve(terrain, overlay);
        match terrain.piece() {
            Some(kind) => prop_assert_eq!(color, Theme::DEFAULT.terrain.color(kind)),
            None => prop_assert_eq!(color, resolve(Cell::Empty, overlay)),
        }
    }
}

proptest! {
    #[test]
    fn pacer_ticks_are_spaced_by_more_than_the_threshold(
        threshold_ms in 1u64..200,
        deltas in prop::collection::vec(0u64..150, 1..64),
    ) {
        let mut deltas = deltas;
        let threshold = Duration::from_millis(threshold_ms);
        let mut pacer = FramePacer::new(threshold);
        let mut now = Duration::ZERO;
        let mut last_tick = None;
        deltas.insert(0, 0);
        for delta in deltas {
            now += Duration::from_millis(delta);
            if let PaceDecision::Tick { elapsed } = pacer.observe(now) {
                prop_assert!(elapsed > threshold);
                if let Some(prev) = last_tick {
                    prop_assert!(now - prev > threshold);
                }
                last_tick = Some(now);
            }
        }
    }
}
