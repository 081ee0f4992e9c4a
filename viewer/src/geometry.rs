//! Grid coordinates to pixels.
//!
//! The board surface is laid out on a grid of square cells, `SURFACE_COLS` x `SURFACE_ROWS`:
//!
//! ```text
//! row 0       reserved (preview row 0 is never drawn)
//! rows 1-3    preview panel, columns 4-7
//! row 4       top frame bar
//! rows 5-24   main board, columns 1-10
//! row 25      bottom frame bar
//! ```
//!
//! The left and right frame bars run down columns 0 and 11 from row 4 to row 25.

use engine::{
    surface::SurfaceSize,
    ui::{Line, Rect},
};

use crate::cell::{BOARD_HEIGHT, BOARD_WIDTH, PREVIEW_WIDTH};

pub const DEFAULT_CELL_SIZE: u32 = 24;

pub const SURFACE_COLS: u32 = 12;
pub const SURFACE_ROWS: u32 = 26;

const BOARD_LEFT: u32 = 1;
const BOARD_TOP: u32 = 5;

const PREVIEW_LEFT: u32 = 4;
const PREVIEW_TOP: u32 = 0;

/// First overlay row drawn in the preview panel.
pub const PREVIEW_FIRST_ROW: usize = 1;
/// First overlay row covered by the preview gridlines.
const PREVIEW_GRID_FIRST_ROW: u32 = 2;
const PREVIEW_GRID_ROWS: u32 = 2;

const FRAME_TOP_ROW: u32 = 4;
const FRAME_BOTTOM_ROW: u32 = BOARD_TOP + BOARD_HEIGHT as u32;

/// Width of the stats text region to the right of the board surface, in cells.
pub const STATS_PANEL_COLS: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Board,
    Preview,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridGeometry {
    cell_size: u32,
}

impl GridGeometry {
    pub fn new(cell_size: u32) -> Self {
        Self {
            cell_size: cell_size.max(1),
        }
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    fn px(&self, cells: u32) -> u32 {
        cells.saturating_mul(self.cell_size)
    }

    /// Board surface size: 12 x 26 cells.
    pub fn surface_size(&self) -> SurfaceSize {
        SurfaceSize::new(self.px(SURFACE_COLS), self.px(SURFACE_ROWS))
    }

    /// Board surface plus the stats text region.
    pub fn window_size(&self) -> SurfaceSize {
        SurfaceSize::new(self.px(SURFACE_COLS + STATS_PANEL_COLS), self.px(SURFACE_ROWS))
    }

    pub fn surface_rect(&self) -> Rect {
        let size = self.surface_size();
        Rect::from_size(size.width, size.height)
    }

    pub fn text_region(&self) -> Rect {
        Rect::new(
            self.px(SURFACE_COLS),
            0,
            self.px(STATS_PANEL_COLS),
            self.px(SURFACE_ROWS),
        )
    }

    /// Pixel rectangle of one cell. `row`/`col` are overlay coordinates within the region.
    pub fn cell_rect(&self, region: Region, row: usize, col: usize) -> Rect {
        let (left, top) = match region {
            Region::Board => (BOARD_LEFT, BOARD_TOP),
            Region::Preview => (PREVIEW_LEFT, PREVIEW_TOP),
        };
        Rect::new(
            self.px(left.saturating_add(col as u32)),
            self.px(top.saturating_add(row as u32)),
            self.cell_size,
            self.cell_size,
        )
    }

    /// 11 vertical lines followed by 21 horizontal lines spanning the 10x20 board.
    pub fn board_gridlines(&self) -> Vec<Line> {
        grid_lines(
            self.px(BOARD_LEFT),
            self.px(BOARD_TOP),
            BOARD_WIDTH as u32,
            BOARD_HEIGHT as u32,
            self.cell_size,
        )
    }

    /// 5 vertical lines followed by 3 horizontal lines over preview rows 2-3.
    pub fn preview_gridlines(&self) -> Vec<Line> {
        grid_lines(
            self.px(PREVIEW_LEFT),
            self.px(PREVIEW_TOP + PREVIEW_GRID_FIRST_ROW),
            PREVIEW_WIDTH as u32,
            PREVIEW_GRID_ROWS,
            self.cell_size,
        )
    }

    /// Top, bottom, left and right bars bordering the board.
    pub fn frame_rects(&self) -> [Rect; 4] {
        let cs = self.cell_size;
        let full_w = self.px(SURFACE_COLS);
        let side_h = self.px(FRAME_BOTTOM_ROW + 1 - FRAME_TOP_ROW);
        [
            Rect::new(0, self.px(FRAME_TOP_ROW), full_w, cs),
            Rect::new(0, self.px(FRAME_BOTTOM_ROW), full_w, cs),
            Rect::new(0, self.px(FRAME_TOP_ROW), cs, side_h),
            Rect::new(self.px(SURFACE_COLS - 1), self.px(FRAME_TOP_ROW), cs, side_h),
        ]
    }
}

impl Default for GridGeometry {
    fn default() -> Self {
        Self::new(DEFAULT_CELL_SIZE)
    }
}

fn grid_lines(left: u32, top: u32, cols: u32, rows: u32, cell_size: u32) -> Vec<Line> {
    let offset = |start: u32, n: u32| start.saturating_add(n.saturating_mul(cell_size));
    let right = offset(left, cols);
    let bottom = offset(top, rows);

    let vertical = (0..=cols).map(|c| {
        let x = offset(left, c);
        Line::new(x, top, x, bottom)
    });
    let horizontal = (0..=rows).map(|r| {
        let y = offset(top, r);
        Line::new(left, y, right, y)
    });
    vertical.chain(horizontal).collect()
}
