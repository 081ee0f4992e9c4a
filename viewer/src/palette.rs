//! Colors, and the per-cell layer priority that picks one of them.

use engine::graphics::Color;
use serde::{Deserialize, Serialize};

use crate::cell::{Cell, PieceKind};

/// One color per piece kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub i: Color,
    pub o: Color,
    pub s: Color,
    pub z: Color,
    pub j: Color,
    pub l: Color,
    pub t: Color,
}

impl Palette {
    pub fn color(&self, kind: PieceKind) -> Color {
        match kind {
            PieceKind::I => self.i,
            PieceKind::O => self.o,
            PieceKind::S => self.s,
            PieceKind::Z => self.z,
            PieceKind::J => self.j,
            PieceKind::L => self.l,
            PieceKind::T => self.t,
        }
    }
}

/// Settled blocks.
pub const TERRAIN_PALETTE: Palette = Palette {
    i: [230, 102, 102, 255],
    o: [230, 230, 102, 255],
    s: [255, 102, 255, 255],
    z: [128, 255, 51, 255],
    j: [128, 128, 255, 255],
    l: [255, 179, 77, 255],
    t: [77, 230, 230, 255],
};

/// The falling piece and the next-piece preview.
pub const PIECE_PALETTE: Palette = Palette {
    i: [0, 229, 255, 255],
    o: [255, 215, 0, 255],
    s: [0, 200, 0, 255],
    z: [220, 20, 60, 255],
    j: [30, 144, 255, 255],
    l: [255, 140, 0, 255],
    t: [186, 85, 211, 255],
};

pub const COLOR_BACKGROUND: Color = [10, 10, 14, 255];
pub const COLOR_GRID: Color = [28, 28, 38, 255];
pub const COLOR_FRAME: Color = [90, 90, 110, 255];
pub const COLOR_TEXT: Color = [220, 220, 230, 255];

/// Every color the viewer draws with. Built once at start-up and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub terrain: Palette,
    pub piece: Palette,
    pub background: Color,
    pub grid: Color,
    pub frame: Color,
    pub text: Color,
}

impl Theme {
    pub const DEFAULT: Theme = Theme {
        terrain: TERRAIN_PALETTE,
        piece: PIECE_PALETTE,
        background: COLOR_BACKGROUND,
        grid: COLOR_GRID,
        frame: COLOR_FRAME,
        text: COLOR_TEXT,
    };

    /// Terrain wins over the overlay, the overlay wins over the background.
    pub fn resolve(&self, terrain: Cell, overlay: Cell) -> Color {
        match (terrain, overlay) {
            (Cell::Piece(kind), _) => self.terrain.color(kind),
            (Cell::Empty, Cell::Piece(kind)) => self.piece.color(kind),
            (Cell::Empty, Cell::Empty) => self.background,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// [`Theme::resolve`] against the default theme.
pub fn resolve(terrain: Cell, overlay: Cell) -> Color {
    Theme::DEFAULT.resolve(terrain, overlay)
}
