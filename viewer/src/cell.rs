//! Cell symbols and board dimensions.

use serde::{Deserialize, Serialize};

pub const BOARD_WIDTH: usize = 10;
pub const BOARD_HEIGHT: usize = 20;
pub const BOARD_CELLS: usize = BOARD_WIDTH * BOARD_HEIGHT;

pub const PREVIEW_WIDTH: usize = 4;
pub const PREVIEW_HEIGHT: usize = 4;
pub const PREVIEW_CELLS: usize = PREVIEW_WIDTH * PREVIEW_HEIGHT;

/// Text symbol for an empty cell.
pub const EMPTY_SYMBOL: char = '.';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    I,
    O,
    S,
    Z,
    J,
    L,
    T,
}

impl PieceKind {
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
        PieceKind::T,
    ];

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'I' => Some(PieceKind::I),
            'O' => Some(PieceKind::O),
            'S' => Some(PieceKind::S),
            'Z' => Some(PieceKind::Z),
            'J' => Some(PieceKind::J),
            'L' => Some(PieceKind::L),
            'T' => Some(PieceKind::T),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::O => 'O',
            PieceKind::S => 'S',
            PieceKind::Z => 'Z',
            PieceKind::J => 'J',
            PieceKind::L => 'L',
            PieceKind::T => 'T',
        }
    }
}

/// One board cell: empty, or occupied by a piece of some kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    Piece(PieceKind),
}

impl Cell {
    /// All 8 legal cell values.
    pub const ALL: [Cell; 8] = [
        Cell::Empty,
        Cell::Piece(PieceKind::I),
        Cell::Piece(PieceKind::O),
        Cell::Piece(PieceKind::S),
        Cell::Piece(PieceKind::Z),
        Cell::Piece(PieceKind::J),
        Cell::Piece(PieceKind::L),
        Cell::Piece(PieceKind::T),
    ];

    /// Decodes a text symbol. Anything outside the alphabet reads as empty.
    pub fn from_symbol(symbol: char) -> Self {
        PieceKind::from_symbol(symbol).map_or(Cell::Empty, Cell::Piece)
    }

    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => EMPTY_SYMBOL,
            Cell::Piece(kind) => kind.symbol(),
        }
    }

    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn piece(self) -> Option<PieceKind> {
        match self {
            Cell::Empty => None,
            Cell::Piece(kind) => Some(kind),
        }
    }
}

impl From<PieceKind> for Cell {
    fn from(kind: PieceKind) -> Self {
        Cell::Piece(kind)
    }
}

/// Row-major index of `(row, col)` on the main board.
pub fn board_index(row: usize, col: usize) -> usize {
    row * BOARD_WIDTH + col
}

/// Row-major index of `(row, col)` in the next-piece overlay.
pub fn preview_index(row: usize, col: usize) -> usize {
    row * PREVIEW_WIDTH + col
}

/// Canonical spawn orientation of each piece in a 4x4 box.
///
/// `I` sits on row 1; every other piece occupies rows 2 and 3.
#[rustfmt::skip]
pub fn spawn_shape(kind: PieceKind) -> [&'static str; 4] {
    match kind {
        PieceKind::I => ["....",
                         "####",
                         "....",
                         "...."],
        PieceKind::O => ["....",
                         "....",
                         ".##.",
                         ".##."],
        PieceKind::S => ["....",
                         "....",
                         ".##.",
                         "##.."],
        PieceKind::Z => ["....",
                         "....",
                         "##..",
                         ".##."],
        PieceKind::J => ["....",
                         "....",
                         "###.",
                         "..#."],
        PieceKind::L => ["....",
                         "....",
                         "###.",
                         "#..."],
        PieceKind::T => ["....",
                         "....",
                         "###.",
                         ".#.."],
    }
}

/// The 16-cell next-piece overlay for `kind`, or an all-empty overlay for `None`.
pub fn preview_overlay(kind: Option<PieceKind>) -> [Cell; PREVIEW_CELLS] {
    let mut cells = [Cell::Empty; PREVIEW_CELLS];
    let Some(kind) = kind else {
        return cells;
    };
    for (row, line) in spawn_shape(kind).iter().enumerate() {
        for (col, mark) in line.chars().enumerate() {
            if mark == '#' {
                cells[preview_index(row, col)] = Cell::Piece(kind);
            }
        }
    }
    cells
}
