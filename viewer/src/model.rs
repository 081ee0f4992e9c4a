//! The game engine seen from the presentation layer.
//!
//! The viewer only queries and advances a `Model`; it never looks at how the model decides
//! anything. All sequences are borrowed per query, so nothing here can hold on to a model's
//! buffers past the frame that read them.

use crate::cell::Cell;

/// Result of one `Model::advance` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// The model moved forward one step; `total_steps` grew by exactly one.
    Stepped,
    /// The input is used up. State and counters are unchanged.
    Exhausted,
}

pub trait Model {
    fn advance(&mut self) -> Advance;

    /// 200 settled cells, row-major, row 0 at the top.
    fn board(&self) -> &[Cell];
    /// 200 cells, empty except under the falling piece.
    fn active_piece(&self) -> &[Cell];
    /// 16 cells (4x4), the upcoming piece in its spawn orientation.
    fn next_piece(&self) -> &[Cell];

    /// Lifetime counts of 1-, 2-, 3- and 4-line clears.
    fn clear_counts(&self) -> [u32; 4];
    fn total_lines(&self) -> u32;
    fn total_steps(&self) -> u32;
}

impl<M: Model + ?Sized> Model for Box<M> {
    fn advance(&mut self) -> Advance {
        (**self).advance()
    }

    fn board(&self) -> &[Cell] {
        (**self).board()
    }

    fn active_piece(&self) -> &[Cell] {
        (**self).active_piece()
    }

    fn next_piece(&self) -> &[Cell] {
        (**self).next_piece()
    }

    fn clear_counts(&self) -> [u32; 4] {
        (**self).clear_counts()
    }

    fn total_lines(&self) -> u32 {
        (**self).total_lines()
    }

    fn total_steps(&self) -> u32 {
        (**self).total_steps()
    }
}
