#![allow(dead_code)]

use viewer::{
    cell::{BOARD_CELLS, Cell, PREVIEW_CELLS, PieceKind, board_index, preview_overlay},
    model::{Advance, Model},
};

/// In-memory model with hand-placed layers. Each `advance` consumes one entry of
/// `cleared_per_step`; once they run out the model reports `Exhausted`.
#[derive(Debug, Clone)]
pub struct ScriptedModel {
    pub board: Vec<Cell>,
    pub active: Vec<Cell>,
    pub next: Vec<Cell>,
    pub cleared_per_step: Vec<u8>,
    pub advances: u32,
    pub clear_counts: [u32; 4],
    pub total_lines: u32,
}

impl ScriptedModel {
    pub fn empty() -> Self {
        Self {
            board: vec![Cell::Empty; BOARD_CELLS],
            active: vec![Cell::Empty; BOARD_CELLS],
            next: vec![Cell::Empty; PREVIEW_CELLS],
            cleared_per_step: Vec::new(),
            advances: 0,
            clear_counts: [0; 4],
            total_lines: 0,
        }
    }

    pub fn with_steps(steps: usize) -> Self {
        Self {
            cleared_per_step: vec![0; steps],
            ..Self::empty()
        }
    }

    pub fn set_terrain(&mut self, row: usize, col: usize, kind: PieceKind) {
        self.board[board_index(row, col)] = Cell::Piece(kind);
    }

    pub fn set_active(&mut self, row: usize, col: usize, kind: PieceKind) {
        self.active[board_index(row, col)] = Cell::Piece(kind);
    }

    pub fn set_next(&mut self, kind: PieceKind) {
        self.next = preview_overlay(Some(kind)).to_vec();
    }
}

impl Model for ScriptedModel {
    fn advance(&mut self) -> Advance {
        let Some(&cleared) = self.cleared_per_step.get(self.advances as usize) else {
            return Advance::Exhausted;
        };
        self.advances += 1;
        if cleared > 0 {
            self.clear_counts[cleared as usize - 1] += 1;
            self.total_lines += u32::from(cleared);
        }
        Advance::Stepped
    }

    fn board(&self) -> &[Cell] {
        &self.board
    }

    fn active_piece(&self) -> &[Cell] {
        &self.active
    }

    fn next_piece(&self) -> &[Cell] {
        &self.next
    }

    fn clear_counts(&self) -> [u32; 4] {
        self.clear_counts
    }

    fn total_lines(&self) -> u32 {
        self.total_lines
    }

    fn total_steps(&self) -> u32 {
        self.advances
    }
}
