//! A `Model` that plays back a recorded game.
//!
//! The recording is the opaque blob handed to the model at construction:
//!
//! ```json
//! {
//!   "version": 1,
//!   "frames": [
//!     { "field": ["..........", "..."], "piece": "T", "cells": [[18, 4]], "next": "I", "cleared": 0 }
//!   ]
//! }
//! ```
//!
//! `field` lists the settled rows top to bottom, `piece`/`cells` place the falling piece,
//! `next` names the upcoming piece and `cleared` is the number of lines the step that
//! produced the frame removed. Playback starts on frame 0 with zero counters; once the last
//! frame is shown, `advance` reports `Exhausted` and the final state is held.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    cell::{
        BOARD_CELLS, BOARD_HEIGHT, BOARD_WIDTH, Cell, EMPTY_SYMBOL, PREVIEW_CELLS, PieceKind,
        board_index, preview_overlay,
    },
    error::{Result, ViewerError},
    model::{Advance, Model},
};

pub const REPLAY_VERSION: u32 = 1;
const MAX_CLEARED: u8 = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recording {
    #[serde(default = "default_version")]
    pub version: u32,
    pub frames: Vec<RecordedFrame>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordedFrame {
    pub field: Vec<String>,
    pub piece: Option<PieceKind>,
    pub cells: Vec<(usize, usize)>,
    pub next: Option<PieceKind>,
    pub cleared: u8,
}

fn default_version() -> u32 {
    REPLAY_VERSION
}

#[derive(Debug, Clone)]
struct DecodedFrame {
    board: Vec<Cell>,
    active: Vec<Cell>,
    next: [Cell; PREVIEW_CELLS],
    cleared: u8,
}

#[derive(Debug, Clone)]
pub struct ReplayModel {
    frames: Vec<DecodedFrame>,
    cursor: usize,
    clear_counts: [u32; 4],
    total_lines: u32,
    total_steps: u32,
}

impl ReplayModel {
    pub fn from_json(blob: &str) -> Result<Self> {
        let recording: Recording = serde_json::from_str(blob)?;
        Self::from_recording(&recording)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "reading replay");
        Self::from_json(&fs::read_to_string(path)?)
    }

    pub fn from_recording(recording: &Recording) -> Result<Self> {
        if recording.version != REPLAY_VERSION {
            return Err(ViewerError::InvalidReplay(format!(
                "unsupported version {} (expected {REPLAY_VERSION})",
                recording.version
            )));
        }
        if recording.frames.is_empty() {
            return Err(ViewerError::InvalidReplay("recording has no frames".into()));
        }

        let frames = recording
            .frames
            .iter()
            .enumerate()
            .map(|(i, frame)| decode_frame(i, frame))
            .collect::<Result<Vec<_>>>()?;

        tracing::info!(frames = frames.len(), "replay loaded");
        Ok(Self {
            frames,
            cursor: 0,
            clear_counts: [0; 4],
            total_lines: 0,
            total_steps: 0,
        })
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor + 1 >= self.frames.len()
    }

    fn current(&self) -> &DecodedFrame {
        &self.frames[self.cursor]
    }
}

impl Model for ReplayModel {
    fn advance(&mut self) -> Advance {
        if self.is_exhausted() {
            return Advance::Exhausted;
        }
        self.cursor += 1;

        let cleared = self.frames[self.cursor].cleared;
        if cleared > 0 {
            self.clear_counts[usize::from(cleared - 1)] += 1;
        }
        self.total_lines += u32::from(cleared);
        self.total_steps += 1;
        Advance::Stepped
    }

    fn board(&self) -> &[Cell] {
        &self.current().board
    }

    fn active_piece(&self) -> &[Cell] {
        &self.current().active
    }

    fn next_piece(&self) -> &[Cell] {
        &self.current().next
    }

    fn clear_counts(&self) -> [u32; 4] {
        self.clear_counts
    }

    fn total_lines(&self) -> u32 {
        self.total_lines
    }

    fn total_steps(&self) -> u32 {
        self.total_steps
    }
}

fn decode_frame(index: usize, frame: &RecordedFrame) -> Result<DecodedFrame> {
    if frame.cleared > MAX_CLEARED {
        return Err(ViewerError::InvalidReplay(format!(
            "frame {index} clears {} lines (at most {MAX_CLEARED})",
            frame.cleared
        )));
    }
    if frame.field.len() > BOARD_HEIGHT {
        tracing::warn!(
            frame = index,
            rows = frame.field.len(),
            "field has extra rows; ignoring them"
        );
    }

    let mut board = vec![Cell::Empty; BOARD_CELLS];
    let mut unknown = 0usize;
    for (row, line) in frame.field.iter().take(BOARD_HEIGHT).enumerate() {
        for (col, symbol) in line.chars().take(BOARD_WIDTH).enumerate() {
            let cell = Cell::from_symbol(symbol);
            if cell.is_empty() && symbol != EMPTY_SYMBOL {
                unknown += 1;
            }
            board[board_index(row, col)] = cell;
        }
    }
    if unknown > 0 {
        tracing::warn!(frame = index, unknown, "unrecognised field symbols read as empty");
    }

    let mut active = vec![Cell::Empty; BOARD_CELLS];
    match frame.piece {
        Some(kind) => {
            for &(row, col) in &frame.cells {
                if row < BOARD_HEIGHT && col < BOARD_WIDTH {
                    active[board_index(row, col)] = Cell::Piece(kind);
                } else {
                    tracing::warn!(frame = index, row, col, "piece cell off the board; dropped");
                }
            }
        }
        None if !frame.cells.is_empty() => {
            tracing::warn!(frame = index, "piece cells without a piece kind; dropped");
        }
        None => {}
    }

    Ok(DecodedFrame {
        board,
        active,
        next: preview_overlay(frame.next),
        cleared: frame.cleared,
    })
}
