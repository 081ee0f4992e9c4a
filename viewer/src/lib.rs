//! Presentation and pacing layer for a falling-block puzzle game.
//!
//! A [`model::Model`] owns the game; this crate decides when to advance it and how to
//! draw it.

pub mod cell;
pub mod compositor;
pub mod error;
pub mod geometry;
pub mod logging;
pub mod model;
pub mod pacer;
pub mod palette;
pub mod replay;
pub mod settings;
pub mod stats;
pub mod viewer;

/// Sample recording bundled with the binary.
pub const SAMPLE_REPLAY: &str = include_str!("../assets/sample_replay.json");
