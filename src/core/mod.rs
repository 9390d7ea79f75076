//! Core module - the playfield simulation
//!
//! Settled-block grid, falling piece, gravity driver and their supporting
//! pieces (sampler, scoring policy, snapshots). No I/O, no rendering.

pub mod board;
pub mod game;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod snapshot;

// Re-export commonly used types
pub use board::Board;
pub use game::{EventSink, GameSession};
pub use piece::Piece;
pub use rng::{PieceSampler, SimpleRng};
pub use scoring::{fall_interval_ticks, score_for_lines};
pub use snapshot::{BoardView, PieceView, SessionSnapshot};
