//! Blockfall - a falling-block puzzle playfield simulation.
//!
//! The crate owns the grid of settled blocks, the active piece's
//! move/rotate/collision logic, the line-clear compaction algorithm and the
//! fixed-timestep driver around them. Rendering, audio and input plumbing
//! live with collaborators: they feed [`types::GameAction`] signals in and
//! observe [`core::EventSink`] facts and [`core::SessionSnapshot`] views
//! coming out.

pub mod core;
pub mod schedule;
pub mod types;
