//! Shared constants and pure data types
//!
//! This module contains plain data with no dependencies on the rest of the
//! crate: board dimensions, timing constants, piece kinds and their palette,
//! and the small enums that cross the core's boundary.

use serde::{Deserialize, Serialize};

/// Board dimensions
pub const BOARD_WIDTH: u8 = 10;
pub const BOARD_HEIGHT: u8 = 20;

/// Spawn anchor for new pieces (board-space)
pub const SPAWN_X: i8 = 4;
pub const SPAWN_Y: i8 = 0;

/// Simulation ticks between gravity steps
pub const NORMAL_FALL_TICKS: u32 = 20;
pub const SOFT_DROP_FALL_TICKS: u32 = 3;

/// Wall-clock length of one simulation tick (seconds)
pub const TICK_SECONDS: f64 = 1.0 / 60.0;

/// Post-reset countdown: first piece spawn, then simulation start
pub const SPAWN_DELAY_SECONDS: f64 = 1.0;
pub const START_DELAY_SECONDS: f64 = 1.1;

/// Points awarded per cleared row
pub const LINE_VALUE: u32 = 100;

/// An RGBA color as stored per settled cell and per piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }
}

/// Color of the landing-preview shadow piece
pub const SHADOW_COLOR: Rgba = Rgba::new(40, 40, 40, 150);

/// Cell on the board (None = empty, Some = settled block color)
pub type Cell = Option<Rgba>;

/// Tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    I,
    T,
    Z,
    S,
    O,
    L,
    J,
}

impl PieceKind {
    /// All kinds, in palette order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::T,
        PieceKind::Z,
        PieceKind::S,
        PieceKind::O,
        PieceKind::L,
        PieceKind::J,
    ];

    /// Fixed per-kind color from the 7-entry palette
    pub const fn color(self) -> Rgba {
        match self {
            PieceKind::I => Rgba::opaque(102, 255, 255),
            PieceKind::T => Rgba::opaque(255, 0, 255),
            PieceKind::Z => Rgba::opaque(255, 0, 0),
            PieceKind::S => Rgba::opaque(0, 255, 0),
            PieceKind::O => Rgba::opaque(255, 255, 0),
            PieceKind::L => Rgba::opaque(255, 153, 0),
            PieceKind::J => Rgba::opaque(0, 102, 255),
        }
    }
}

/// Outcome of one downward gravity step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropResult {
    /// The piece moved down one row and keeps falling
    Continue,
    /// Downward motion is blocked by floor or stack; commit the piece
    Landed,
    /// The piece is stuck at the ceiling; the session is over
    GameOver,
}

/// Discrete input signals the driver applies immediately on receipt.
///
/// Soft drop is a held level rather than an event and goes through
/// `GameSession::set_soft_drop` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    RotateCw,
    RotateCcw,
    HardDrop,
    Reset,
}

impl GameAction {
    /// Parse an action from a tape token (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "left" | "moveleft" => Some(GameAction::MoveLeft),
            "right" | "moveright" => Some(GameAction::MoveRight),
            "cw" | "rotatecw" => Some(GameAction::RotateCw),
            "ccw" | "rotateccw" => Some(GameAction::RotateCcw),
            "drop" | "harddrop" => Some(GameAction::HardDrop),
            "reset" => Some(GameAction::Reset),
            _ => None,
        }
    }

    /// Convert to the canonical tape token
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "left",
            GameAction::MoveRight => "right",
            GameAction::RotateCw => "cw",
            GameAction::RotateCcw => "ccw",
            GameAction::HardDrop => "drop",
            GameAction::Reset => "reset",
        }
    }
}
