//! Read-only session views for rendering collaborators
//!
//! Plain serializable values: cell colors, piece cell positions, score and
//! lifecycle flags. Nothing here can mutate the session.

use serde::{Deserialize, Serialize};

use crate::core::piece::Piece;
use crate::types::{Cell, PieceKind, Rgba, BOARD_HEIGHT, BOARD_WIDTH};

/// The settled grid as rows of cell colors, `[y][x]` indexed
pub type BoardView = [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];

/// A piece reduced to what a renderer needs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceView {
    pub kind: PieceKind,
    pub cells: [(i8, i8); 4],
    pub color: Rgba,
}

impl From<&Piece> for PieceView {
    fn from(piece: &Piece) -> Self {
        Self {
            kind: piece.kind(),
            cells: piece.cells(),
            color: piece.color(),
        }
    }
}

/// One complete observable state of a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub board: BoardView,
    pub active: Option<PieceView>,
    pub shadow: Option<PieceView>,
    pub next_kind: PieceKind,
    pub score: u32,
    pub lines: u32,
    pub running: bool,
    pub game_over: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::game::GameSession;

    #[test]
    fn test_snapshot_json_roundtrip() {
        let mut session = GameSession::new(9);
        session.reset();
        session.advance_clock(1.2);
        session.tick(&mut ());

        let snapshot = session.snapshot();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: SessionSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }

    #[test]
    fn test_snapshot_reflects_session() {
        let mut session = GameSession::new(9);
        session.reset();
        session.advance_clock(1.2);

        let snapshot = session.snapshot();
        assert!(snapshot.running);
        assert!(!snapshot.game_over);
        assert_eq!(snapshot.score, 0);
        assert_eq!(snapshot.next_kind, session.next_kind());

        let active = snapshot.active.unwrap();
        assert_eq!(active.cells, session.active().unwrap().cells());
        assert_eq!(active.color, active.kind.color());

        // The shadow is the same kind wearing the preview color.
        let shadow = snapshot.shadow.unwrap();
        assert_eq!(shadow.kind, active.kind);
        assert_eq!(shadow.color, crate::types::SHADOW_COLOR);

        // An idle board snapshot has no settled cells yet.
        assert!(snapshot
            .board
            .iter()
            .all(|row| row.iter().all(|cell| cell.is_none())));
    }
}
