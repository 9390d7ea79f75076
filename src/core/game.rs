//! Game session module - the simulation driver
//!
//! Ties the core components together: board, active/shadow/next piece,
//! sampler, score and tick counters, all owned by one `GameSession` value
//! (no ambient statics). Single-threaded, single-writer: one tick runs to
//! completion before the next input or render frame is looked at.
//!
//! The session reports gameplay facts through an [`EventSink`]; what they
//! mean (sound, persistence, richer scoring) is the collaborator's business.

use crate::core::board::Board;
use crate::core::piece::Piece;
use crate::core::rng::PieceSampler;
use crate::core::scoring::{fall_interval_ticks, score_for_lines};
use crate::core::snapshot::{BoardView, PieceView, SessionSnapshot};
use crate::schedule::DeferredQueue;
use crate::types::{
    DropResult, GameAction, PieceKind, BOARD_HEIGHT, BOARD_WIDTH, SHADOW_COLOR,
    SPAWN_DELAY_SECONDS, SPAWN_X, SPAWN_Y, START_DELAY_SECONDS,
};

/// Facts the simulation emits upstream; all handlers default to no-ops.
///
/// Implemented for `()` so callers without an observer can pass `&mut ()`.
pub trait EventSink {
    fn on_lines_cleared(&mut self, _count: u32) {}
    fn on_piece_locked(&mut self) {}
    fn on_game_over(&mut self) {}
}

impl EventSink for () {}

/// Actions sequenced on the post-reset countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Deferred {
    SpawnPiece,
    StartSimulation,
}

/// One complete playfield simulation: grid, pieces, score, timers
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    active: Option<Piece>,
    shadow: Option<Piece>,
    next_kind: PieceKind,
    sampler: PieceSampler,
    pending: DeferredQueue<Deferred>,
    score: u32,
    lines: u32,
    tick_counter: u32,
    ticks_per_fall: u32,
    running: bool,
    game_over: bool,
}

impl GameSession {
    /// Create an idle session. Call [`reset`](Self::reset) to arm the
    /// countdown that spawns the first piece and starts the simulation.
    pub fn new(seed: u32) -> Self {
        let mut sampler = PieceSampler::new(seed);
        let next_kind = sampler.draw();

        Self {
            board: Board::new(),
            active: None,
            shadow: None,
            next_kind,
            sampler,
            pending: DeferredQueue::new(),
            score: 0,
            lines: 0,
            tick_counter: 0,
            ticks_per_fall: fall_interval_ticks(false),
            running: false,
            game_over: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<&Piece> {
        self.active.as_ref()
    }

    pub fn shadow(&self) -> Option<&Piece> {
        self.shadow.as_ref()
    }

    pub fn next_kind(&self) -> PieceKind {
        self.next_kind
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn running(&self) -> bool {
        self.running
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Clear the playfield and arm the spawn/start countdown.
    ///
    /// The only way back from game over; safe to call between ticks at any
    /// time.
    pub fn reset(&mut self) {
        self.board.reset();
        self.active = None;
        self.shadow = None;
        self.score = 0;
        self.lines = 0;
        self.tick_counter = 0;
        self.ticks_per_fall = fall_interval_ticks(false);
        self.running = false;
        self.game_over = false;
        self.next_kind = self.sampler.draw();

        self.pending.clear();
        self.pending
            .schedule(Deferred::SpawnPiece, SPAWN_DELAY_SECONDS);
        self.pending
            .schedule(Deferred::StartSimulation, START_DELAY_SECONDS);
    }

    /// Drive the countdown from the external clock
    pub fn advance_clock(&mut self, dt_seconds: f64) {
        for action in self.pending.advance(dt_seconds) {
            match action {
                Deferred::SpawnPiece => self.spawn_piece(),
                Deferred::StartSimulation => self.running = true,
            }
        }
    }

    /// One fixed simulation tick: bump the counter, apply gravity when due
    pub fn tick<S: EventSink>(&mut self, sink: &mut S) {
        if !self.running || self.game_over {
            return;
        }

        self.tick_counter += 1;
        if self.tick_counter >= self.ticks_per_fall {
            self.fall_step(sink);
        }
    }

    /// Adjust the gravity cadence while soft drop is held
    pub fn set_soft_drop(&mut self, held: bool) {
        self.ticks_per_fall = fall_interval_ticks(held);
    }

    /// Apply a discrete input signal; debouncing happens upstream
    pub fn apply_action<S: EventSink>(&mut self, action: GameAction, sink: &mut S) -> bool {
        match action {
            GameAction::MoveLeft => self.move_piece(-1),
            GameAction::MoveRight => self.move_piece(1),
            GameAction::RotateCw => self.rotate_piece(1),
            GameAction::RotateCcw => self.rotate_piece(-1),
            GameAction::HardDrop => {
                self.hard_drop(sink);
                true
            }
            GameAction::Reset => {
                self.reset();
                true
            }
        }
    }

    /// Shift the active piece one column; refreshes the shadow on success
    pub fn move_piece(&mut self, direction: i8) -> bool {
        if !self.running {
            return false;
        }
        let Some(mut piece) = self.active else {
            return false;
        };

        let moved = piece.shift_horizontal(direction, &self.board);
        self.active = Some(piece);
        if moved {
            self.refresh_shadow();
        }
        moved
    }

    /// Rotate the active piece; refreshes the shadow on success
    pub fn rotate_piece(&mut self, direction: i8) -> bool {
        if !self.running {
            return false;
        }
        let Some(mut piece) = self.active else {
            return false;
        };

        let rotated = piece.rotate(direction, &self.board);
        self.active = Some(piece);
        if rotated {
            self.refresh_shadow();
        }
        rotated
    }

    /// Drop the active piece all the way down and lock it, synchronously
    pub fn hard_drop<S: EventSink>(&mut self, sink: &mut S) {
        if !self.running || self.active.is_none() {
            return;
        }
        while self.fall_step(sink) == DropResult::Continue {}
    }

    /// One gravity cycle: move down, and on landing commit, clear, score,
    /// report and respawn. Resets the tick counter.
    fn fall_step<S: EventSink>(&mut self, sink: &mut S) -> DropResult {
        self.tick_counter = 0;

        let Some(mut piece) = self.active else {
            return DropResult::Landed;
        };
        let result = piece.move_down(&self.board);
        self.active = Some(piece);

        match result {
            DropResult::Continue => {}
            DropResult::Landed => {
                self.board.commit(&piece.cells(), piece.color());
                sink.on_piece_locked();

                let cleared = self.board.clear_full_rows().len();
                if cleared > 0 {
                    self.lines += cleared as u32;
                    self.score += score_for_lines(cleared);
                    sink.on_lines_cleared(cleared as u32);
                }

                self.spawn_piece();
            }
            DropResult::GameOver => {
                self.running = false;
                self.game_over = true;
                self.active = None;
                self.shadow = None;
                sink.on_game_over();
            }
        }

        result
    }

    /// Promote the previewed kind to the active piece and draw a new preview
    fn spawn_piece(&mut self) {
        let kind = self.next_kind;
        self.next_kind = self.sampler.draw();
        self.active = Some(Piece::spawn(kind, SPAWN_X, SPAWN_Y, &self.board));
        self.refresh_shadow();
    }

    /// Recompute the landing preview as a dropped clone of the active piece
    fn refresh_shadow(&mut self) {
        self.shadow = self.active.map(|piece| {
            let mut shadow = piece;
            shadow.set_color(SHADOW_COLOR);
            while shadow.move_down(&self.board) == DropResult::Continue {}
            shadow
        });
    }

    /// Serializable read-only view of the whole session
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            board: self.board_view(),
            active: self.active.as_ref().map(PieceView::from),
            shadow: self.shadow.as_ref().map(PieceView::from),
            next_kind: self.next_kind,
            score: self.score,
            lines: self.lines,
            running: self.running,
            game_over: self.game_over,
        }
    }

    fn board_view(&self) -> BoardView {
        let mut view: BoardView = [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        for y in 0..self.board.height() as i8 {
            for x in 0..self.board.width() as i8 {
                view[y as usize][x as usize] = self.board.cell(x, y);
            }
        }
        view
    }
}
