//! Core game state and logic
//!
//! `Game` owns the whole model - board, active piece, score, piece RNG, and
//! the gravity accumulator - so there is no ambient state anywhere and tests
//! can run as many independent games as they like.

use crate::board::Board;
use crate::piece::Piece;
use crate::rng::PieceRng;
use crate::score::Score;
use crate::tetromino::TetrominoType;
use std::time::Duration;

/// Default time between gravity steps
pub const DROP_INTERVAL: Duration = Duration::from_millis(500);

/// Input commands the game can process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    SoftDrop,
    RotateCw,
    RotateCcw,
}

/// What a gravity step did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropEvent {
    /// The piece descended one row
    Fell,
    /// The piece landed: merged, swept, and a new piece spawned
    Locked { rows: u32, points: u32 },
    /// The new piece could not spawn: board cleared, score zeroed, fresh game
    Restarted,
}

/// The main game struct
pub struct Game {
    board: Board,
    piece: Piece,
    score: Score,
    rng: PieceRng,
    /// Elapsed time since the last gravity step
    drop_accum: Duration,
    drop_interval: Duration,
    /// Text describing the last lock or restart, for display
    pub last_action: Option<String>,
}

impl Game {
    /// Create a new game with the given gravity interval
    pub fn new(drop_interval: Duration) -> Self {
        Self::with_seed(drop_interval, rand::random())
    }

    /// Create a new game with a fixed piece-sequence seed
    pub fn with_seed(drop_interval: Duration, seed: u64) -> Self {
        let mut rng = PieceRng::with_seed(seed);
        // The first spawn lands on an empty board and cannot collide.
        let piece = Piece::spawn(rng.next());
        Self {
            board: Board::new(),
            piece,
            score: Score::new(),
            rng,
            drop_accum: Duration::ZERO,
            drop_interval,
            last_action: None,
        }
    }

    /// The settled grid, for rendering
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The falling piece (matrix + position), for rendering
    pub fn piece(&self) -> &Piece {
        &self.piece
    }

    /// Current score
    pub fn score(&self) -> Score {
        self.score
    }

    /// Process one input command
    pub fn command(&mut self, command: Command) -> Option<DropEvent> {
        match command {
            Command::MoveLeft => {
                self.move_piece(-1);
                None
            }
            Command::MoveRight => {
                self.move_piece(1);
                None
            }
            Command::SoftDrop => Some(self.soft_drop()),
            Command::RotateCw => {
                self.rotate_piece(1);
                None
            }
            Command::RotateCcw => {
                self.rotate_piece(-1);
                None
            }
        }
    }

    /// Advance the gravity clock; steps the piece down once the accumulated
    /// time exceeds the drop interval
    pub fn tick(&mut self, delta: Duration) -> Option<DropEvent> {
        self.drop_accum += delta;
        if self.drop_accum > self.drop_interval {
            Some(self.soft_drop())
        } else {
            None
        }
    }

    /// Restart from scratch: empty board, zero score, fresh piece
    pub fn reset(&mut self) {
        self.board.clear();
        self.score.reset();
        self.drop_accum = Duration::ZERO;
        self.last_action = None;
        self.spawn();
    }

    /// One gravity step - the only code path that can land a piece.
    ///
    /// Both the timer and the soft-drop key funnel here, so merge and sweep
    /// logic exists exactly once. Resets the gravity accumulator either way.
    pub fn soft_drop(&mut self) -> DropEvent {
        self.drop_accum = Duration::ZERO;
        self.piece.y += 1;
        if !self.piece_collides() {
            return DropEvent::Fell;
        }
        self.piece.y -= 1;

        self.board.merge(&self.piece);
        let sweep = self.board.sweep();
        self.score.apply(sweep);
        if sweep.rows > 0 {
            tracing::info!(
                rows = sweep.rows,
                points = sweep.points,
                total = self.score.points,
                "rows cleared"
            );
            self.last_action = Some(format!("Sweep x{} (+{})", sweep.rows, sweep.points));
        }

        if self.spawn() {
            DropEvent::Locked {
                rows: sweep.rows,
                points: sweep.points,
            }
        } else {
            DropEvent::Restarted
        }
    }

    /// Shift the piece horizontally, rejecting the move if it collides
    fn move_piece(&mut self, dx: i32) {
        self.piece.x += dx;
        if self.piece_collides() {
            self.piece.x -= dx;
        }
    }

    /// Rotate the piece, undoing the turn exactly if the result collides.
    /// No alternative offsets are tried.
    fn rotate_piece(&mut self, direction: i32) {
        self.piece.rotate(direction);
        if self.piece_collides() {
            self.piece.rotate(-direction);
        }
    }

    /// Draw a random kind and spawn it; returns false if the spawn collided
    /// and the game restarted
    fn spawn(&mut self) -> bool {
        let kind = self.rng.next();
        self.spawn_piece(kind)
    }

    /// Spawn a specific kind at top center.
    ///
    /// A colliding spawn is the losing condition: the board is wiped and the
    /// score zeroed, but the new piece keeps its spawn position and simply
    /// starts falling on the fresh board.
    fn spawn_piece(&mut self, kind: TetrominoType) -> bool {
        self.piece = Piece::spawn(kind);
        if self.piece_collides() {
            tracing::info!(
                score = self.score.points,
                lines = self.score.lines,
                "topped out, restarting"
            );
            self.board.clear();
            self.score.reset();
            self.last_action = Some("Top out!".to_string());
            return false;
        }
        tracing::debug!(kind = ?self.piece.kind, x = self.piece.x, "spawned");
        true
    }

    fn piece_collides(&self) -> bool {
        self.board.collides(self.piece.cells(), self.piece.x, self.piece.y)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(DROP_INTERVAL)
    }
}
