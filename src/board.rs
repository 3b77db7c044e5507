//! Game board representation, collision detection, and row sweeping

use crate::piece::Piece;
use crate::score::SweepResult;

/// Board dimensions
pub const BOARD_WIDTH: usize = 12;
pub const BOARD_HEIGHT: usize = 20;

/// A board cell: 0 = empty, 1-7 = the color code of the piece that landed
pub type Cell = u8;

/// The game board
///
/// Rows run top to bottom; every row is exactly `BOARD_WIDTH` cells for the
/// life of the process. The sweep replaces removed rows with fresh empty
/// rows at the top, so the row-count invariant never bends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; BOARD_WIDTH]; BOARD_HEIGHT],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [[0; BOARD_WIDTH]; BOARD_HEIGHT],
        }
    }

    /// Get the cell at (x, y), or None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= BOARD_WIDTH || y >= BOARD_HEIGHT {
            return None;
        }
        Some(self.cells[y][x])
    }

    /// Set the cell at (x, y); returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, value: Cell) -> bool {
        if x < 0 || y < 0 {
            return false;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= BOARD_WIDTH || y >= BOARD_HEIGHT {
            return false;
        }
        self.cells[y][x] = value;
        true
    }

    /// Iterate rows top to bottom (for rendering)
    pub fn rows(&self) -> impl Iterator<Item = &[Cell; BOARD_WIDTH]> {
        self.cells.iter()
    }

    /// Whether every cell is empty
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|row| row.iter().all(|&c| c == 0))
    }

    /// Zero every cell (game-over reset)
    pub fn clear(&mut self) {
        self.cells = [[0; BOARD_WIDTH]; BOARD_HEIGHT];
    }

    /// Test whether a shape matrix placed at (x, y) overlaps anything.
    ///
    /// True iff any solid cell falls outside the left, right, or bottom
    /// edge, or on an occupied board cell. There is deliberately no top
    /// bound: a piece probed above the visible grid only collides with
    /// whatever it overlaps inside it. This predicate is the single
    /// authority on legality; every move, rotation, and drop consults it
    /// and commits nothing that fails here.
    pub fn collides(&self, cells: &[Vec<u8>], x: i32, y: i32) -> bool {
        for (py, row) in cells.iter().enumerate() {
            for (px, &value) in row.iter().enumerate() {
                if value == 0 {
                    continue;
                }
                let bx = x + px as i32;
                let by = y + py as i32;
                if bx < 0 || bx >= BOARD_WIDTH as i32 || by >= BOARD_HEIGHT as i32 {
                    return true;
                }
                // Above the board (by < 0) get() is None: only the walls
                // apply up there.
                if self.get(bx, by).unwrap_or(0) != 0 {
                    return true;
                }
            }
        }
        false
    }

    /// Stamp a landed piece's solid cells into the grid.
    ///
    /// The piece held a legal position before the failed descent, so every
    /// solid cell lands in range.
    pub fn merge(&mut self, piece: &Piece) {
        for (py, row) in piece.cells().iter().enumerate() {
            for (px, &value) in row.iter().enumerate() {
                if value != 0 {
                    self.set(piece.x + px as i32, piece.y + py as i32, value);
                }
            }
        }
    }

    /// Remove every full row, shifting the rows above down and inserting
    /// empty rows at the top.
    ///
    /// Scans bottom-up. After a removal the same index is examined again,
    /// since the row that shifted into it may itself be full; this is what
    /// makes a stack of adjacent full rows clear in a single call. Scoring
    /// follows the returned result's doubling multiplier.
    pub fn sweep(&mut self) -> SweepResult {
        let mut result = SweepResult::new();
        let mut y = BOARD_HEIGHT - 1;
        loop {
            if self.row_full(y) {
                self.remove_row(y);
                result.add_row();
                continue;
            }
            if y == 0 {
                break;
            }
            y -= 1;
        }
        result
    }

    fn row_full(&self, y: usize) -> bool {
        self.cells[y].iter().all(|&c| c != 0)
    }

    fn remove_row(&mut self, y: usize) {
        for row in (1..=y).rev() {
            self.cells[row] = self.cells[row - 1];
        }
        self.cells[0] = [0; BOARD_WIDTH];
    }
}
