//! Tetromino definitions and shapes
//!
//! Each of the 7 kinds is a small square matrix of color codes (1-7), with
//! zero marking an empty cell. The matrices here are templates: `cells()`
//! hands out a fresh copy every time, so rotating a live piece can never
//! corrupt the catalog.

use ratatui::style::Color;

/// The 7 tetromino kinds, in color-code order (T=1 .. Z=7)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TetrominoType {
    T, // 1 - T-shape
    O, // 2 - square
    L, // 3 - L-shape
    J, // 4 - J-shape
    I, // 5 - long bar
    S, // 6 - S-shape
    Z, // 7 - Z-shape
}

impl TetrominoType {
    /// Get all tetromino kinds for uniform selection
    pub fn all() -> [TetrominoType; 7] {
        [
            TetrominoType::T,
            TetrominoType::O,
            TetrominoType::L,
            TetrominoType::J,
            TetrominoType::I,
            TetrominoType::S,
            TetrominoType::Z,
        ]
    }

    /// The color code this kind stamps into the board (1-7)
    pub fn code(&self) -> u8 {
        match self {
            TetrominoType::T => 1,
            TetrominoType::O => 2,
            TetrominoType::L => 3,
            TetrominoType::J => 4,
            TetrominoType::I => 5,
            TetrominoType::S => 6,
            TetrominoType::Z => 7,
        }
    }

    /// Build a fresh shape matrix for this kind in its canonical orientation.
    ///
    /// Returns an independent allocation on every call; callers are free to
    /// rotate it in place.
    pub fn cells(&self) -> Vec<Vec<u8>> {
        let k = self.code();
        match self {
            TetrominoType::T => vec![
                vec![0, k, 0],
                vec![k, k, k],
                vec![0, 0, 0],
            ],
            TetrominoType::O => vec![
                vec![k, k],
                vec![k, k],
            ],
            TetrominoType::L => vec![
                vec![0, 0, k],
                vec![k, k, k],
                vec![0, 0, 0],
            ],
            TetrominoType::J => vec![
                vec![k, 0, 0],
                vec![k, k, k],
                vec![0, 0, 0],
            ],
            TetrominoType::I => vec![vec![0, k, 0, 0]; 4],
            TetrominoType::S => vec![
                vec![0, k, k],
                vec![k, k, 0],
                vec![0, 0, 0],
            ],
            TetrominoType::Z => vec![
                vec![k, k, 0],
                vec![0, k, k],
                vec![0, 0, 0],
            ],
        }
    }
}

/// Terminal color for a board color code (1-7)
///
/// Code 0 is empty and never rendered; anything else out of range falls back
/// to white so a bad cell shows up instead of crashing the renderer.
pub fn color_for(code: u8) -> Color {
    match code {
        1 => Color::Magenta,          // T
        2 => Color::Yellow,           // O
        3 => Color::Rgb(255, 165, 0), // L - orange
        4 => Color::Blue,             // J
        5 => Color::Cyan,             // I
        6 => Color::Green,            // S
        7 => Color::Red,              // Z
        _ => Color::White,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn codes_are_distinct_and_in_range() {
        let codes: HashSet<u8> = TetrominoType::all().iter().map(|t| t.code()).collect();
        assert_eq!(codes.len(), 7);
        assert!(codes.iter().all(|&c| (1..=7).contains(&c)));
    }

    #[test]
    fn matrices_are_square_and_use_own_code() {
        for kind in TetrominoType::all() {
            let cells = kind.cells();
            let size = cells.len();
            assert!(matches!(size, 2..=4), "{kind:?} has odd size {size}");
            for row in &cells {
                assert_eq!(row.len(), size, "{kind:?} is not square");
                for &v in row {
                    assert!(v == 0 || v == kind.code(), "{kind:?} has foreign code {v}");
                }
            }
        }
    }

    #[test]
    fn cells_returns_independent_copies() {
        let a = TetrominoType::T.cells();
        let mut b = TetrominoType::T.cells();
        b[0][0] = 9;
        assert_eq!(a[0][0], 0);
        assert_eq!(TetrominoType::T.cells()[0][0], 0);
    }

    #[test]
    fn bar_occupies_column_one() {
        let i = TetrominoType::I.cells();
        for row in &i {
            assert_eq!(row.as_slice(), &[0, 5, 0, 0]);
        }
    }
}
