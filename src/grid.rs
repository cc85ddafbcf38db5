use colored::Colorize;
use thiserror::Error;

pub const N: usize = 9;

/// A 9x9 board stored row-major. 0 marks an empty cell, 1-9 a digit.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Grid {
    cells: [u8; N * N],
}

#[derive(Debug, Error, Eq, PartialEq)]
pub enum ParseGridError {
    #[error("expected 81 digits, found only {0}")]
    MissingDigits(usize),
}

impl Grid {
    /// Builds a grid from a text payload. Digits are consumed in order and
    /// placed row-major; commas and every other non-digit character are
    /// skipped as separators. Digits past the 81st are ignored.
    pub fn from_text(text: &str) -> Result<Self, ParseGridError> {
        let mut cells = [0u8; N * N];
        let mut idx = 0;
        for digit in text.chars().filter_map(|c| c.to_digit(10)) {
            if idx == N * N {
                break;
            }
            cells[idx] = digit as u8;
            idx += 1;
        }
        if idx < N * N {
            return Err(ParseGridError::MissingDigits(idx));
        }
        Ok(Self { cells })
    }

    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.cells[row * N + col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: u8) {
        self.cells[row * N + col] = value;
    }

    pub fn clear(&mut self, row: usize, col: usize) {
        self.cells[row * N + col] = 0;
    }

    /// First empty cell in row-major order, if any.
    pub fn first_empty(&self) -> Option<(usize, usize)> {
        self.cells
            .iter()
            .position(|&x| x == 0)
            .map(|idx| (idx / N, idx % N))
    }

    /// The board as 9 rows of 9 digits, the shape the response body takes.
    pub fn rows(&self) -> [[u8; N]; N] {
        let mut rows = [[0u8; N]; N];
        for (i, row) in rows.iter_mut().enumerate() {
            row.copy_from_slice(&self.cells[i * N..(i + 1) * N]);
        }
        rows
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut line = String::new();
        let horizontal_line = " ----------------- ";
        for i in 0..N {
            if i % 3 == 0 {
                writeln!(f, "{}", horizontal_line)?;
            }
            for j in 0..N {
                line.push(if j % 3 == 0 { '|' } else { ' ' });
                match self.get(i, j) {
                    0 => line.push_str(&" ".on_blue().to_string()),
                    x => line.push_str(&format!("{x}")),
                }
            }
            writeln!(f, "{line}|")?;
            line.clear();
        }
        writeln!(f, "{}", horizontal_line)
    }
}
