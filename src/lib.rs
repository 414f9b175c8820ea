#![warn(missing_docs)]

//! # Sopa de letras
//!
//! A crate that generates word search puzzles. Words are written onto a square
//! grid along any of eight directions, leftover cells are filled with random
//! letters, and every requested word is re-verified against the finished grid
//! so callers always know exactly which words made it in.

use std::{fmt::Display, ops::Index};

use array2d::Array2D;
use rand::Rng;

/// An error that happened when generating the puzzle.
#[derive(Clone, Copy, Debug)]
pub enum Error {
    /// The requested grid size was zero; a puzzle needs at least one row and
    /// one column.
    InvalidSize(usize),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidSize(size) => {
                write!(f, "Grid size {} is invalid, must be at least 1", size)
            }
        }
    }
}

impl std::error::Error for Error {}

/// The direction a word runs in inside the puzzle grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// The word reads left to right.
    Right,

    /// The word reads right to left.
    Left,

    /// The word reads top to bottom.
    Down,

    /// The word reads bottom to top.
    Up,

    /// The word reads diagonally down and to the right.
    DownRight,

    /// The word reads diagonally down and to the left.
    DownLeft,

    /// The word reads diagonally up and to the right.
    UpRight,

    /// The word reads diagonally up and to the left.
    UpLeft,
}

impl Direction {
    /// Every direction a word may be placed in.
    pub const ALL: [Direction; 8] = [
        Direction::Right,
        Direction::Left,
        Direction::Down,
        Direction::Up,
        Direction::DownRight,
        Direction::DownLeft,
        Direction::UpRight,
        Direction::UpLeft,
    ];

    /// Returns the (row, column) step taken for each character along this
    /// direction.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Right => (0, 1),
            Direction::Left => (0, -1),
            Direction::Down => (1, 0),
            Direction::Up => (-1, 0),
            Direction::DownRight => (1, 1),
            Direction::DownLeft => (1, -1),
            Direction::UpRight => (-1, 1),
            Direction::UpLeft => (-1, -1),
        }
    }

    /// Returns a uniformly random direction drawn from the given source.
    pub fn random(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

/// Tuning knobs for puzzle generation.
///
/// The attempt budgets bound the random-restart search: `word_attempts` caps
/// how long the generator keeps redrawing origins and directions for a single
/// word, and `grid_attempts` caps how many times the whole grid is thrown
/// away and rebuilt when some word could not be placed.
#[derive(Clone, Copy, Debug)]
pub struct PuzzleConfig {
    /// The number of rows and columns of the square grid.
    pub size: usize,

    /// How many random (origin, direction) draws to try for one word before
    /// declaring it unplaceable in the current grid state.
    pub word_attempts: usize,

    /// How many times to restart from an empty grid when a word fails to
    /// place.
    pub grid_attempts: usize,
}

impl Default for PuzzleConfig {
    /// A 15x15 grid with 200 placement draws per word and 5 whole-grid
    /// restarts.
    fn default() -> Self {
        Self {
            size: 15,
            word_attempts: 200,
            grid_attempts: 5,
        }
    }
}

/// A finished word search: a fully lettered grid plus the verified lists of
/// which requested words can and cannot be found in it.
#[derive(Clone, Debug)]
pub struct Puzzle {
    grid: Array2D<char>,
    placed: Vec<String>,
    rejected: Vec<String>,
}

impl Puzzle {
    /// Generates a puzzle from the given words using a thread-local random
    /// source. See [`Puzzle::generate_with_rng`] for the full contract.
    pub fn generate(config: &PuzzleConfig, words: &[String]) -> Result<Self, Error> {
        Self::generate_with_rng(config, words, &mut rand::thread_rng())
    }

    /// Generates a puzzle from the given words, drawing every random choice
    /// from `rng` so that a seeded source reproduces the same puzzle.
    ///
    /// Words are matched case-insensitively and stored uppercase. A word that
    /// cannot make it into the grid, either because it is longer than the
    /// grid or because every attempt budget ran out, ends up in
    /// [`Puzzle::rejected`] instead of aborting the whole generation; callers
    /// that consider a dropped word fatal can check that list. An empty word
    /// list is valid and produces a grid of pure filler.
    ///
    /// The only hard failure is a zero grid size.
    pub fn generate_with_rng(
        config: &PuzzleConfig,
        words: &[String],
        rng: &mut impl Rng,
    ) -> Result<Self, Error> {
        if config.size == 0 {
            return Err(Error::InvalidSize(config.size));
        }

        let normalized: Vec<String> = words.iter().map(|word| normalize(word)).collect();

        // A word that can never fit skips the placement loop entirely rather
        // than burning its full attempt budget.
        let placeable: Vec<&str> = normalized
            .iter()
            .map(String::as_str)
            .filter(|word| {
                let len = word.chars().count();
                len > 0 && len <= config.size
            })
            .collect();

        let mut grid = blank_grid(config.size);

        for attempt in 0..config.grid_attempts.max(1) {
            if attempt > 0 {
                grid = blank_grid(config.size);
            }

            let mut all_placed = true;

            for word in &placeable {
                if !try_place(&mut grid, word, config.word_attempts, rng) {
                    all_placed = false;
                    break;
                }
            }

            if all_placed {
                break;
            }
            // Otherwise restart from blank. The final attempt's grid is kept
            // even when partial; validation below decides what actually made
            // it in.
        }

        let grid = fill_blanks(&grid, rng);

        let mut placed = Vec::new();
        let mut rejected = Vec::new();

        for word in normalized {
            if grid_contains(&grid, &word) {
                placed.push(word);
            } else {
                rejected.push(word);
            }
        }

        Ok(Self {
            grid,
            placed,
            rejected,
        })
    }

    /// The number of rows and columns of the grid.
    pub fn size(&self) -> usize {
        self.grid.num_rows()
    }

    /// Provides a reference to the finished letter grid.
    pub fn grid(&self) -> &Array2D<char> {
        &self.grid
    }

    /// Gets the letter at the specified coordinate, returning [`Option::None`]
    /// if the coordinates are out of bounds.
    pub fn get(&self, row: usize, column: usize) -> Option<char> {
        self.grid.get(row, column).copied()
    }

    /// The requested words that are verified to be findable in the grid, in
    /// request order.
    pub fn placed(&self) -> &[String] {
        &self.placed
    }

    /// The requested words that did not make it into the grid.
    ///
    /// Empty when generation fully succeeded.
    pub fn rejected(&self) -> &[String] {
        &self.rejected
    }

    /// Returns whether `word`, matched case-insensitively, can be found in
    /// the grid along any of the eight directions.
    ///
    /// This is a pure query: it never mutates the grid, and repeated calls
    /// always return the same answer.
    pub fn contains(&self, word: &str) -> bool {
        grid_contains(&self.grid, &normalize(word))
    }
}

impl Index<(usize, usize)> for Puzzle {
    type Output = char;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.grid[index]
    }
}

impl Display for Puzzle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut words_iter = self.placed.iter();

        for row in self.grid.rows_iter() {
            for &ch in row {
                write!(f, "{} ", ch)?;
            }

            writeln!(f, "| {}", words_iter.next().map(String::as_str).unwrap_or(""))?;
        }

        Ok(())
    }
}

fn normalize(word: &str) -> String {
    word.trim().to_uppercase()
}

fn blank_grid(size: usize) -> Array2D<Option<char>> {
    Array2D::filled_with(None, size, size)
}

/// Tries to write `word` somewhere into the grid, redrawing a random origin
/// and direction until the attempt budget runs out. A target cell holding the
/// same letter is compatible, which is what lets words cross each other.
fn try_place(
    grid: &mut Array2D<Option<char>>,
    word: &str,
    max_attempts: usize,
    rng: &mut impl Rng,
) -> bool {
    let chars: Vec<char> = word.chars().collect();
    let size = grid.num_rows();

    for _ in 0..max_attempts {
        let direction = Direction::random(rng);
        let origin = (rng.gen_range(0..size), rng.gen_range(0..size));

        if let Some(cells) = placement_cells(grid, &chars, origin, direction) {
            for (&ch, coord) in chars.iter().zip(cells) {
                grid[coord] = Some(ch);
            }

            return true;
        }
    }

    false
}

/// Walks `word` from `origin` along `direction` and returns the coordinates
/// it would occupy, or [`Option::None`] when the walk leaves the grid or hits
/// a cell holding a different letter.
fn placement_cells(
    grid: &Array2D<Option<char>>,
    word: &[char],
    origin: (usize, usize),
    direction: Direction,
) -> Option<Vec<(usize, usize)>> {
    let size = grid.num_rows() as isize;
    let (d_row, d_col) = direction.delta();

    let mut cells = Vec::with_capacity(word.len());

    for (i, &ch) in word.iter().enumerate() {
        let row = origin.0 as isize + d_row * i as isize;
        let col = origin.1 as isize + d_col * i as isize;

        if row < 0 || row >= size || col < 0 || col >= size {
            return None;
        }

        let coord = (row as usize, col as usize);

        if matches!(grid[coord], Some(existing) if existing != ch) {
            return None;
        }

        cells.push(coord);
    }

    Some(cells)
}

/// Replaces every blank cell with a random uppercase letter.
///
/// Must run strictly after all placement: the placer only distinguishes blank
/// cells from lettered ones, so filler written early would be mistaken for
/// intentional placements by its collision check.
fn fill_blanks(grid: &Array2D<Option<char>>, rng: &mut impl Rng) -> Array2D<char> {
    let mut filled = Array2D::filled_with(' ', grid.num_rows(), grid.num_columns());

    for row in 0..grid.num_rows() {
        for col in 0..grid.num_columns() {
            filled[(row, col)] = match grid[(row, col)] {
                Some(ch) => ch,
                None => (b'A' + rng.gen_range(0..26u8)) as char,
            };
        }
    }

    filled
}

/// Exhaustively checks whether `word` occurs anywhere in the finished grid:
/// every cell is tried as a starting point, in all eight directions.
fn grid_contains(grid: &Array2D<char>, word: &str) -> bool {
    let chars: Vec<char> = word.chars().collect();

    if chars.is_empty() {
        return false;
    }

    let size = grid.num_rows() as isize;

    for row in 0..grid.num_rows() {
        for col in 0..grid.num_columns() {
            for direction in Direction::ALL {
                let (d_row, d_col) = direction.delta();

                let matched = chars.iter().enumerate().all(|(i, &ch)| {
                    let r = row as isize + d_row * i as isize;
                    let c = col as isize + d_col * i as isize;

                    r >= 0
                        && r < size
                        && c >= 0
                        && c < size
                        && grid[(r as usize, c as usize)] == ch
                });

                if matched {
                    return true;
                }
            }
        }
    }

    false
}
