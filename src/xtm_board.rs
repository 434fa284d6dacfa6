// Core board engine
// Handles lazy mine placement, flood-fill reveal, chord-open, flagging and win detection

use log::{debug, warn};
use rand::Rng;
use rand::rngs::StdRng;
use thiserror::Error;

/// What a cell holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Content {
    Empty,    // no adjacent mines
    Mine,     // a mine
    Near(u8), // 1..=8 adjacent mines
}

/// A single cell on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub revealed: bool,
    pub flagged: bool,
    pub content: Content,
}

impl Default for Cell {
    fn default() -> Self {
        Cell {
            revealed: false,
            flagged: false,
            content: Content::Empty,
        }
    }
}

/// Result of an open command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    NoOp,            // nothing changed
    Revealed,        // exactly one numbered cell uncovered
    CascadeRevealed, // flood-fill or chord uncovered several cells
    Mine,            // a mine went off
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("board dimensions must be positive (got {width}x{height})")]
    InvalidDimensions { width: usize, height: usize },
    #[error("mine at ({row}, {col}) lies outside a {width}x{height} board")]
    MineOutOfBounds { row: usize, col: usize, width: usize, height: usize },
    #[error("a {width}x{height} board needs at least one cell without a mine")]
    NoSafeCell { width: usize, height: usize },
}

/// Board state for one session
pub struct Board {
    width: usize,       // columns
    height: usize,      // rows
    mines: usize,       // total mine count
    flags: usize,       // flagged cells
    revealed: usize,    // revealed cells (only ever grows)
    initialized: bool,  // mines placed (first open happened)
    cells: Vec<Cell>,   // row-major grid
    detonated: Option<usize>, // first mine that went off
    fresh: Vec<usize>,  // cells revealed since the last take_revealed()
    rng: StdRng,
}

/// Clamped 8-neighbourhood of (row, col), excluding the cell itself
fn around(height: usize, width: usize, row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> {
    (row.saturating_sub(1)..=(row + 1).min(height - 1))
        .flat_map(move |r| (col.saturating_sub(1)..=(col + 1).min(width - 1)).map(move |c| (r, c)))
        .filter(move |&(r, c)| r != row || c != col)
}

impl Board {
    /// Allocate an empty board. Mines are placed on the first open.
    pub fn configure(width: usize, height: usize, mines: usize, rng: StdRng) -> Result<Self, BoardError> {
        if width == 0 || height == 0 {
            return Err(BoardError::InvalidDimensions { width, height });
        }
        let n = width * height;
        // the first opened cell is always safe, so at most n - 1 mines fit
        let capped = mines.min(n - 1);
        if capped != mines {
            warn!("mine count {} does not fit a {}x{} board, using {}", mines, width, height, capped);
        }
        Ok(Board {
            width,
            height,
            mines: capped,
            flags: 0,
            revealed: 0,
            initialized: false,
            cells: vec![Cell::default(); n],
            detonated: None,
            fresh: Vec::new(),
            rng,
        })
    }

    /// Build a board with a fixed mine layout (puzzles, replays).
    /// The board counts as initialized, so the first open does not move mines.
    /// Duplicate positions count once; at least one cell must stay safe.
    pub fn from_mines(width: usize, height: usize, mines: &[(usize, usize)], rng: StdRng) -> Result<Self, BoardError> {
        let mut board = Board::configure(width, height, mines.len(), rng)?;
        board.mines = 0;
        for &(row, col) in mines {
            if row >= height || col >= width {
                return Err(BoardError::MineOutOfBounds { row, col, width, height });
            }
            let idx = board.index(row, col);
            if board.cells[idx].content != Content::Mine {
                board.arm(row, col);
                board.mines += 1;
            }
        }
        if board.mines == board.cells.len() {
            return Err(BoardError::NoSafeCell { width, height });
        }
        board.initialized = true;
        Ok(board)
    }

    /// Convert (row, col) to the flat cell index
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn mines(&self) -> usize {
        self.mines
    }

    pub fn flags(&self) -> usize {
        self.flags
    }

    pub fn revealed(&self) -> usize {
        self.revealed
    }

    pub fn unrevealed(&self) -> usize {
        self.cells.len() - self.revealed
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[self.index(row, col)]
    }

    /// Mine counter display value (may go negative with too many flags)
    pub fn mines_left(&self) -> isize {
        self.mines as isize - self.flags as isize
    }

    /// Position of the first mine that went off, if any
    pub fn detonated(&self) -> Option<(usize, usize)> {
        self.detonated.map(|i| (i / self.width, i % self.width))
    }

    /// Number of safe cells uncovered so far
    pub fn safe_revealed(&self) -> usize {
        self.cells
            .iter()
            .filter(|c| c.revealed && c.content != Content::Mine)
            .count()
    }

    /// Drain the cells revealed since the previous call, in reveal order
    pub fn take_revealed(&mut self) -> Vec<(usize, usize)> {
        let w = self.width;
        self.fresh.drain(..).map(|i| (i / w, i % w)).collect()
    }

    /// All safe cells revealed and nothing exploded
    pub fn is_won(&self) -> bool {
        self.detonated.is_none() && self.revealed == self.cells.len() - self.mines
    }

    /// Put a mine at (row, col) and bump the counts around it
    fn arm(&mut self, row: usize, col: usize) {
        let idx = self.index(row, col);
        self.cells[idx].content = Content::Mine;
        for (r, c) in around(self.height, self.width, row, col) {
            let i = self.index(r, c);
            self.cells[i].content = match self.cells[i].content {
                Content::Empty => Content::Near(1),
                Content::Near(k) => Content::Near(k + 1),
                Content::Mine => Content::Mine,
            };
        }
    }

    /// Place mines avoiding the first click.
    /// Its neighbourhood is also avoided until fewer than 9 candidates are left,
    /// which only happens on nearly full boards.
    fn place_mines(&mut self, row: usize, col: usize) {
        let first = self.index(row, col);
        let mut candidates: Vec<usize> = (0..self.cells.len()).filter(|&i| i != first).collect();
        let mut placed = 0;
        while placed < self.mines {
            let pick = self.rng.gen_range(0..candidates.len());
            let idx = candidates[pick];
            let (r, c) = (idx / self.width, idx % self.width);
            let near = r.abs_diff(row) <= 1 && c.abs_diff(col) <= 1;
            if near && candidates.len() >= 9 {
                continue;
            }
            candidates.swap_remove(pick);
            self.arm(r, c);
            placed += 1;
        }
        debug!("placed {} mines on {}x{}, first click ({}, {})", placed, self.width, self.height, row, col);
    }

    /// Mark a covered cell revealed
    fn mark(&mut self, idx: usize) {
        self.cells[idx].revealed = true;
        self.revealed += 1;
        self.fresh.push(idx);
    }

    /// Open a cell (0-based). The first call places the mines.
    pub fn open(&mut self, row: usize, col: usize) -> Outcome {
        let idx = self.index(row, col);
        if self.cells[idx].flagged {
            return Outcome::NoOp;
        }
        if !self.initialized {
            self.place_mines(row, col);
            self.initialized = true;
        }
        if !self.cells[idx].revealed {
            return self.uncover(idx);
        }
        match self.cells[idx].content {
            Content::Near(n) => self.chord(row, col, n),
            _ => Outcome::NoOp,
        }
    }

    fn uncover(&mut self, idx: usize) -> Outcome {
        self.mark(idx);
        match self.cells[idx].content {
            Content::Mine => {
                self.detonated.get_or_insert(idx);
                Outcome::Mine
            }
            Content::Near(_) => Outcome::Revealed,
            Content::Empty => {
                self.flood(idx);
                Outcome::CascadeRevealed
            }
        }
    }

    /// Reveal the empty region around `start` plus its numbered rim.
    /// Cells are marked before they are queued, so each is visited once.
    fn flood(&mut self, start: usize) {
        let mut work = vec![start];
        while let Some(i) = work.pop() {
            let (row, col) = (i / self.width, i % self.width);
            for (r, c) in around(self.height, self.width, row, col) {
                let ni = self.index(r, c);
                let cell = self.cells[ni];
                if cell.revealed || cell.flagged {
                    continue;
                }
                // only empty cells are queued, so no neighbour here is a mine
                self.mark(ni);
                if cell.content == Content::Empty {
                    work.push(ni);
                }
            }
        }
    }

    /// Open every covered neighbour when the flags around a number match it
    fn chord(&mut self, row: usize, col: usize, n: u8) -> Outcome {
        let flagged = around(self.height, self.width, row, col)
            .filter(|&(r, c)| self.cells[self.index(r, c)].flagged)
            .count();
        if flagged != n as usize {
            return Outcome::NoOp;
        }
        let before = self.revealed;
        let targets: Vec<usize> = around(self.height, self.width, row, col)
            .map(|(r, c)| self.index(r, c))
            .filter(|&i| !self.cells[i].revealed && !self.cells[i].flagged)
            .collect();
        let mut hit = false;
        for i in targets {
            // an earlier target's flood may already have uncovered this one
            if self.cells[i].revealed {
                continue;
            }
            if self.uncover(i) == Outcome::Mine {
                hit = true;
            }
        }
        if hit {
            Outcome::Mine
        } else if self.revealed > before {
            Outcome::CascadeRevealed
        } else {
            Outcome::NoOp
        }
    }

    /// Toggle the flag on a covered cell. Returns false for revealed cells.
    pub fn flag(&mut self, row: usize, col: usize) -> bool {
        let idx = self.index(row, col);
        if self.cells[idx].revealed {
            return false;
        }
        let cell = &mut self.cells[idx];
        cell.flagged = !cell.flagged;
        if cell.flagged {
            self.flags += 1;
        } else {
            self.flags -= 1;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    fn mine_count_around(b: &Board, row: usize, col: usize) -> u8 {
        around(b.height(), b.width(), row, col)
            .filter(|&(r, c)| b.cell(r, c).content == Content::Mine)
            .count() as u8
    }

    #[test]
    fn rejects_zero_dimensions() {
        assert!(matches!(
            Board::configure(0, 5, 1, rng(1)),
            Err(BoardError::InvalidDimensions { width: 0, height: 5 })
        ));
        assert!(Board::configure(5, 0, 1, rng(1)).is_err());
    }

    #[test]
    fn clamps_mine_count() {
        let b = Board::configure(3, 3, 50, rng(1)).unwrap();
        assert_eq!(b.mines(), 8);
    }

    #[test]
    fn fixed_layout_keeps_a_safe_cell() {
        assert!(matches!(
            Board::from_mines(1, 1, &[(0, 0)], rng(1)),
            Err(BoardError::NoSafeCell { width: 1, height: 1 })
        ));
        // duplicates count once
        let all = [(0, 0), (0, 1), (0, 1), (1, 0), (1, 1)];
        assert!(matches!(Board::from_mines(2, 2, &all, rng(1)), Err(BoardError::NoSafeCell { .. })));
        let b = Board::from_mines(2, 2, &[(0, 0), (0, 0), (1, 1)], rng(1)).unwrap();
        assert_eq!(b.mines(), 2);
        assert!(!b.is_won());
    }

    #[test]
    fn neighbourhood_is_clamped() {
        assert_eq!(around(3, 3, 0, 0).count(), 3);
        assert_eq!(around(3, 3, 1, 1).count(), 8);
        assert_eq!(around(1, 8, 0, 3).count(), 2);
        assert_eq!(around(1, 1, 0, 0).count(), 0);
    }

    #[test]
    fn counts_match_mines_after_placement() {
        for seed in 0..20 {
            let mut b = Board::configure(16, 16, 40, rng(seed)).unwrap();
            b.open(7, 7);
            let mines = (0..16 * 16).filter(|i| b.cells[*i].content == Content::Mine).count();
            assert_eq!(mines, 40);
            for r in 0..16 {
                for c in 0..16 {
                    match b.cell(r, c).content {
                        Content::Mine => {}
                        Content::Empty => assert_eq!(mine_count_around(&b, r, c), 0),
                        Content::Near(k) => assert_eq!(mine_count_around(&b, r, c), k),
                    }
                }
            }
        }
    }

    #[test]
    fn first_click_neighbourhood_is_clear_when_room() {
        for seed in 0..50 {
            let mut b = Board::configure(9, 9, 10, rng(seed)).unwrap();
            b.open(0, 8);
            assert_eq!(b.cell(0, 8).content, Content::Empty);
            for (r, c) in around(9, 9, 0, 8) {
                assert_ne!(b.cell(r, c).content, Content::Mine);
            }
        }
    }

    #[test]
    fn crowded_board_falls_back_to_near_mines() {
        // 3x3 with 8 mines: every other cell must be a mine
        let mut b = Board::configure(3, 3, 8, rng(7)).unwrap();
        assert_eq!(b.open(1, 1), Outcome::Revealed);
        assert_eq!(b.cell(1, 1).content, Content::Near(8));
        assert!(b.is_won());
    }

    #[test]
    fn take_revealed_drains() {
        let mut b = Board::from_mines(4, 4, &[(3, 3)], rng(1)).unwrap();
        b.open(0, 0);
        let first = b.take_revealed();
        assert_eq!(first.len(), 15);
        assert_eq!(first[0], (0, 0));
        assert!(b.take_revealed().is_empty());
    }

    #[test]
    fn flag_counter_tracks_toggles() {
        let mut b = Board::configure(5, 5, 3, rng(2)).unwrap();
        assert!(b.flag(0, 0));
        assert!(b.flag(0, 1));
        assert_eq!(b.flags(), 2);
        assert_eq!(b.mines_left(), 1);
        assert!(b.flag(0, 0));
        assert_eq!(b.flags(), 1);
    }

    #[test]
    fn from_mines_rejects_out_of_bounds() {
        assert!(matches!(
            Board::from_mines(3, 3, &[(3, 0)], rng(1)),
            Err(BoardError::MineOutOfBounds { .. })
        ));
    }
}
