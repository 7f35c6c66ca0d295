//! Board cells and the run scan behind win detection.

use core::fmt;

use alloc::vec;
use alloc::vec::Vec;

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    /// The player who moves first by default.
    A,
    /// The other player.
    B,
}

impl Player {
    /// Returns the other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => f.write_str("player A"),
            Self::B => f.write_str("player B"),
        }
    }
}

/// Contents of a board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    /// No piece.
    #[default]
    Empty,
    /// A piece owned by the player.
    Stone(Player),
}

/// A cell coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// Row index, from the top.
    pub row: usize,
    /// Column index, from the left.
    pub col: usize,
}

impl Position {
    /// Creates a position.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// The four line directions through a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Down a column.
    Vertical,
    /// Along a row.
    Horizontal,
    /// Down and to the right.
    Diagonal,
    /// Down and to the left.
    AntiDiagonal,
}

impl Direction {
    /// Directions in scan order.
    pub const ALL: [Self; 4] = [
        Self::Vertical,
        Self::Horizontal,
        Self::Diagonal,
        Self::AntiDiagonal,
    ];

    /// Returns the `(row, col)` step of the direction.
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Self::Vertical => (1, 0),
            Self::Horizontal => (0, 1),
            Self::Diagonal => (1, 1),
            Self::AntiDiagonal => (1, -1),
        }
    }
}

/// A maximal run of one player's pieces.
///
/// `start` is the end reached by stepping against the direction, `end` the
/// one reached by stepping along it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Line {
    /// Owner of the run.
    pub player: Player,
    /// Direction of the run.
    pub direction: Direction,
    /// First cell of the run.
    pub start: Position,
    /// Last cell of the run.
    pub end: Position,
    /// Number of cells in the run.
    pub len: usize,
}

/// Largest supported board side.
pub const MAX_BOARD_SIZE: usize = 256;

/// A square grid of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board with `size` rows and columns, clamped to
    /// `1..=MAX_BOARD_SIZE`.
    #[must_use]
    pub fn new(size: usize) -> Self {
        let size = Self::clamp_size(size);
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    pub(crate) const fn clamp_size(size: usize) -> usize {
        if size == 0 {
            1
        } else if size > MAX_BOARD_SIZE {
            MAX_BOARD_SIZE
        } else {
            size
        }
    }

    /// Returns the number of rows (and columns).
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns the cell at `(row, col)`, or `None` off the board.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Returns whether no empty cell remains.
    #[must_use]
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Returns the number of empty cells.
    #[must_use]
    pub fn empty_cells(&self) -> usize {
        self.cells.iter().filter(|&&c| c == Cell::Empty).count()
    }

    /// Empties every cell.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, cell: Cell) {
        if let Some(i) = self.index(row, col) {
            self.cells[i] = cell;
        }
    }

    const fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row < self.size && col < self.size {
            Some(row * self.size + col)
        } else {
            None
        }
    }

    fn step(&self, from: Position, (d_row, d_col): (isize, isize)) -> Option<Position> {
        let row = from.row.checked_add_signed(d_row)?;
        let col = from.col.checked_add_signed(d_col)?;
        self.index(row, col).map(|_| Position::new(row, col))
    }

    /// Walks from `from` while the next cell belongs to `player`. Returns the
    /// last matching cell and the number of steps taken.
    fn walk(&self, from: Position, delta: (isize, isize), player: Player) -> (Position, usize) {
        let mut last = from;
        let mut steps = 0;
        while let Some(next) = self.step(last, delta) {
            if self.get(next.row, next.col) != Some(Cell::Stone(player)) {
                break;
            }
            last = next;
            steps += 1;
        }
        (last, steps)
    }

    /// Returns the maximal run of `player`'s pieces through `(row, col)` in
    /// `direction`, counting `(row, col)` itself whatever it holds.
    ///
    /// Returns `None` if the position is off the board.
    #[must_use]
    pub fn run_through(
        &self,
        row: usize,
        col: usize,
        player: Player,
        direction: Direction,
    ) -> Option<Line> {
        self.index(row, col)?;
        let origin = Position::new(row, col);
        let (d_row, d_col) = direction.delta();

        let (end, forward) = self.walk(origin, (d_row, d_col), player);
        let (start, backward) = self.walk(origin, (-d_row, -d_col), player);

        Some(Line {
            player,
            direction,
            start,
            end,
            len: 1 + forward + backward,
        })
    }

    /// Returns the first run through `(row, col)` of at least `win_length`
    /// pieces, scanning directions in [`Direction::ALL`] order.
    #[must_use]
    pub fn find_line(
        &self,
        row: usize,
        col: usize,
        player: Player,
        win_length: usize,
    ) -> Option<Line> {
        Direction::ALL
            .into_iter()
            .filter_map(|direction| self.run_through(row, col, player, direction))
            .find(|line| line.len >= win_length)
    }
}
