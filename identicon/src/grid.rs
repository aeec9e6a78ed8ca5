use smallvec::SmallVec;

use crate::digest::Digest;

/// Cells per grid row and column.
pub const GRID_SIZE: usize = 5;
/// Total number of cells in the grid.
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Bytes of digest consumed per grid row before mirroring.
const CHUNK_LEN: usize = 3;

/// One grid cell: the byte that decides it and its row-major index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Cell {
    pub value: u8,
    /// Row-major index in `0..CELL_COUNT`.
    pub position: usize,
}

impl Cell {
    pub fn row(&self) -> usize {
        self.position / GRID_SIZE
    }

    pub fn column(&self) -> usize {
        self.position % GRID_SIZE
    }

    /// Only even cells are painted.
    pub fn is_painted(&self) -> bool {
        self.value % 2 == 0
    }
}

/// The full, mirrored 5x5 grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [Cell; CELL_COUNT],
}

impl Grid {
    /// All 25 cells in row-major order.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    pub fn cell(&self, column: usize, row: usize) -> Cell {
        self.cells[row * GRID_SIZE + column]
    }

    /// Iterate over rows of five cells.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(GRID_SIZE)
    }
}

/// Cells that survive [`filter_odd_squares`], in grid order.
pub type Squares = SmallVec<[Cell; CELL_COUNT]>;

/// Build the mirrored grid from a digest.
///
/// 1. Split the 16 digest bytes into chunks of 3 and drop the trailing
///    incomplete chunk (the 16th byte), leaving 5 rows.
/// 2. Mirror each chunk `[b0, b1, b2]` into `[b0, b1, b2, b1, b0]`.
/// 3. Flatten the rows and pair every value with its index.
pub fn build_grid(digest: &Digest) -> Grid {
    let mut values = [0u8; CELL_COUNT];
    let rows = digest.as_bytes().chunks_exact(CHUNK_LEN).map(mirror);
    for (slot, value) in values.iter_mut().zip(rows.flatten()) {
        *slot = value;
    }

    Grid {
        cells: std::array::from_fn(|position| Cell {
            value: values[position],
            position,
        }),
    }
}

fn mirror(chunk: &[u8]) -> [u8; GRID_SIZE] {
    [chunk[0], chunk[1], chunk[2], chunk[1], chunk[0]]
}

/// Keep only the cells with an even value, preserving order.
pub fn filter_odd_squares(grid: &Grid) -> Squares {
    grid.cells
        .iter()
        .copied()
        .filter(Cell::is_painted)
        .collect()
}
