use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{Error, Result};
use crate::simulation::cell::Cell;

/// Toroidal Game of Life grid with ping-pong cell buffers.
///
/// Each generation reads only the current buffer and writes only the other
/// one, then the two swap roles. Both buffers are allocated once.
#[derive(Clone, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    /// Buffer A - ping
    buffer_a: Vec<Cell>,
    /// Buffer B - pong
    buffer_b: Vec<Cell>,
    /// Which buffer holds the current generation (true = A, false = B)
    read_from_a: bool,
    generation: u64,
}

impl Grid {
    /// Create a grid seeded with the canonical benchmark pattern
    pub fn new(width: usize, height: usize) -> Result<Self> {
        Self::from_fn(width, height, Cell::seeded)
    }

    /// Create a grid where the cell at flat index `i` is `seed(i)`
    pub fn from_fn(width: usize, height: usize, seed: impl FnMut(usize) -> Cell) -> Result<Self> {
        let cell_count = checked_cell_count(width, height)?;
        let cells = (0..cell_count).map(seed).collect();
        Ok(Self::with_cells(width, height, cells))
    }

    /// Create a grid from an explicit row-major cell buffer
    pub fn from_cells(width: usize, height: usize, cells: Vec<Cell>) -> Result<Self> {
        let expected = checked_cell_count(width, height)?;
        if cells.len() != expected {
            return Err(Error::CellCountMismatch {
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self::with_cells(width, height, cells))
    }

    /// Create a reproducible random soup with roughly `density` live cells.
    ///
    /// Densities outside `[0, 1]` are clamped; NaN and infinities are rejected.
    pub fn random(width: usize, height: usize, density: f64, seed: u64) -> Result<Self> {
        if !density.is_finite() {
            return Err(Error::InvalidDensity(density));
        }
        let mut rng = StdRng::seed_from_u64(seed);
        let density = density.clamp(0.0, 1.0);
        Self::from_fn(width, height, |_| Cell::from(rng.gen_bool(density)))
    }

    /// Parse a grid from text, one line per row.
    ///
    /// Accepts the render glyphs (`◼`/`◻`) and `#`/`.`.
    pub fn from_text(text: &str) -> Result<Self> {
        let mut width = 0;
        let mut height = 0;
        let mut cells = Vec::new();

        for (line_index, line) in text.lines().enumerate() {
            let line_number = line_index + 1;
            let before = cells.len();
            for glyph in line.chars() {
                let cell = Cell::from_glyph(glyph).ok_or(Error::InvalidGlyph {
                    glyph,
                    line: line_number,
                })?;
                cells.push(cell);
            }

            let row_width = cells.len() - before;
            if line_index == 0 {
                width = row_width;
            } else if row_width != width {
                return Err(Error::RaggedRow {
                    line: line_number,
                    expected: width,
                    actual: row_width,
                });
            }
            height += 1;
        }

        Self::from_cells(width, height, cells)
    }

    fn with_cells(width: usize, height: usize, cells: Vec<Cell>) -> Self {
        log::debug!("Created {}x{} grid ({} cells)", width, height, cells.len());
        let buffer_b = vec![Cell::Dead; cells.len()];
        Self {
            width,
            height,
            buffer_a: cells,
            buffer_b,
            read_from_a: true,
            generation: 0,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of generations computed since construction
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Flat index of (row, col)
    #[inline]
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    /// The current generation, row-major, without copying.
    pub fn current_state(&self) -> &[Cell] {
        if self.read_from_a {
            &self.buffer_a
        } else {
            &self.buffer_b
        }
    }

    /// The current generation as raw bytes (`0` dead, `1` alive)
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.current_state())
    }

    /// Cell at (row, col); panics if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.current_state()[self.index(row, col)]
    }

    /// Number of live cells in the current generation
    pub fn population(&self) -> usize {
        self.current_state().iter().filter(|c| c.is_alive()).count()
    }

    /// Live neighbours of (row, col) in the current generation, with wraparound
    pub fn live_neighbor_count(&self, row: usize, col: usize) -> u8 {
        live_neighbor_count(self.current_state(), self.width, self.height, row, col)
    }

    /// Advance by one generation
    pub fn step(&mut self) {
        let (width, height) = (self.width, self.height);
        let (input, output) = self.io_buffers();

        for row in 0..height {
            for col in 0..width {
                let idx = row * width + col;
                let neighbors = live_neighbor_count(input, width, height, row, col);
                output[idx] = input[idx].next(neighbors);
            }
        }

        // Output becomes input for the next generation
        self.swap();
        self.generation += 1;
    }

    /// Advance by `n` generations
    pub fn step_n(&mut self, n: usize) {
        for _ in 0..n {
            self.step();
        }
    }

    /// Text rendering: one line per row, each terminated by `\n`
    pub fn render_as_text(&self) -> String {
        self.to_string()
    }

    /// Get (input, output) buffers for the next generation
    fn io_buffers(&mut self) -> (&[Cell], &mut [Cell]) {
        if self.read_from_a {
            (self.buffer_a.as_slice(), self.buffer_b.as_mut_slice())
        } else {
            (self.buffer_b.as_slice(), self.buffer_a.as_mut_slice())
        }
    }

    fn swap(&mut self) {
        self.read_from_a = !self.read_from_a;
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.current_state().chunks(self.width) {
            for cell in row {
                write!(f, "{}", cell.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl PartialEq for Grid {
    /// Grids are equal when they show the same generation, regardless of
    /// which buffer holds it or how many steps led there.
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width
            && self.height == other.height
            && self.current_state() == other.current_state()
    }
}

impl Eq for Grid {}

fn checked_cell_count(width: usize, height: usize) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimension { width, height });
    }
    width
        .checked_mul(height)
        .ok_or(Error::InvalidDimension { width, height })
}

/// Sum of the 3x3 block around (row, col) minus the cell itself.
///
/// Rows and columns wrap modulo the grid size. On grids narrower than 3 the
/// same cell can appear several times in the block and is counted each time,
/// so a live 1x1 cell sees itself as 8 neighbours.
#[inline]
fn live_neighbor_count(cells: &[Cell], width: usize, height: usize, row: usize, col: usize) -> u8 {
    let rows = [(row + height - 1) % height, row, (row + 1) % height];
    let cols = [(col + width - 1) % width, col, (col + 1) % width];

    let mut count = 0u8;
    for r in rows {
        let base = r * width;
        for c in cols {
            count += cells[base + c] as u8;
        }
    }
    count - cells[row * width + col] as u8
}
