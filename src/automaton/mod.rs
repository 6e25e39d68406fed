mod cell;

pub use cell::{MAX_AGE, NEWBORN};

use crate::{GridError, Pattern};

/// Aging Game of Life on a `WIDTH x HEIGHT` torus.
///
/// Cells live in one flat byte buffer with a one-cell halo around the
/// visible region. Each byte packs the pre-step age (high nibble) next to the
/// age being computed (low nibble), so a generation is computed in place
/// without a second buffer.
#[derive(Clone)]
pub struct AutomatonGrid<const WIDTH: usize, const HEIGHT: usize> {
    cells: Vec<u8>,
}

impl<const WIDTH: usize, const HEIGHT: usize> Default for AutomatonGrid<WIDTH, HEIGHT> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<const WIDTH: usize, const HEIGHT: usize> AutomatonGrid<WIDTH, HEIGHT> {
    const WIDTH_REAL: usize = WIDTH + 2;
    const HEIGHT_REAL: usize = HEIGHT + 2;

    /// Creates a grid with every cell dead.
    pub fn empty() -> Self {
        assert!(WIDTH >= 1 && HEIGHT >= 1, "grid must be at least 1x1");
        Self {
            cells: vec![0; Self::WIDTH_REAL * Self::HEIGHT_REAL],
        }
    }

    pub const fn width(&self) -> usize {
        WIDTH
    }

    pub const fn height(&self) -> usize {
        HEIGHT
    }

    /// Storage index of a halo-space coordinate (visible cells start at 1).
    #[inline]
    fn idx(x: usize, y: usize) -> usize {
        x + y * Self::WIDTH_REAL
    }

    fn checked_idx(x: usize, y: usize) -> Result<usize, GridError> {
        if x >= WIDTH || y >= HEIGHT {
            return Err(GridError::OutOfRange {
                x,
                y,
                width: WIDTH,
                height: HEIGHT,
            });
        }
        Ok(Self::idx(x + 1, y + 1))
    }

    /// Age of the cell at `(x, y)`; 0 means dead.
    pub fn get_age(&self, x: usize, y: usize) -> Result<u8, GridError> {
        Self::checked_idx(x, y).map(|i| cell::age(self.cells[i]))
    }

    pub fn is_alive(&self, x: usize, y: usize) -> Result<bool, GridError> {
        self.get_age(x, y).map(|age| age != 0)
    }

    pub fn spawn(&mut self, x: usize, y: usize) -> Result<(), GridError> {
        let i = Self::checked_idx(x, y)?;
        self.cells[i] = NEWBORN;
        Ok(())
    }

    pub fn kill(&mut self, x: usize, y: usize) -> Result<(), GridError> {
        let i = Self::checked_idx(x, y)?;
        self.cells[i] = 0;
        Ok(())
    }

    /// Kills every visible cell. The halo is refreshed by the next [`Self::step`].
    pub fn clear(&mut self) {
        for row in self.visible_rows_mut() {
            row.fill(0);
        }
    }

    /// Fills the field with random cells.
    ///
    /// Half of the cells die; the rest get an age drawn from `1..=3`.
    /// `seed` - random seed (if `None`, then random seed is generated)
    pub fn randomize(&mut self, seed: Option<u64>) {
        use rand::{Rng, SeedableRng};

        let mut rng = if let Some(x) = seed {
            rand_chacha::ChaCha8Rng::seed_from_u64(x)
        } else {
            rand_chacha::ChaCha8Rng::from_entropy()
        };
        for row in self.visible_rows_mut() {
            for c in row.iter_mut() {
                *c = if rng.gen_bool(0.5) {
                    0
                } else {
                    rng.gen_range(1..=3)
                };
            }
        }
    }

    /// Stamps every alive cell of `pattern` at `offset + (px, py)`,
    /// wrapping around the edges. Cells outside the pattern are untouched.
    pub fn add_pattern(&mut self, pattern: &Pattern, offset_x: usize, offset_y: usize) {
        let (ox, oy) = (offset_x % WIDTH, offset_y % HEIGHT);
        for (px, py) in pattern.alive_cells() {
            let x = (ox + px % WIDTH) % WIDTH;
            let y = (oy + py % HEIGHT) % HEIGHT;
            self.cells[Self::idx(x + 1, y + 1)] = NEWBORN;
        }
        tracing::debug!(
            width = pattern.width(),
            height = pattern.height(),
            offset_x,
            offset_y,
            "pattern stamped"
        );
    }

    /// Advances the whole grid by one generation.
    pub fn step(&mut self) {
        self.bufferize();
        self.apply_rules();
        tracing::trace!(population = self.population(), "generation advanced");
    }

    /// Snapshots every visible cell into its high nibble and mirrors the
    /// opposite edges into the halo.
    fn bufferize(&mut self) {
        let (w, h) = (WIDTH, HEIGHT);
        for row in self.visible_rows_mut() {
            for c in row.iter_mut() {
                *c = cell::snapshot(*c);
            }
        }

        for y in 1..=h {
            self.cells[Self::idx(0, y)] = self.cells[Self::idx(w, y)];
            self.cells[Self::idx(w + 1, y)] = self.cells[Self::idx(1, y)];
        }
        // whole rows, corners included: the columns above are already mirrored
        let stride = Self::WIDTH_REAL;
        self.cells
            .copy_within(Self::idx(0, h)..Self::idx(0, h) + stride, Self::idx(0, 0));
        self.cells
            .copy_within(Self::idx(0, 1)..Self::idx(0, 1) + stride, Self::idx(0, h + 1));
    }

    fn count_neibs(&self, i: usize) -> u8 {
        let s = Self::WIDTH_REAL;
        [
            i - s - 1,
            i - s,
            i - s + 1,
            i - 1,
            i + 1,
            i + s - 1,
            i + s,
            i + s + 1,
        ]
        .into_iter()
        .filter(|&j| cell::was_alive(self.cells[j]))
        .count() as u8
    }

    fn apply_rules(&mut self) {
        for y in 1..=HEIGHT {
            for x in 1..=WIDTH {
                let i = Self::idx(x, y);
                let neibs = self.count_neibs(i);
                let c = self.cells[i];
                // keep the high nibble: later cells of this pass still read it
                self.cells[i] = (c & cell::PREV_MASK) | cell::next_age(cell::age(c), neibs);
            }
        }
    }

    /// Number of alive visible cells.
    pub fn population(&self) -> usize {
        self.ages().filter(|&age| age != 0).count()
    }

    /// Row-major ages of the visible cells.
    pub fn ages(&self) -> impl Iterator<Item = u8> + '_ {
        self.cells
            .chunks_exact(Self::WIDTH_REAL)
            .skip(1)
            .take(HEIGHT)
            .flat_map(|row| row[1..=WIDTH].iter().map(|&c| cell::age(c)))
    }

    fn visible_rows_mut(&mut self) -> impl Iterator<Item = &mut [u8]> {
        self.cells
            .chunks_exact_mut(Self::WIDTH_REAL)
            .skip(1)
            .take(HEIGHT)
            .map(|row| &mut row[1..=WIDTH])
    }

    /// Raw byte at a halo-space coordinate, `0..=WIDTH + 1` by `0..=HEIGHT + 1`.
    #[cfg(test)]
    fn raw(&self, x: usize, y: usize) -> u8 {
        debug_assert!(y < Self::HEIGHT_REAL);
        self.cells[Self::idx(x, y)]
    }
}
