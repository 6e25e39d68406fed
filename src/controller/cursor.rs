#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Edit cursor; moves around the torus just like the cells do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cursor<const WIDTH: usize, const HEIGHT: usize> {
    x: usize,
    y: usize,
}

impl<const WIDTH: usize, const HEIGHT: usize> Default for Cursor<WIDTH, HEIGHT> {
    /// Centre of the field.
    fn default() -> Self {
        Self {
            x: WIDTH / 2,
            y: HEIGHT / 2,
        }
    }
}

impl<const WIDTH: usize, const HEIGHT: usize> Cursor<WIDTH, HEIGHT> {
    /// Coordinates are wrapped into the field.
    pub fn at(x: usize, y: usize) -> Self {
        Self {
            x: x % WIDTH,
            y: y % HEIGHT,
        }
    }

    pub fn position(&self) -> (usize, usize) {
        (self.x, self.y)
    }

    pub fn step(&mut self, direction: Direction) {
        match direction {
            Direction::Up => self.y = (self.y + HEIGHT - 1) % HEIGHT,
            Direction::Down => self.y = (self.y + 1) % HEIGHT,
            Direction::Left => self.x = (self.x + WIDTH - 1) % WIDTH,
            Direction::Right => self.x = (self.x + 1) % WIDTH,
        }
    }
}
