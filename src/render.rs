//! Age to colour mapping shared by every front end.

use crate::AutomatonGrid;

/// RGB colours indexed by age. Index 0 is the background, ages 1..=15 go from
/// the least to the most intense colour.
pub const PALETTE: [[u8; 3]; 16] = [
    [0x00, 0x00, 0x00], // background
    [0x00, 0xa0, 0x38], // green
    [0x8a, 0xd8, 0x5a], // light green
    [0xff, 0xff, 0xff], // white
    [0xff, 0xe0, 0x4a], // yellow
    [0xf2, 0xd0, 0x9a], // beige
    [0x9a, 0x5a, 0x2a], // brown
    [0xff, 0x8c, 0x1a], // orange
    [0xe0, 0x20, 0x20], // red
    [0xff, 0x8a, 0xc8], // pink
    [0x9a, 0x3a, 0xc8], // purple
    [0x1a, 0x2a, 0x7a], // dark blue
    [0x2a, 0x6a, 0xf0], // blue
    [0x8a, 0xc8, 0xff], // light blue
    [0x9a, 0x9a, 0x9a], // gray
    [0x4a, 0x4a, 0x4a], // dark gray
];

/// Colour of a cell, or `None` for a dead one (not drawn).
pub fn color_of(age: u8) -> Option<[u8; 3]> {
    match age {
        0 => None,
        _ => PALETTE.get(age as usize).copied(),
    }
}

/// Draws the field into an RGBA buffer of `WIDTH * HEIGHT` pixels.
pub fn draw<const WIDTH: usize, const HEIGHT: usize>(
    grid: &AutomatonGrid<WIDTH, HEIGHT>,
    screen: &mut [u8],
) {
    const BYTES_IN_PIXEL: usize = 4;

    assert_eq!(screen.len(), BYTES_IN_PIXEL * WIDTH * HEIGHT);
    for (pixel, age) in screen.chunks_exact_mut(BYTES_IN_PIXEL).zip(grid.ages()) {
        let [r, g, b] = color_of(age).unwrap_or(PALETTE[0]);
        pixel.copy_from_slice(&[r, g, b, 0xff]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dead_cells_are_not_drawn() {
        assert_eq!(color_of(0), None);
        for age in 1..=15 {
            assert_eq!(color_of(age), Some(PALETTE[age as usize]));
        }
        assert_eq!(color_of(16), None);
    }

    #[test]
    fn test_draw() {
        let mut grid = AutomatonGrid::<3, 2>::empty();
        grid.spawn(2, 1).unwrap();
        let mut screen = vec![0; 4 * 3 * 2];
        draw(&grid, &mut screen);
        assert_eq!(&screen[..4], &[0, 0, 0, 0xff]);
        assert_eq!(&screen[20..], &[0x00, 0xa0, 0x38, 0xff]);
    }
}
