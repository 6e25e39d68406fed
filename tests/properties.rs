use agelife::{AutomatonGrid, DefaultGrid, GridError, Pattern, GRID_HEIGHT, GRID_WIDTH, MAX_AGE};

#[test]
fn test_age_saturates_after_twenty_generations() {
    let mut grid = DefaultGrid::empty();
    for (x, y) in [(10, 10), (11, 10), (10, 11), (11, 11)] {
        grid.spawn(x, y).unwrap();
    }
    for _ in 0..20 {
        grid.step();
    }
    assert_eq!(grid.get_age(10, 10), Ok(MAX_AGE));
    assert_eq!(grid.population(), 4);
}

#[test]
fn test_randomize_distribution() {
    const N: usize = 256;
    let mut grid = AutomatonGrid::<N, N>::empty();
    grid.randomize(Some(2024));
    let mut counts = [0usize; 16];
    for age in grid.ages() {
        counts[age as usize] += 1;
    }
    let dead = counts[0] as f64 / (N * N) as f64;
    assert!((dead - 0.5).abs() < 0.01, "dead fraction {}", dead);
    assert!(counts[4..].iter().all(|&c| c == 0), "{:?}", counts);
    // every fresh age shows up about equally often
    for &c in &counts[1..=3] {
        let share = c as f64 / (N * N) as f64;
        assert!((share - 1. / 6.).abs() < 0.01, "{:?}", counts);
    }
}

#[test]
fn test_unseeded_randomize_stays_in_range() {
    let mut grid = DefaultGrid::empty();
    grid.randomize(None);
    assert!(grid.ages().all(|age| age <= 3));
}

#[test]
fn test_stamp_crosses_right_edge() {
    let row = Pattern::from_flat(&[4, 1, 1, 1, 1, 1]).unwrap();
    let mut grid = DefaultGrid::empty();
    grid.add_pattern(&row, GRID_WIDTH - 1, 5);
    for x in [GRID_WIDTH - 1, 0, 1, 2] {
        assert_eq!(grid.get_age(x, 5), Ok(1), "x={}", x);
    }
    assert_eq!(grid.population(), 4);
}

#[test]
fn test_stamp_crosses_bottom_right_corner() {
    let block = Pattern::from_flat(&[2, 2, 1, 1, 1, 1]).unwrap();
    let mut grid = DefaultGrid::empty();
    grid.add_pattern(&block, GRID_WIDTH - 1, GRID_HEIGHT - 1);
    let (w, h) = (GRID_WIDTH, GRID_HEIGHT);
    for (x, y) in [(w - 1, h - 1), (0, h - 1), (w - 1, 0), (0, 0)] {
        assert_eq!(grid.get_age(x, y), Ok(1));
    }
    // a block split over the four corners is still a block
    grid.step();
    assert_eq!(grid.population(), 4);
    assert_eq!(grid.get_age(0, 0), Ok(2));
}

#[test]
fn test_glider_returns_after_crossing_torus() {
    let glider = Pattern::from_rle(b"x = 3, y = 3\nbo$2bo$3o!").unwrap();
    let mut grid = AutomatonGrid::<20, 20>::empty();
    grid.add_pattern(&glider, 18, 18);
    let alive = |grid: &AutomatonGrid<20, 20>| {
        grid.ages()
            .enumerate()
            .filter(|&(_, age)| age != 0)
            .map(|(i, _)| i)
            .collect::<Vec<_>>()
    };
    let start = alive(&grid);
    // a glider moves one cell diagonally every 4 generations
    for _ in 0..4 * 20 {
        grid.step();
        assert_eq!(grid.population(), 5);
    }
    assert_eq!(alive(&grid), start);
}

#[test]
fn test_direct_access_rejects_outside_coordinates() {
    let mut grid = DefaultGrid::empty();
    let err = grid.spawn(0, GRID_HEIGHT).unwrap_err();
    assert_eq!(
        err,
        GridError::OutOfRange {
            x: 0,
            y: GRID_HEIGHT,
            width: GRID_WIDTH,
            height: GRID_HEIGHT
        }
    );
    assert_eq!(err.to_string(), "cell (0, 64) is outside the 80x64 grid");
    assert!(grid.kill(GRID_WIDTH, 0).is_err());
    assert_eq!(grid.population(), 0);
}
