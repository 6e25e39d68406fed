use agelife::{AutomatonGrid, Pattern, MAX_AGE};
use proptest::prelude::*;
use rand::{Rng, SeedableRng};

const SEED: u64 = 42;

/// Two plain buffers and modulo neighbour lookups.
struct ReferenceField {
    ages: Vec<u8>,
    width: usize,
    height: usize,
}

impl ReferenceField {
    fn from_grid<const W: usize, const H: usize>(grid: &AutomatonGrid<W, H>) -> Self {
        Self {
            ages: grid.ages().collect(),
            width: W,
            height: H,
        }
    }

    fn count_neibs(&self, x: usize, y: usize) -> usize {
        let (w, h) = (self.width as isize, self.height as isize);
        let mut n = 0;
        for dy in [-1, 0, 1] {
            for dx in [-1, 0, 1] {
                if (dx, dy) == (0, 0) {
                    continue;
                }
                let nx = (x as isize + dx).rem_euclid(w);
                let ny = (y as isize + dy).rem_euclid(h);
                if self.ages[(nx + ny * w) as usize] != 0 {
                    n += 1;
                }
            }
        }
        n
    }

    fn update(&mut self) {
        let mut next = vec![0; self.ages.len()];
        for y in 0..self.height {
            for x in 0..self.width {
                let age = self.ages[x + y * self.width];
                next[x + y * self.width] = match (age, self.count_neibs(x, y)) {
                    (0, 3) => 1,
                    (0, _) => 0,
                    (a, 2 | 3) => (a + 1).min(MAX_AGE),
                    _ => 0,
                };
            }
        }
        self.ages = next;
    }
}

fn assert_fields_equal<const W: usize, const H: usize>(
    grid: &AutomatonGrid<W, H>,
    reference: &ReferenceField,
    generation: usize,
) {
    let ages = grid.ages().collect::<Vec<_>>();
    if ages == reference.ages {
        return;
    }
    let i = ages
        .iter()
        .zip(reference.ages.iter())
        .position(|(a, b)| a != b)
        .unwrap_or(0);
    panic!(
        "generation {}: mismatch at ({}, {}): packed={} reference={}",
        generation,
        i % W,
        i / W,
        ages[i],
        reference.ages[i]
    );
}

fn run_consistency<const W: usize, const H: usize>(seed: u64, generations: usize) {
    let mut grid = AutomatonGrid::<W, H>::empty();
    grid.randomize(Some(seed));
    let mut reference = ReferenceField::from_grid(&grid);
    for generation in 1..=generations {
        grid.step();
        reference.update();
        assert_fields_equal(&grid, &reference, generation);
    }
}

#[test]
fn test_consistency() {
    run_consistency::<80, 64>(SEED, 200);
    run_consistency::<17, 9>(SEED + 1, 100);
    run_consistency::<3, 3>(SEED + 2, 20);
    run_consistency::<1, 5>(SEED + 3, 10);
}

#[test]
fn test_consistency_with_edits_between_steps() {
    const N: usize = 32;
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(SEED);
    let mut grid = AutomatonGrid::<N, N>::empty();
    grid.randomize(Some(SEED));
    for generation in 0..50 {
        for _ in 0..10 {
            let (x, y) = (rng.gen_range(0..N), rng.gen_range(0..N));
            if rng.gen_bool(0.5) {
                grid.spawn(x, y).unwrap();
            } else {
                grid.kill(x, y).unwrap();
            }
        }
        let mut reference = ReferenceField::from_grid(&grid);
        grid.step();
        reference.update();
        assert_fields_equal(&grid, &reference, generation);
    }
}

proptest! {
    #[test]
    fn prop_stamp_matches_modulo_placement(
        cells in prop::collection::vec(0u8..=1, 12),
        ox in 0usize..1000,
        oy in 0usize..1000,
    ) {
        const W: usize = 7;
        const H: usize = 5;
        let pattern = Pattern::new(4, 3, cells.clone()).unwrap();
        let mut grid = AutomatonGrid::<W, H>::empty();
        grid.add_pattern(&pattern, ox, oy);

        let mut expected = [0u8; W * H];
        for (i, &m) in cells.iter().enumerate() {
            if m != 0 {
                let (px, py) = (i % 4, i / 4);
                expected[(ox + px) % W + (oy + py) % H * W] = 1;
            }
        }
        prop_assert_eq!(grid.ages().collect::<Vec<_>>(), expected.to_vec());
    }

    #[test]
    fn prop_ages_stay_in_range(seed in any::<u64>(), steps in 0usize..30) {
        let mut grid = AutomatonGrid::<12, 10>::empty();
        grid.randomize(Some(seed));
        for _ in 0..steps {
            grid.step();
        }
        prop_assert!(grid.ages().all(|age| age <= MAX_AGE));
    }
}
