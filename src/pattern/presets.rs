use super::Pattern;
use crate::PatternError;

enum Source {
    Flat(&'static [u8]),
    Rle(&'static str),
}

/// A named shape together with where the pattern menu places it.
pub struct Preset {
    pub name: &'static str,
    source: Source,
    pub placements: &'static [(usize, usize)],
}

impl Preset {
    pub fn pattern(&self) -> Result<Pattern, PatternError> {
        match self.source {
            Source::Flat(data) => Pattern::from_flat(data),
            Source::Rle(text) => Pattern::from_rle(text.as_bytes()),
        }
    }
}

// Placements assume the default 80x64 field; they wrap on smaller ones.
pub const PRESETS: &[Preset] = &[
    Preset {
        name: "Glider",
        source: Source::Flat(&[3, 3, 0, 1, 0, 0, 0, 1, 1, 1, 1]),
        placements: &[(2, 2)],
    },
    Preset {
        name: "Glider gun",
        source: Source::Rle(
            "#N Gosper glider gun\n\
             x = 36, y = 9, rule = B3/S23\n\
             24bo$22bobo$12b2o6b2o12b2o$11bo3bo4b2o12b2o$2o8bo5bo3b2o$\
             2o8bo3bob2o4bobo$10bo5bo7bo$11bo3bo$12b2o!",
        ),
        placements: &[(10, 10)],
    },
    Preset {
        name: "Diamonds",
        source: Source::Rle(
            "#N 4-8-12 diamond\n\
             x = 12, y = 9\n\
             4b4o$$2b8o$$12o$$2b8o$$4b4o!",
        ),
        placements: &[(18, 18), (50, 42)],
    },
    Preset {
        name: "R-pentomino",
        source: Source::Flat(&[3, 3, 0, 1, 1, 1, 1, 0, 0, 1, 0]),
        placements: &[(38, 30)],
    },
    Preset {
        name: "U-heptomino",
        source: Source::Rle("x = 3, y = 3\nobo$obo$3o!"),
        placements: &[(38, 26)],
    },
];

#[cfg(test)]
mod tests {
    use super::PRESETS;

    #[test]
    fn test_presets_decode() {
        let populations = PRESETS
            .iter()
            .map(|p| p.pattern().unwrap().population())
            .collect::<Vec<_>>();
        assert_eq!(populations, vec![5, 36, 36, 5, 7]);
    }
}
