mod presets;

pub use presets::{Preset, PRESETS};

use crate::PatternError;
use std::path::Path;

/// A rectangular shape that can be stamped onto the grid.
///
/// Any nonzero marker is an alive cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    width: usize,
    height: usize,
    markers: Vec<u8>,
}

impl Pattern {
    /// Creates a pattern from row-major markers.
    pub fn new(width: usize, height: usize, markers: Vec<u8>) -> Result<Self, PatternError> {
        if width == 0 || height == 0 {
            return Err(PatternError::EmptyDimensions { width, height });
        }
        if width.checked_mul(height) != Some(markers.len()) {
            return Err(PatternError::BodyLength {
                expected: width.saturating_mul(height),
                actual: markers.len(),
            });
        }
        Ok(Self {
            width,
            height,
            markers,
        })
    }

    /// Decodes `[width, height, markers...]`.
    pub fn from_flat(data: &[u8]) -> Result<Self, PatternError> {
        match data {
            [w, h, body @ ..] => Self::new(*w as usize, *h as usize, body.to_vec()),
            _ => Err(PatternError::MissingHeader),
        }
    }

    /// Parses RLE text, see [`crate::parse_rle`].
    pub fn from_rle(data: &[u8]) -> Result<Self, PatternError> {
        crate::parse_rle(data)
    }

    pub fn from_rle_file(path: impl AsRef<Path>) -> Result<Self, PatternError> {
        let data = std::fs::read(path)?;
        Self::from_rle(&data)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Row-major offsets of the alive cells.
    pub fn alive_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let w = self.width;
        self.markers
            .iter()
            .enumerate()
            .filter(|&(_, &m)| m != 0)
            .map(move |(i, _)| (i % w, i / w))
    }

    pub fn population(&self) -> usize {
        self.markers.iter().filter(|&&m| m != 0).count()
    }
}
