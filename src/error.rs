use thiserror::Error;

/// Raised when a directly addressed coordinate falls outside the visible grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfRange {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
}

/// Failures while decoding a pattern from its flat or RLE description.
#[derive(Debug, Error)]
pub enum PatternError {
    #[error("pattern header is missing its width and height")]
    MissingHeader,
    #[error("pattern has an empty dimension ({width}x{height})")]
    EmptyDimensions { width: usize, height: usize },
    #[error("pattern of {width}x{height} cells is too large")]
    TooLarge { width: usize, height: usize },
    #[error("number at byte {offset} does not fit")]
    BadNumber { offset: usize },
    #[error("pattern body has {actual} markers, expected {expected}")]
    BodyLength { expected: usize, actual: usize },
    #[error("unexpected symbol {symbol:?} at byte {offset}")]
    UnexpectedSymbol { symbol: char, offset: usize },
    #[error("row {row} runs past the declared width {width}")]
    RowOverflow { row: usize, width: usize },
    #[error("pattern runs past the declared height {height}")]
    ColumnOverflow { height: usize },
    #[error("cannot read pattern file")]
    Io(#[from] std::io::Error),
}
