use crate::{Pattern, PatternError};

// largest accepted `x * y`
const MAX_PATTERN_CELLS: usize = 1 << 24;

/// Parses an RLE pattern (`#` comments, `x = .., y = ..` header, `b`/`o`/`$`
/// runs terminated by `!`) into a [`Pattern`] of the declared size.
pub fn parse_rle(data: &[u8]) -> Result<Pattern, PatternError> {
    // `None` when the line ends before any digit; the digit run is always consumed
    let parse_next_number = |i: &mut usize| -> Option<Result<usize, PatternError>> {
        while *i < data.len() && !data[*i].is_ascii_digit() {
            if data[*i] == b'\n' {
                return None;
            }
            *i += 1;
        }
        let start = *i;
        while *i < data.len() && data[*i].is_ascii_digit() {
            *i += 1;
        }
        if start == *i {
            return None;
        }
        let number = std::str::from_utf8(&data[start..*i])
            .ok()
            .and_then(|digits| digits.parse::<usize>().ok())
            .ok_or(PatternError::BadNumber { offset: start });
        Some(number)
    };

    let mut i = 0;
    // skipping comment and blank lines
    while i < data.len() && matches!(data[i], b'#' | b'\n' | b'\r') {
        while i < data.len() && data[i] != b'\n' {
            i += 1;
        }
        i += 1;
    }
    // next line must start with 'x'; parsing sizes
    if data.get(i) != Some(&b'x') {
        return Err(PatternError::MissingHeader);
    }
    let width = parse_next_number(&mut i).ok_or(PatternError::MissingHeader)??;
    let height = parse_next_number(&mut i).ok_or(PatternError::MissingHeader)??;
    if width == 0 || height == 0 {
        return Err(PatternError::EmptyDimensions { width, height });
    }
    let area = width
        .checked_mul(height)
        .filter(|&area| area <= MAX_PATTERN_CELLS)
        .ok_or(PatternError::TooLarge { width, height })?;
    // the rest of the header (e.g. the rule) is ignored
    while i < data.len() && data[i] != b'\n' {
        i += 1;
    }

    let mut markers = vec![0; area];
    let (mut x, mut y, mut cnt) = (0usize, 0usize, 1usize);
    while i < data.len() {
        match data[i] {
            b'\n' | b'\r' | b' ' | b'\t' => i += 1,
            b'0'..=b'9' => {
                cnt = parse_next_number(&mut i).unwrap_or(Ok(1))?;
            }
            b'o' | b'b' => {
                let end = x
                    .checked_add(cnt)
                    .filter(|&end| end <= width && y < height)
                    .ok_or(PatternError::RowOverflow { row: y, width })?;
                if data[i] == b'o' {
                    markers[x + y * width..end + y * width].fill(1);
                }
                (x, i, cnt) = (end, i + 1, 1);
            }
            b'$' => {
                y = y
                    .checked_add(cnt)
                    .filter(|&y| y <= height)
                    .ok_or(PatternError::ColumnOverflow { height })?;
                (x, i, cnt) = (0, i + 1, 1);
            }
            b'!' => break,
            symbol => {
                return Err(PatternError::UnexpectedSymbol {
                    symbol: symbol as char,
                    offset: i,
                })
            }
        };
    }
    Pattern::new(width, height, markers)
}
