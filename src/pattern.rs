use std::io;
use std::path::Path;
use std::path::PathBuf;

use thiserror::Error;
use tracing::debug;
use tracing::info;

use crate::board::BitBoard;

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("Failed to read pattern file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// What a pattern read ended up doing to the board.
#[derive(Default, Clone, Copy, PartialEq, Eq, Debug)]
pub struct PatternSummary {
    /// Rows that received at least one byte of input
    pub rows: usize,

    /// Cells set alive
    pub live: usize,

    /// Lines that ran past the board width. The excess is dropped.
    pub truncated: usize,
}

/// Read a plain text pattern, calling `f(x, y)` for every live cell.
///
/// Each line is a row, each byte a column. `1` is a live cell and anything else is dead. Short
/// lines leave the rest of their row dead, and bytes past `width` are skipped. Reading stops
/// after `height` rows or at the end of input, whichever comes first.
///
/// ```notrust
/// 0100
/// 0010
/// 1110
/// ```
pub fn read_pattern<F>(mut bytes: &[u8], width: usize, height: usize, mut f: F) -> PatternSummary
where
    F: FnMut(usize, usize),
{
    let mut summary = PatternSummary::default();

    for y in 0..height {
        if bytes.is_empty() {
            break;
        }
        summary.rows += 1;

        let (line, rest) = match bytes.iter().position(|&b| b == b'\n') {
            Some(i) => (&bytes[..i], &bytes[i + 1..]),
            None => (bytes, &[][..]),
        };
        bytes = rest;

        if line.len() > width {
            summary.truncated += 1;
        }

        for (x, _) in line.iter().take(width).enumerate().filter(|&(_, &b)| b == b'1') {
            f(x, y);
            summary.live += 1;
        }
    }

    summary
}

/// Load the pattern at `path` into `board`.
pub fn load_pattern(
    path: impl AsRef<Path>,
    board: &mut BitBoard,
) -> Result<PatternSummary, PatternError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| PatternError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let (width, height) = (board.width(), board.height());
    let summary = read_pattern(&bytes, width, height, |x, y| board.set(x, y, true));

    if summary.truncated > 0 {
        debug!(lines = summary.truncated, width, "pattern is wider than the board, clipping");
    }

    info!(
        path = %path.display(),
        rows = summary.rows,
        live = summary.live,
        "loaded pattern"
    );

    Ok(summary)
}
