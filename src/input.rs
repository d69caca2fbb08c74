use crate::{
    geometry::{Map, MapConversionErr},
    maze::{Cell, Grid},
};
use itertools::Itertools;
use std::{
    fs::File,
    io::{prelude::*, BufReader, Cursor},
    path::Path,
};

/// Largest number of cells a grid file may declare.
pub const MAX_CELLS: usize = 1 << 24;

/// Header line of a grid file: row count then column count.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, parse_display::Display, parse_display::FromStr,
)]
#[display("{rows} {cols}")]
pub struct Dimensions {
    pub rows: usize,
    pub cols: usize,
}

/// Parse the grid file at the specified path.
///
/// See [`parse_grid_reader`] for the format.
pub fn parse_grid(path: &Path) -> Result<Grid, Error> {
    let file = File::open(path)?;
    parse_grid_reader(BufReader::new(file))
}

/// Parse a grid from a string.
///
/// See [`parse_grid_reader`] for the format.
pub fn parse_grid_str(data: &str) -> Result<Grid, Error> {
    parse_grid_reader(Cursor::new(data))
}

/// Parse a grid from a reader.
///
/// The first line holds the dimensions, `"<rows> <cols>"`, separated by any whitespace.
/// A header declaring more than [`MAX_CELLS`] cells is rejected. Exactly `rows` lines follow,
/// one character per cell. Spaces are significant; a row shorter than `cols` is padded
/// with empty cells since trailing spaces are easily lost, and an empty line is a row of
/// empty cells. Anything after the last row is ignored.
pub fn parse_grid_reader(mut reader: impl BufRead) -> Result<Grid, Error> {
    let mut buf = String::new();
    if reader.read_line(&mut buf)? == 0 {
        return Err(Error::NoHeader);
    }
    let header = buf.trim();
    let Dimensions { rows, cols } = header
        .split_whitespace()
        .join(" ")
        .parse()
        .map_err(|_| Error::Header(header.to_string()))?;
    if rows.checked_mul(cols).map_or(true, |cells| cells > MAX_CELLS) {
        return Err(Error::TooLarge { rows, cols });
    }

    let mut grid = Vec::new();
    for row in 0..rows {
        buf.clear();
        if reader.read_line(&mut buf)? == 0 {
            return Err(Error::MissingRows {
                expected: rows,
                found: row,
            });
        }
        let line = buf.trim_end_matches(['\n', '\r']);

        let mut cells = Map::<Cell>::parse_row(line)?;
        if cells.len() > cols {
            return Err(Error::RowTooWide {
                row,
                expected: cols,
                found: cells.len(),
            });
        }
        cells.resize(cols, Cell::Empty);
        grid.push(cells);
    }

    Ok(Map::from(grid.as_slice()))
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("input is empty")]
    NoHeader,
    #[error("malformed header {0:?}; expected \"<rows> <cols>\"")]
    Header(String),
    #[error("{rows}x{cols} grid exceeds {max} cells", max = MAX_CELLS)]
    TooLarge { rows: usize, cols: usize },
    #[error("expected {expected} rows but found {found}")]
    MissingRows { expected: usize, found: usize },
    #[error("row {row} has {found} cells; expected {expected}")]
    RowTooWide {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("reading row")]
    Row(#[from] MapConversionErr),
}
