//! Construction options for the helpers

use crate::address::{shift, CellAddress};
use crate::error::{Error, Result};
use crate::{MAX_COLS, MAX_ROWS};

/// Start cell used by the JSON importer when none is given
pub const DEFAULT_START_CELL: &str = "B2";

/// Origin of anchor-relative operations, as (column, row), both 1-based.
///
/// Offsets passed to an editor are added to the anchor, so offset `0` lands on
/// the anchor column/row itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Anchor {
    /// Anchor column (1-based)
    pub col: u32,
    /// Anchor row (1-based)
    pub row: u32,
}

impl Anchor {
    /// Create an anchor inside the worksheet grid
    pub fn new(col: u32, row: u32) -> Result<Self> {
        if col == 0 || row == 0 || col > MAX_COLS || row > MAX_ROWS {
            return Err(Error::invalid(format!(
                "anchor ({}, {}) is outside the worksheet",
                col, row
            )));
        }
        Ok(Self { col, row })
    }

    /// Absolute column for a column offset; `InvalidArgument` past the last column
    pub fn col_at(&self, offset: u32) -> Result<u32> {
        shift(self.col, offset, MAX_COLS, "column")
    }

    /// Absolute row for a row offset; `InvalidArgument` past the last row
    pub fn row_at(&self, offset: u32) -> Result<u32> {
        shift(self.row, offset, MAX_ROWS, "row")
    }
}

impl Default for Anchor {
    fn default() -> Self {
        Self { col: 2, row: 2 }
    }
}

/// Options for opening a sheet editor
#[derive(Debug, Clone, Default)]
pub struct EditorOptions {
    /// Sheet to edit; the first sheet when unset
    pub sheet_name: Option<String>,
    /// Origin for anchor-relative operations (default: column 2, row 2)
    pub anchor: Anchor,
}

impl EditorOptions {
    /// Select a sheet by name
    pub fn with_sheet_name<S: Into<String>>(mut self, name: S) -> Self {
        self.sheet_name = Some(name.into());
        self
    }

    /// Use a different anchor
    pub fn with_anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }
}

/// Options for importing JSON rows
#[derive(Debug, Clone)]
pub struct ImportOptions {
    /// Top-left cell of the written block, in A1 notation (default: `B2`)
    pub start_cell: String,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            start_cell: DEFAULT_START_CELL.to_string(),
        }
    }
}

impl ImportOptions {
    /// Start writing at another cell
    pub fn with_start_cell<S: Into<String>>(mut self, start_cell: S) -> Self {
        self.start_cell = start_cell.into();
        self
    }

    /// Parse the configured start cell
    pub fn start(&self) -> Result<CellAddress> {
        CellAddress::parse(&self.start_cell)
    }
}

/// Optional row/column limits for reading a block of cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bounds {
    /// First row (default: 1)
    pub min_row: Option<u32>,
    /// Last row (default: highest used row)
    pub max_row: Option<u32>,
    /// First column (default: 1)
    pub min_col: Option<u32>,
    /// Last column (default: highest used column)
    pub max_col: Option<u32>,
}

impl Bounds {
    /// No limits: the whole used range
    pub fn all() -> Self {
        Self::default()
    }

    /// Limit rows
    pub fn rows(mut self, min_row: u32, max_row: u32) -> Self {
        self.min_row = Some(min_row);
        self.max_row = Some(max_row);
        self
    }

    /// Limit columns
    pub fn cols(mut self, min_col: u32, max_col: u32) -> Self {
        self.min_col = Some(min_col);
        self.max_col = Some(max_col);
        self
    }
}
