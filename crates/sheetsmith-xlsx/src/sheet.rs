//! Cell-level access to one worksheet

use crate::style::{apply_style, read_style};
use sheetsmith_core::{CellStyle, CellValue};
use umya_spreadsheet::Worksheet;

/// Extent of a sheet: from (1, 1) to the highest column/row holding a cell.
///
/// A cell counts once it exists in the engine, whether it holds a value or
/// only a style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UsedRange {
    /// Highest used column (0 when the sheet is empty)
    pub max_col: u32,
    /// Highest used row (0 when the sheet is empty)
    pub max_row: u32,
}

impl UsedRange {
    /// Whether the sheet holds no cells at all
    pub fn is_empty(&self) -> bool {
        self.max_col == 0 || self.max_row == 0
    }
}

/// Read-only view of a worksheet
pub struct Sheet<'a> {
    ws: &'a Worksheet,
}

impl<'a> Sheet<'a> {
    pub(crate) fn new(ws: &'a Worksheet) -> Self {
        Self { ws }
    }

    /// Sheet name
    pub fn name(&self) -> &str {
        self.ws.get_name()
    }

    /// Current used range
    pub fn used_range(&self) -> UsedRange {
        let (max_col, max_row) = self.ws.get_highest_column_and_row();
        UsedRange { max_col, max_row }
    }

    /// Whether a cell exists at (col, row)
    pub fn has_cell(&self, col: u32, row: u32) -> bool {
        self.ws.get_cell((col, row)).is_some()
    }

    /// Raw text of a cell; empty for missing cells
    pub fn value(&self, col: u32, row: u32) -> String {
        self.ws
            .get_cell((col, row))
            .map(|cell| cell.get_value().to_string())
            .unwrap_or_default()
    }

    /// Style of a cell; the empty style for missing cells
    pub fn style(&self, col: u32, row: u32) -> CellStyle {
        self.ws
            .get_cell((col, row))
            .map(|cell| read_style(cell.get_style()))
            .unwrap_or_default()
    }
}

/// Mutable handle to a worksheet
pub struct SheetMut<'a> {
    ws: &'a mut Worksheet,
}

impl<'a> SheetMut<'a> {
    pub(crate) fn new(ws: &'a mut Worksheet) -> Self {
        Self { ws }
    }

    /// Borrow as a read-only view
    pub fn as_sheet(&self) -> Sheet<'_> {
        Sheet::new(self.ws)
    }

    /// Current used range
    pub fn used_range(&self) -> UsedRange {
        self.as_sheet().used_range()
    }

    /// Raw text of a cell; empty for missing cells
    pub fn value(&self, col: u32, row: u32) -> String {
        self.as_sheet().value(col, row)
    }

    /// Style of a cell; the empty style for missing cells
    pub fn style(&self, col: u32, row: u32) -> CellStyle {
        self.as_sheet().style(col, row)
    }

    /// Overwrite a cell's value, keeping its style
    pub fn set_value(&mut self, col: u32, row: u32, value: &CellValue) {
        let cell = self.ws.get_cell_mut((col, row));
        match value {
            CellValue::Empty => {
                cell.set_value_string("");
            }
            CellValue::Text(s) => {
                cell.set_value_string(s.clone());
            }
            CellValue::Number(n) => {
                cell.set_value_number(*n);
            }
            CellValue::Bool(b) => {
                cell.set_value_bool(*b);
            }
        }
    }

    /// Replace a cell's modelled style, creating the cell if needed
    pub fn set_style(&mut self, col: u32, row: u32, style: &CellStyle) {
        let cell = self.ws.get_cell_mut((col, row));
        apply_style(cell.get_style_mut(), style);
    }

    /// Rebuild a cell's style from its current one, creating the cell if needed
    pub fn update_style<F>(&mut self, col: u32, row: u32, f: F)
    where
        F: FnOnce(&CellStyle) -> CellStyle,
    {
        let next = f(&self.style(col, row));
        self.set_style(col, row, &next);
    }

    /// Like [`SheetMut::update_style`], but skips cells that do not exist.
    ///
    /// Returns whether the cell was touched.
    pub fn update_existing_style<F>(&mut self, col: u32, row: u32, f: F) -> bool
    where
        F: FnOnce(&CellStyle) -> CellStyle,
    {
        if !self.as_sheet().has_cell(col, row) {
            return false;
        }
        self.update_style(col, row, f);
        true
    }
}
