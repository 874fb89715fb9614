//! Anchor-relative editing of one sheet

use log::{debug, info};
use sheetsmith_core::{
    Anchor, Bounds, CellStyle, CellValue, Color, EditorOptions, LineStyle, Result,
};
use sheetsmith_xlsx::{Document, Sheet, SheetMut, UsedRange};
use std::path::Path;

/// What [`SheetEditor::fill`] should color
#[derive(Debug, Clone, PartialEq)]
pub enum FillRequest {
    /// Every cell whose value equals `value`, in rows
    /// `min_row` (default: anchor row) through `max_row` (default: last used
    /// row), across all used columns.
    ByValue {
        value: CellValue,
        color: Color,
        min_row: Option<u32>,
        max_row: Option<u32>,
    },
    /// Whole rows, given as offsets from the anchor row, from column `min_col`
    /// (default: anchor column) through `max_col` (default: last used column).
    ByRows {
        rows: Vec<u32>,
        color: Color,
        min_col: Option<u32>,
        max_col: Option<u32>,
    },
}

impl FillRequest {
    /// Color cells equal to `value`
    pub fn matching<V: Into<CellValue>>(value: V, color: Color) -> Self {
        FillRequest::ByValue {
            value: value.into(),
            color,
            min_row: None,
            max_row: None,
        }
    }

    /// Color the rows at these anchor offsets
    pub fn rows<I: IntoIterator<Item = u32>>(rows: I, color: Color) -> Self {
        FillRequest::ByRows {
            rows: rows.into_iter().collect(),
            color,
            min_col: None,
            max_col: None,
        }
    }

    /// Limit the scanned rows of a [`FillRequest::ByValue`]; no effect otherwise
    pub fn with_row_range(mut self, min: Option<u32>, max: Option<u32>) -> Self {
        if let FillRequest::ByValue {
            min_row, max_row, ..
        } = &mut self
        {
            *min_row = min;
            *max_row = max;
        }
        self
    }

    /// Limit the filled columns of a [`FillRequest::ByRows`]; no effect otherwise
    pub fn with_col_range(mut self, min: Option<u32>, max: Option<u32>) -> Self {
        if let FillRequest::ByRows {
            min_col, max_col, ..
        } = &mut self
        {
            *min_col = min;
            *max_col = max;
        }
        self
    }
}

/// A mutable handle to one sheet of a workbook.
///
/// Most operations take offsets relative to the anchor (default `B2`, i.e.
/// column 2, row 2), so offset `0` is the anchor itself. [`SheetEditor::font`]
/// and [`SheetEditor::to_list`] work in absolute coordinates. Every mutating
/// operation saves the workbook before returning.
pub struct SheetEditor {
    doc: Document,
    sheet: usize,
    anchor: Anchor,
}

impl SheetEditor {
    /// Open the first sheet of `path` with the default anchor, creating the
    /// workbook if it does not exist
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with(path, EditorOptions::default())
    }

    /// Open a workbook with explicit options.
    ///
    /// Fails with `ResourceBusy` if another process holds the file and with
    /// `NotFound` if `options.sheet_name` names a missing sheet.
    pub fn open_with<P: AsRef<Path>>(path: P, options: EditorOptions) -> Result<Self> {
        let doc = Document::open_or_create(path)?;
        let sheet = doc.sheet_index(options.sheet_name.as_deref())?;
        debug!(
            "editing sheet #{} of {} with anchor ({}, {})",
            sheet,
            doc.path().display(),
            options.anchor.col,
            options.anchor.row
        );

        Ok(Self {
            doc,
            sheet,
            anchor: options.anchor,
        })
    }

    /// Workbook path
    pub fn path(&self) -> &Path {
        self.doc.path()
    }

    /// The anchor offsets are measured from
    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    /// Name of the edited sheet
    pub fn sheet_name(&self) -> Result<String> {
        Ok(self.view()?.name().to_string())
    }

    /// Current used range of the edited sheet
    pub fn used_range(&self) -> Result<UsedRange> {
        Ok(self.view()?.used_range())
    }

    /// Raw text of the cell at absolute (col, row)
    pub fn cell_value(&self, col: u32, row: u32) -> Result<String> {
        Ok(self.view()?.value(col, row))
    }

    /// Style of the cell at absolute (col, row)
    pub fn cell_style(&self, col: u32, row: u32) -> Result<CellStyle> {
        Ok(self.view()?.style(col, row))
    }

    /// Strip borders and fill from everything beyond a column and/or row.
    ///
    /// `col` and `row` are anchor offsets. On the threshold column only the
    /// left border survives; on the threshold row only the top border. Cells
    /// past the threshold lose all borders and their fill. Each threshold
    /// covers the full used extent of the other axis. A threshold past the
    /// worksheet edge is `InvalidArgument` and changes nothing.
    pub fn clear_more_than(&mut self, col: Option<u32>, row: Option<u32>) -> Result<()> {
        let anchor = self.anchor;
        let col_edge = col.map(|offset| anchor.col_at(offset)).transpose()?;
        let row_edge = row.map(|offset| anchor.row_at(offset)).transpose()?;
        let mut sheet = self.edit()?;

        if let Some(edge) = col_edge {
            let used = sheet.used_range();
            for r in 1..=used.max_row {
                sheet.update_existing_style(edge, r, |s| s.only_left().without_fill());
            }
            for c in edge + 1..=used.max_col {
                for r in 1..=used.max_row {
                    sheet.update_existing_style(c, r, CellStyle::cleared);
                }
            }
        }

        if let Some(edge) = row_edge {
            let used = sheet.used_range();
            for c in 1..=used.max_col {
                sheet.update_existing_style(c, edge, |s| s.only_top().without_fill());
            }
            for r in edge + 1..=used.max_row {
                for c in 1..=used.max_col {
                    sheet.update_existing_style(c, r, CellStyle::cleared);
                }
            }
        }

        self.save()
    }

    /// Read a block of cells as trimmed strings, empty cells as `""`.
    ///
    /// Bounds are absolute and inclusive; unset bounds default to row/column 1
    /// and the last used row/column.
    pub fn to_list(&self, bounds: Bounds) -> Result<Vec<Vec<String>>> {
        let sheet = self.view()?;
        let used = sheet.used_range();
        let min_row = bounds.min_row.unwrap_or(1);
        let max_row = bounds.max_row.unwrap_or(used.max_row);
        let min_col = bounds.min_col.unwrap_or(1);
        let max_col = bounds.max_col.unwrap_or(used.max_col);

        Ok((min_row..=max_row)
            .map(|r| {
                (min_col..=max_col)
                    .map(|c| sheet.value(c, r).trim().to_string())
                    .collect()
            })
            .collect())
    }

    /// Apply a solid fill, see [`FillRequest`]
    pub fn fill(&mut self, request: FillRequest) -> Result<()> {
        let anchor = self.anchor;
        let mut sheet = self.edit()?;
        let used = sheet.used_range();

        match request {
            FillRequest::ByValue {
                value,
                color,
                min_row,
                max_row,
            } => {
                let min_row = min_row.unwrap_or(anchor.row);
                let max_row = max_row.unwrap_or(used.max_row);
                debug!(
                    "fill {} where value = {:?}, rows {}..={}",
                    color, value, min_row, max_row
                );
                for r in min_row..=max_row {
                    for c in 1..=used.max_col {
                        if value.matches_raw(&sheet.value(c, r)) {
                            sheet.update_style(c, r, |s| s.with_fill(color));
                        }
                    }
                }
            }
            FillRequest::ByRows {
                rows,
                color,
                min_col,
                max_col,
            } => {
                let min_col = min_col.unwrap_or(anchor.col);
                let max_col = max_col.unwrap_or(used.max_col);
                let targets = rows
                    .iter()
                    .map(|&offset| anchor.row_at(offset))
                    .collect::<Result<Vec<_>>>()?;
                debug!(
                    "fill {} on rows {:?}, columns {}..={}",
                    color, targets, min_col, max_col
                );
                for r in targets {
                    for c in min_col..=max_col {
                        sheet.update_style(c, r, |s| s.with_fill(color));
                    }
                }
            }
        }

        self.save()
    }

    /// Set the font family on every cell of the used range (absolute, from A1)
    pub fn font(&mut self, name: &str) -> Result<()> {
        let mut sheet = self.edit()?;
        let used = sheet.used_range();
        for r in 1..=used.max_row {
            for c in 1..=used.max_col {
                sheet.update_style(c, r, |s| s.with_font_name(name));
            }
        }
        self.save()
    }

    /// Draw border lines.
    ///
    /// Each entry of `rows` is a row offset: its top edge is drawn from the
    /// anchor column to the last used column. Each entry of `cols` is a column
    /// offset: its left edge is drawn from the anchor row to the last used row.
    /// The other sides of every touched cell are kept.
    pub fn line(&mut self, cols: &[u32], rows: &[u32], style: LineStyle) -> Result<()> {
        let anchor = self.anchor;
        let rows = rows
            .iter()
            .map(|&offset| anchor.row_at(offset))
            .collect::<Result<Vec<_>>>()?;
        let cols = cols
            .iter()
            .map(|&offset| anchor.col_at(offset))
            .collect::<Result<Vec<_>>>()?;
        let mut sheet = self.edit()?;

        for r in rows {
            let used = sheet.used_range();
            for c in anchor.col..=used.max_col {
                sheet.update_style(c, r, |s| s.with_top(style));
            }
        }

        for c in cols {
            let used = sheet.used_range();
            for r in anchor.row..=used.max_row {
                sheet.update_style(c, r, |s| s.with_left(style));
            }
        }

        self.save()
    }

    /// [`SheetEditor::line`] with thin lines
    pub fn line_thin(&mut self, cols: &[u32], rows: &[u32]) -> Result<()> {
        self.line(cols, rows, LineStyle::Thin)
    }

    /// [`SheetEditor::line`] with dotted lines
    pub fn line_dotted(&mut self, cols: &[u32], rows: &[u32]) -> Result<()> {
        self.line(cols, rows, LineStyle::Dotted)
    }

    /// Write rows of values starting at the anchor, keeping cell styles.
    ///
    /// Data running past the last column or row of the worksheet fails with
    /// `InvalidArgument` before anything is saved.
    pub fn write<I, R, V>(&mut self, data: I) -> Result<()>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = V>,
        V: Into<CellValue>,
    {
        let anchor = self.anchor;
        let mut sheet = self.edit()?;
        for (i, row) in data.into_iter().enumerate() {
            let r = anchor.row_at(offset(i))?;
            for (j, value) in row.into_iter().enumerate() {
                let c = anchor.col_at(offset(j))?;
                sheet.set_value(c, r, &value.into());
            }
        }

        self.save()?;
        info!("write path \"{}\"", self.path().display());
        Ok(())
    }

    /// Persist all changes; safe to call any number of times
    pub fn save(&self) -> Result<()> {
        self.doc.save()
    }

    fn view(&self) -> Result<Sheet<'_>> {
        self.doc.sheet(self.sheet)
    }

    fn edit(&mut self) -> Result<SheetMut<'_>> {
        self.doc.sheet_mut(self.sheet)
    }
}

/// Sequence index as a grid offset; indices beyond `u32` saturate and fail the bounds check
fn offset(index: usize) -> u32 {
    u32::try_from(index).unwrap_or(u32::MAX)
}
