//! # sheetsmith
//!
//! Convenience helpers over XLSX workbooks: import JSON rows into a sheet, and
//! fill, outline, restyle and read back an anchored block of cells.
//!
//! Two independent entry points:
//!
//! - [`JsonImporter`] - write a JSON array of arrays into a workbook
//! - [`SheetEditor`] - edit one sheet relative to an anchor cell
//!
//! ## Example
//!
//! ```no_run
//! use sheetsmith::prelude::*;
//!
//! let mut editor = SheetEditor::open("report.xlsx")?;
//! editor.write(vec![vec!["name", "score"], vec!["ada", "10"]])?;
//! editor.fill(FillRequest::matching("ada", Color::YELLOW))?;
//! editor.line_thin(&[0], &[0, 1])?;
//!
//! let rows = editor.to_list(Bounds::all())?;
//! # Ok::<(), sheetsmith::Error>(())
//! ```

pub mod editor;
pub mod importer;
pub mod prelude;

pub use editor::{FillRequest, SheetEditor};
pub use importer::{ImportReport, JsonImporter};

pub use sheetsmith_core::{
    Anchor, BorderSides, Bounds, CellAddress, CellStyle, CellValue, Color, EditorOptions, Error,
    ImportOptions, LineStyle, Result, DEFAULT_START_CELL,
};
pub use sheetsmith_xlsx::UsedRange;
