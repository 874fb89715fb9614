//! # sheetsmith-xlsx
//!
//! XLSX documents for sheetsmith, backed by `umya-spreadsheet`.
//!
//! - [`Document`] - load/create a workbook, pick a sheet, save
//! - [`Sheet`] / [`SheetMut`] - 1-based cell access with [`CellStyle`] in and out
//! - [`lock`] - detection of documents held open by another process
//!
//! [`CellStyle`]: sheetsmith_core::CellStyle

pub mod document;
pub mod lock;
pub mod sheet;
pub mod style;

pub use document::Document;
pub use sheet::{Sheet, SheetMut, UsedRange};
