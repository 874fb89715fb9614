//! # sheetsmith-core
//!
//! Engine-independent types for the sheetsmith spreadsheet helpers.
//!
//! - [`CellAddress`] - A1-style addresses, 1-based
//! - [`CellValue`] - Values written from JSON or compared by `fill`
//! - [`CellStyle`] - Fill, borders and font of a cell, as an immutable value
//! - [`Anchor`], [`EditorOptions`], [`ImportOptions`], [`Bounds`] - Options
//! - [`Error`] - The error taxonomy shared by every sheetsmith crate
//!
//! ## Example
//!
//! ```rust
//! use sheetsmith_core::{CellAddress, CellStyle, Color, LineStyle};
//!
//! let start = CellAddress::parse("B2").unwrap();
//! assert_eq!((start.col, start.row), (2, 2));
//!
//! let style = CellStyle::new().with_fill(Color::YELLOW).with_top(LineStyle::Thin);
//! assert_eq!(style.border.top, Some(LineStyle::Thin));
//! ```

pub mod address;
pub mod error;
pub mod options;
pub mod style;
pub mod value;

pub use address::CellAddress;
pub use error::{Error, Result};
pub use options::{Anchor, Bounds, EditorOptions, ImportOptions, DEFAULT_START_CELL};
pub use style::{BorderSides, CellStyle, Color, LineStyle};
pub use value::CellValue;

/// Maximum number of rows in a worksheet (Excel limit)
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a worksheet (Excel limit)
pub const MAX_COLS: u32 = 16_384;
