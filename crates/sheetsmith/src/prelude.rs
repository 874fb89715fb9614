//! Prelude module - common imports for sheetsmith users
//!
//! ```rust
//! use sheetsmith::prelude::*;
//! ```

pub use crate::{
    Anchor, Bounds, CellAddress, CellStyle, CellValue, Color, EditorOptions, Error,
    FillRequest, ImportOptions, ImportReport, JsonImporter, LineStyle, Result, SheetEditor,
};
