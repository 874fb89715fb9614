//! Workbook documents on disk

use crate::lock::ensure_unlocked;
use crate::sheet::{Sheet, SheetMut};
use log::{debug, info};
use sheetsmith_core::{Error, Result};
use std::path::{Path, PathBuf};
use umya_spreadsheet::Spreadsheet;

/// An XLSX workbook loaded into memory, bound to the path it is saved to.
///
/// Mutations stay in memory until [`Document::save`] is called.
pub struct Document {
    path: PathBuf,
    book: Spreadsheet,
}

impl Document {
    /// Start a new workbook with one empty sheet. Nothing is written yet.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            book: umya_spreadsheet::new_file(),
        }
    }

    /// Load an existing workbook.
    ///
    /// Fails with [`Error::ResourceBusy`] when another process holds the file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::not_found(format!("{}", path.display())));
        }
        ensure_unlocked(path)?;

        let book = umya_spreadsheet::reader::xlsx::read(path).map_err(Error::engine)?;
        debug!("loaded {}", path.display());

        Ok(Self {
            path: path.to_path_buf(),
            book,
        })
    }

    /// Load the workbook if the file exists, otherwise start a new one in memory
    pub fn open_or_new<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::open(path)
        } else {
            Ok(Self::new(path))
        }
    }

    /// Write an empty workbook to `path` first if it does not exist, then load it
    pub fn open_or_create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            Self::new(path).save()?;
            info!("created {}", path.display());
        }
        Self::open(path)
    }

    /// Path the document is saved to
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Names of all sheets, in tab order
    pub fn sheet_names(&self) -> Vec<String> {
        self.book
            .get_sheet_collection_no_check()
            .iter()
            .map(|ws| ws.get_name().to_string())
            .collect()
    }

    /// Index of the named sheet, or of the first sheet when `name` is `None`
    pub fn sheet_index(&self, name: Option<&str>) -> Result<usize> {
        let sheets = self.book.get_sheet_collection_no_check();
        match name {
            None if sheets.is_empty() => Err(Error::not_found("workbook has no sheets")),
            None => Ok(0),
            Some(name) => sheets
                .iter()
                .position(|ws| ws.get_name() == name)
                .ok_or_else(|| Error::not_found(format!("sheet '{}'", name))),
        }
    }

    /// Read-only view of the sheet at `index`
    pub fn sheet(&self, index: usize) -> Result<Sheet<'_>> {
        self.book
            .get_sheet(&index)
            .map(Sheet::new)
            .ok_or_else(|| Error::not_found(format!("sheet #{}", index)))
    }

    /// Mutable handle to the sheet at `index`
    pub fn sheet_mut(&mut self, index: usize) -> Result<SheetMut<'_>> {
        self.book
            .get_sheet_mut(&index)
            .map(SheetMut::new)
            .ok_or_else(|| Error::not_found(format!("sheet #{}", index)))
    }

    /// Persist every in-memory change to [`Document::path`], overwriting the file
    pub fn save(&self) -> Result<()> {
        umya_spreadsheet::writer::xlsx::write(&self.book, &self.path).map_err(Error::engine)?;
        debug!("saved {}", self.path.display());
        Ok(())
    }
}
