//! Writing JSON rows into a workbook

use log::info;
use sheetsmith_core::{CellValue, Error, ImportOptions, Result};
use sheetsmith_xlsx::Document;
use std::path::{Path, PathBuf};

/// Extensions accepted for the target workbook
const SPREADSHEET_EXTENSIONS: [&str; 2] = ["xlsx", "xlsm"];

/// Outcome of a successful import
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportReport {
    /// Workbook that was written
    pub path: PathBuf,
    /// Number of JSON rows written
    pub rows: usize,
    /// Number of cells written
    pub cells: usize,
}

/// Materializes JSON arrays-of-arrays into the first sheet of a workbook.
///
/// ```no_run
/// use sheetsmith::{ImportOptions, JsonImporter};
///
/// let importer = JsonImporter::new("report.xlsx")?;
/// importer.import("data.json")?;
/// importer.import_with("more.json", &ImportOptions::default().with_start_cell("B10"))?;
/// # Ok::<(), sheetsmith::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct JsonImporter {
    path: PathBuf,
}

impl JsonImporter {
    /// Bind the importer to a target workbook path.
    ///
    /// The file does not need to exist. The path must be non-empty and end in
    /// `.xlsx` or `.xlsm`.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(Error::invalid("empty workbook path"));
        }

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match extension.as_deref() {
            Some(ext) if SPREADSHEET_EXTENSIONS.contains(&ext) => Ok(Self {
                path: path.to_path_buf(),
            }),
            _ => Err(Error::invalid(format!(
                "unsupported workbook extension: {}",
                path.display()
            ))),
        }
    }

    /// Target workbook path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Import `json_file` starting at `B2`
    pub fn import<P: AsRef<Path>>(&self, json_file: P) -> Result<ImportReport> {
        self.import_with(json_file, &ImportOptions::default())
    }

    /// Import `json_file` with explicit options.
    ///
    /// `data[i][j]` lands at column `start.col + j`, row `start.row + i`. The
    /// workbook is loaded if it exists, created otherwise, and saved at the end.
    /// Nothing is written to disk if any step before the save fails.
    pub fn import_with<P: AsRef<Path>>(
        &self,
        json_file: P,
        options: &ImportOptions,
    ) -> Result<ImportReport> {
        let json_file = json_file.as_ref();
        if !json_file.exists() {
            return Err(Error::not_found(format!("{}", json_file.display())));
        }

        let text = std::fs::read_to_string(json_file)?;
        let json: serde_json::Value = serde_json::from_str(&text)?;
        let rows = CellValue::rows_from_json(&json)?;
        let start = options.start()?;

        let mut doc = Document::open_or_new(&self.path)?;
        let index = doc.sheet_index(None)?;
        let mut cells = 0;
        {
            let mut sheet = doc.sheet_mut(index)?;
            for (i, row) in rows.iter().enumerate() {
                for (j, value) in row.iter().enumerate() {
                    let at = start.offset(grid_offset(j), grid_offset(i))?;
                    sheet.set_value(at.col, at.row, value);
                    cells += 1;
                }
            }
        }
        doc.save()?;
        info!("saved at {}", self.path.display());

        Ok(ImportReport {
            path: self.path.clone(),
            rows: rows.len(),
            cells,
        })
    }
}

fn grid_offset(index: usize) -> u32 {
    u32::try_from(index).unwrap_or(u32::MAX)
}
