//! Detection of documents held open by another process

use log::warn;
use sheetsmith_core::{Error, Result};
use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};

/// Windows `ERROR_SHARING_VIOLATION`
const ERROR_SHARING_VIOLATION: i32 = 32;
/// Windows `ERROR_LOCK_VIOLATION`
const ERROR_LOCK_VIOLATION: i32 = 33;

/// Owner files office suites create next to a document while it is open:
/// `~$book.xlsx` (Excel) and `.~lock.book.xlsx#` (LibreOffice).
pub fn owner_files(path: &Path) -> Vec<PathBuf> {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return Vec::new();
    };
    let dir = path.parent().unwrap_or_else(|| Path::new(""));

    vec![
        dir.join(format!("~${}", name)),
        dir.join(format!(".~lock.{}#", name)),
    ]
}

/// Whether an IO error means another process holds the file
pub fn is_lock_error(err: &io::Error) -> bool {
    err.kind() == io::ErrorKind::PermissionDenied
        || (cfg!(windows)
            && matches!(
                err.raw_os_error(),
                Some(ERROR_SHARING_VIOLATION) | Some(ERROR_LOCK_VIOLATION)
            ))
}

/// Fail with [`Error::ResourceBusy`] if `path` is locked.
///
/// The file is opened for read and write without truncating it, which is
/// refused while Excel holds the document on Windows. On other platforms the
/// owner files are the only reliable signal.
pub fn ensure_unlocked(path: &Path) -> Result<()> {
    if let Some(owner) = owner_files(path).into_iter().find(|p| p.exists()) {
        warn!(
            "{} is locked, owner file {} exists",
            path.display(),
            owner.display()
        );
        return Err(busy(path));
    }

    match OpenOptions::new().read(true).write(true).open(path) {
        Ok(_) => Ok(()),
        Err(err) if is_lock_error(&err) => {
            warn!("{} is locked: {}", path.display(), err);
            Err(busy(path))
        }
        Err(err) => Err(err.into()),
    }
}

fn busy(path: &Path) -> Error {
    Error::ResourceBusy {
        path: path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_files() {
        let files = owner_files(Path::new("out/report.xlsx"));
        assert_eq!(
            files,
            vec![
                PathBuf::from("out/~$report.xlsx"),
                PathBuf::from("out/.~lock.report.xlsx#"),
            ]
        );

        let files = owner_files(Path::new("report.xlsx"));
        assert_eq!(files[0], PathBuf::from("~$report.xlsx"));
    }

    #[test]
    fn test_is_lock_error() {
        assert!(is_lock_error(&io::Error::from(io::ErrorKind::PermissionDenied)));
        assert_eq!(
            is_lock_error(&io::Error::from_raw_os_error(ERROR_SHARING_VIOLATION)),
            cfg!(windows)
        );
        assert!(!is_lock_error(&io::Error::from(io::ErrorKind::NotFound)));
    }

    #[test]
    fn test_ensure_unlocked_with_owner_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("book.xlsx");
        std::fs::write(&path, b"").unwrap();
        assert!(ensure_unlocked(&path).is_ok());

        std::fs::write(dir.path().join(".~lock.book.xlsx#"), b"").unwrap();
        let err = ensure_unlocked(&path).unwrap_err();
        assert!(err.is_resource_busy());
    }
}
