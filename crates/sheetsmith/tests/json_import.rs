//! End-to-end tests for importing JSON rows into a workbook

use pretty_assertions::assert_eq;
use sheetsmith::prelude::*;
use std::path::{Path, PathBuf};

fn write_json(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, body).unwrap();
    path
}

fn block(path: &Path, min_col: u32, min_row: u32, max_col: u32, max_row: u32) -> Vec<Vec<String>> {
    let editor = SheetEditor::open(path).unwrap();
    editor
        .to_list(Bounds::all().rows(min_row, max_row).cols(min_col, max_col))
        .unwrap()
}

#[test]
fn test_import_default_start_cell() {
    let dir = tempfile::tempdir().unwrap();
    let json = write_json(
        dir.path(),
        "data.json",
        r#"[["id", "name", "score"], [1, "ada", 9.5], [2, "grace", null]]"#,
    );
    let target = dir.path().join("out.xlsx");

    let report = JsonImporter::new(&target).unwrap().import(&json).unwrap();
    assert_eq!(report.rows, 3);
    assert_eq!(report.cells, 9);
    assert_eq!(report.path, target);
    assert!(target.exists());

    // First value lands on B2
    let editor = SheetEditor::open(&target).unwrap();
    assert_eq!(editor.cell_value(2, 2).unwrap(), "id");
    assert_eq!(editor.cell_value(1, 1).unwrap(), "");

    assert_eq!(
        block(&target, 2, 2, 4, 4),
        vec![
            vec!["id", "name", "score"],
            vec!["1", "ada", "9.5"],
            vec!["2", "grace", ""],
        ]
    );
}

#[test]
fn test_import_custom_start_cell() {
    let dir = tempfile::tempdir().unwrap();
    let json = write_json(dir.path(), "data.json", r#"[["a", "b"], ["c"]]"#);
    let target = dir.path().join("out.xlsx");

    JsonImporter::new(&target)
        .unwrap()
        .import_with(&json, &ImportOptions::default().with_start_cell("AA10"))
        .unwrap();

    let editor = SheetEditor::open(&target).unwrap();
    assert_eq!(editor.cell_value(27, 10).unwrap(), "a");
    assert_eq!(editor.cell_value(28, 10).unwrap(), "b");
    assert_eq!(editor.cell_value(27, 11).unwrap(), "c");
    assert_eq!(editor.cell_value(28, 11).unwrap(), "");
}

#[test]
fn test_import_into_existing_workbook_keeps_other_cells() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("existing.xlsx");

    let mut editor = SheetEditor::open_with(
        &target,
        EditorOptions::default().with_anchor(Anchor::new(1, 1).unwrap()),
    )
    .unwrap();
    editor.write(vec![vec!["keep me"]]).unwrap();
    drop(editor);

    let json = write_json(dir.path(), "data.json", r#"[["new"]]"#);
    JsonImporter::new(&target)
        .unwrap()
        .import_with(&json, &ImportOptions::default().with_start_cell("C3"))
        .unwrap();

    let editor = SheetEditor::open(&target).unwrap();
    assert_eq!(editor.cell_value(1, 1).unwrap(), "keep me");
    assert_eq!(editor.cell_value(3, 3).unwrap(), "new");
}

#[test]
fn test_import_missing_json_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("out.xlsx");

    let err = JsonImporter::new(&target)
        .unwrap()
        .import(dir.path().join("nope.json"))
        .unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
    assert!(!target.exists());
}

#[test]
fn test_import_bad_start_cell_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let json = write_json(dir.path(), "data.json", r#"[[1]]"#);
    let target = dir.path().join("out.xlsx");

    for bad in ["", "22", "B", "2B", "B0"] {
        let err = JsonImporter::new(&target)
            .unwrap()
            .import_with(&json, &ImportOptions::default().with_start_cell(bad))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)), "{:?}", bad);
    }
    assert!(!target.exists());
}

#[test]
fn test_import_rejects_non_tabular_json() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("out.xlsx");
    let importer = JsonImporter::new(&target).unwrap();

    let flat = write_json(dir.path(), "flat.json", r#"[1, 2, 3]"#);
    assert!(matches!(
        importer.import(&flat).unwrap_err(),
        Error::InvalidArgument(_)
    ));

    let broken = write_json(dir.path(), "broken.json", r#"[["unterminated"#);
    assert!(matches!(importer.import(&broken).unwrap_err(), Error::Json(_)));

    assert!(!target.exists());
}

#[test]
fn test_import_utf8_text() {
    let dir = tempfile::tempdir().unwrap();
    let json = write_json(dir.path(), "data.json", r#"[["日本語", "émoji 😀"]]"#);
    let target = dir.path().join("out.xlsx");

    JsonImporter::new(&target).unwrap().import(&json).unwrap();
    assert_eq!(block(&target, 2, 2, 3, 2), vec![vec!["日本語", "émoji 😀"]]);
}

#[test]
fn test_import_past_last_column_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let json = write_json(dir.path(), "wide.json", r#"[["fits", "overflows"]]"#);
    let target = dir.path().join("out.xlsx");
    let importer = JsonImporter::new(&target).unwrap();

    let err = importer
        .import_with(&json, &ImportOptions::default().with_start_cell("XFD1"))
        .unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
    assert!(!target.exists());

    // A single column still fits at the edge
    let json = write_json(dir.path(), "narrow.json", r#"[["fits"]]"#);
    let report = importer
        .import_with(&json, &ImportOptions::default().with_start_cell("XFD1"))
        .unwrap();
    assert_eq!(report.cells, 1);
}
