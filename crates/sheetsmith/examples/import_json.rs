//! Example: Import a JSON grid into an xlsx file

use sheetsmith::prelude::*;

fn main() -> Result<()> {
    let json = std::env::temp_dir().join("sheetsmith-scores.json");
    std::fs::write(
        &json,
        r#"[["name", "score"], ["ada", 9.5], ["grace", 8], ["linus", null]]"#,
    )?;

    let target = std::env::temp_dir().join("sheetsmith-scores.xlsx");
    let report = JsonImporter::new(&target)?.import(&json)?;
    println!(
        "Wrote {} rows ({} cells) to {}",
        report.rows,
        report.cells,
        report.path.display()
    );

    // A second block below the first one
    JsonImporter::new(&target)?.import_with(
        &json,
        &ImportOptions::default().with_start_cell("B8"),
    )?;

    let editor = SheetEditor::open(&target)?;
    for row in editor.to_list(Bounds::all())? {
        println!("{:?}", row);
    }

    Ok(())
}
