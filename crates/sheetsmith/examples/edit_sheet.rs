//! Example: Write a table and style it

use sheetsmith::prelude::*;

fn main() -> Result<()> {
    let path = std::env::temp_dir().join("sheetsmith-report.xlsx");
    let mut editor = SheetEditor::open(&path)?;

    // Data starts at the anchor, B2
    editor.write(vec![
        vec![CellValue::text("item"), CellValue::text("qty"), CellValue::text("done")],
        vec![CellValue::text("bolts"), CellValue::Number(120.0), CellValue::Bool(true)],
        vec![CellValue::text("nuts"), CellValue::Number(80.0), CellValue::Bool(false)],
        vec![CellValue::text("washers"), CellValue::Number(0.0), CellValue::Bool(false)],
    ])?;

    // Header row and every unfinished item
    editor.fill(FillRequest::rows([0], Color::rgb(0xDD, 0xEB, 0xF7)))?;
    editor.fill(FillRequest::matching(false, Color::YELLOW))?;

    editor.font("Arial")?;
    editor.line_thin(&[0, 3], &[0, 1])?;
    editor.line_dotted(&[1, 2], &[])?;

    // Drop styling right of the table
    editor.clear_more_than(Some(3), None)?;

    println!("Styled {} ({})", path.display(), editor.sheet_name()?);
    Ok(())
}
