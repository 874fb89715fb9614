//! Conversion between [`CellStyle`] and the engine's per-cell style

use log::debug;
use sheetsmith_core::{BorderSides, CellStyle, Color, LineStyle};
use umya_spreadsheet::{Border, PatternValues, Style};

/// Read the attributes sheetsmith models from an engine style
pub fn read_style(style: &Style) -> CellStyle {
    let fill = style
        .get_fill()
        .and_then(|fill| fill.get_pattern_fill())
        .filter(|pattern| pattern.get_pattern_type() == &PatternValues::Solid)
        .and_then(|pattern| pattern.get_foreground_color())
        .and_then(|color| Color::from_hex(color.get_argb()));

    let border = style
        .get_borders()
        .map(|borders| BorderSides {
            left: read_side(borders.get_left()),
            top: read_side(borders.get_top()),
            right: read_side(borders.get_right()),
            bottom: read_side(borders.get_bottom()),
        })
        .unwrap_or_default();

    let font_name = style
        .get_font()
        .map(|font| font.get_name().to_string())
        .filter(|name| !name.is_empty());

    CellStyle {
        fill,
        border,
        font_name,
    }
}

/// Write `style` onto an engine style, field by field.
///
/// Attributes outside [`CellStyle`] (number format, alignment, font size and
/// weight) are left as they are. An unset font name leaves the font alone.
pub fn apply_style(target: &mut Style, style: &CellStyle) {
    let pattern = target.get_fill_mut().get_pattern_fill_mut();
    match style.fill {
        Some(color) => {
            pattern.set_pattern_type(PatternValues::Solid);
            pattern
                .get_foreground_color_mut()
                .set_argb(color.to_argb_hex());
        }
        None => {
            pattern.set_pattern_type(PatternValues::None);
        }
    }

    let borders = target.get_borders_mut();
    write_side(borders.get_left_mut(), style.border.left);
    write_side(borders.get_top_mut(), style.border.top);
    write_side(borders.get_right_mut(), style.border.right);
    write_side(borders.get_bottom_mut(), style.border.bottom);

    if let Some(name) = &style.font_name {
        target.get_font_mut().set_name(name.clone());
    }
}

fn read_side(border: &Border) -> Option<LineStyle> {
    let name = border.get_border_style();
    match LineStyle::parse_side(name) {
        Ok(side) => side,
        Err(_) => {
            debug!("ignoring unsupported border style '{}'", name);
            None
        }
    }
}

/// A drawn side always carries a color; the engine does not read back a side
/// written without one.
fn write_side(border: &mut Border, side: Option<LineStyle>) {
    match side {
        Some(line) => {
            border.set_border_style(line.as_str());
            border.get_color_mut().set_argb(Color::BLACK.to_argb_hex());
        }
        None => {
            border.set_border_style("none");
        }
    }
}
