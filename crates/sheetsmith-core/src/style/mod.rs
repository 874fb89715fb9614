//! Cell styling types
//!
//! This module contains the style attributes the helpers read and rewrite:
//! - [`CellStyle`] - Fill, borders and font name of one cell
//! - [`BorderSides`] / [`LineStyle`] - Cell borders
//! - [`Color`] - Color representation
//!
//! [`CellStyle`] is a plain value. Operations never patch a style in place;
//! they derive a new one with the `with_*`/`without_*` methods and hand the
//! complete value back to the engine adapter.

mod border;
mod color;

pub use border::{BorderSides, LineStyle};
pub use color::Color;

/// The styling of one cell, as far as sheetsmith cares about it
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct CellStyle {
    /// Solid background fill, if any
    pub fill: Option<Color>,
    /// Border settings
    pub border: BorderSides,
    /// Font family name, if set explicitly
    pub font_name: Option<String>,
}

impl CellStyle {
    /// Create a new style with nothing set
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy with a solid fill
    pub fn with_fill(&self, color: Color) -> Self {
        Self {
            fill: Some(color),
            ..self.clone()
        }
    }

    /// Copy with the fill removed
    pub fn without_fill(&self) -> Self {
        Self {
            fill: None,
            ..self.clone()
        }
    }

    /// Copy with all four sides replaced
    pub fn with_border(&self, border: BorderSides) -> Self {
        Self {
            border,
            ..self.clone()
        }
    }

    /// Copy with the top side set, other sides kept
    pub fn with_top(&self, style: LineStyle) -> Self {
        self.with_border(self.border.with_top(Some(style)))
    }

    /// Copy with the left side set, other sides kept
    pub fn with_left(&self, style: LineStyle) -> Self {
        self.with_border(self.border.with_left(Some(style)))
    }

    /// Copy that keeps only the left side of the border
    pub fn only_left(&self) -> Self {
        self.with_border(BorderSides::NONE.with_left(self.border.left))
    }

    /// Copy that keeps only the top side of the border
    pub fn only_top(&self) -> Self {
        self.with_border(BorderSides::NONE.with_top(self.border.top))
    }

    /// Copy with fill and every border side removed
    pub fn cleared(&self) -> Self {
        self.with_border(BorderSides::NONE).without_fill()
    }

    /// Copy with the font family replaced
    pub fn with_font_name<S: Into<String>>(&self, name: S) -> Self {
        Self {
            font_name: Some(name.into()),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn boxed_yellow() -> CellStyle {
        CellStyle::new()
            .with_fill(Color::YELLOW)
            .with_border(BorderSides::all(LineStyle::Thin))
            .with_font_name("Meiryo")
    }

    #[test]
    fn test_only_left_keeps_inner_edge() {
        let style = boxed_yellow().only_left().without_fill();
        assert_eq!(
            style,
            CellStyle {
                fill: None,
                border: BorderSides {
                    left: Some(LineStyle::Thin),
                    ..BorderSides::NONE
                },
                font_name: Some("Meiryo".to_string()),
            }
        );
    }

    #[test]
    fn test_only_top() {
        let style = boxed_yellow().only_top();
        assert_eq!(style.border.top, Some(LineStyle::Thin));
        assert_eq!(style.border.left, None);
        assert_eq!(style.fill, Some(Color::YELLOW));
    }

    #[test]
    fn test_cleared_keeps_font() {
        let style = boxed_yellow().cleared();
        assert!(style.border.is_empty());
        assert_eq!(style.fill, None);
        assert_eq!(style.font_name.as_deref(), Some("Meiryo"));
    }

    #[test]
    fn test_with_top_preserves_other_sides() {
        let style = CellStyle::new()
            .with_left(LineStyle::Thick)
            .with_top(LineStyle::Dotted);
        assert_eq!(style.border.left, Some(LineStyle::Thick));
        assert_eq!(style.border.top, Some(LineStyle::Dotted));
        assert_eq!(style.border.right, None);
    }
}
