//! Border style types

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Named border line styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineStyle {
    /// Thin line
    Thin,
    /// Medium line
    Medium,
    /// Thick line
    Thick,
    /// Dashed line
    Dashed,
    /// Dotted line
    Dotted,
    /// Double line
    Double,
    /// Hair line (very thin)
    Hair,
    /// Medium dashed
    MediumDashed,
    /// Dash-dot
    DashDot,
    /// Medium dash-dot
    MediumDashDot,
    /// Dash-dot-dot
    DashDotDot,
    /// Medium dash-dot-dot
    MediumDashDotDot,
    /// Slant dash-dot
    SlantDashDot,
}

impl LineStyle {
    /// The style name as written in the file format
    pub fn as_str(&self) -> &'static str {
        match self {
            LineStyle::Thin => "thin",
            LineStyle::Medium => "medium",
            LineStyle::Thick => "thick",
            LineStyle::Dashed => "dashed",
            LineStyle::Dotted => "dotted",
            LineStyle::Double => "double",
            LineStyle::Hair => "hair",
            LineStyle::MediumDashed => "mediumDashed",
            LineStyle::DashDot => "dashDot",
            LineStyle::MediumDashDot => "mediumDashDot",
            LineStyle::DashDotDot => "dashDotDot",
            LineStyle::MediumDashDotDot => "mediumDashDotDot",
            LineStyle::SlantDashDot => "slantDashDot",
        }
    }

    /// Parse a style name; `none` and the empty string mean "no line"
    pub fn parse_side(name: &str) -> Result<Option<Self>> {
        let style = match name {
            "" | "none" => return Ok(None),
            "thin" => LineStyle::Thin,
            "medium" => LineStyle::Medium,
            "thick" => LineStyle::Thick,
            "dashed" => LineStyle::Dashed,
            "dotted" => LineStyle::Dotted,
            "double" => LineStyle::Double,
            "hair" => LineStyle::Hair,
            "mediumDashed" => LineStyle::MediumDashed,
            "dashDot" => LineStyle::DashDot,
            "mediumDashDot" => LineStyle::MediumDashDot,
            "dashDotDot" => LineStyle::DashDotDot,
            "mediumDashDotDot" => LineStyle::MediumDashDotDot,
            "slantDashDot" => LineStyle::SlantDashDot,
            other => return Err(Error::invalid(format!("unknown line style '{}'", other))),
        };
        Ok(Some(style))
    }
}

impl fmt::Display for LineStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LineStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        LineStyle::parse_side(s)?
            .ok_or_else(|| Error::invalid(format!("'{}' is not a drawable line style", s)))
    }
}

/// The four independently styled sides of a cell.
///
/// `None` on a side means no border is drawn there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BorderSides {
    /// Left border
    pub left: Option<LineStyle>,
    /// Top border
    pub top: Option<LineStyle>,
    /// Right border
    pub right: Option<LineStyle>,
    /// Bottom border
    pub bottom: Option<LineStyle>,
}

impl BorderSides {
    /// No borders on any side
    pub const NONE: BorderSides = BorderSides {
        left: None,
        top: None,
        right: None,
        bottom: None,
    };

    /// Same style on all four sides
    pub fn all(style: LineStyle) -> Self {
        Self {
            left: Some(style),
            top: Some(style),
            right: Some(style),
            bottom: Some(style),
        }
    }

    /// Copy with the left side replaced
    pub fn with_left(self, left: Option<LineStyle>) -> Self {
        Self { left, ..self }
    }

    /// Copy with the top side replaced
    pub fn with_top(self, top: Option<LineStyle>) -> Self {
        Self { top, ..self }
    }

    /// Copy with the right side replaced
    pub fn with_right(self, right: Option<LineStyle>) -> Self {
        Self { right, ..self }
    }

    /// Copy with the bottom side replaced
    pub fn with_bottom(self, bottom: Option<LineStyle>) -> Self {
        Self { bottom, ..self }
    }

    /// Check if all borders are empty
    pub fn is_empty(&self) -> bool {
        self.left.is_none() && self.top.is_none() && self.right.is_none() && self.bottom.is_none()
    }
}
