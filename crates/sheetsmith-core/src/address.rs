//! A1-style cell addresses

use crate::error::{Error, Result};
use crate::MAX_COLS;
use crate::MAX_ROWS;
use std::fmt;
use std::str::FromStr;

/// A cell address such as `B2`.
///
/// Both coordinates are 1-based, matching the way spreadsheet engines address
/// cells (`A1` is column 1, row 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellAddress {
    /// Column index (1-based, A=1)
    pub col: u32,
    /// Row index (1-based)
    pub row: u32,
}

impl CellAddress {
    /// Create a new cell address, rejecting zero coordinates
    pub fn new(col: u32, row: u32) -> Result<Self> {
        if col == 0 || row == 0 {
            return Err(Error::invalid(format!(
                "cell coordinates are 1-based, got column {} row {}",
                col, row
            )));
        }
        Ok(Self { col, row })
    }

    /// Parse an address from A1-style notation.
    ///
    /// The input must be one or more ASCII letters followed by one or more
    /// digits. Anything else (an empty string, `$` markers, a missing row,
    /// trailing garbage) is rejected.
    ///
    /// # Examples
    /// ```
    /// use sheetsmith_core::CellAddress;
    ///
    /// let addr = CellAddress::parse("B2").unwrap();
    /// assert_eq!((addr.col, addr.row), (2, 2));
    ///
    /// let addr = CellAddress::parse("aa10").unwrap();
    /// assert_eq!((addr.col, addr.row), (27, 10));
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::invalid("empty cell address"));
        }

        let split = s
            .find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or(s.len());
        let (letters, digits) = s.split_at(split);

        if letters.is_empty() {
            return Err(Error::invalid(format!("no column letters in '{}'", s)));
        }
        if digits.is_empty() {
            return Err(Error::invalid(format!("no row number in '{}'", s)));
        }
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::invalid(format!("invalid row number in '{}'", s)));
        }

        let col = Self::letters_to_column(letters)?;
        let row: u32 = digits
            .parse()
            .map_err(|_| Error::invalid(format!("invalid row number in '{}'", s)))?;

        if row == 0 {
            return Err(Error::invalid(format!(
                "row number must be >= 1 in '{}'",
                s
            )));
        }
        if row > MAX_ROWS {
            return Err(Error::invalid(format!(
                "row {} out of bounds (max: {})",
                row, MAX_ROWS
            )));
        }

        Ok(Self { col, row })
    }

    /// Convert a 1-based column index to letters (1 = A, 26 = Z, 27 = AA)
    pub fn column_to_letters(col: u32) -> String {
        let mut result = String::new();
        let mut n = col;

        while n > 0 {
            n -= 1;
            result.insert(0, (b'A' + (n % 26) as u8) as char);
            n /= 26;
        }

        result
    }

    /// Convert column letters to a 1-based index (A = 1, Z = 26, AA = 27)
    pub fn letters_to_column(letters: &str) -> Result<u32> {
        if letters.is_empty() {
            return Err(Error::invalid("empty column letters"));
        }

        let mut col: u32 = 0;
        for c in letters.chars() {
            if !c.is_ascii_alphabetic() {
                return Err(Error::invalid(format!("invalid column letter '{}'", c)));
            }
            col = col * 26 + (c.to_ascii_uppercase() as u32 - 'A' as u32 + 1);
            if col > MAX_COLS {
                return Err(Error::invalid(format!(
                    "column '{}' out of bounds (max: {})",
                    letters, MAX_COLS
                )));
            }
        }

        Ok(col)
    }

    /// Return the address shifted by zero-based offsets.
    ///
    /// Fails with `InvalidArgument` when the result lies past the last
    /// column or row of a worksheet.
    pub fn offset(&self, cols: u32, rows: u32) -> Result<Self> {
        Ok(Self {
            col: shift(self.col, cols, MAX_COLS, "column")?,
            row: shift(self.row, rows, MAX_ROWS, "row")?,
        })
    }

    /// Format as A1-style string
    pub fn to_a1_string(&self) -> String {
        format!("{}{}", Self::column_to_letters(self.col), self.row)
    }
}

/// `base + offset`, bounded by `max`
pub(crate) fn shift(base: u32, offset: u32, max: u32, axis: &str) -> Result<u32> {
    base.checked_add(offset)
        .filter(|&n| n <= max)
        .ok_or_else(|| {
            Error::invalid(format!(
                "{} {} + {} out of bounds (max: {})",
                axis, base, offset, max
            ))
        })
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_a1_string())
    }
}

impl FromStr for CellAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
