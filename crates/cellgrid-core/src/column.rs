//! Column label codec
//!
//! Spreadsheet columns use a bijective base-26 alphabet with no zero digit:
//! A=0, B=1, ..., Z=25, AA=26, AB=27, ..., XFD=16383.

use crate::error::{Error, Result};
use crate::MAX_COLS;

/// Convert a column index to its letter label (0 = A, 25 = Z, 26 = AA, etc.)
pub fn column_label(col: u16) -> String {
    let mut result = String::new();
    let mut n = col as u32 + 1; // 1-based for calculation

    while n > 0 {
        n -= 1;
        let c = ((n % 26) as u8 + b'A') as char;
        result.insert(0, c);
        n /= 26;
    }

    result
}

/// Convert a column letter label to its index (A = 0, Z = 25, AA = 26, etc.)
///
/// Accepts upper- and lowercase letters. Fails with [`Error::InvalidColumn`]
/// for empty or non-alphabetic input, and [`Error::ColumnOutOfBounds`] for
/// labels past the sheet limit.
pub fn column_index(label: &str) -> Result<u16> {
    if label.is_empty() {
        return Err(Error::InvalidColumn("empty column label".into()));
    }

    let mut col: u32 = 0;
    for c in label.chars() {
        if !c.is_ascii_alphabetic() {
            return Err(Error::InvalidColumn(format!(
                "invalid column letter '{}' in '{}'",
                c, label
            )));
        }
        col = col * 26 + (c.to_ascii_uppercase() as u32 - 'A' as u32 + 1);
        if col > MAX_COLS as u32 {
            return Err(Error::ColumnOutOfBounds(MAX_COLS, MAX_COLS - 1));
        }
    }

    // Convert to 0-based
    Ok((col - 1) as u16)
}
