//! Cell address and range types

use crate::column::{column_index, column_label};
use crate::error::{Error, Result};
use crate::{MAX_COLS, MAX_ROWS};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A rectangular, contiguous block of cells, optionally scoped to a named
/// sheet.
///
/// A `CellAddress` always stores the top-left anchor plus row/column extents;
/// the corners given in parsed text are normalized on ingestion. A single
/// cell is just a `CellAddress` with one row and one column — there is no
/// separate type.
///
/// Rows and columns are 0-based internally and 1-based in address text.
/// Values of this type are immutable: every operation (`offset`, `cell_at`,
/// `union`, ...) produces a new `CellAddress`.
///
/// # Examples
/// ```
/// use cellgrid_core::CellAddress;
///
/// let range = CellAddress::parse("Sheet1!A1:B2").unwrap();
/// assert_eq!(range.count(), 4);
/// assert_eq!(range.sheet(), Some("Sheet1"));
/// assert_eq!(range.local_address(), "$A$1:$B$2");
///
/// // Corner order does not matter
/// assert_eq!(
///     CellAddress::parse("B2:A1").unwrap(),
///     CellAddress::parse("A1:B2").unwrap(),
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellAddress {
    /// Sheet name, if the address is sheet-scoped
    pub(crate) sheet: Option<String>,
    /// Top row (0-based)
    pub(crate) row_first: u32,
    /// Left column (0-based, A=0)
    pub(crate) col_first: u16,
    /// Number of rows (>= 1)
    pub(crate) row_count: u32,
    /// Number of columns (>= 1)
    pub(crate) col_count: u16,
}

impl CellAddress {
    /// Create a single-cell address
    pub fn new(row: u32, col: u16) -> Result<Self> {
        Self::from_extents(row, col, 1, 1)
    }

    /// Create a range from a top-left anchor and extents
    pub fn from_extents(row_first: u32, col_first: u16, row_count: u32, col_count: u16) -> Result<Self> {
        if row_count == 0 || col_count == 0 {
            return Err(Error::InvalidRange(
                "range must span at least one row and one column".into(),
            ));
        }
        if row_first
            .checked_add(row_count - 1)
            .map_or(true, |r| r >= MAX_ROWS)
        {
            return Err(Error::RowOutOfBounds(row_first, MAX_ROWS - 1));
        }
        if col_first
            .checked_add(col_count - 1)
            .map_or(true, |c| c >= MAX_COLS)
        {
            return Err(Error::ColumnOutOfBounds(col_first, MAX_COLS - 1));
        }

        Ok(Self {
            sheet: None,
            row_first,
            col_first,
            row_count,
            col_count,
        })
    }

    /// Create a range from two corner cells, in either order
    pub fn from_corners(row1: u32, col1: u16, row2: u32, col2: u16) -> Result<Self> {
        let (row_first, row_last) = if row1 <= row2 { (row1, row2) } else { (row2, row1) };
        let (col_first, col_last) = if col1 <= col2 { (col1, col2) } else { (col2, col1) };
        Self::from_extents(
            row_first,
            col_first,
            row_last - row_first + 1,
            col_last - col_first + 1,
        )
    }

    /// Scope this address to a named sheet
    pub fn with_sheet<S: Into<String>>(mut self, sheet: S) -> Self {
        self.sheet = Some(sheet.into());
        self
    }

    /// Parse an address from A1-style notation
    ///
    /// Grammar: `[Sheet '!'] CellRef [':' CellRef]` where a `CellRef` is a
    /// column label followed by a 1-based row number. `$` absolute markers
    /// are accepted and ignored; sheet names may be single-quoted
    /// (`'My Sheet'!A1`, with `''` escaping a literal quote).
    ///
    /// # Examples
    /// ```
    /// use cellgrid_core::CellAddress;
    ///
    /// let cell = CellAddress::parse("C4").unwrap();
    /// assert_eq!((cell.row_first(), cell.col_first()), (3, 2));
    /// assert_eq!(cell.count(), 1);
    ///
    /// let range = CellAddress::parse("$A$1:$F$5").unwrap();
    /// assert_eq!(range.count(), 30);
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::InvalidAddress("empty address".into()));
        }

        let (sheet, rest) = split_sheet(s)?;

        let range = if let Some(colon_pos) = rest.find(':') {
            let first = &rest[..colon_pos];
            let second = &rest[colon_pos + 1..];
            if first.is_empty() || second.is_empty() {
                return Err(Error::InvalidAddress(format!(
                    "cell reference missing on one side of ':' in '{}'",
                    s
                )));
            }
            let (row1, col1) = parse_cell_ref(first)?;
            let (row2, col2) = parse_cell_ref(second)?;
            Self::from_corners(row1, col1, row2, col2)?
        } else {
            let (row, col) = parse_cell_ref(rest)?;
            Self::new(row, col)?
        };

        Ok(match sheet {
            Some(name) => range.with_sheet(name),
            None => range,
        })
    }

    /// Sheet name, if any
    pub fn sheet(&self) -> Option<&str> {
        self.sheet.as_deref()
    }

    /// Top row (0-based)
    pub fn row_first(&self) -> u32 {
        self.row_first
    }

    /// Left column (0-based)
    pub fn col_first(&self) -> u16 {
        self.col_first
    }

    /// Bottom row (0-based)
    pub fn row_last(&self) -> u32 {
        self.row_first + self.row_count - 1
    }

    /// Right column (0-based)
    pub fn col_last(&self) -> u16 {
        self.col_first + self.col_count - 1
    }

    /// Number of rows
    pub fn row_count(&self) -> u32 {
        self.row_count
    }

    /// Number of columns
    pub fn col_count(&self) -> u16 {
        self.col_count
    }

    /// Total number of cells
    pub fn count(&self) -> u64 {
        self.row_count as u64 * self.col_count as u64
    }

    /// Whether this range is exactly one cell
    pub fn is_single_cell(&self) -> bool {
        self.row_count == 1 && self.col_count == 1
    }

    /// Canonical sheet-free rendering, always with absolute markers:
    /// `$C$4` for a single cell, `$A$1:$F$5` for a multi-cell range.
    ///
    /// # Examples
    /// ```
    /// use cellgrid_core::CellAddress;
    ///
    /// assert_eq!(CellAddress::parse("c4").unwrap().local_address(), "$C$4");
    /// assert_eq!(
    ///     CellAddress::parse("Sheet1!B2:A1").unwrap().local_address(),
    ///     "$A$1:$B$2",
    /// );
    /// ```
    pub fn local_address(&self) -> String {
        let first = format!("${}${}", column_label(self.col_first), self.row_first + 1);
        if self.is_single_cell() {
            first
        } else {
            format!(
                "{}:${}${}",
                first,
                column_label(self.col_last()),
                self.row_last() + 1
            )
        }
    }

    /// Translate the range by a row/column delta, extents unchanged
    ///
    /// # Examples
    /// ```
    /// use cellgrid_core::CellAddress;
    ///
    /// let cell = CellAddress::parse("C4").unwrap();
    /// assert_eq!(cell.offset(1, 0).unwrap().local_address(), "$C$5");
    /// assert_eq!(cell.offset(-1, -2).unwrap().local_address(), "$A$3");
    /// assert!(cell.offset(-10, 0).is_err());
    /// ```
    pub fn offset(&self, row_delta: i64, col_delta: i64) -> Result<Self> {
        let row = (self.row_first as i64)
            .checked_add(row_delta)
            .ok_or(Error::OffsetOutOfRange(row_delta, col_delta))?;
        let col = (self.col_first as i64)
            .checked_add(col_delta)
            .ok_or(Error::OffsetOutOfRange(row_delta, col_delta))?;
        if row < 0 || col < 0 {
            return Err(Error::OffsetOutOfRange(row_delta, col_delta));
        }
        let row = row as u64;
        let col = col as u64;
        if row + self.row_count as u64 > MAX_ROWS as u64 {
            return Err(Error::RowOutOfBounds(row.min(u32::MAX as u64) as u32, MAX_ROWS - 1));
        }
        if col + self.col_count as u64 > MAX_COLS as u64 {
            return Err(Error::ColumnOutOfBounds(col.min(u16::MAX as u64) as u16, MAX_COLS - 1));
        }

        Ok(Self {
            sheet: self.sheet.clone(),
            row_first: row as u32,
            col_first: col as u16,
            row_count: self.row_count,
            col_count: self.col_count,
        })
    }

    /// Return whichever of the two addresses is further in the
    /// row-then-column order (a later row wins; ties are broken by a later
    /// column). Multi-cell ranges compare by their top-left anchor.
    pub fn max(&self, other: &Self) -> Self {
        match (self.row_first, self.col_first).cmp(&(other.row_first, other.col_first)) {
            Ordering::Less => other.clone(),
            Ordering::Equal | Ordering::Greater => self.clone(),
        }
    }

    /// Check whether `other` lies entirely within this range
    pub fn contains(&self, other: &Self) -> bool {
        other.row_first >= self.row_first
            && other.row_last() <= self.row_last()
            && other.col_first >= self.col_first
            && other.col_last() <= self.col_last()
    }

    /// Minimal bounding rectangle covering this range and `other`
    ///
    /// An unscoped address unifies with anything; two distinct explicit
    /// sheets fail with [`Error::SheetMismatch`].
    pub fn union(&self, other: &Self) -> Result<Self> {
        let sheet = match (self.sheet.as_deref(), other.sheet.as_deref()) {
            (Some(a), Some(b)) if a != b => {
                return Err(Error::SheetMismatch(a.to_string(), b.to_string()));
            }
            (Some(a), _) => Some(a.to_string()),
            (None, b) => b.map(str::to_string),
        };

        let range = Self::from_corners(
            self.row_first.min(other.row_first),
            self.col_first.min(other.col_first),
            self.row_last().max(other.row_last()),
            self.col_last().max(other.col_last()),
        )?;

        Ok(match sheet {
            Some(name) => range.with_sheet(name),
            None => range,
        })
    }

    /// Minimal bounding rectangle covering every range in `ranges`
    ///
    /// Fails with [`Error::EmptyUnion`] on an empty sequence.
    ///
    /// # Examples
    /// ```
    /// use cellgrid_core::CellAddress;
    ///
    /// let cells: Vec<_> = ["A1", "B2", "D5", "F3"]
    ///     .iter()
    ///     .map(|s| CellAddress::parse(s).unwrap())
    ///     .collect();
    /// let bounds = CellAddress::bounding(&cells).unwrap();
    /// assert_eq!(bounds.local_address(), "$A$1:$F$5");
    /// ```
    pub fn bounding<'a, I>(ranges: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a Self>,
    {
        let mut iter = ranges.into_iter();
        let first = iter.next().ok_or(Error::EmptyUnion)?.clone();
        iter.try_fold(first, |acc, r| acc.union(r))
    }
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(sheet) = &self.sheet {
            if needs_quoting(sheet) {
                write!(f, "'{}'!", sheet.replace('\'', "''"))?;
            } else {
                write!(f, "{}!", sheet)?;
            }
        }
        write!(f, "{}", self.local_address())
    }
}

impl FromStr for CellAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for CellAddress {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Split an optional `Sheet!` prefix off an address, handling quoted names
fn split_sheet(s: &str) -> Result<(Option<String>, &str)> {
    if let Some(rest) = s.strip_prefix('\'') {
        // Quoted sheet name; '' escapes a literal quote
        let mut name = String::new();
        let mut chars = rest.char_indices();
        loop {
            match chars.next() {
                Some((i, '\'')) => {
                    if rest[i + 1..].starts_with('\'') {
                        name.push('\'');
                        chars.next();
                    } else {
                        let tail = &rest[i + 1..];
                        let tail = tail.strip_prefix('!').ok_or_else(|| {
                            Error::InvalidAddress(format!("expected '!' after sheet name in '{}'", s))
                        })?;
                        if name.is_empty() {
                            return Err(Error::InvalidAddress(format!("empty sheet name in '{}'", s)));
                        }
                        return Ok((Some(name), tail));
                    }
                }
                Some((_, c)) => name.push(c),
                None => {
                    return Err(Error::InvalidAddress(format!(
                        "unterminated sheet name quote in '{}'",
                        s
                    )));
                }
            }
        }
    }

    match s.find('!') {
        Some(0) => Err(Error::InvalidAddress(format!("empty sheet name in '{}'", s))),
        Some(pos) => Ok((Some(s[..pos].to_string()), &s[pos + 1..])),
        None => Ok((None, s)),
    }
}

/// Parse a single `CellRef` like `B2` or `$B$2` into 0-based (row, col)
fn parse_cell_ref(s: &str) -> Result<(u32, u16)> {
    let bytes = s.as_bytes();
    let mut pos = 0;

    // Optional column absolute marker
    if bytes.get(pos) == Some(&b'$') {
        pos += 1;
    }

    let col_start = pos;
    while pos < bytes.len() && bytes[pos].is_ascii_alphabetic() {
        pos += 1;
    }
    if pos == col_start {
        return Err(Error::InvalidAddress(format!("no column letters in '{}'", s)));
    }
    let col = column_index(&s[col_start..pos])?;

    // Optional row absolute marker
    if bytes.get(pos) == Some(&b'$') {
        pos += 1;
    }

    let row_str = &s[pos..];
    if row_str.is_empty() {
        return Err(Error::InvalidAddress(format!("no row number in '{}'", s)));
    }
    let row: u32 = row_str
        .parse()
        .map_err(|_| Error::InvalidAddress(format!("invalid row number in '{}'", s)))?;

    // Address text is 1-based, the model is 0-based
    if row == 0 {
        return Err(Error::InvalidAddress(format!("row number must be >= 1 in '{}'", s)));
    }
    let row = row - 1;
    if row >= MAX_ROWS {
        return Err(Error::RowOutOfBounds(row, MAX_ROWS - 1));
    }

    Ok((row, col))
}

/// Whether a sheet name needs single quotes when rendered
///
/// Names must start with a letter or underscore to go unquoted: an
/// all-digit name like `2024` would otherwise be ambiguous in address text.
fn needs_quoting(sheet: &str) -> bool {
    let starts_ok = sheet
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
    !starts_ok
        || sheet
            .chars()
            .any(|c| !(c.is_ascii_alphanumeric() || c == '_'))
}
