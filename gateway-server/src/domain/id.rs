use std::fmt;

/// Record id taken from a request path.
///
/// Paths that do not start with an integer still address a record; the id
/// then carries no value, prints as `NaN` and serialises as `null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordId(Option<i64>);

impl RecordId {
    pub const UNPARSED: Self = Self(None);

    pub const fn new(value: i64) -> Self {
        Self(Some(value))
    }

    pub fn parse(raw: &str) -> Self {
        Self(parse_leading_int(raw))
    }

    pub const fn get(self) -> Option<i64> {
        self.0
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => write!(f, "{value}"),
            None => f.write_str("NaN"),
        }
    }
}

/// Reads the leading base-10 integer of `raw`, e.g. `"12abc"` -> 12.
///
/// Leading whitespace and a single sign are allowed. Returns `None` when no
/// digit follows or the value does not fit in `i64`.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let magnitude: i64 = digits[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
