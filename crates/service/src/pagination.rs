//! Pagination utilities for service layer
//!
//! `limit`/`offset` arrive as loose query strings. Anything that is not a plain
//! run of ASCII digits is ignored, and `0` means "not set", so a bad or zero
//! value never narrows the result.

/// Limit/offset window over id-ordered rows; `None` means unbounded / no skip.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Page {
    limit: Option<u64>,
    offset: Option<u64>,
}

impl Page {
    /// Build from numeric values; `0` means no limit / no offset.
    pub fn new(limit: u64, offset: u64) -> Self {
        Self { limit: non_zero(limit), offset: non_zero(offset) }
    }

    /// Every row.
    pub fn all() -> Self {
        Self::default()
    }

    /// Build from raw query values, falling back to "unset" on anything non-numeric.
    pub fn from_params(limit: Option<&str>, offset: Option<&str>) -> Self {
        Self {
            limit: parse_digits(limit).and_then(non_zero),
            offset: parse_digits(offset).and_then(non_zero),
        }
    }

    pub fn limit(&self) -> Option<u64> {
        self.limit
    }

    pub fn offset(&self) -> Option<u64> {
        self.offset
    }
}

fn non_zero(v: u64) -> Option<u64> {
    (v != 0).then_some(v)
}

fn parse_digits(raw: Option<&str>) -> Option<u64> {
    let raw = raw?;
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}
