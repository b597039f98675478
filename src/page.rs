//! Page entity
//!
//! A [`Page`] is a 1-indexed page number plus a page size, both strictly
//! positive. This module also holds the converters used to read those two
//! integers out of untrusted JSON: native integers and quoted integers
//! (`"12"`), where any text after the digits is its own error category.

use crate::document::Violation;
use crate::error::{Error, Result};
use crate::types::JsonValue;
use serde::Serialize;
use std::num::NonZeroU64;

/// A requested page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Page {
    number: NonZeroU64,
    size: NonZeroU64,
}

impl Page {
    /// Create a page, rejecting a zero number or size
    pub fn new(number: u64, size: u64) -> Result<Self> {
        match (NonZeroU64::new(number), NonZeroU64::new(size)) {
            (Some(number), Some(size)) => Ok(Self { number, size }),
            _ => Err(Error::InvalidPage {
                number: i128::from(number),
                size: i128::from(size),
            }),
        }
    }

    /// Create a page from signed integers, rejecting anything below 1
    pub(crate) fn from_signed(number: i64, size: i64) -> Result<Self> {
        match (u64::try_from(number), u64::try_from(size)) {
            (Ok(n), Ok(s)) => Self::new(n, s),
            _ => Err(Error::InvalidPage {
                number: i128::from(number),
                size: i128::from(size),
            }),
        }
    }

    /// Build a page from parts that are positive by construction
    pub const fn from_parts(number: NonZeroU64, size: NonZeroU64) -> Self {
        Self { number, size }
    }

    /// 1-indexed page number
    pub const fn number(&self) -> u64 {
        self.number.get()
    }

    /// Number of items per page
    pub const fn size(&self) -> u64 {
        self.size.get()
    }

    pub(crate) const fn non_zero_number(&self) -> NonZeroU64 {
        self.number
    }

    pub(crate) const fn non_zero_size(&self) -> NonZeroU64 {
        self.size
    }
}

// ============================================================================
// Quoted Integers
// ============================================================================

/// Why a string did not parse as a quoted integer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuotedIntegerError {
    /// No integer at the start of the text
    NotAnInteger,
    /// An integer followed by trailing text
    ExcessText {
        /// The integer that was read
        integer: i64,
        /// Everything after it
        excess: String,
    },
}

/// Parse a string-encoded integer, requiring the whole string to be consumed.
///
/// Accepts an optional `+` or `-` sign followed by ASCII digits. Leading
/// whitespace is not skipped.
pub fn parse_quoted_integer(text: &str) -> std::result::Result<i64, QuotedIntegerError> {
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    let sign_len = text.len() - unsigned.len();
    let digits_len = unsigned
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();

    if digits_len == 0 {
        return Err(QuotedIntegerError::NotAnInteger);
    }

    let (integer, excess) = text.split_at(sign_len + digits_len);
    let integer = integer
        .parse::<i64>()
        .map_err(|_| QuotedIntegerError::NotAnInteger)?;

    if excess.is_empty() {
        Ok(integer)
    } else {
        Err(QuotedIntegerError::ExcessText {
            integer,
            excess: excess.to_string(),
        })
    }
}

// ============================================================================
// Converters
// ============================================================================

/// Read an integer that is either native or quoted
pub fn integer(pointer: &str, value: &JsonValue) -> std::result::Result<i128, Violation> {
    match value {
        JsonValue::Number(number) => number
            .as_u64()
            .map(i128::from)
            .or_else(|| number.as_i64().map(i128::from))
            .ok_or_else(|| Violation::NotAnInteger {
                pointer: pointer.to_string(),
            }),
        JsonValue::String(text) => match parse_quoted_integer(text) {
            Ok(integer) => Ok(i128::from(integer)),
            Err(QuotedIntegerError::NotAnInteger) => Err(Violation::NotAQuotedInteger {
                pointer: pointer.to_string(),
            }),
            Err(QuotedIntegerError::ExcessText { integer, excess }) => {
                Err(Violation::ExcessTextAfterQuotedInteger {
                    pointer: pointer.to_string(),
                    integer,
                    excess,
                })
            }
        },
        _ => Err(Violation::NotAnInteger {
            pointer: pointer.to_string(),
        }),
    }
}

/// Read a strictly positive integer that is either native or quoted
pub fn positive_integer(
    pointer: &str,
    value: &JsonValue,
) -> std::result::Result<NonZeroU64, Violation> {
    let integer = integer(pointer, value)?;
    u64::try_from(integer)
        .ok()
        .and_then(NonZeroU64::new)
        .ok_or_else(|| Violation::NotAPositiveInteger {
            pointer: pointer.to_string(),
        })
}
