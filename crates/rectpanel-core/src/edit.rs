#![forbid(unsafe_code)]

//! Manual numeric edits: axis naming, integer parsing, readout formatting.

use std::fmt;
use std::str::FromStr;

use crate::error::EditError;
use crate::geometry::Dimensions;

/// One of the four editable cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Axis {
    X,
    Y,
    W,
    H,
}

impl Axis {
    /// Readout order.
    pub const ALL: [Axis; 4] = [Axis::X, Axis::Y, Axis::W, Axis::H];

    /// Field label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
            Self::W => "w",
            Self::H => "h",
        }
    }

    /// Read this axis out of a rectangle.
    #[inline]
    pub fn get(self, dims: &Dimensions) -> f64 {
        match self {
            Self::X => dims.x,
            Self::Y => dims.y,
            Self::W => dims.w,
            Self::H => dims.h,
        }
    }

    /// Mutable access to this axis of a rectangle.
    #[inline]
    pub fn get_mut(self, dims: &mut Dimensions) -> &mut f64 {
        match self {
            Self::X => &mut dims.x,
            Self::Y => &mut dims.y,
            Self::W => &mut dims.w,
            Self::H => &mut dims.h,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when parsing an unknown axis label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAxis(pub String);

impl fmt::Display for UnknownAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown axis {:?}", self.0)
    }
}

impl std::error::Error for UnknownAxis {}

impl FromStr for Axis {
    type Err = UnknownAxis;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|axis| axis.label() == s)
            .ok_or_else(|| UnknownAxis(s.to_owned()))
    }
}

/// Parse the leading integer of `raw`.
///
/// Leading whitespace is skipped, then an optional `+` or `-`, then the
/// longest run of ASCII digits. Anything after the digits is ignored, so
/// `"12px"` is 12 and `"3.9"` is 3. Text with no digits in that position is
/// rejected.
pub fn parse_integer(raw: &str) -> Result<i64, EditError> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return Err(EditError::NotANumber {
            raw: raw.to_owned(),
        });
    }

    let digits = &rest[..digits_len];
    let out_of_range = || EditError::OutOfRange {
        raw: raw.to_owned(),
    };
    digits.bytes().try_fold(0i64, |acc, b| {
        let digit = i64::from(b - b'0');
        let scaled = acc.checked_mul(10).ok_or_else(out_of_range)?;
        if negative {
            scaled.checked_sub(digit).ok_or_else(out_of_range)
        } else {
            scaled.checked_add(digit).ok_or_else(out_of_range)
        }
    })
}

/// Render a displayed value for a readout field.
///
/// Whole numbers print without a fractional part; negative zero prints as
/// `0`.
#[must_use]
pub fn format_readout(value: f64) -> String {
    if value == 0.0 {
        return "0".to_owned();
    }
    format!("{value}")
}
