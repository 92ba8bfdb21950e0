#![forbid(unsafe_code)]

//! Positional style properties and pixel-suffixed values.

use std::fmt;
use std::str::FromStr;

/// Style properties the positioner writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StyleProperty {
    Top,
    Left,
}

impl StyleProperty {
    /// CSS property name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Left => "left",
        }
    }
}

impl fmt::Display for StyleProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A length in CSS pixels, rendered as `"<number>px"`.
///
/// Integral values print without a fractional part (`108px`), fractional
/// values print in shortest round-trip form (`12.5px`). Negative zero prints
/// as `0px`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PixelValue(pub f64);

impl PixelValue {
    #[inline]
    pub const fn new(px: f64) -> Self {
        Self(px)
    }

    #[inline]
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl From<f64> for PixelValue {
    fn from(px: f64) -> Self {
        Self(px)
    }
}

impl fmt::Display for PixelValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `-0.0 + 0.0` is `+0.0`.
        write!(f, "{}px", self.0 + 0.0)
    }
}

impl FromStr for PixelValue {
    type Err = PixelParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let number = trimmed
            .strip_suffix("px")
            .ok_or_else(|| PixelParseError::new(s, PixelParseErrorKind::MissingUnit))?;
        let value: f64 = number
            .trim_end()
            .parse()
            .map_err(|_| PixelParseError::new(s, PixelParseErrorKind::InvalidNumber))?;
        if !value.is_finite() {
            return Err(PixelParseError::new(s, PixelParseErrorKind::NotFinite));
        }
        Ok(Self(value))
    }
}

/// Why a pixel string was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelParseErrorKind {
    /// The value does not end in `px`.
    MissingUnit,
    /// The part before `px` is not a number.
    InvalidNumber,
    /// The number is NaN or infinite.
    NotFinite,
}

/// Error returned when a style value is not a finite pixel length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelParseError {
    input: String,
    kind: PixelParseErrorKind,
}

impl PixelParseError {
    fn new(input: &str, kind: PixelParseErrorKind) -> Self {
        Self {
            input: input.to_owned(),
            kind,
        }
    }

    /// The rejected input.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    #[must_use]
    pub fn kind(&self) -> PixelParseErrorKind {
        self.kind
    }
}

impl fmt::Display for PixelParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            PixelParseErrorKind::MissingUnit => {
                write!(f, "pixel value {:?} is missing the px unit", self.input)
            }
            PixelParseErrorKind::InvalidNumber => {
                write!(f, "pixel value {:?} is not a number", self.input)
            }
            PixelParseErrorKind::NotFinite => {
                write!(f, "pixel value {:?} is not finite", self.input)
            }
        }
    }
}

impl std::error::Error for PixelParseError {}
