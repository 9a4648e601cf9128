//! Source locations.
//!
//! A [`Location`] is a 12-byte `(source, line, column)` triple. The source
//! field is an index handed out by the diagnostic registry, so a location
//! never owns or borrows the file name it refers to.

use std::fmt;

/// Position of a diagnostic in a registered source.
///
/// Layout: 12 bytes total
/// - source: u32 - source ID assigned by the diagnostic registry
/// - line: u32 - line number as reported by the lexer
/// - column: u32 - column number as reported by the lexer
///
/// [`Location::BAD`] marks "position unknown". It is an ordinary value, so
/// checking for it is exact equality rather than a range heuristic.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Location {
    pub source: u32,
    pub line: u32,
    pub column: u32,
}

impl Location {
    /// Sentinel for diagnostics without a precise position (whole-file errors).
    pub const BAD: Location = Location {
        source: u32::MAX,
        line: u32::MAX,
        column: u32::MAX,
    };

    /// Create a new location.
    #[inline]
    pub const fn new(source: u32, line: u32, column: u32) -> Self {
        Location {
            source,
            line,
            column,
        }
    }

    /// Check whether this is the [`Location::BAD`] sentinel.
    #[inline]
    pub const fn is_bad(&self) -> bool {
        self.source == u32::MAX && self.line == u32::MAX && self.column == u32::MAX
    }

    /// Same line and column in a different source.
    #[inline]
    #[must_use]
    pub const fn with_source(self, source: u32) -> Location {
        Location { source, ..self }
    }
}

impl Default for Location {
    fn default() -> Self {
        Location::BAD
    }
}

impl fmt::Debug for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_bad() {
            write!(f, "Location::BAD")
        } else {
            write!(f, "{}:{}:{}", self.source, self.line, self.column)
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_bad() {
            write!(f, "<unknown>")
        } else {
            write!(f, "{}:{}:{}", self.source, self.line, self.column)
        }
    }
}

// Size assertions to prevent accidental regressions
mod size_asserts {
    use super::Location;
    crate::static_assert_size!(Location, 12);
}
