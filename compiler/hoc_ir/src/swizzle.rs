//! Swizzle write masks.
//!
//! A swizzle packs up to four component selectors into a `u32`, slot 0 in
//! the lowest bits:
//! - Vector swizzles (`.xyz`, `.rgba`) use 2 bits per slot, selectors `0..=3`.
//! - Matrix swizzles (`._m00_m11`, `._11_22`) use 4 bits per slot, selectors
//!   `row * 4 + column` in `0..=15`.
//!
//! The packed mask carries no type tag. Callers keep the [`SwizzleKind`] and
//! slot count next to it, or use [`Swizzle`] which bundles all three.
//!
//! # Write masks
//!
//! Assigning through a swizzle is only well formed when no component is
//! targeted twice: `v.xy = ...` is fine, `v.xx = ...` is rejected during
//! semantic analysis. [`is_valid_swizzle_write_mask`] implements that check.

use std::fmt;

/// Maximum number of slots in a swizzle.
///
/// A write target has at most four components regardless of whether the
/// source type is a vector or a matrix.
pub const MAX_SWIZZLE_LEN: usize = 4;

const VECTOR_SETS: [&str; 2] = ["xyzw", "rgba"];

/// Whether a packed mask addresses vector components or matrix cells.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum SwizzleKind {
    Vector,
    Matrix,
}

impl SwizzleKind {
    /// Bits occupied by one slot in the packed mask.
    #[inline]
    pub const fn bits_per_slot(self) -> u32 {
        match self {
            SwizzleKind::Vector => 2,
            SwizzleKind::Matrix => 4,
        }
    }

    /// Mask isolating one selector after shifting.
    #[inline]
    pub const fn selector_mask(self) -> u32 {
        match self {
            SwizzleKind::Vector => 0x3,
            SwizzleKind::Matrix => 0xF,
        }
    }

    /// Width of a fully packed mask (four slots).
    #[inline]
    const fn packed_width_mask(self) -> u32 {
        match self {
            SwizzleKind::Vector => 0xFF,
            SwizzleKind::Matrix => 0xFFFF,
        }
    }
}

/// Bit offset of `slot`, saturating so oversized slot indices shift
/// everything out instead of overflowing.
#[inline]
fn slot_shift(slot: usize, kind: SwizzleKind) -> u32 {
    u32::try_from(slot).map_or(u32::MAX, |s| s.saturating_mul(kind.bits_per_slot()))
}

#[inline]
fn selector_at(mask: u32, slot: usize, kind: SwizzleKind) -> u32 {
    mask.checked_shr(slot_shift(slot, kind)).unwrap_or(0) & kind.selector_mask()
}

/// Check that a packed write mask targets each component at most once.
///
/// `slot_count` is a caller contract: it should be at most
/// [`MAX_SWIZZLE_LEN`] and match the number of slots that were packed. The
/// function does not check it against the referenced type's real component
/// count. The mask is narrowed to its packed width (8 bits for vectors,
/// 16 bits for matrices) first, so slots past that width read as selector 0
/// and the function never panics.
pub fn is_valid_swizzle_write_mask(mask: u32, is_matrix: bool, slot_count: usize) -> bool {
    let kind = if is_matrix {
        SwizzleKind::Matrix
    } else {
        SwizzleKind::Vector
    };
    let mask = mask & kind.packed_width_mask();

    let mut modified: u16 = 0;
    for slot in 0..slot_count {
        let flag = 1u16 << selector_at(mask, slot, kind);
        if modified & flag != 0 {
            return false;
        }
        modified |= flag;
    }
    true
}

/// Error produced while parsing or packing a swizzle.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum SwizzleError {
    #[error("empty swizzle")]
    Empty,
    #[error("swizzle selects {0} components, at most 4 are allowed")]
    TooManyComponents(usize),
    #[error("invalid swizzle component `{0}`")]
    InvalidComponent(char),
    #[error("swizzle mixes component sets")]
    MixedComponentSets,
    #[error("malformed matrix swizzle cell `{0}`")]
    MalformedMatrixCell(String),
    #[error("selector {selector} is out of range for a {kind:?} swizzle")]
    SelectorOutOfRange { selector: u8, kind: SwizzleKind },
}

/// A packed swizzle together with its interpretation.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Swizzle {
    mask: u32,
    len: usize,
    kind: SwizzleKind,
}

impl Swizzle {
    /// Pack raw selector values, slot 0 first.
    pub fn from_selectors(kind: SwizzleKind, selectors: &[u8]) -> Result<Self, SwizzleError> {
        if selectors.is_empty() {
            return Err(SwizzleError::Empty);
        }
        if selectors.len() > MAX_SWIZZLE_LEN {
            return Err(SwizzleError::TooManyComponents(selectors.len()));
        }

        let mut mask = 0u32;
        for (slot, &selector) in selectors.iter().enumerate() {
            if u32::from(selector) > kind.selector_mask() {
                return Err(SwizzleError::SelectorOutOfRange { selector, kind });
            }
            mask |= u32::from(selector) << slot_shift(slot, kind);
        }

        Ok(Swizzle {
            mask,
            len: selectors.len(),
            kind,
        })
    }

    /// Parse a vector swizzle such as `xyz` or `rgba` (without the leading dot).
    ///
    /// All components must come from the same set.
    pub fn parse_vector(text: &str) -> Result<Self, SwizzleError> {
        let count = text.chars().count();
        if count == 0 {
            return Err(SwizzleError::Empty);
        }
        if count > MAX_SWIZZLE_LEN {
            return Err(SwizzleError::TooManyComponents(count));
        }

        let mut selectors = [0u8; MAX_SWIZZLE_LEN];
        let mut active_set: Option<usize> = None;
        for (slot, c) in text.chars().enumerate() {
            let Some((set, selector)) = vector_component(c) else {
                return Err(SwizzleError::InvalidComponent(c));
            };
            match active_set {
                Some(active) if active != set => return Err(SwizzleError::MixedComponentSets),
                _ => active_set = Some(set),
            }
            selectors[slot] = selector;
        }

        Self::from_selectors(SwizzleKind::Vector, &selectors[..count])
    }

    /// Parse a matrix swizzle such as `_m00_m11` (zero-based) or `_11_22`
    /// (one-based), without the leading dot.
    ///
    /// Both notations may not appear in the same swizzle.
    pub fn parse_matrix(text: &str) -> Result<Self, SwizzleError> {
        if text.is_empty() {
            return Err(SwizzleError::Empty);
        }
        let Some(cells) = text.strip_prefix('_') else {
            return Err(SwizzleError::MalformedMatrixCell(text.to_string()));
        };

        let mut selectors = [0u8; MAX_SWIZZLE_LEN];
        let mut count = 0;
        let mut zero_based: Option<bool> = None;
        for cell in cells.split('_') {
            if count == MAX_SWIZZLE_LEN {
                return Err(SwizzleError::TooManyComponents(cells.split('_').count()));
            }
            let (is_zero_based, selector) = matrix_cell(cell)?;
            match zero_based {
                Some(active) if active != is_zero_based => {
                    return Err(SwizzleError::MixedComponentSets);
                }
                _ => zero_based = Some(is_zero_based),
            }
            selectors[count] = selector;
            count += 1;
        }

        Self::from_selectors(SwizzleKind::Matrix, &selectors[..count])
    }

    /// The packed mask.
    #[inline]
    pub const fn mask(&self) -> u32 {
        self.mask
    }

    /// Number of slots.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Check if the swizzle has no slots.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub const fn kind(&self) -> SwizzleKind {
        self.kind
    }

    /// Unpacked selector values, slot 0 first.
    pub fn selectors(&self) -> impl Iterator<Item = u32> + '_ {
        (0..self.len).map(move |slot| selector_at(self.mask, slot, self.kind))
    }

    /// Whether this swizzle may be used as an assignment target.
    #[inline]
    pub fn is_valid_write_mask(&self) -> bool {
        is_valid_swizzle_write_mask(self.mask, self.kind == SwizzleKind::Matrix, self.len)
    }
}

/// Renders vectors with `xyzw` and matrices with zero-based `_mRC` cells.
impl fmt::Display for Swizzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for selector in self.selectors() {
            match self.kind {
                SwizzleKind::Vector => {
                    let c = VECTOR_SETS[0]
                        .chars()
                        .nth(selector as usize)
                        .unwrap_or('?');
                    write!(f, "{c}")?;
                }
                SwizzleKind::Matrix => write!(f, "_m{}{}", selector / 4, selector % 4)?,
            }
        }
        Ok(())
    }
}

/// Component set index and selector for a vector swizzle character.
fn vector_component(c: char) -> Option<(usize, u8)> {
    VECTOR_SETS.iter().enumerate().find_map(|(set, chars)| {
        chars
            .chars()
            .position(|candidate| candidate == c)
            .and_then(|pos| u8::try_from(pos).ok())
            .map(|selector| (set, selector))
    })
}

/// Parse one matrix cell (`mRC` or `RC`), returning whether it was
/// zero-based and its `row * 4 + column` selector.
fn matrix_cell(cell: &str) -> Result<(bool, u8), SwizzleError> {
    let malformed = || SwizzleError::MalformedMatrixCell(cell.to_string());

    let (zero_based, digits) = match cell.strip_prefix('m') {
        Some(rest) => (true, rest),
        None => (false, cell),
    };
    let bytes = digits.as_bytes();
    if bytes.len() != 2 {
        return Err(malformed());
    }

    let (low, high) = if zero_based { (b'0', b'3') } else { (b'1', b'4') };
    let index = |b: u8| (low..=high).contains(&b).then(|| b - low);
    let (Some(row), Some(column)) = (index(bytes[0]), index(bytes[1])) else {
        return Err(malformed());
    };

    Ok((zero_based, row * 4 + column))
}

#[cfg(test)]
mod tests;
