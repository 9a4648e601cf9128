//! Text rendering of primitive values embedded in diagnostics.
//!
//! Integers print as minimal decimal. Floats follow C's `%g` with a fixed
//! significant-digit budget, which is what users of the compiler's other
//! tooling expect to read in messages. Output never depends on locale.

use std::fmt;

/// Significant digits used for `f32` values.
pub(crate) const F32_SIGNIFICANT_DIGITS: usize = 6;

/// Significant digits used for `f64` values.
pub(crate) const F64_SIGNIFICANT_DIGITS: usize = 18;

/// A primitive value held by a [`Twine`](crate::Twine) leaf.
///
/// Values are rendered when the twine is flushed, not when it is built.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Primitive {
    I16(i16),
    U16(u16),
    I32(i32),
    U32(u32),
    I64(i64),
    U64(u64),
    ISize(isize),
    USize(usize),
    F32(f32),
    F64(f64),
    Bool(bool),
    /// A memory address, rendered in pointer notation.
    Address(usize),
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Primitive::I16(v) => write!(f, "{v}"),
            Primitive::U16(v) => write!(f, "{v}"),
            Primitive::I32(v) => write!(f, "{v}"),
            Primitive::U32(v) => write!(f, "{v}"),
            Primitive::I64(v) => write!(f, "{v}"),
            Primitive::U64(v) => write!(f, "{v}"),
            Primitive::ISize(v) => write!(f, "{v}"),
            Primitive::USize(v) => write!(f, "{v}"),
            Primitive::F32(v) => write_general(f, f64::from(v), F32_SIGNIFICANT_DIGITS),
            Primitive::F64(v) => write_general(f, v, F64_SIGNIFICANT_DIGITS),
            Primitive::Bool(v) => f.write_str(if v { "true" } else { "false" }),
            Primitive::Address(0) => f.write_str("(nil)"),
            Primitive::Address(addr) => write!(f, "{addr:#x}"),
        }
    }
}

/// Write `value` like C's `%.<precision>g`.
///
/// Scientific notation is used when the decimal exponent is below -4 or at
/// least `precision`; otherwise fixed notation. Trailing fractional zeros
/// and a dangling decimal point are dropped in both forms.
pub(crate) fn write_general(
    out: &mut impl fmt::Write,
    value: f64,
    precision: usize,
) -> fmt::Result {
    if value.is_nan() {
        return out.write_str(if value.is_sign_negative() { "-nan" } else { "nan" });
    }
    if value.is_infinite() {
        return out.write_str(if value < 0.0 { "-inf" } else { "inf" });
    }

    let precision = precision.max(1);
    // Round to the digit budget first: the exponent can move (9.9999996 -> 1e1).
    let scientific = format!("{:.*e}", precision - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return out.write_str(&scientific);
    };
    let exponent: i64 = exponent.parse().unwrap_or(0);
    let digits = i64::try_from(precision).unwrap_or(i64::MAX);

    if exponent < -4 || exponent >= digits {
        out.write_str(trim_fraction(mantissa))?;
        let sign = if exponent < 0 { '-' } else { '+' };
        write!(out, "e{sign}{:02}", exponent.unsigned_abs())
    } else {
        let decimals = usize::try_from(digits - 1 - exponent).unwrap_or(0);
        let fixed = format!("{value:.decimals$}");
        out.write_str(trim_fraction(&fixed))
    }
}

fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}
