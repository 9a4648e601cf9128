//! Lazily composed diagnostic text.
//!
//! A [`Twine`] is a small tree of text fragments built at the call site and
//! flushed once to a [`Sink`]. Building one never formats anything: string
//! fragments are borrowed or moved in, primitive values are stored as-is, and
//! each `+` only allocates the node that joins the two sides.
//!
//! ```text
//! let msg = Twine::from("expected ") + expected + " components, found " + found;
//! registry.emit_error(msg, location);
//! ```
//!
//! Primitive leaves are formatted every time the twine is written. Twines
//! are meant to be written once and dropped, so nothing is cached.

use std::fmt;
use std::ops::Add;

use crate::format::Primitive;
use crate::sink::{Sink, SinkWriter};

/// A node in a lazily composed message.
///
/// `Borrowed` fragments must outlive the twine, which the `'a` lifetime
/// enforces.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Twine<'a> {
    #[default]
    Empty,
    Borrowed(&'a str),
    Owned(String),
    Value(Primitive),
    Concat(Box<Twine<'a>>, Box<Twine<'a>>),
}

impl<'a> Twine<'a> {
    /// An empty twine.
    pub const fn new() -> Self {
        Twine::Empty
    }

    /// Append `rhs` after `self`.
    ///
    /// Joining with an empty twine returns the other side without
    /// allocating a node.
    #[must_use]
    pub fn concat(self, rhs: impl Into<Twine<'a>>) -> Twine<'a> {
        match (self, rhs.into()) {
            (Twine::Empty, rhs) => rhs,
            (lhs, Twine::Empty) => lhs,
            (lhs, rhs) => Twine::Concat(Box::new(lhs), Box::new(rhs)),
        }
    }

    /// Check if this twine is the empty node.
    pub fn is_empty(&self) -> bool {
        matches!(self, Twine::Empty)
    }

    /// Write the fragments to `sink`, depth-first, left before right.
    pub fn write_to<S: Sink + ?Sized>(&self, sink: &mut S) {
        // SinkWriter never reports an error.
        let _ = self.render(&mut SinkWriter(sink));
    }

    fn render<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        match self {
            Twine::Empty => Ok(()),
            Twine::Borrowed(text) => out.write_str(text),
            Twine::Owned(text) => out.write_str(text),
            Twine::Value(value) => write!(out, "{value}"),
            Twine::Concat(lhs, rhs) => {
                lhs.render(out)?;
                rhs.render(out)
            }
        }
    }
}

/// Renders exactly the bytes [`Twine::write_to`] would produce.
impl fmt::Display for Twine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f)
    }
}

impl<'a, T: Into<Twine<'a>>> Add<T> for Twine<'a> {
    type Output = Twine<'a>;

    fn add(self, rhs: T) -> Twine<'a> {
        self.concat(rhs)
    }
}

impl<'a> From<&'a str> for Twine<'a> {
    fn from(text: &'a str) -> Self {
        Twine::Borrowed(text)
    }
}

impl<'a> From<&'a String> for Twine<'a> {
    fn from(text: &'a String) -> Self {
        Twine::Borrowed(text.as_str())
    }
}

impl From<String> for Twine<'_> {
    fn from(text: String) -> Self {
        Twine::Owned(text)
    }
}

impl From<Primitive> for Twine<'_> {
    fn from(value: Primitive) -> Self {
        Twine::Value(value)
    }
}

impl<T> From<*const T> for Twine<'_> {
    fn from(ptr: *const T) -> Self {
        Twine::Value(Primitive::Address(ptr as usize))
    }
}

impl<T> From<*mut T> for Twine<'_> {
    fn from(ptr: *mut T) -> Self {
        Twine::Value(Primitive::Address(ptr as usize))
    }
}

macro_rules! twine_from_primitive {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Twine<'_> {
                fn from(value: $ty) -> Self {
                    Twine::Value(Primitive::$variant(value))
                }
            }
        )*
    };
}

twine_from_primitive! {
    i16 => I16,
    u16 => U16,
    i32 => I32,
    u32 => U32,
    i64 => I64,
    u64 => U64,
    isize => ISize,
    usize => USize,
    f32 => F32,
    f64 => F64,
    bool => Bool,
}
