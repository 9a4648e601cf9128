//! HOC IR - shared value types for the shader compiler front end.
//!
//! This crate holds the small, dependency-free pieces every compiler stage
//! agrees on:
//! - [`Location`] for pinning a diagnostic to a source position
//! - Swizzle write-mask validation and swizzle text packing
//!
//! Everything here is plain data or pure functions. Nothing allocates on the
//! hot path and nothing carries interior mutability.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-copied types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod location;
pub mod swizzle;

pub use location::Location;
pub use swizzle::{is_valid_swizzle_write_mask, Swizzle, SwizzleError, SwizzleKind};
