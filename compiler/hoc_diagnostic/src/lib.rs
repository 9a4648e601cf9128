//! Diagnostic reporting for the HOC shader compiler.
//!
//! Compiler stages describe *where* something happened with a
//! [`Location`](hoc_ir::Location) and *what* they say about it with a
//! [`Twine`]. The [`DiagnosticRegistry`] turns both into one line of text on
//! a [`Sink`] and remembers whether any error was reported:
//!
//! ```text
//! main.shader:12:5: error: unexpected token
//! main.shader: error: cannot open include
//! ```
//!
//! # Failure tracking
//!
//! The registry's `has_errors` flag is sticky and independent of output.
//! Diagnostics can be silenced entirely (no sink) and compilation failure is
//! still detected.
//!
//! # Allocation failure
//!
//! Running out of memory is unrecoverable. The global allocator aborts the
//! process, and nothing in this crate tries to surface it as an error value.

pub mod config;
mod format;
pub mod registry;
pub mod sink;
pub mod time;
mod twine;

pub use config::{DiagnosticConfig, OutputTarget};
pub use format::Primitive;
pub use registry::DiagnosticRegistry;
pub use sink::{BufferSink, CallbackSink, FileSink, Sink, SinkError};
pub use twine::Twine;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=hoc_diagnostic=debug` or `RUST_LOG=hoc_diagnostic=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}
