//! Diagnostic registry: source identities, message rendering, failure state.
//!
//! Every diagnostic is one line:
//!
//! ```text
//! <source>[:<line>:<column>]: <severity>: <message>\n
//! ```
//!
//! The position segment is left out for [`Location::BAD`]. Downstream tools
//! parse this shape, so it must not change.

use hoc_ir::Location;

use crate::sink::Sink;
use crate::twine::Twine;

/// Severity label used by [`DiagnosticRegistry::emit_error`].
pub const ERROR: &str = "error";

/// Severity label used by [`DiagnosticRegistry::emit_warning`].
pub const WARNING: &str = "warning";

/// Maps source identities to IDs, renders diagnostics to a [`Sink`], and
/// tracks whether compilation has failed.
///
/// The sink is borrowed and must outlive the registry. Without a sink all
/// output is suppressed, but errors are still counted toward
/// [`has_errors`](Self::has_errors).
///
/// # Example
///
/// ```text
/// let mut out = BufferSink::new();
/// let mut diag = DiagnosticRegistry::new(&mut out, "main.shader");
/// diag.emit_error("unexpected token", Location::new(0, 12, 5));
/// assert!(diag.has_errors());
/// ```
pub struct DiagnosticRegistry<'s> {
    sink: Option<&'s mut dyn Sink>,
    /// Source identities; the index is the source ID.
    sources: Vec<String>,
    /// Sticky: never reset once set.
    has_errors: bool,
}

impl<'s> DiagnosticRegistry<'s> {
    /// Create a registry writing to `sink`. `primary` becomes source ID 0.
    pub fn new(sink: &'s mut dyn Sink, primary: impl Into<String>) -> Self {
        Self::with_optional_sink(Some(sink), primary)
    }

    /// Create a registry that prints nothing but still tracks errors.
    pub fn silent(primary: impl Into<String>) -> Self {
        Self::with_optional_sink(None, primary)
    }

    /// Create a registry with a sink that may be absent.
    pub fn with_optional_sink(
        sink: Option<&'s mut dyn Sink>,
        primary: impl Into<String>,
    ) -> Self {
        DiagnosticRegistry {
            sink,
            sources: vec![primary.into()],
            has_errors: false,
        }
    }

    /// Get the ID for `name`, registering it if it has not been seen.
    ///
    /// IDs are handed out in first-seen order. Lookup is a linear scan over
    /// the distinct sources registered so far.
    pub fn source_id(&mut self, name: &str) -> u32 {
        if let Some(index) = self.sources.iter().position(|source| source == name) {
            return source_index_to_id(index);
        }
        self.sources.push(name.to_string());
        let id = source_index_to_id(self.sources.len() - 1);
        tracing::debug!(id, name, "registered source");
        id
    }

    /// The identity for `id`, or the primary source's if `id` is unknown.
    pub fn source_name(&self, id: u32) -> &str {
        resolve_source(&self.sources, id)
    }

    /// All registered source identities, indexed by ID.
    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    /// Check if output is going anywhere.
    pub fn has_sink(&self) -> bool {
        self.sink.is_some()
    }

    /// Render one diagnostic with a caller-chosen severity label.
    ///
    /// Does nothing without a sink. Never changes the failure state.
    pub fn print_message<'m>(
        &mut self,
        severity: &str,
        message: impl Into<Twine<'m>>,
        location: Location,
    ) {
        let Some(sink) = self.sink.as_deref_mut() else {
            return;
        };
        tracing::trace!(severity, %location, "printing diagnostic");

        let message: Twine<'m> = message.into();
        let source = resolve_source(&self.sources, location.source);
        let mut line = Twine::from(source) + ":";
        if location != Location::BAD {
            line = line + location.line + ":" + location.column + ":";
        }
        let line = line + " " + severity + ": " + message + "\n";
        line.write_to(sink);
    }

    /// Report an error and mark compilation as failed.
    ///
    /// The failure flag is set before, and regardless of, any output.
    pub fn emit_error<'m>(&mut self, message: impl Into<Twine<'m>>, location: Location) {
        if !self.has_errors {
            tracing::debug!(%location, "first error reported");
        }
        self.has_errors = true;
        self.print_message(ERROR, message, location);
    }

    /// Report a warning. Does not affect [`has_errors`](Self::has_errors).
    pub fn emit_warning<'m>(&mut self, message: impl Into<Twine<'m>>, location: Location) {
        self.print_message(WARNING, message, location);
    }

    /// Check if any error has been emitted.
    pub fn has_errors(&self) -> bool {
        self.has_errors
    }
}

impl std::fmt::Debug for DiagnosticRegistry<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiagnosticRegistry")
            .field("has_sink", &self.has_sink())
            .field("sources", &self.sources)
            .field("has_errors", &self.has_errors)
            .finish()
    }
}

/// Falls back to the primary source for IDs that were never handed out.
fn resolve_source(sources: &[String], id: u32) -> &str {
    usize::try_from(id)
        .ok()
        .and_then(|index| sources.get(index))
        .or_else(|| sources.first())
        .map_or("", String::as_str)
}

#[inline]
fn source_index_to_id(index: usize) -> u32 {
    u32::try_from(index).unwrap_or(u32::MAX)
}
