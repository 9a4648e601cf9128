//! Output sinks.
//!
//! A [`Sink`] accepts raw bytes and nothing else. Three backends cover every
//! destination the compiler writes diagnostics to:
//! - [`BufferSink`]: in-memory, for tests and embedding
//! - [`FileSink`]: any `io::Write` (files, stderr, stdout)
//! - [`CallbackSink`]: hands each chunk to a host-provided closure

use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Destination for diagnostic bytes.
///
/// Writing has no return value. A backend that can fail decides on its own
/// how to surface that (see [`FileSink::take_error`]).
pub trait Sink {
    /// Write raw bytes.
    fn write_bytes(&mut self, bytes: &[u8]);

    /// Write UTF-8 text.
    fn write_str(&mut self, text: &str) {
        self.write_bytes(text.as_bytes());
    }
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn write_bytes(&mut self, bytes: &[u8]) {
        (**self).write_bytes(bytes);
    }
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn write_bytes(&mut self, bytes: &[u8]) {
        (**self).write_bytes(bytes);
    }
}

/// Adapter that lets `write!` and `Display` impls target a [`Sink`].
pub(crate) struct SinkWriter<'w, S: Sink + ?Sized>(pub(crate) &'w mut S);

impl<S: Sink + ?Sized> fmt::Write for SinkWriter<'_, S> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0.write_str(s);
        Ok(())
    }
}

/// Error opening a sink.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("cannot open diagnostic output `{}`: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Sink that appends everything to an in-memory buffer.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct BufferSink {
    buf: Vec<u8>,
}

impl BufferSink {
    pub fn new() -> Self {
        BufferSink { buf: Vec::new() }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    /// Buffer contents as text, replacing invalid UTF-8.
    pub fn to_string_lossy(&self) -> String {
        String::from_utf8_lossy(&self.buf).into_owned()
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn clear(&mut self) {
        self.buf.clear();
    }
}

impl Sink for BufferSink {
    fn write_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }
}

/// Sink backed by an `io::Write`.
///
/// Write failures do not interrupt compilation. The first one is kept for
/// [`FileSink::take_error`] and every one is logged.
pub struct FileSink<W: Write> {
    writer: W,
    error: Option<io::Error>,
}

impl FileSink<BufWriter<File>> {
    /// Create (or truncate) `path` and write diagnostics to it, buffered.
    pub fn create(path: impl AsRef<Path>) -> Result<Self, SinkError> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| SinkError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(FileSink::new(BufWriter::new(file)))
    }
}

impl FileSink<io::Stderr> {
    pub fn stderr() -> Self {
        FileSink::new(io::stderr())
    }
}

impl FileSink<io::Stdout> {
    pub fn stdout() -> Self {
        FileSink::new(io::stdout())
    }
}

impl<W: Write> FileSink<W> {
    pub fn new(writer: W) -> Self {
        FileSink {
            writer,
            error: None,
        }
    }

    /// Flush the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    /// Take the first write error seen since the last call, if any.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Sink for FileSink<W> {
    fn write_bytes(&mut self, bytes: &[u8]) {
        if let Err(err) = self.writer.write_all(bytes) {
            tracing::warn!(%err, len = bytes.len(), "diagnostic output write failed");
            if self.error.is_none() {
                self.error = Some(err);
            }
        }
    }
}

impl<W: Write> fmt::Debug for FileSink<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileSink")
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

/// Sink that forwards every write to a callback.
///
/// A detached sink (no callback) drops everything.
pub struct CallbackSink<'a> {
    callback: Option<Box<dyn FnMut(&[u8]) + 'a>>,
}

impl<'a> CallbackSink<'a> {
    pub fn new(callback: impl FnMut(&[u8]) + 'a) -> Self {
        CallbackSink {
            callback: Some(Box::new(callback)),
        }
    }

    pub fn detached() -> Self {
        CallbackSink { callback: None }
    }

    pub fn is_attached(&self) -> bool {
        self.callback.is_some()
    }
}

impl Sink for CallbackSink<'_> {
    fn write_bytes(&mut self, bytes: &[u8]) {
        if let Some(callback) = self.callback.as_mut() {
            callback(bytes);
        }
    }
}

impl fmt::Debug for CallbackSink<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackSink")
            .field("attached", &self.is_attached())
            .finish()
    }
}
