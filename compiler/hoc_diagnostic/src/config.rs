//! Where diagnostics go.
//!
//! The default is stderr. `HOC_DIAGNOSTICS` overrides it:
//! - `stderr` / `stdout`
//! - `silent` or `none`: no output (errors are still tracked)
//! - anything else: path of a file to create

use std::path::PathBuf;

use crate::sink::{FileSink, Sink, SinkError};

/// Environment variable read by [`DiagnosticConfig::from_env`].
pub const DIAGNOSTICS_ENV: &str = "HOC_DIAGNOSTICS";

/// Destination for rendered diagnostics.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum OutputTarget {
    #[default]
    Stderr,
    Stdout,
    Silent,
    File(PathBuf),
}

/// Configuration for diagnostic output.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct DiagnosticConfig {
    pub output: OutputTarget,
}

impl DiagnosticConfig {
    /// Config that discards all output.
    pub fn silent() -> Self {
        DiagnosticConfig {
            output: OutputTarget::Silent,
        }
    }

    /// Read the output target from `HOC_DIAGNOSTICS`, falling back to the default.
    pub fn from_env() -> Self {
        let value = std::env::var(DIAGNOSTICS_ENV).ok();
        Self::from_env_value(value.as_deref())
    }

    /// Build a config from the raw value of `HOC_DIAGNOSTICS`.
    pub fn from_env_value(value: Option<&str>) -> Self {
        let output = match value.map(str::trim) {
            None | Some("") => OutputTarget::default(),
            Some(target) => Self::parse_target(target),
        };
        DiagnosticConfig { output }
    }

    /// Parse one output target name.
    pub fn parse_target(target: &str) -> OutputTarget {
        match target {
            "stderr" => OutputTarget::Stderr,
            "stdout" => OutputTarget::Stdout,
            "silent" | "none" => OutputTarget::Silent,
            path => OutputTarget::File(PathBuf::from(path)),
        }
    }

    /// Open the configured sink. `None` means output is suppressed.
    pub fn open_sink(&self) -> Result<Option<Box<dyn Sink>>, SinkError> {
        let sink: Box<dyn Sink> = match &self.output {
            OutputTarget::Stderr => Box::new(FileSink::stderr()),
            OutputTarget::Stdout => Box::new(FileSink::stdout()),
            OutputTarget::Silent => return Ok(None),
            OutputTarget::File(path) => Box::new(FileSink::create(path)?),
        };
        tracing::debug!(output = ?self.output, "opened diagnostic output");
        Ok(Some(sink))
    }
}
