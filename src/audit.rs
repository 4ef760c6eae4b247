//! Audit logging of resolved argument lists.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::workflow::{Resolved, Source};

/// An audit log entry. Argument values are never recorded.
#[derive(Debug, Serialize)]
pub struct AuditEntry {
    /// Timestamp of the event.
    pub timestamp: DateTime<Utc>,
    /// Application name (file name of argv[0]).
    pub app: String,
    /// Where the arguments came from.
    pub source: &'static str,
    /// Args file that was expanded, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    /// Number of resolved arguments.
    pub arg_count: usize,
}

impl AuditEntry {
    /// Create a new audit entry from a resolution.
    pub fn new(app: &str, resolved: &Resolved) -> Self {
        let (source, file) = match &resolved.source {
            Source::Explicit => ("explicit", None),
            Source::Default(path) => ("default", Some(path.display().to_string())),
            Source::Selected(path) => ("selected", Some(path.display().to_string())),
            Source::PassThrough => ("pass_through", None),
        };

        Self {
            timestamp: Utc::now(),
            app: app.to_string(),
            source,
            file,
            arg_count: resolved.args.len(),
        }
    }
}

/// Audit logger for writing entries to a file.
pub struct AuditLogger {
    file: File,
}

impl AuditLogger {
    /// Open or create an audit log file.
    pub fn open(path: &Path) -> std::io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self { file })
    }

    /// Write an audit entry to the log.
    pub fn log(&mut self, entry: &AuditEntry) -> std::io::Result<()> {
        let json = serde_json::to_string(entry)?;
        writeln!(self.file, "{}", json)?;
        self.file.flush()
    }

    /// Log a resolution.
    pub fn log_resolved(&mut self, app: &str, resolved: &Resolved) -> std::io::Result<()> {
        let entry = AuditEntry::new(app, resolved);
        self.log(&entry)
    }
}
