use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::error::{Result, TrackingError};
use super::records::{decode_exact_lines, decode_lines, encode_line, failure_file_name, success_file_name};

/// Text-file backed tracking records rooted at one directory
#[derive(Debug, Clone)]
pub struct TrackingStore {
    root: PathBuf,
}

impl TrackingStore {
    /// Use `root` for all record files, creating it if needed.
    ///
    /// A root that cannot be created is only logged; every later write will
    /// fail the same way and be ignored.
    pub fn open(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        match fs::create_dir_all(&root) {
            Ok(()) => info!("Tracking uploads in: {}", root.display()),
            Err(e) => warn!(
                root = %root.display(),
                error = %e,
                "Tracking directory unavailable, upload outcomes will not be remembered"
            ),
        }
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn success_path(&self, handler: &str) -> PathBuf {
        self.root.join(success_file_name(handler))
    }

    pub fn failure_path(&self, handler: &str) -> PathBuf {
        self.root.join(failure_file_name(handler))
    }

    /// Whether `artifact` is listed in the handler's success record
    pub fn is_succeeded(&self, handler: &str, artifact: &Path) -> bool {
        let key = record_key(artifact);
        self.list_succeeded(handler).iter().any(|line| *line == key)
    }

    pub fn record_success(&self, handler: &str, artifact: &Path) {
        self.record(&self.success_path(handler), handler, artifact);
    }

    pub fn record_failure(&self, handler: &str, artifact: &Path) {
        self.record(&self.failure_path(handler), handler, artifact);
    }

    pub fn list_succeeded(&self, handler: &str) -> Vec<String> {
        self.read_or_warn(&self.success_path(handler), handler, decode_exact_lines)
    }

    /// Every failed attempt in order, repeats included
    pub fn list_failed(&self, handler: &str) -> Vec<String> {
        self.read_or_warn(&self.failure_path(handler), handler, decode_lines)
    }

    /// View of the records belonging to one handler
    pub fn scoped(&self, handler: impl Into<String>) -> HandlerRecords {
        HandlerRecords {
            store: self.clone(),
            handler: handler.into(),
        }
    }

    fn record(&self, file: &Path, handler: &str, artifact: &Path) {
        match append_line(file, &record_key(artifact)) {
            Ok(()) => debug!(handler, record = %file.display(), artifact = %artifact.display(), "Recorded"),
            Err(e) => warn!(
                handler,
                artifact = %artifact.display(),
                error = %e,
                "Failed to update tracking record, artifact may be uploaded again"
            ),
        }
    }

    fn read_or_warn(&self, file: &Path, handler: &str, decode: fn(&str) -> Vec<String>) -> Vec<String> {
        read_lines(file, decode).unwrap_or_else(|e| {
            warn!(handler, error = %e, "Failed to read tracking record");
            Vec::new()
        })
    }
}

/// Tracking records of a single handler
#[derive(Debug, Clone)]
pub struct HandlerRecords {
    store: TrackingStore,
    handler: String,
}

impl HandlerRecords {
    pub fn handler(&self) -> &str {
        &self.handler
    }

    pub fn is_succeeded(&self, artifact: &Path) -> bool {
        self.store.is_succeeded(&self.handler, artifact)
    }

    pub fn record_success(&self, artifact: &Path) {
        self.store.record_success(&self.handler, artifact);
    }

    pub fn record_failure(&self, artifact: &Path) {
        self.store.record_failure(&self.handler, artifact);
    }

    pub fn list_succeeded(&self) -> Vec<String> {
        self.store.list_succeeded(&self.handler)
    }

    pub fn list_failed(&self) -> Vec<String> {
        self.store.list_failed(&self.handler)
    }
}

fn record_key(artifact: &Path) -> String {
    artifact.to_string_lossy().into_owned()
}

fn append_line(file: &Path, value: &str) -> Result<()> {
    let line =
        encode_line(value).ok_or_else(|| TrackingError::UnrecordablePath(value.to_string()))?;

    let io_error = |source: std::io::Error| TrackingError::Io {
        path: file.to_path_buf(),
        source,
    };

    let mut handle = OpenOptions::new()
        .create(true)
        .append(true)
        .open(file)
        .map_err(io_error)?;
    handle.write_all(line.as_bytes()).map_err(io_error)?;

    Ok(())
}

fn read_lines(file: &Path, decode: fn(&str) -> Vec<String>) -> Result<Vec<String>> {
    match fs::read_to_string(file) {
        Ok(contents) => Ok(decode(&contents)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
        Err(source) => Err(TrackingError::Io {
            path: file.to_path_buf(),
            source,
        }),
    }
}
