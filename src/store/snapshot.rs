//! Snapshot export: copy the store file somewhere the user can reach and hand
//! it to a share sink.
//!
//! The copy is byte-identical to the store file at the time of export. The
//! live store is only ever read.

use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{JobtrackError, Result};

/// Content type announced to the share sink
pub const SNAPSHOT_MIME_TYPE: &str = "application/octet-stream";

/// Human-readable title announced to the share sink
pub const SNAPSHOT_TITLE: &str = "Export Database";

pub const DEFAULT_SNAPSHOT_NAME: &str = "jobTracker-exported.db";

/// What a share sink is asked to do with an exported snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShareRequest<'a> {
    pub path: &'a Path,
    pub mime_type: &'static str,
    pub title: &'static str,
}

/// Destination for exported snapshots (the platform share mechanism).
pub trait ShareSink {
    fn name(&self) -> &str;

    fn share(&self, request: &ShareRequest<'_>) -> io::Result<()>;
}

/// Leaves the snapshot where it was written and announces its location.
#[derive(Debug, Clone, Copy, Default)]
pub struct RevealShare;

impl ShareSink for RevealShare {
    fn name(&self) -> &str {
        "reveal"
    }

    fn share(&self, request: &ShareRequest<'_>) -> io::Result<()> {
        tracing::info!(
            path = %request.path.display(),
            mime_type = request.mime_type,
            title = request.title,
            "Snapshot ready"
        );
        Ok(())
    }
}

/// Copies the snapshot on to another directory, e.g. a synced folder.
#[derive(Debug, Clone)]
pub struct CopyToShare {
    dir: PathBuf,
}

impl CopyToShare {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ShareSink for CopyToShare {
    fn name(&self) -> &str {
        "copy"
    }

    fn share(&self, request: &ShareRequest<'_>) -> io::Result<()> {
        let file_name = request
            .path
            .file_name()
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "snapshot path has no file name"))?;
        fs::create_dir_all(&self.dir)?;
        let target = self.dir.join(file_name);
        fs::copy(request.path, &target)?;
        tracing::info!(target = %target.display(), title = request.title, "Snapshot shared");
        Ok(())
    }
}

/// Where to write the snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    pub dir: PathBuf,
    pub file_name: String,
}

impl ExportOptions {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            file_name: DEFAULT_SNAPSHOT_NAME.to_string(),
        }
    }

    pub fn destination(&self) -> PathBuf {
        self.dir.join(&self.file_name)
    }
}

/// Result of a successful export.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Snapshot {
    pub path: PathBuf,
    pub bytes: u64,
    /// Hex SHA-256 of the written copy
    pub sha256: String,
}

/// Copy `source` to the export destination and hand it to `sink`.
pub fn export_file(source: &Path, options: &ExportOptions, sink: &dyn ShareSink) -> Result<Snapshot> {
    if !source.is_file() {
        return Err(JobtrackError::Export(format!("store file not found: {}", source.display())));
    }

    let destination = options.destination();
    if same_file(source, &destination) {
        return Err(JobtrackError::Export(format!(
            "export destination is the live store: {}",
            destination.display()
        )));
    }

    fs::create_dir_all(&options.dir)
        .map_err(|e| JobtrackError::Export(format!("cannot create {}: {}", options.dir.display(), e)))?;

    let bytes = fs::copy(source, &destination).map_err(|e| {
        JobtrackError::Export(format!(
            "copy {} -> {} failed: {}",
            source.display(),
            destination.display(),
            e
        ))
    })?;

    let sha256 = file_digest(&destination)
        .map_err(|e| JobtrackError::Export(format!("cannot read back {}: {}", destination.display(), e)))?;

    let request = ShareRequest {
        path: &destination,
        mime_type: SNAPSHOT_MIME_TYPE,
        title: SNAPSHOT_TITLE,
    };
    sink.share(&request)
        .map_err(|e| JobtrackError::Export(format!("share via {} failed: {}", sink.name(), e)))?;

    tracing::info!(path = %destination.display(), bytes, sink = sink.name(), "Exported snapshot");

    Ok(Snapshot {
        path: destination,
        bytes,
        sha256,
    })
}

/// Hex SHA-256 of a file's contents.
pub fn file_digest(path: &Path) -> io::Result<String> {
    let mut file = File::open(path)?;
    let mut hasher = Sha256::new();
    io::copy(&mut file, &mut hasher)?;
    Ok(hex::encode(hasher.finalize()))
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
