//! Input resolution
//!
//! Everything that touches the filesystem on behalf of an audit lives here:
//! reading the document, probing for build artifacts and figure
//! directories, and resolving request paths inside a project root. The
//! engine itself only ever sees a [`Document`] and [`AuditHints`].

use crate::config::ArtifactsConfig;
use crate::error::{AuditError, AuditResult};
use crate::models::{AuditHints, Document};
use std::fs;
use std::path::{Component, Path, PathBuf};
use std::time::SystemTime;
use tracing::debug;

/// Read a document from disk.
///
/// Missing paths, directories and non-UTF-8 content are input errors.
pub fn load_document(path: &Path) -> AuditResult<Document> {
    load_document_as(path, path.display().to_string())
}

/// Read a document from disk, reporting it under `name` instead of its
/// filesystem path (the HTTP API echoes the request's relative path).
pub fn load_document_as(path: &Path, name: impl Into<String>) -> AuditResult<Document> {
    let name: String = name.into();

    let metadata = fs::metadata(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => AuditError::not_found(&name),
        _ => AuditError::input(&name, e.to_string()),
    })?;
    if metadata.is_dir() {
        return Err(AuditError::input(&name, "path is a directory"));
    }

    let bytes = fs::read(path).map_err(|e| AuditError::input(&name, e.to_string()))?;
    let text = String::from_utf8(bytes)
        .map_err(|_| AuditError::input(&name, "document is not valid UTF-8"))?;

    debug!("Loaded {} ({} bytes)", name, text.len());
    Ok(Document::new(name, text))
}

/// Probe the filesystem around a document for build and figure hints.
///
/// The artifact is `<stem>.pdf` in the first configured output directory
/// (relative to the document's directory) that contains one.
pub fn probe_hints(path: &Path, artifacts: &ArtifactsConfig) -> AuditHints {
    let dir = path.parent().unwrap_or(Path::new("."));

    let figures_directory_exists = artifacts
        .figure_dirs
        .iter()
        .any(|name| dir.join(name).is_dir());

    let artifact = path.file_stem().and_then(|stem| {
        let pdf_name = Path::new(stem).with_extension("pdf");
        artifacts
            .output_dirs
            .iter()
            .map(|out| dir.join(out).join(&pdf_name))
            .find(|candidate| candidate.is_file())
    });

    let hints = match artifact {
        Some(pdf) => AuditHints {
            artifact_exists: true,
            artifact_older_than_source: is_newer(path, &pdf),
            figures_directory_exists,
        },
        None => AuditHints {
            figures_directory_exists,
            ..Default::default()
        },
    };

    debug!(
        path = %path.display(),
        artifact_exists = hints.artifact_exists,
        stale = hints.artifact_older_than_source,
        figures = hints.figures_directory_exists,
        "probed hints"
    );
    hints
}

fn modified(path: &Path) -> Option<SystemTime> {
    fs::metadata(path).and_then(|m| m.modified()).ok()
}

/// Whether `source` was modified after `artifact`
fn is_newer(source: &Path, artifact: &Path) -> bool {
    match (modified(source), modified(artifact)) {
        (Some(src), Some(pdf)) => src > pdf,
        _ => false,
    }
}

/// Join a request path onto a project root.
///
/// Absolute paths and any `..` component are rejected so requests cannot
/// escape the root.
pub fn resolve_within(root: &Path, relative: &str) -> AuditResult<PathBuf> {
    let trimmed = relative.trim();
    if trimmed.is_empty() {
        return Err(AuditError::input(relative, "empty file path"));
    }

    let candidate = Path::new(trimmed);
    for component in candidate.components() {
        match component {
            Component::Normal(_) | Component::CurDir => {}
            Component::ParentDir => {
                return Err(AuditError::input(relative, "path escapes the project root"));
            }
            Component::RootDir | Component::Prefix(_) => {
                return Err(AuditError::input(relative, "absolute paths are not allowed"));
            }
        }
    }

    Ok(root.join(candidate))
}
