//! Persisting failure analyses as Markdown reports
//!
//! Reports land in `<dir>/<stem>-<timestamp>.md`, where the stem is the
//! sanitized test title and the timestamp is an ISO-8601 UTC instant with
//! `:` and `.` replaced by `-`.

use crate::error::{LlmError, LlmResult};
use crate::logging::{log_info, log_warn};
use chrono::{DateTime, Utc};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::io::{AsyncWrite, AsyncWriteExt};

/// Maximum number of characters kept from the test title
pub const MAX_STEM_LEN: usize = 80;

/// Replace every character outside `[A-Za-z0-9_-]` with `_` and truncate
pub fn sanitize_file_stem(title: &str) -> String {
    title
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .take(MAX_STEM_LEN)
        .collect()
}

/// Sortable, filesystem-safe timestamp such as `2026-10-17T08-30-05-123Z`
pub fn file_timestamp(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%dT%H:%M:%S%.3fZ")
        .to_string()
        .replace([':', '.'], "-")
}

/// Write `analysis` to a new report file under `report_dir`
///
/// The directory is created (with parents) when missing. The returned path
/// is absolute. If a file with the same stem and timestamp already exists a
/// numeric suffix is appended, so concurrent saves never overwrite each other.
///
/// # Errors
///
/// Returns [`LlmError::Io`] if the directory cannot be created or the file
/// cannot be written.
pub async fn save_analysis(
    report_dir: impl AsRef<Path>,
    test_title: &str,
    analysis: &str,
) -> LlmResult<PathBuf> {
    let dir = absolute_dir(report_dir.as_ref())?;
    if let Err(e) = tokio::fs::create_dir_all(&dir).await {
        let message = format!("cannot create report directory {}", dir.display());
        return Err(LlmError::io(message, e));
    }

    let base_name = format!(
        "{}-{}",
        sanitize_file_stem(test_title),
        file_timestamp(Utc::now())
    );

    let mut attempt = 0u32;
    loop {
        let file_name = if attempt == 0 {
            format!("{base_name}.md")
        } else {
            format!("{base_name}-{attempt}.md")
        };
        let path = dir.join(file_name);

        match tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
        {
            Ok(mut file) => {
                write_or_discard(&mut file, &path, analysis).await?;
                log_info!(
                    path = %path.display(),
                    bytes = analysis.len(),
                    "Failure analysis saved"
                );
                return Ok(path);
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => attempt += 1,
            Err(e) => {
                return Err(LlmError::io(
                    format!("cannot create report file {}", path.display()),
                    e,
                ))
            }
        }
    }
}

/// Write the report body, removing the file at `path` if the write fails
pub(crate) async fn write_or_discard<W>(
    file: &mut W,
    path: &Path,
    analysis: &str,
) -> LlmResult<()>
where
    W: AsyncWrite + Unpin,
{
    let result = write_all(file, path, analysis).await;
    if result.is_err() {
        if let Err(e) = tokio::fs::remove_file(path).await {
            log_warn!(
                path = %path.display(),
                error = %e,
                "Could not remove incomplete report"
            );
        }
    }
    result
}

async fn write_all<W>(file: &mut W, path: &Path, analysis: &str) -> LlmResult<()>
where
    W: AsyncWrite + Unpin,
{
    let name = path.display();
    file.write_all(analysis.as_bytes())
        .await
        .map_err(|e| LlmError::io(format!("cannot write report {name}"), e))?;
    file.flush()
        .await
        .map_err(|e| LlmError::io(format!("cannot flush report {name}"), e))
}

fn absolute_dir(dir: &Path) -> LlmResult<PathBuf> {
    if dir.is_absolute() {
        return Ok(dir.to_path_buf());
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(dir))
        .map_err(|e| LlmError::io("cannot resolve current directory", e))
}
