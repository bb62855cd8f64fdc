// Unit Tests for Report Persistence
//
// UNIT UNDER TEST: save_analysis, sanitize_file_stem, file_timestamp
//
// BUSINESS RESPONSIBILITY:
//   - Creates the report directory on demand
//   - Derives a filesystem-safe, bounded file stem from the test title
//   - Makes each file name unique with a sortable timestamp
//   - Writes the analysis byte-for-byte and returns an absolute path
//
// TEST COVERAGE:
//   - Sanitizing and truncation
//   - Timestamp format
//   - Directory creation, content round trip, absolute path
//   - Repeated saves with the same title
//   - Failed writes leave no file behind

use crate::error::LlmError;
use crate::report::{
    file_timestamp, sanitize_file_stem, save_analysis, write_or_discard, MAX_STEM_LEN,
};
use chrono::{TimeZone, Utc};
use std::io;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::io::AsyncWrite;

fn is_safe_file_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')
}

/// Writer that fails every write, as a full disk would
struct FullDisk;

impl AsyncWrite for FullDisk {
    fn poll_write(
        self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
        _buf: &[u8],
    ) -> Poll<io::Result<usize>> {
        Poll::Ready(Err(io::Error::other("no space left on device")))
    }

    fn poll_flush(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Poll::Ready(Ok(()))
    }

    fn poll_shutdown(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Poll::Ready(Ok(()))
    }
}

#[cfg(test)]
mod naming_tests {
    use super::*;

    #[test]
    fn test_sanitize_replaces_unsafe_characters() {
        assert_eq!(
            sanitize_file_stem("My Test: edge/case"),
            "My_Test__edge_case"
        );
        assert_eq!(sanitize_file_stem("keep-this_one"), "keep-this_one");
        assert_eq!(sanitize_file_stem("naïve ✓"), "na_ve__");
    }

    #[test]
    fn test_sanitize_truncates_to_limit() {
        let title = "a".repeat(200);

        let stem = sanitize_file_stem(&title);

        assert_eq!(stem.len(), MAX_STEM_LEN);
    }

    #[test]
    fn test_timestamp_is_filesystem_safe_and_sortable() {
        let at = Utc
            .with_ymd_and_hms(2026, 10, 17, 8, 30, 5)
            .unwrap()
            + chrono::Duration::milliseconds(123);

        let stamp = file_timestamp(at);

        assert_eq!(stamp, "2026-10-17T08-30-05-123Z");
        assert!(!stamp.contains(':') && !stamp.contains('.'));
    }
}

#[cfg(test)]
mod save_tests {
    use super::*;

    #[tokio::test]
    async fn test_save_creates_directory_and_writes_content() {
        // Arrange
        let root = tempfile::tempdir().unwrap();
        let report_dir = root.path().join("reports").join("llm-analysis");
        assert!(!report_dir.exists());

        // Act
        let path = save_analysis(&report_dir, "My Test: edge/case", "body text")
            .await
            .unwrap();

        // Assert
        assert!(report_dir.is_dir());
        assert!(path.is_absolute());
        assert_eq!(path.parent().unwrap(), report_dir.as_path());

        let file_name = path.file_name().unwrap().to_str().unwrap();
        assert!(file_name.starts_with("My_Test__edge_case-"));
        assert!(file_name.ends_with(".md"));
        assert!(file_name.chars().all(is_safe_file_char), "{file_name}");

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "body text");
    }

    #[tokio::test]
    async fn test_save_round_trips_bytes() {
        let root = tempfile::tempdir().unwrap();
        let analysis = "## Root cause\n\nThe `#submit` button is ✨ hidden ✨\r\n";

        let path = save_analysis(root.path(), "round trip", analysis)
            .await
            .unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), analysis.as_bytes());
    }

    #[tokio::test]
    async fn test_repeated_saves_never_overwrite() {
        let root = tempfile::tempdir().unwrap();

        let first = save_analysis(root.path(), "same title", "one")
            .await
            .unwrap();
        let second = save_analysis(root.path(), "same title", "two")
            .await
            .unwrap();

        assert_ne!(first, second);
        assert_eq!(std::fs::read_to_string(&first).unwrap(), "one");
        assert_eq!(std::fs::read_to_string(&second).unwrap(), "two");
    }

    #[tokio::test]
    async fn test_save_into_existing_directory() {
        let root = tempfile::tempdir().unwrap();

        let path = save_analysis(root.path(), "existing", "").await.unwrap();

        assert_eq!(std::fs::read_to_string(path).unwrap(), "");
    }
}

#[cfg(test)]
mod write_failure_tests {
    use super::*;

    #[tokio::test]
    async fn test_failed_write_removes_created_file() {
        // Arrange
        let root = tempfile::tempdir().unwrap();
        let path = root.path().join("partial.md");
        std::fs::write(&path, "").unwrap();

        // Act
        let result = write_or_discard(&mut FullDisk, &path, "analysis").await;

        // Assert
        assert!(
            matches!(result, Err(LlmError::Io { .. })),
            "Expected Io error, got {:?}",
            result
        );
        assert!(!path.exists(), "incomplete report should be removed");
    }

    #[tokio::test]
    async fn test_successful_write_keeps_file() {
        let root = tempfile::tempdir().unwrap();
        let path = root.path().join("complete.md");
        let mut file = tokio::fs::File::create(&path).await.unwrap();

        write_or_discard(&mut file, &path, "analysis").await.unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "analysis");
    }
}
