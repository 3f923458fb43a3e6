//! Snapshot file discovery and loading.

use std::path::{Path, PathBuf};

use log::debug;
use serde_json::Value;

use crate::config::{SECTION_SENTIMENT, SNAPSHOT_PREFIX, SNAPSHOT_SUFFIX};
use crate::error_handling::ApiError;
use crate::snapshot::types::SentimentRecord;

/// Handle to the snapshot data directory.
///
/// The store holds no state beyond the directory path: every load re-discovers
/// and re-reads the latest file, so a request always sees the newest snapshot
/// the pipeline has written.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    data_dir: PathBuf,
}

impl SnapshotStore {
    /// Creates a store over the given data directory.
    ///
    /// The directory does not have to exist; a missing directory simply means
    /// there is no snapshot yet.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// The directory this store reads from.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Returns the path of the latest snapshot.
    ///
    /// "Latest" is the lexicographically greatest filename matching
    /// `processed_data_*.json`. The timestamp suffix the pipeline uses sorts
    /// lexicographically in time order, and deployments rely on exactly this
    /// selection rule.
    pub async fn latest_path(&self) -> Option<PathBuf> {
        let mut entries = match tokio::fs::read_dir(&self.data_dir).await {
            Ok(entries) => entries,
            Err(e) => {
                debug!(
                    "snapshot directory {} not readable: {}",
                    self.data_dir.display(),
                    e
                );
                return None;
            }
        };

        let mut latest: Option<String> = None;
        while let Ok(Some(entry)) = entries.next_entry().await {
            let name = entry.file_name();
            let Some(name) = name.to_str() else { continue };
            if !name.starts_with(SNAPSHOT_PREFIX) || !name.ends_with(SNAPSHOT_SUFFIX) {
                continue;
            }
            if latest.as_deref().map_or(true, |current| name > current) {
                latest = Some(name.to_string());
            }
        }

        latest.map(|name| self.data_dir.join(name))
    }

    /// Loads and parses the latest snapshot.
    ///
    /// Returns `Ok(None)` when no snapshot file exists; callers answer with
    /// an empty result set. Read and parse failures are surfaced as errors.
    pub async fn load_latest(&self) -> Result<Option<Snapshot>, ApiError> {
        let Some(path) = self.latest_path().await else {
            return Ok(None);
        };

        let contents = tokio::fs::read_to_string(&path).await.map_err(|source| {
            ApiError::SnapshotRead {
                path: path.clone(),
                source,
            }
        })?;
        let document = serde_json::from_str(&contents).map_err(|source| {
            ApiError::SnapshotParse {
                path: path.clone(),
                source,
            }
        })?;

        debug!("loaded snapshot {}", path.display());
        Ok(Some(Snapshot { document }))
    }
}

/// One parsed snapshot document.
#[derive(Debug, Clone)]
pub struct Snapshot {
    document: Value,
}

impl Snapshot {
    /// Returns the records under a section key.
    ///
    /// A missing section, or one that is not an array, yields the empty
    /// vector. The snapshot format is best-effort.
    pub fn section(&self, key: &str) -> Vec<Value> {
        self.document
            .get(key)
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default()
    }

    /// Decodes the `sentiment` section into typed records.
    pub fn sentiment_records(&self) -> Vec<SentimentRecord> {
        self.section(SECTION_SENTIMENT)
            .iter()
            .map(SentimentRecord::from_value)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, contents: &str) {
        std::fs::write(dir.path().join(name), contents).expect("failed to write test file");
    }

    #[test]
    fn test_data_dir_reports_configured_directory() {
        let store = SnapshotStore::new("data");
        assert_eq!(store.data_dir(), Path::new("data"));
    }

    #[tokio::test]
    async fn test_latest_path_picks_lexicographic_max() {
        let dir = TempDir::new().unwrap();
        write_file(&dir, "processed_data_20240101_120000.json", "{}");
        write_file(&dir, "processed_data_20240315_090000.json", "{}");
        write_file(&dir, "processed_data_20240102_230000.json", "{}");

        let store = SnapshotStore::new(dir.path());
        let latest = store.latest_path().await.expect("a snapshot exists");
        assert_eq!(
            latest.file_name().unwrap().to_str().unwrap(),
            "processed_data_20240315_090000.json"
        );
    }

    #[tokio::test]
    async fn test_latest_path_is_lexicographic_not_numeric() {
        // "9" sorts after "10" by byte order. That is the documented (and
        // deployed) selection rule for zero-unpadded suffixes, so it must not
        // be "fixed" into a numeric comparison.
        let dir = TempDir::new().unwrap();
        write_file(&dir, "processed_data_9.json", "{}");
        write_file(&dir, "processed_data_10.json", "{}");

        let store = SnapshotStore::new(dir.path());
        let latest = store.latest_path().await.unwrap();
        assert_eq!(
            latest.file_name().unwrap().to_str().unwrap(),
            "processed_data_9.json"
        );
    }

    #[tokio::test]
    async fn test_latest_path_ignores_non_matching_names() {
        let dir = TempDir::new().unwrap();
        write_file(&dir, "processed_data_20240101.json.bak", "{}");
        write_file(&dir, "raw_data_20249999.json", "{}");
        write_file(&dir, "notes.txt", "");
        write_file(&dir, "processed_data_20240101.json", "{}");

        let store = SnapshotStore::new(dir.path());
        let latest = store.latest_path().await.unwrap();
        assert_eq!(
            latest.file_name().unwrap().to_str().unwrap(),
            "processed_data_20240101.json"
        );
    }

    #[tokio::test]
    async fn test_latest_path_missing_directory() {
        let store = SnapshotStore::new("/nonexistent/trend_api_test_data");
        assert!(store.latest_path().await.is_none());
    }

    #[tokio::test]
    async fn test_latest_path_empty_directory() {
        let dir = TempDir::new().unwrap();
        let store = SnapshotStore::new(dir.path());
        assert!(store.latest_path().await.is_none());
    }

    #[tokio::test]
    async fn test_load_latest_no_snapshot_is_not_an_error() {
        let store = SnapshotStore::new("/nonexistent/trend_api_test_data");
        let snapshot = store.load_latest().await.expect("missing dir is fine");
        assert!(snapshot.is_none());
    }

    #[tokio::test]
    async fn test_load_latest_parses_sections() {
        let dir = TempDir::new().unwrap();
        write_file(
            &dir,
            "processed_data_20240101.json",
            r#"{"sentiment": [{"region": "Tokyo", "sentiment": 0.4}], "temporal": []}"#,
        );

        let store = SnapshotStore::new(dir.path());
        let snapshot = store.load_latest().await.unwrap().expect("snapshot loads");

        assert_eq!(snapshot.section("sentiment").len(), 1);
        assert_eq!(snapshot.section("temporal").len(), 0);
        // Missing key means the empty section, not an error
        assert_eq!(snapshot.section("popularity").len(), 0);
    }

    #[tokio::test]
    async fn test_load_latest_malformed_json_is_an_error() {
        let dir = TempDir::new().unwrap();
        write_file(&dir, "processed_data_20240101.json", "{not json");

        let store = SnapshotStore::new(dir.path());
        let err = store.load_latest().await.expect_err("parse should fail");
        assert!(matches!(err, ApiError::SnapshotParse { .. }));
    }

    #[tokio::test]
    async fn test_section_non_array_yields_empty() {
        let snapshot = Snapshot {
            document: json!({ "sentiment": { "oops": true } }),
        };
        assert!(snapshot.section("sentiment").is_empty());
    }

    #[tokio::test]
    async fn test_sentiment_records_tolerates_mixed_array() {
        let snapshot = Snapshot {
            document: json!({
                "sentiment": [
                    { "region": "Tokyo", "sentiment": 0.4 },
                    { "sentiment": "0.2" },
                    "garbage"
                ]
            }),
        };
        let records = snapshot.sentiment_records();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].region.as_deref(), Some("Tokyo"));
        assert_eq!(records[1].sentiment, 0.2);
        assert_eq!(records[2], SentimentRecord::default());
    }
}
