use std::path::PathBuf;

use async_trait::async_trait;
use chrono::Utc;
use snafu::{Backtrace, ResultExt, Snafu};
use tracing::info;
use uuid::Uuid;

use crate::io::export::MonthExport;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum SinkError {
    /// Converting the export into the destination format failed.
    #[snafu(display("Data conversion error: {source}"))]
    Conversion {
        source: serde_json::Error,
        backtrace: Backtrace,
    },

    /// An I/O error while creating the directory or writing the file.
    #[snafu(display("I/O error at {}: {source}", path.display()))]
    Io {
        path: PathBuf,
        source: std::io::Error,
        backtrace: Backtrace,
    },
}

#[async_trait]
pub trait DataSink {
    /// The type of output returned after a successful write operation.
    ///
    /// A file sink returns the path it created; an in-memory sink might return
    /// the number of records written.
    type Output;

    /// Writes one exported month to the destination.
    async fn write(&self, data: &MonthExport) -> Result<Self::Output, SinkError>;
}

/// Writes each export as a pretty-printed JSON file in `dir`.
///
/// File names look like `2024-02_20240301120000_<uuid>.json`, so repeated
/// exports of the same month never overwrite each other.
#[derive(Debug, Clone)]
pub struct JsonFileSink {
    dir: PathBuf,
}

impl JsonFileSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// A sink writing to `<temp dir>/market_seasonality`.
    pub fn in_temp_dir() -> Self {
        let mut dir = std::env::temp_dir();
        dir.push("market_seasonality");
        Self::new(dir)
    }

    pub fn dir(&self) -> &PathBuf {
        &self.dir
    }

    fn file_name(&self, data: &MonthExport) -> String {
        let timestamp = Utc::now().format("%Y%m%d%H%M%S");
        format!("{}_{}_{}.json", data.month, timestamp, Uuid::new_v4())
    }
}

#[async_trait]
impl DataSink for JsonFileSink {
    type Output = PathBuf;

    async fn write(&self, data: &MonthExport) -> Result<PathBuf, SinkError> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .context(IoSnafu { path: self.dir.clone() })?;

        let bytes = serde_json::to_vec_pretty(data).context(ConversionSnafu)?;
        let path = self.dir.join(self.file_name(data));
        tokio::fs::write(&path, bytes)
            .await
            .context(IoSnafu { path: path.clone() })?;

        info!(path = %path.display(), days = data.records.len(), "exported month");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::calendar::MonthView;

    #[tokio::test]
    async fn writes_month_as_json() {
        let dir = TempDir::new().unwrap();
        let sink = JsonFileSink::new(dir.path().join("exports"));
        let export = MonthExport::generate(&MonthView::new(2024, 2).unwrap());

        let path = sink.write(&export).await.unwrap();
        assert!(path.starts_with(dir.path().join("exports")));
        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("2024-02_"));
        assert!(name.ends_with(".json"));

        let text = std::fs::read_to_string(&path).unwrap();
        let back: MonthExport = serde_json::from_str(&text).unwrap();
        assert_eq!(back.records.len(), 29);
        assert_eq!(back.title, "February 2024");
        assert_eq!(back.summary.as_ref().unwrap().total_days, 29);

        let raw: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert!(raw["summary"]["priceRange"]["high"].is_number());
        assert!(raw["records"]["29"]["volatility"].is_number());
    }

    #[tokio::test]
    async fn repeated_exports_do_not_collide() {
        let dir = TempDir::new().unwrap();
        let sink = JsonFileSink::new(dir.path());
        let export = MonthExport::generate(&MonthView::new(2025, 1).unwrap());

        let a = sink.write(&export).await.unwrap();
        let b = sink.write(&export).await.unwrap();
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn unwritable_directory_is_an_io_error() {
        let file = tempfile::NamedTempFile::new().unwrap();
        // A regular file cannot be used as the parent directory.
        let sink = JsonFileSink::new(file.path().join("nested"));
        let export = MonthExport::generate(&MonthView::new(2025, 1).unwrap());

        let err = sink.write(&export).await.unwrap_err();
        assert!(matches!(err, SinkError::Io { .. }));
    }
}
