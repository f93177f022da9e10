use super::client::WeatherSource;
use super::request::{Endpoint, EndpointRequest, Location};
use crate::error::SourceError;
use crate::readings::WeatherSnapshot;
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tokio::sync::OnceCell;
use tracing::debug;

/// A [`WeatherSource`] backed by a JSON snapshot on disk.
///
/// The file holds the responses a live source would return:
/// ```json
/// {
///   "captured_at": "2026-10-14T16:00:00Z",
///   "observations": [{ "id": "KFLG", "ob": { "windMPH": 5, "precipIN": 0 } }],
///   "airquality": [{ "periods": [{ "aqi": 32 }] }],
///   "indices": { "indices/golf": [{ "indice": { "current": { "index": 4 } } }] }
/// }
/// ```
/// The snapshot is served for any location. The file is read once, on first
/// use, and every later request is answered from that read.
pub struct FileSource {
    path: PathBuf,
    document: OnceCell<Value>,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            document: OnceCell::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn document(&self) -> Result<&Value> {
        self.document
            .get_or_try_init(|| async {
                let content = tokio::fs::read_to_string(&self.path)
                    .await
                    .with_context(|| format!("failed to read snapshot {}", self.path.display()))?;
                let document: Value = serde_json::from_str(&content).with_context(|| {
                    format!("snapshot {} is not valid JSON", self.path.display())
                })?;
                debug!(path = %self.path.display(), "Snapshot loaded");
                Ok::<_, anyhow::Error>(document)
            })
            .await
    }
}

#[async_trait]
impl WeatherSource for FileSource {
    async fn request(&self, req: &EndpointRequest) -> Result<Value> {
        let document = self.document().await?;

        debug!(
            path = %self.path.display(),
            endpoint = %req.endpoint,
            location = %req.location,
            "Serving endpoint from snapshot"
        );

        let value = match &req.endpoint {
            Endpoint::Observations => document
                .get("observations")
                .cloned()
                .unwrap_or_else(|| Value::Array(Vec::new())),
            Endpoint::AirQuality => document
                .get("airquality")
                .cloned()
                .unwrap_or_else(|| Value::Array(Vec::new())),
            Endpoint::Custom(path) => document
                .get("indices")
                .and_then(|indices| indices.get(path.as_str()))
                .cloned()
                .ok_or_else(|| SourceError::UnknownEndpoint(path.clone()))?,
        };

        Ok(value)
    }

    /// The recorded snapshot, keeping its own `captured_at` and `indices`.
    async fn snapshot(&self, location: &Location) -> Result<WeatherSnapshot> {
        let document = self.document().await?;
        debug!(path = %self.path.display(), location = %location, "Serving snapshot");

        serde_json::from_value(document.clone())
            .with_context(|| format!("snapshot {} is malformed", self.path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn scratch_file(name: &str, content: &Value) -> PathBuf {
        let path = std::env::temp_dir().join(format!("{}_{name}", std::process::id()));
        std::fs::write(&path, content.to_string()).unwrap();
        path
    }

    #[tokio::test]
    async fn test_file_is_read_once() {
        let path = scratch_file(
            "read_once.json",
            &json!({
                "captured_at": "2026-10-14T16:00:00Z",
                "observations": [{ "id": "KFLG", "ob": { "windMPH": 3 } }],
                "indices": { "indices/golf": [{ "indice": { "current": { "index": 4 } } }] }
            }),
        );
        let source = FileSource::new(&path);
        let location = Location::postal_code("86001").unwrap();

        let first = source.snapshot(&location).await.unwrap();
        std::fs::write(&path, json!({ "observations": [] }).to_string()).unwrap();

        let again = source.snapshot(&location).await.unwrap();
        let golf = source
            .request(&EndpointRequest::new(
                Endpoint::Custom("indices/golf".to_string()),
                &location,
            ))
            .await
            .unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(again, first);
        assert_eq!(again.observations.len(), 1);
        assert_eq!(golf, json!([{ "indice": { "current": { "index": 4 } } }]));
    }

    #[tokio::test]
    async fn test_missing_sections_are_empty() {
        let path = scratch_file("sections.json", &json!({}));
        let source = FileSource::new(&path);
        let location = Location::postal_code("86001").unwrap();

        let observations = source
            .request(&EndpointRequest::new(Endpoint::Observations, &location))
            .await
            .unwrap();
        let snapshot = source.snapshot(&location).await.unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(observations, json!([]));
        assert_eq!(snapshot.captured_at, None);
        assert!(snapshot.air_quality.is_empty());
    }
}
