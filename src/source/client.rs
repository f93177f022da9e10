use super::request::{EndpointRequest, Location};
use crate::readings::WeatherSnapshot;
use async_trait::async_trait;

/// Provider of raw weather responses, one endpoint per request.
#[async_trait]
pub trait WeatherSource: Send + Sync {
    async fn request(&self, req: &EndpointRequest) -> anyhow::Result<serde_json::Value>;

    /// Everything needed to score `location`.
    ///
    /// The default requests observations and air quality and stamps the
    /// result with the current time. Sources holding a recorded snapshot
    /// return it as recorded.
    async fn snapshot(&self, location: &Location) -> anyhow::Result<WeatherSnapshot> {
        super::snapshot_from_endpoints(self, location).await
    }
}
