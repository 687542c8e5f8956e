use super::types::FormatPreference;
use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Third-party media extraction backend.
#[async_trait]
pub trait Extractor: Send + Sync {
    /// Human-readable name of the extractor
    fn name(&self) -> &'static str;

    /// Fetch the raw info document for `url` without downloading any media
    async fn extract(&self, url: &str, preference: FormatPreference) -> Result<Value>;

    /// Check whether the backend can be invoked on this system
    async fn test_availability(&self) -> bool;
}
