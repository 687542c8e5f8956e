mod extractor;
mod types;
mod ytdlp;

pub use extractor::Extractor;
pub use types::{FormatPreference, MediaInfo};
pub use ytdlp::YtDlpExtractor;

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;
use tracing::{info, warn};

/// Extraction attempts in order. The second one is the single retry.
const ATTEMPTS: [FormatPreference; 2] = [FormatPreference::Primary, FormatPreference::Fallback];

/// Turns a page URL into directly playable media.
#[async_trait]
pub trait Resolver: Send + Sync {
    async fn resolve(&self, url: &str) -> Result<MediaInfo>;
}

pub struct MediaResolver {
    extractor: Box<dyn Extractor>,
}

impl MediaResolver {
    pub fn new(extractor: Box<dyn Extractor>) -> Self {
        Self { extractor }
    }

    pub async fn test_setup(&self) -> Result<()> {
        info!("Testing media extractor setup...");

        if self.extractor.test_availability().await {
            Ok(())
        } else {
            Err(anyhow::anyhow!(
                "{} is not available. Please install it or set extractor.binary.",
                self.extractor.name()
            ))
        }
    }

    async fn attempt(&self, url: &str, preference: FormatPreference) -> Result<MediaInfo> {
        let json = self.extractor.extract(url, preference).await?;
        MediaInfo::from_info_json(first_entry(&json))
    }
}

/// Playlists resolve to their first entry. A playlist without entries is
/// used as-is, so its own `url` / `webpage_url` still count.
fn first_entry(json: &Value) -> &Value {
    if json["_type"].as_str() != Some("playlist") {
        return json;
    }

    json["entries"]
        .as_array()
        .and_then(|entries| entries.first())
        .unwrap_or(json)
}

#[async_trait]
impl Resolver for MediaResolver {
    async fn resolve(&self, url: &str) -> Result<MediaInfo> {
        let mut errors = Vec::new();

        for preference in ATTEMPTS {
            match self.attempt(url, preference).await {
                Ok(media) => {
                    info!(
                        "Resolved {} with {} ({} format)",
                        url,
                        self.extractor.name(),
                        preference
                    );
                    return Ok(media);
                }
                Err(e) => {
                    warn!(
                        "{} extraction with {} format failed: {:#}",
                        self.extractor.name(),
                        preference,
                        e
                    );
                    errors.push(format!("{preference}: {e:#}"));
                }
            }
        }

        Err(anyhow::anyhow!(
            "Media resolution failed: {}",
            errors.join(". ")
        ))
    }
}
