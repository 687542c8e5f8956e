use super::{extractor::Extractor, types::FormatPreference};
use crate::config::ExtractorConfig;
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use tokio::process::Command;
use tracing::{debug, info, warn};

pub struct YtDlpExtractor {
    config: ExtractorConfig,
}

impl YtDlpExtractor {
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    fn format_for(&self, preference: FormatPreference) -> &str {
        match preference {
            FormatPreference::Primary => &self.config.primary_format,
            FormatPreference::Fallback => &self.config.fallback_format,
        }
    }

    fn build_args(&self, url: &str, preference: FormatPreference) -> Vec<String> {
        vec![
            "--dump-single-json".to_string(),
            "--no-playlist".to_string(),
            "--no-warnings".to_string(),
            "--socket-timeout".to_string(),
            self.config.socket_timeout_secs.to_string(),
            "--format".to_string(),
            self.format_for(preference).to_string(),
            "--".to_string(),
            url.to_string(),
        ]
    }
}

#[async_trait]
impl Extractor for YtDlpExtractor {
    fn name(&self) -> &'static str {
        "yt-dlp"
    }

    async fn extract(&self, url: &str, preference: FormatPreference) -> Result<Value> {
        debug!(
            "Extracting media info with yt-dlp ({} format) for: {}",
            preference, url
        );

        let output = tokio::time::timeout(
            Duration::from_secs(self.config.command_timeout_secs),
            Command::new(&self.config.binary)
                .args(self.build_args(url, preference))
                .kill_on_drop(true)
                .output(),
        )
        .await
        .context("Media info extraction timed out")?
        .with_context(|| format!("Failed to run {}", self.config.binary))?;

        if !output.status.success() {
            let error = String::from_utf8_lossy(&output.stderr);
            return Err(anyhow::anyhow!(
                "Media info extraction failed ({}): {}",
                output.status,
                error.trim()
            ));
        }

        serde_json::from_slice(&output.stdout).context("Failed to parse media info")
    }

    async fn test_availability(&self) -> bool {
        let result = tokio::time::timeout(
            Duration::from_secs(self.config.command_timeout_secs),
            Command::new(&self.config.binary)
                .arg("--version")
                .kill_on_drop(true)
                .output(),
        )
        .await;

        match result {
            Err(_) => {
                warn!(
                    "❌ {} --version did not finish within {}s",
                    self.config.binary, self.config.command_timeout_secs
                );
                false
            }
            Ok(Ok(output)) if output.status.success() => {
                let version = String::from_utf8_lossy(&output.stdout);
                info!("✅ yt-dlp is available, version: {}", version.trim());
                true
            }
            Ok(Ok(_)) => {
                warn!("❌ yt-dlp command failed");
                false
            }
            Ok(Err(e)) => {
                warn!("❌ yt-dlp not found ({}): {}", self.config.binary, e);
                false
            }
        }
    }
}
