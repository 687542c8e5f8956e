use crate::utils::has_http_scheme;
use anyhow::Result;
use serde_json::Value;
use std::fmt;

/// Which format selector an extraction attempt asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatPreference {
    /// Best single-file MP4
    Primary,
    /// Anything playable, including HLS and merged formats
    Fallback,
}

impl fmt::Display for FormatPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primary => write!(f, "primary"),
            Self::Fallback => write!(f, "fallback"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MediaInfo {
    pub title: String,
    pub extension: String,
    pub direct_url: String,
    pub thumbnail_url: Option<String>,
    pub file_size_bytes: Option<u64>,
    pub is_streaming_format: bool,
}

impl MediaInfo {
    /// Builds a `MediaInfo` from a single (non-playlist) yt-dlp info document.
    pub fn from_info_json(json: &Value) -> Result<Self> {
        let direct_url = json["url"]
            .as_str()
            .filter(|s| !s.is_empty())
            .or(json["webpage_url"].as_str().filter(|s| !s.is_empty()))
            .ok_or_else(|| anyhow::anyhow!("No media URL in extractor output"))?
            .to_string();

        if !has_http_scheme(&direct_url) {
            return Err(anyhow::anyhow!(
                "Extractor returned a non-HTTP media URL: {}",
                direct_url
            ));
        }

        let is_streaming_format = json["protocol"]
            .as_str()
            .is_some_and(|p| p.contains("m3u8"))
            || direct_url.contains(".m3u8");

        Ok(Self {
            title: json["title"]
                .as_str()
                .filter(|s| !s.is_empty())
                .unwrap_or("video")
                .to_string(),
            extension: json["ext"]
                .as_str()
                .filter(|s| !s.is_empty())
                .unwrap_or("mp4")
                .to_string(),
            thumbnail_url: json["thumbnail"]
                .as_str()
                .filter(|s| has_http_scheme(s))
                .map(|s| s.to_string()),
            file_size_bytes: json["filesize"]
                .as_u64()
                .or(json["filesize_approx"].as_u64())
                .or(json["filesize_approx"].as_f64().map(|s| s as u64)),
            direct_url,
            is_streaming_format,
        })
    }
}
