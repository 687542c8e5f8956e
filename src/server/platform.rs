use std::fmt;

/// Video platforms that get their own submission page.
///
/// The platform only changes labels and the route path; every platform is
/// resolved the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    YouTube,
    TikTok,
    Instagram,
    Facebook,
    Kwai,
}

impl Platform {
    pub const ALL: [Platform; 5] = [
        Platform::YouTube,
        Platform::TikTok,
        Platform::Instagram,
        Platform::Facebook,
        Platform::Kwai,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::YouTube => "YouTube",
            Self::TikTok => "TikTok",
            Self::Instagram => "Instagram",
            Self::Facebook => "Facebook",
            Self::Kwai => "Kwai",
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Self::YouTube => "/youtube",
            Self::TikTok => "/tiktok",
            Self::Instagram => "/instagram",
            Self::Facebook => "/facebook",
            Self::Kwai => "/kwai",
        }
    }

    pub fn tagline(self) -> &'static str {
        match self {
            Self::YouTube => "Preview & download",
            Self::TikTok => "No watermark (when available)",
            Self::Instagram => "Reels & posts",
            Self::Facebook => "Public videos",
            Self::Kwai => "Shorts & clips",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One submitted form, normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformRequest {
    pub platform: Platform,
    pub raw_url: String,
}

impl PlatformRequest {
    /// A missing field is treated as an empty URL; surrounding whitespace is dropped.
    pub fn new(platform: Platform, url: Option<&str>) -> Self {
        Self {
            platform,
            raw_url: url.unwrap_or_default().trim().to_string(),
        }
    }
}
