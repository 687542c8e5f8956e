//! HTML pages. Everything interpolated through `maud` is escaped; raw markup is
//! limited to the static stylesheet and script below.

use super::platform::Platform;
use crate::media::MediaInfo;
use crate::utils::{format_number, sanitize_filename};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use maud::{html, Markup, PreEscaped, DOCTYPE};

pub const INVALID_URL_MESSAGE: &str =
    "Please provide a valid link that starts with http:// or https:// and does not point to an internal address.";

pub const RESOLVE_FAILED_MESSAGE: &str =
    "Could not extract the video. It may be private or the link is not supported right now.";

pub const NOT_FOUND_MESSAGE: &str = "This page does not exist.";

pub const STREAMING_NOTICE: &str =
    "Note: this video is delivered as an HLS stream and may not save as a single MP4 file from the download button.";

const STYLE: &str = r#"
:root{--bg:#0b1020;--card:#131a2e;--muted:#94a3b8;--txt:#e5e7eb;--brand:#7c3aed;--brand2:#06b6d4;--danger:#ef4444}
*{box-sizing:border-box}
body{margin:0;font-family:system-ui,-apple-system,Segoe UI,Roboto,Arial;color:var(--txt);
  background:radial-gradient(1200px 800px at 10% 10%,#0f172a,transparent),
          radial-gradient(1200px 800px at 90% 0%,#111827,transparent),var(--bg)}
a{text-decoration:none;color:inherit}
.container{max-width:980px;margin:0 auto;padding:24px}
.header{display:flex;align-items:center;justify-content:space-between;padding:12px 0}
.logo{display:flex;align-items:center;gap:10px;font-weight:800}
.logo i{width:12px;height:12px;border-radius:2px;background:linear-gradient(90deg,var(--brand),var(--brand2))}
.hero{text-align:center;padding:40px 0}
.grid{display:grid;gap:16px}
@media(min-width:720px){.grid{grid-template-columns:repeat(3,1fr)}}
.card{background:linear-gradient(180deg,#151b31,#0f1426);border:1px solid #1f2a44;border-radius:16px;
  padding:18px;text-align:center;box-shadow:0 10px 25px rgba(0,0,0,.25)}
.card h3{margin:8px 0 4px;font-size:18px}
.card p{margin:0 0 12px;color:var(--muted);font-size:13px}
.btn{display:inline-block;padding:10px 14px;border-radius:12px;background:linear-gradient(90deg,var(--brand),var(--brand2));
  border:none;color:white;font-weight:700;cursor:pointer;transition:.2s}
.btn:hover{transform:translateY(-1px)}
.back{background:#333;margin-top:16px}
.video-preview{margin-top:20px;text-align:center}
.thumb{max-width:260px;border-radius:12px;display:block;margin:0 auto 12px;opacity:.9}
video{width:100%;max-width:720px;border-radius:12px;margin-top:10px;outline:none}
input{width:90%;max-width:520px;padding:10px;border-radius:10px;border:1px solid #334155;
  background:#0b1226;color:white;margin-bottom:16px}
form{margin-top:24px;text-align:center}
.sub{color:var(--muted)}
.actions{text-align:center;margin-top:14px}
.footer{margin-top:40px;text-align:center;color:#7c8aa0;font-size:12px}
h1{font-size:2rem;margin-bottom:0}
.error-title{color:var(--danger)}
.notice{margin-top:12px;color:#9ca3af;font-size:12px;text-align:center}
.loading{margin-top:8px;text-align:center}
"#;

const LOADING_SCRIPT: &str = "document.addEventListener('submit',()=>{let d=document.createElement('div');d.className='loading';d.textContent='⏳ Fetching video...';document.querySelector('form')?.after(d);});";

fn layout(site_name: &str, title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                meta name="description" content=(format!("{site_name} - All-in-one Video Downloader"));
                title { (title) }
                style { (PreEscaped(STYLE)) }
            }
            body {
                div.container {
                    div.header {
                        a.logo href="/" { i {} (site_name) }
                    }
                    (content)
                }
            }
        }
    }
}

pub fn home_page(site_name: &str) -> Markup {
    layout(
        site_name,
        site_name,
        html! {
            div.hero {
                h1 { "🎬 " (site_name) }
                p.sub { "All-in-one Video Downloader" }
            }
            div.grid {
                @for platform in Platform::ALL {
                    div.card {
                        h3 { (platform.label()) }
                        p { (platform.tagline()) }
                        a.btn href=(platform.path()) { "Open" }
                    }
                }
            }
            div.footer { "© " (site_name) }
            script { (PreEscaped(LOADING_SCRIPT)) }
        },
    )
}

pub fn form_page(site_name: &str, platform: Platform) -> Markup {
    let label = platform.label();

    layout(
        site_name,
        label,
        html! {
            h1 { (label) " Downloader" }
            p.sub { "Paste a " (label) " link to preview and download the video." }
            form method="post" action=(platform.path()) {
                input type="text" name="url" placeholder=(format!("Paste a {label} link here")) required;
                br;
                button.btn type="submit" { "Get Video" }
            }
            a.btn.back href="/" { "Back Home" }
            script { (PreEscaped(LOADING_SCRIPT)) }
        },
    )
}

pub fn preview_page(site_name: &str, platform: Platform, media: &MediaInfo) -> Markup {
    let download_name = format!(
        "{}.{}",
        sanitize_filename(&media.title),
        sanitize_filename(&media.extension)
    );

    layout(
        site_name,
        &format!("{} Preview", platform.label()),
        html! {
            h1 { (platform.label()) " Preview" }
            p.sub { (media.title) }
            @if let Some(thumbnail) = &media.thumbnail_url {
                img.thumb src=(thumbnail) alt="";
            }
            div.video-preview {
                video controls preload="metadata" src=(media.direct_url) {}
            }
            @if media.is_streaming_format {
                div.notice { (STREAMING_NOTICE) }
            }
            div.actions {
                a.btn href=(media.direct_url) download=(download_name) { "Download Now" }
            }
            @if let Some(size) = media.file_size_bytes {
                div.notice { "Size: " (format_number(size)) " bytes" }
            }
            a.btn.back href="/" { "Back Home" }
        },
    )
}

/// Fixed-layout error document served with `status`.
pub struct ErrorPage<'a> {
    pub site_name: &'a str,
    pub title: &'a str,
    pub message: &'a str,
    pub back_url: &'a str,
    pub status: StatusCode,
}

impl ErrorPage<'_> {
    pub fn render(&self) -> Markup {
        layout(
            self.site_name,
            &format!("{} Error", self.title),
            html! {
                h1.error-title { "❌ Error" }
                h2.sub { (self.message) }
                a.btn.back href=(self.back_url) { "Go Back" }
            },
        )
    }
}

impl IntoResponse for ErrorPage<'_> {
    fn into_response(self) -> Response {
        (self.status, self.render()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_media() -> MediaInfo {
        MediaInfo {
            title: "Bad/Name:Test*1".to_string(),
            extension: "mp4".to_string(),
            direct_url: "https://cdn.example.com/v.mp4?a=1&b=2".to_string(),
            thumbnail_url: Some("https://cdn.example.com/t.jpg".to_string()),
            file_size_bytes: Some(1234567),
            is_streaming_format: false,
        }
    }

    #[test]
    fn test_home_links_every_platform() {
        let html = home_page("SaveHub").into_string();
        for platform in Platform::ALL {
            assert!(html.contains(&format!("href=\"{}\"", platform.path())));
            assert!(html.contains(platform.tagline().replace('&', "&amp;").as_str()));
        }
        assert!(html.starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn test_form_page() {
        let html = form_page("SaveHub", Platform::TikTok).into_string();
        assert!(html.contains("TikTok Downloader"));
        assert!(html.contains("action=\"/tiktok\""));
        assert!(html.contains("name=\"url\""));
    }

    #[test]
    fn test_preview_page() {
        let html = preview_page("SaveHub", Platform::YouTube, &sample_media()).into_string();
        assert!(html.contains("YouTube Preview"));
        assert!(html.contains("src=\"https://cdn.example.com/v.mp4?a=1&amp;b=2\""));
        assert!(html.contains("download=\"Bad_Name_Test_1.mp4\""));
        assert!(html.contains("1,234,567 bytes"));
        assert!(html.contains("class=\"thumb\""));
        assert!(!html.contains(STREAMING_NOTICE));
    }

    #[test]
    fn test_preview_page_streaming_notice() {
        let media = MediaInfo {
            is_streaming_format: true,
            thumbnail_url: None,
            file_size_bytes: None,
            ..sample_media()
        };
        let html = preview_page("SaveHub", Platform::Kwai, &media).into_string();
        assert!(html.contains(STREAMING_NOTICE));
        assert!(html.contains("Download Now"));
        assert!(!html.contains("class=\"thumb\""));
        assert!(!html.contains(" bytes"));
    }

    #[test]
    fn test_preview_escapes_title() {
        let media = MediaInfo {
            title: "<script>alert('x')</script>".to_string(),
            ..sample_media()
        };
        let html = preview_page("SaveHub", Platform::Facebook, &media).into_string();
        assert!(html.contains("&lt;script&gt;alert('x')&lt;/script&gt;"));
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("download=\"_script_alert__x____script_.mp4\""));
    }

    #[test]
    fn test_error_page() {
        let page = ErrorPage {
            site_name: "SaveHub",
            title: "Instagram",
            message: "<b>boom</b>",
            back_url: "/instagram",
            status: StatusCode::BAD_GATEWAY,
        };
        let html = page.render().into_string();
        assert!(html.contains("Instagram Error"));
        assert!(html.contains("&lt;b&gt;boom&lt;/b&gt;"));
        assert!(html.contains("href=\"/instagram\""));

        let response = page.into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
