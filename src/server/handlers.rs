use super::{
    pages::{self, ErrorPage},
    platform::{Platform, PlatformRequest},
    AppState,
};
use crate::utils::is_valid_http_url;
use axum::{
    extract::{rejection::FormRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Form,
};
use maud::Markup;
use serde::Deserialize;
use tracing::{debug, error, info};

#[derive(Debug, Deserialize, Default)]
pub struct UrlForm {
    pub url: Option<String>,
}

/// A body that is not a readable urlencoded form (no content type, multipart,
/// repeated keys) counts as a submission without a URL.
pub fn form_or_empty(form: Result<Form<UrlForm>, FormRejection>) -> UrlForm {
    match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            debug!("Unreadable form body: {}", rejection.body_text());
            UrlForm::default()
        }
    }
}

pub async fn home(State(state): State<AppState>) -> Markup {
    pages::home_page(&state.config.server.site_name)
}

pub async fn show_form(state: AppState, platform: Platform) -> Markup {
    pages::form_page(&state.config.server.site_name, platform)
}

/// Validate, resolve, render. Validation and resolution failures become
/// 400 and 502 pages that link back to the platform form.
pub async fn submit_url(state: AppState, platform: Platform, form: UrlForm) -> Response {
    let request = PlatformRequest::new(platform, form.url.as_deref());
    let site_name = state.config.server.site_name.as_str();

    if !is_valid_http_url(&request.raw_url) {
        info!("{} rejected URL {:?}", platform, request.raw_url);
        return ErrorPage {
            site_name,
            title: platform.label(),
            message: pages::INVALID_URL_MESSAGE,
            back_url: platform.path(),
            status: StatusCode::BAD_REQUEST,
        }
        .into_response();
    }

    match state.resolver.resolve(&request.raw_url).await {
        Ok(media) => pages::preview_page(site_name, platform, &media).into_response(),
        Err(e) => {
            error!("{} error for URL {}: {:#}", platform, request.raw_url, e);
            ErrorPage {
                site_name,
                title: platform.label(),
                message: pages::RESOLVE_FAILED_MESSAGE,
                back_url: platform.path(),
                status: StatusCode::BAD_GATEWAY,
            }
            .into_response()
        }
    }
}

pub async fn not_found(State(state): State<AppState>) -> Response {
    ErrorPage {
        site_name: &state.config.server.site_name,
        title: "Not Found",
        message: pages::NOT_FOUND_MESSAGE,
        back_url: "/",
        status: StatusCode::NOT_FOUND,
    }
    .into_response()
}
