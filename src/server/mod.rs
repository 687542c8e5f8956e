mod handlers;
pub mod pages;
mod platform;

pub use platform::Platform;

use crate::{config::Config, media::Resolver};
use anyhow::{Context, Result};
use axum::{
    extract::{rejection::FormRejection, State},
    routing::get,
    Form, Router,
};
use handlers::UrlForm;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

/// Per-process state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub resolver: Arc<dyn Resolver>,
}

pub fn router(state: AppState) -> Router {
    let mut router = Router::new().route("/", get(handlers::home));

    for platform in Platform::ALL {
        router = router.route(
            platform.path(),
            get(move |State(state): State<AppState>| handlers::show_form(state, platform)).post(
                move |State(state): State<AppState>,
                      form: Result<Form<UrlForm>, FormRejection>| {
                    handlers::submit_url(state, platform, handlers::form_or_empty(form))
                },
            ),
        );
    }

    router
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Arc<Config>, resolver: Arc<dyn Resolver>) -> Result<()> {
    let addr = config.bind_addr();
    let app = router(AppState { config, resolver });

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to install Ctrl+C handler: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
