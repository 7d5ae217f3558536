//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page path is server-rendered by the Leptos app and hydrated in the
//! browser; compiled assets are served from `<site_root>/pkg`. The auth API
//! the client calls (`/api/auth/*`) is provided by a separate service.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::{ConfigError, HostConfig};

/// Build the full application router.
///
/// # Errors
///
/// Returns [`ConfigError::Leptos`] if the Leptos options cannot be loaded.
pub fn app(config: &HostConfig) -> Result<Router, ConfigError> {
    let conf = get_configuration(None).map_err(|e| ConfigError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options);

    Ok(base_routes(config).merge(leptos_router).layer(TraceLayer::new_for_http()))
}

/// Routes that do not need the Leptos runtime.
fn base_routes(config: &HostConfig) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .nest_service("/pkg", ServeDir::new(config.site_root.join("pkg")))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
