//! Router construction for the module proxy.

use std::sync::Arc;

use axum::{middleware as axum_mw, routing::get, Extension, Router};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::module_gate::{require_module, resolve_route};
use crate::provider::Provider;
use crate::routes::RouteTable;

/// Build the proxy router over `provider`.
///
/// A single GET catch-all carries every protocol route; the middleware
/// stack resolves the route and gates the module path before `dispatch`.
/// Other methods get axum's 405.
pub fn build_router(provider: Arc<dyn Provider>) -> Router {
    Router::new()
        .route("/*path", get(handlers::dispatch))
        .layer(axum_mw::from_fn(require_module))
        .layer(axum_mw::from_fn(resolve_route))
        .layer(Extension(Arc::new(RouteTable::new())))
        .layer(Extension(provider))
        .layer(TraceLayer::new_for_http())
}
