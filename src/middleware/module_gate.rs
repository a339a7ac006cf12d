//! Route resolution and the module-path gate.
//!
//! `resolve_route` percent-decodes the request path, matches it against the
//! [`RouteTable`] and stores the extracted [`ModuleRequest`] in the request extensions.
//! `require_module` then turns away anything without a usable module path.
//! Both answer 404 with an empty body and never reach the handler.

use std::sync::Arc;

use axum::{
    extract::{Extension, Request},
    http::StatusCode,
    middleware::Next,
    response::Response,
};

use crate::routes::{ModuleRequest, RouteTable};

pub async fn resolve_route(
    Extension(table): Extension<Arc<RouteTable>>,
    mut request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let Some(matched) = table.match_encoded(request.uri().path()) else {
        tracing::debug!(path = %request.uri().path(), "no proxy route matches");
        return Err(StatusCode::NOT_FOUND);
    };
    request.extensions_mut().insert(matched);
    Ok(next.run(request).await)
}

pub async fn require_module(request: Request, next: Next) -> Result<Response, StatusCode> {
    let allowed = request
        .extensions()
        .get::<ModuleRequest>()
        .is_some_and(has_module);
    if !allowed {
        tracing::debug!(path = %request.uri().path(), "empty module path");
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(next.run(request).await)
}

pub fn has_module(req: &ModuleRequest) -> bool {
    !req.module.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::Route;

    #[test]
    fn empty_module_is_rejected() {
        let req = ModuleRequest {
            route: Route::List,
            module: String::new(),
            token: String::new(),
        };
        assert!(!has_module(&req));
    }

    #[test]
    fn module_present_passes() {
        let req = ModuleRequest {
            route: Route::Zip,
            module: "example.com/foo".into(),
            token: "v1.0.0".into(),
        };
        assert!(has_module(&req));
    }
}
