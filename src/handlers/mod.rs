//! Protocol operation handlers.
//!
//! `dispatch` is the single axum handler behind the catch-all route; it picks
//! the operation from the [`ModuleRequest`] the middleware resolved and
//! translates failures into a bare status code.

pub mod gomod;
pub mod latest;
pub mod stat;
pub mod versions;
pub mod zip;

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Extension,
};
use futures::TryStreamExt;
use tokio_util::io::ReaderStream;

use crate::error::Result;
use crate::provider::{ArtifactStream, Provider, RevisionInfo};
use crate::routes::{ModuleRequest, Route};

pub async fn dispatch(
    Extension(provider): Extension<Arc<dyn Provider>>,
    Extension(req): Extension<ModuleRequest>,
) -> Response {
    let provider = provider.as_ref();
    let result = match req.route {
        Route::List => versions::list_versions(provider, &req).await,
        Route::Latest => latest::latest(provider, &req).await,
        Route::Info => stat::stat(provider, &req).await,
        Route::Mod => gomod::go_mod(provider, &req).await,
        Route::Zip => zip::zip(provider, &req).await,
    };
    match result {
        Ok(resp) => resp,
        Err(e) => {
            let route = req.route.name();
            if e.is_not_found() {
                tracing::debug!(route, module = %req.module, token = %req.token, "{e}");
            } else {
                tracing::error!(route, module = %req.module, token = %req.token, "{e}");
            }
            e.into_response()
        }
    }
}

/// 200 with a fully buffered JSON body. Serialization happens before any
/// header is produced, so a failure still becomes a clean 500.
pub(crate) fn revision_response(info: &RevisionInfo) -> Result<Response> {
    let body = serde_json::to_vec(info)?;
    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response())
}

/// 200 streaming `artifact` in bounded chunks. The stream is owned by the
/// body and dropped with it: after the last chunk, after a read error, or
/// when the client goes away.
pub(crate) fn artifact_response(
    artifact: ArtifactStream,
    content_type: &'static str,
    req: &ModuleRequest,
) -> Response {
    let route = req.route.name();
    let module = req.module.clone();
    let token = req.token.clone();
    let chunks = ReaderStream::new(artifact).inspect_err(move |e| {
        tracing::error!(route, module = %module, token = %token, "artifact copy aborted: {e}");
    });
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, content_type)],
        Body::from_stream(chunks),
    )
        .into_response()
}
