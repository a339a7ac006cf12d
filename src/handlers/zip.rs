//! GET /{module}/@v/{version}.zip — the source archive of a version.
//!
//! Whatever temporary file backs the archive belongs to the provider; the
//! handler only streams it and drops the stream.

use axum::response::Response;

use super::artifact_response;
use crate::error::Result;
use crate::provider::Provider;
use crate::routes::ModuleRequest;

pub async fn zip(provider: &dyn Provider, req: &ModuleRequest) -> Result<Response> {
    let archive = provider.zip(&req.module, &req.token).await?;
    Ok(artifact_response(archive, "application/zip", req))
}
