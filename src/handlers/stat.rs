//! GET /{module}/@v/{revision}.info — metadata for any revision the provider knows.

use axum::response::Response;

use super::revision_response;
use crate::error::Result;
use crate::provider::Provider;
use crate::routes::ModuleRequest;

pub async fn stat(provider: &dyn Provider, req: &ModuleRequest) -> Result<Response> {
    let info = provider.stat(&req.module, &req.token).await?;
    revision_response(&info)
}
