//! GET /{module}/@v/latest — tip of the default branch.

use axum::response::Response;

use super::revision_response;
use crate::error::Result;
use crate::provider::Provider;
use crate::routes::ModuleRequest;

pub async fn latest(provider: &dyn Provider, req: &ModuleRequest) -> Result<Response> {
    let info = provider.latest(&req.module).await?;
    revision_response(&info)
}
