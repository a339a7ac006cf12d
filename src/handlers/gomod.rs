//! GET /{module}/@v/{version}.mod — the go.mod file of a version.

use axum::response::Response;

use super::artifact_response;
use crate::error::Result;
use crate::provider::Provider;
use crate::routes::ModuleRequest;

pub async fn go_mod(provider: &dyn Provider, req: &ModuleRequest) -> Result<Response> {
    let go_mod = provider.go_mod(&req.module, &req.token).await?;
    Ok(artifact_response(go_mod, "text/plain", req))
}
