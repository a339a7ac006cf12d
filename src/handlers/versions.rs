//! GET /{module}/@v/list — tagged versions, one per line.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use crate::error::Result;
use crate::provider::Provider;
use crate::routes::ModuleRequest;

pub async fn list_versions(provider: &dyn Provider, req: &ModuleRequest) -> Result<Response> {
    let versions = provider.versions(&req.module).await?;
    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain")],
        render_list(&versions),
    )
        .into_response())
}

/// Each version becomes one full line, in provider order.
fn render_list(versions: &[String]) -> String {
    let mut body = String::with_capacity(versions.iter().map(|v| v.len() + 1).sum());
    for version in versions {
        body.push_str(version);
        body.push('\n');
    }
    body
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_list_terminates_every_line() {
        let versions = vec!["v1.0.0".to_string(), "v1.2.0".to_string()];
        assert_eq!(render_list(&versions), "v1.0.0\nv1.2.0\n");
    }

    #[test]
    fn render_list_empty() {
        assert_eq!(render_list(&[]), "");
    }

    #[test]
    fn render_list_keeps_provider_order() {
        let versions = vec!["v2.0.0".to_string(), "v1.0.0".to_string()];
        let body = render_list(&versions);
        assert_eq!(body.lines().collect::<Vec<_>>(), vec!["v2.0.0", "v1.0.0"]);
    }
}
