//! FsProvider — serves modules from a directory laid out like the proxy URL space.
//!
//! ```text
//! <root>/example.com/foo/@v/list
//! <root>/example.com/foo/@v/v1.2.0.info
//! <root>/example.com/foo/@v/v1.2.0.mod
//! <root>/example.com/foo/@v/v1.2.0.zip
//! ```
//!
//! `latest` is the last entry of `list`.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::Context;
use async_trait::async_trait;

use super::{ArtifactStream, Provider, RevisionInfo};
use crate::error::{ProxyError, Result};

#[derive(Debug, Clone)]
pub struct FsProvider {
    root: PathBuf,
}

impl FsProvider {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<root>/<module>/@v`, refusing anything that could step outside the root.
    fn version_dir(&self, module: &str) -> Result<PathBuf> {
        let mut dir = self.root.clone();
        for segment in module.split('/') {
            if segment.is_empty() || segment == "." || segment == ".." || segment.contains('\\') {
                return Err(ProxyError::not_found(format!("invalid module path {module:?}")));
            }
            dir.push(segment);
        }
        dir.push("@v");
        Ok(dir)
    }

    fn artifact_path(&self, module: &str, token: &str, ext: &str) -> Result<PathBuf> {
        if token.is_empty() || token.contains(['/', '\\']) {
            return Err(ProxyError::not_found(format!("invalid version {token:?}")));
        }
        Ok(self.version_dir(module)?.join(format!("{token}.{ext}")))
    }

    async fn read_to_string(path: &Path) -> Result<String> {
        tokio::fs::read_to_string(path)
            .await
            .map_err(|e| io_error(path, e))
    }

    async fn open(path: &Path) -> Result<ArtifactStream> {
        let file = tokio::fs::File::open(path)
            .await
            .map_err(|e| io_error(path, e))?;
        Ok(Box::new(file))
    }
}

fn io_error(path: &Path, err: std::io::Error) -> ProxyError {
    if err.kind() == ErrorKind::NotFound {
        ProxyError::not_found(path.display().to_string())
    } else {
        ProxyError::Internal(anyhow::Error::new(err).context(format!("reading {}", path.display())))
    }
}

#[async_trait]
impl Provider for FsProvider {
    async fn versions(&self, module: &str) -> Result<Vec<String>> {
        let path = self.version_dir(module)?.join("list");
        let list = Self::read_to_string(&path).await?;
        Ok(list
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect())
    }

    async fn stat(&self, module: &str, revision: &str) -> Result<RevisionInfo> {
        let path = self.artifact_path(module, revision, "info")?;
        let raw = Self::read_to_string(&path).await?;
        let info: RevisionInfo = serde_json::from_str(&raw)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(info)
    }

    async fn latest(&self, module: &str) -> Result<RevisionInfo> {
        let versions = self.versions(module).await?;
        let Some(latest) = versions.last() else {
            return Err(ProxyError::not_found(format!("{module} has no versions")));
        };
        self.stat(module, latest).await
    }

    async fn go_mod(&self, module: &str, version: &str) -> Result<ArtifactStream> {
        Self::open(&self.artifact_path(module, version, "mod")?).await
    }

    async fn zip(&self, module: &str, version: &str) -> Result<ArtifactStream> {
        Self::open(&self.artifact_path(module, version, "zip")?).await
    }
}
