//! Provider — the backend capability the dispatcher resolves modules against.
//!
//! The dispatcher only sees `Arc<dyn Provider>`, so a local directory, a VCS
//! resolver or a composite of both can sit behind the same routes.

pub mod fs;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::io::AsyncRead;

use crate::error::Result;

pub use fs::FsProvider;

/// Readable artifact body handed from the provider to the dispatcher.
/// Dropping it releases whatever the provider holds open.
pub type ArtifactStream = Box<dyn AsyncRead + Send + Unpin>;

/// Revision metadata as served by `.info` and `latest`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RevisionInfo {
    pub version: String,
    pub time: DateTime<Utc>,
}

#[async_trait]
pub trait Provider: Send + Sync {
    /// Known tagged versions of `module`, in the order they should be listed.
    /// Pseudo-versions are excluded.
    async fn versions(&self, module: &str) -> Result<Vec<String>>;

    /// Information about `revision`: a commit hash, branch, tag and so on.
    async fn stat(&self, module: &str, revision: &str) -> Result<RevisionInfo>;

    /// Latest revision on the default branch. Clients only ask for this
    /// when there are no tagged versions.
    async fn latest(&self, module: &str) -> Result<RevisionInfo>;

    /// The `go.mod` file of `version`.
    async fn go_mod(&self, module: &str, version: &str) -> Result<ArtifactStream>;

    /// The source zip of `version`.
    async fn zip(&self, module: &str, version: &str) -> Result<ArtifactStream>;
}
