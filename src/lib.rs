//! gomodproxy — server side of the Go module proxy protocol.
//!
//! Serves `list`, `latest`, `.info`, `.mod` and `.zip` requests for module
//! paths of any depth, resolving each against a [`provider::Provider`].

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod provider;
pub mod router;
pub mod routes;

pub use error::{ProxyError, Result};
pub use provider::{ArtifactStream, FsProvider, Provider, RevisionInfo};
pub use router::build_router;
