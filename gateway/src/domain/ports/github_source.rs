//! Driven port for querying the upstream GitHub-style hosting API.
//!
//! The domain owns the record shapes and the error contract so the
//! aggregation logic stays adapter-agnostic.

use async_trait::async_trait;

/// One repository as listed by the upstream API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitHubRepository {
    /// Repository name, unique within the owner's namespace.
    pub name: String,
    /// Login of the owning account.
    pub owner_login: String,
    /// Whether upstream flags the repository as a fork of another.
    pub fork: bool,
}

/// One branch of a repository with its latest commit identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitHubBranch {
    /// Branch name.
    pub name: String,
    /// SHA of the branch head commit.
    pub commit_sha: String,
}

/// Errors surfaced while calling the upstream API.
///
/// Messages arrive fully contextualized from the adapter; the aggregator
/// propagates them verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GitHubSourceError {
    /// Upstream answered with a non-success status.
    #[error("{message}")]
    Upstream {
        /// Status code reported by upstream.
        status: u16,
        /// Contextualized failure description.
        message: String,
    },
    /// The request failed before an HTTP response arrived.
    #[error("{message}")]
    Transport {
        /// Contextualized failure description.
        message: String,
    },
    /// The response body was absent or could not be decoded.
    #[error("{message}")]
    Decode {
        /// Contextualized failure description.
        message: String,
    },
}

impl GitHubSourceError {
    /// Build an [`GitHubSourceError::Upstream`] failure.
    pub fn upstream(status: u16, message: impl Into<String>) -> Self {
        Self::Upstream {
            status,
            message: message.into(),
        }
    }

    /// Build a [`GitHubSourceError::Transport`] failure.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Build a [`GitHubSourceError::Decode`] failure.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Status code to surface for this failure: the upstream code when one
    /// is known, 500 otherwise.
    pub fn status(&self) -> u16 {
        match self {
            Self::Upstream { status, .. } => *status,
            Self::Transport { .. } | Self::Decode { .. } => 500,
        }
    }
}

/// Port for the three read-only upstream lookups the aggregation needs.
///
/// Each call is an independent, idempotent GET; implementations perform no
/// local mutation of shared state.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GitHubSource: Send + Sync {
    /// Probe whether `username` exists upstream.
    ///
    /// Returns `Ok(false)` for a clean 404. Any other upstream failure
    /// surfaces as an error whose [`GitHubSourceError::status`] is 500.
    async fn user_exists(&self, username: &str) -> Result<bool, GitHubSourceError>;

    /// List the user's repositories in upstream order, forks included.
    ///
    /// An empty listing is a success; a missing response body is an error.
    async fn list_repositories(
        &self,
        username: &str,
    ) -> Result<Vec<GitHubRepository>, GitHubSourceError>;

    /// List one repository's branches in upstream order.
    async fn list_branches(
        &self,
        username: &str,
        repository: &str,
    ) -> Result<Vec<GitHubBranch>, GitHubSourceError>;
}

/// Fixture implementation describing an existing user with no repositories.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureGitHubSource;

#[async_trait]
impl GitHubSource for FixtureGitHubSource {
    async fn user_exists(&self, _username: &str) -> Result<bool, GitHubSourceError> {
        Ok(true)
    }

    async fn list_repositories(
        &self,
        _username: &str,
    ) -> Result<Vec<GitHubRepository>, GitHubSourceError> {
        Ok(Vec::new())
    }

    async fn list_branches(
        &self,
        _username: &str,
        _repository: &str,
    ) -> Result<Vec<GitHubBranch>, GitHubSourceError> {
        Ok(Vec::new())
    }
}
