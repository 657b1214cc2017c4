//! Repository aggregation service.
//!
//! Implements the driving port by orchestrating the three upstream lookups:
//! user existence, repository listing, and per-repository branch listing.
//! Branch fetches run strictly sequentially and the first failure aborts
//! the request with no partial output.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ApiError;
use crate::domain::ports::{
    BranchSummary, GitHubBranch, GitHubSource, GitHubSourceError, RepositoriesQuery,
    RepositorySummary,
};

/// Aggregation service over a [`GitHubSource`] implementation.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use gateway::domain::RepositoryAggregator;
/// use gateway::domain::ports::{FixtureGitHubSource, RepositoriesQuery};
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let aggregator = RepositoryAggregator::new(Arc::new(FixtureGitHubSource));
/// let listing = aggregator.fetch_user_repositories("octocat").await.unwrap();
/// assert!(listing.is_empty());
/// # });
/// ```
#[derive(Clone)]
pub struct RepositoryAggregator<S> {
    source: Arc<S>,
}

impl<S> RepositoryAggregator<S> {
    /// Create a service over the given upstream source.
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }
}

fn map_source_error(error: GitHubSourceError) -> ApiError {
    ApiError::new(error.status(), error.to_string())
}

fn into_branch_summary(branch: GitHubBranch) -> BranchSummary {
    BranchSummary {
        name: branch.name,
        last_commit_sha: branch.commit_sha,
    }
}

#[async_trait]
impl<S: GitHubSource> RepositoriesQuery for RepositoryAggregator<S> {
    async fn fetch_user_repositories(
        &self,
        username: &str,
    ) -> Result<Vec<RepositorySummary>, ApiError> {
        let exists = self
            .source
            .user_exists(username)
            .await
            .map_err(map_source_error)?;
        if !exists {
            debug!(username, "user not found upstream");
            return Err(ApiError::user_not_found());
        }

        let repositories = self
            .source
            .list_repositories(username)
            .await
            .map_err(map_source_error)?;

        let mut listing = Vec::new();
        for repository in repositories
            .into_iter()
            .filter(|repository| !repository.fork)
        {
            // One branch fetch completes before the next begins; a failure
            // discards everything aggregated so far.
            let branches = self
                .source
                .list_branches(username, &repository.name)
                .await
                .map_err(map_source_error)?;
            listing.push(RepositorySummary {
                name: repository.name,
                owner_login: repository.owner_login,
                branches: branches.into_iter().map(into_branch_summary).collect(),
            });
        }

        debug!(
            username,
            repositories = listing.len(),
            "aggregated repository listing"
        );
        Ok(listing)
    }
}
