//! Driving port exposing the repository aggregation use-case.

use async_trait::async_trait;

use crate::domain::ApiError;

/// One branch entry in the aggregated listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchSummary {
    /// Branch name.
    pub name: String,
    /// SHA of the branch's latest commit.
    pub last_commit_sha: String,
}

/// One non-fork repository with its branch listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositorySummary {
    /// Repository name.
    pub name: String,
    /// Login of the owning account.
    pub owner_login: String,
    /// Branches in upstream listing order.
    pub branches: Vec<BranchSummary>,
}

/// Port for fetching a user's aggregated repository listing.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RepositoriesQuery: Send + Sync {
    /// Aggregate the user's non-fork repositories with their branches.
    ///
    /// The listing preserves upstream ordering and is all-or-nothing: the
    /// first upstream failure aborts the whole request with no partial
    /// output.
    async fn fetch_user_repositories(
        &self,
        username: &str,
    ) -> Result<Vec<RepositorySummary>, ApiError>;
}
