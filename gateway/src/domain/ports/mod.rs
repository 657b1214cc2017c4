//! Domain ports and supporting types for the hexagonal boundary.

mod github_source;
mod repositories_query;

#[cfg(test)]
pub use github_source::MockGitHubSource;
pub use github_source::{
    FixtureGitHubSource, GitHubBranch, GitHubRepository, GitHubSource, GitHubSourceError,
};
#[cfg(test)]
pub use repositories_query::MockRepositoriesQuery;
pub use repositories_query::{BranchSummary, RepositoriesQuery, RepositorySummary};
