//! DTOs for decoding upstream GitHub JSON payloads.
//!
//! The adapter decodes into these wire shapes first, then maps into domain
//! records in one pass.

use serde::Deserialize;

use crate::domain::ports::{GitHubBranch, GitHubRepository};

#[derive(Debug, Deserialize)]
pub(super) struct RepositoryDto {
    pub(super) name: String,
    #[serde(default)]
    pub(super) fork: bool,
    pub(super) owner: OwnerDto,
}

#[derive(Debug, Deserialize)]
pub(super) struct OwnerDto {
    pub(super) login: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct BranchDto {
    pub(super) name: String,
    pub(super) commit: CommitDto,
}

#[derive(Debug, Deserialize)]
pub(super) struct CommitDto {
    pub(super) sha: String,
}

impl RepositoryDto {
    pub(super) fn into_domain(self) -> GitHubRepository {
        GitHubRepository {
            name: self.name,
            owner_login: self.owner.login,
            fork: self.fork,
        }
    }
}

impl BranchDto {
    pub(super) fn into_domain(self) -> GitHubBranch {
        GitHubBranch {
            name: self.name,
            commit_sha: self.commit.sha,
        }
    }
}
