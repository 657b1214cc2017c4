//! Repository listing API handler.
//!
//! ```text
//! GET /api/github/repositories/{username}
//! ```

use actix_web::{get, web};
use serde::Serialize;

use crate::domain::ApiError;
use crate::domain::ports::{BranchSummary, RepositorySummary};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// One branch in the response listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct BranchDto {
    /// Branch name.
    #[schema(example = "main")]
    pub name: String,
    /// SHA of the branch's latest commit.
    #[schema(example = "abc123def456789")]
    pub last_commit_sha: String,
}

impl From<BranchSummary> for BranchDto {
    fn from(summary: BranchSummary) -> Self {
        Self {
            name: summary.name,
            last_commit_sha: summary.last_commit_sha,
        }
    }
}

/// One non-fork repository in the response listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct RepositoryDto {
    /// Repository name.
    #[schema(example = "test-repo-1")]
    pub name: String,
    /// Login of the owning account.
    #[schema(example = "testuser")]
    pub owner_login: String,
    /// Branches in upstream listing order.
    pub branches: Vec<BranchDto>,
}

impl From<RepositorySummary> for RepositoryDto {
    fn from(summary: RepositorySummary) -> Self {
        Self {
            name: summary.name,
            owner_login: summary.owner_login,
            branches: summary.branches.into_iter().map(BranchDto::from).collect(),
        }
    }
}

/// List a user's non-fork repositories with their branches.
#[utoipa::path(
    get,
    path = "/api/github/repositories/{username}",
    params(
        ("username" = String, Path, description = "Account login to enumerate")
    ),
    responses(
        (status = 200, description = "Aggregated repository listing", body = [RepositoryDto]),
        (status = 404, description = "User not found", body = ApiError),
        (status = 500, description = "Upstream or transport failure", body = ApiError)
    ),
    tags = ["repositories"],
    operation_id = "listUserRepositories"
)]
#[get("/repositories/{username}")]
pub async fn list_user_repositories(
    state: web::Data<HttpState>,
    username: web::Path<String>,
) -> ApiResult<web::Json<Vec<RepositoryDto>>> {
    let username = username.into_inner();
    let listing = state
        .repositories
        .fetch_user_repositories(&username)
        .await?;
    Ok(web::Json(
        listing.into_iter().map(RepositoryDto::from).collect(),
    ))
}
