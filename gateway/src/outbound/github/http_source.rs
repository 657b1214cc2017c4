//! Reqwest-backed GitHub source adapter.
//!
//! This adapter owns transport details only: URL construction, status
//! classification, and JSON decoding into domain records. The null-body
//! convention is preserved explicitly: a missing or `null` body on a
//! success response is a failure, distinct from an empty array.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

use super::dto::{BranchDto, RepositoryDto};
use crate::domain::ports::{GitHubBranch, GitHubRepository, GitHubSource, GitHubSourceError};

const DEFAULT_USER_AGENT: &str = "github-repository-gateway/0.1";
const GITHUB_ACCEPT: &str = "application/vnd.github+json";
const BODY_PREVIEW_CHAR_LIMIT: usize = 160;

/// GitHub source adapter performing GET requests against one base URL.
pub struct GitHubHttpSource {
    client: Client,
    base_url: Url,
}

impl GitHubHttpSource {
    /// Build an adapter using a reqwest client with an explicit request
    /// timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(DEFAULT_USER_AGENT)
            .build()?;
        Ok(Self { client, base_url })
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, GitHubSourceError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                GitHubSourceError::transport("upstream base URL cannot carry path segments")
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get(&self, url: Url) -> Result<Response, reqwest::Error> {
        self.client
            .get(url)
            .header(reqwest::header::ACCEPT, GITHUB_ACCEPT)
            .send()
            .await
    }
}

#[async_trait]
impl GitHubSource for GitHubHttpSource {
    async fn user_exists(&self, username: &str) -> Result<bool, GitHubSourceError> {
        let url = self.endpoint(&["users", username])?;
        let response = self.get(url).await.map_err(|error| {
            GitHubSourceError::transport(format!("Error checking if user exists: {error}"))
        })?;
        user_probe_outcome(response.status())
    }

    async fn list_repositories(
        &self,
        username: &str,
    ) -> Result<Vec<GitHubRepository>, GitHubSourceError> {
        let url = self.endpoint(&["users", username, "repos"])?;
        let response = self.get(url).await.map_err(|error| {
            GitHubSourceError::transport(format!(
                "Unexpected error while retrieving repositories: {error}"
            ))
        })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|error| {
            GitHubSourceError::transport(format!(
                "Unexpected error while retrieving repositories: {error}"
            ))
        })?;
        if !status.is_success() {
            return Err(status_error(
                "Failed to retrieve repositories",
                status,
                body.as_ref(),
            ));
        }
        decode_repositories(body.as_ref(), username)
    }

    async fn list_branches(
        &self,
        username: &str,
        repository: &str,
    ) -> Result<Vec<GitHubBranch>, GitHubSourceError> {
        let url = self.endpoint(&["repos", username, repository, "branches"])?;
        let response = self.get(url).await.map_err(|error| {
            GitHubSourceError::transport(format!(
                "Unexpected error while retrieving branches: {error}"
            ))
        })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|error| {
            GitHubSourceError::transport(format!(
                "Unexpected error while retrieving branches: {error}"
            ))
        })?;
        if !status.is_success() {
            return Err(status_error(
                "Failed to retrieve branches",
                status,
                body.as_ref(),
            ));
        }
        decode_branches(body.as_ref(), repository)
    }
}

/// Classify the user-existence probe from the response status alone.
///
/// 200 means present, a clean 404 means absent; every other outcome
/// surfaces as a failure whose mapped status is 500.
fn user_probe_outcome(status: StatusCode) -> Result<bool, GitHubSourceError> {
    if status == StatusCode::NOT_FOUND {
        return Ok(false);
    }
    if !status.is_success() {
        return Err(GitHubSourceError::transport(format!(
            "Error checking if user exists: status {}",
            status.as_u16()
        )));
    }
    Ok(status == StatusCode::OK)
}

fn status_error(context: &str, status: StatusCode, body: &[u8]) -> GitHubSourceError {
    let preview = body_preview(body);
    let message = if preview.is_empty() {
        format!("{context}: status {}", status.as_u16())
    } else {
        format!("{context}: status {}: {preview}", status.as_u16())
    };
    GitHubSourceError::upstream(status.as_u16(), message)
}

fn decode_repositories(
    body: &[u8],
    username: &str,
) -> Result<Vec<GitHubRepository>, GitHubSourceError> {
    let Some(repositories) = decode_present::<Vec<RepositoryDto>>(body).map_err(|error| {
        GitHubSourceError::decode(format!(
            "Unexpected error while retrieving repositories: {error}"
        ))
    })?
    else {
        return Err(GitHubSourceError::decode(format!(
            "Failed to retrieve repositories for user: {username}"
        )));
    };
    Ok(repositories
        .into_iter()
        .map(RepositoryDto::into_domain)
        .collect())
}

fn decode_branches(body: &[u8], repository: &str) -> Result<Vec<GitHubBranch>, GitHubSourceError> {
    let Some(branches) = decode_present::<Vec<BranchDto>>(body).map_err(|error| {
        GitHubSourceError::decode(format!(
            "Unexpected error while retrieving branches: {error}"
        ))
    })?
    else {
        return Err(GitHubSourceError::decode(format!(
            "Failed to retrieve branches for repository: {repository}"
        )));
    };
    Ok(branches.into_iter().map(BranchDto::into_domain).collect())
}

/// Decode a body distinguishing presence from emptiness: an empty or JSON
/// `null` body yields `None`, a decodable value yields `Some`.
fn decode_present<T: DeserializeOwned>(body: &[u8]) -> Result<Option<T>, serde_json::Error> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    serde_json::from_slice::<Option<T>>(body)
}

fn body_preview(body: &[u8]) -> String {
    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(BODY_PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > BODY_PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}

#[cfg(test)]
mod tests {
    //! Coverage for the non-network decoding and classification helpers.

    use rstest::rstest;

    use super::*;

    #[test]
    fn decodes_repositories_with_owner_and_fork_flags() {
        let body = br#"[
            {"name":"test-repo-1","fork":false,"owner":{"login":"testuser"}},
            {"name":"forked","fork":true,"owner":{"login":"testuser"}}
        ]"#;

        let repositories = decode_repositories(body, "testuser").expect("body decodes");
        assert_eq!(
            repositories,
            vec![
                GitHubRepository {
                    name: "test-repo-1".to_owned(),
                    owner_login: "testuser".to_owned(),
                    fork: false,
                },
                GitHubRepository {
                    name: "forked".to_owned(),
                    owner_login: "testuser".to_owned(),
                    fork: true,
                },
            ]
        );
    }

    #[test]
    fn empty_array_is_a_success_not_a_missing_body() {
        let repositories = decode_repositories(b"[]", "testuser").expect("body decodes");
        assert!(repositories.is_empty());
    }

    #[rstest]
    #[case::empty_body(b"" as &[u8])]
    #[case::whitespace_body(b"  \n" as &[u8])]
    #[case::json_null(b"null" as &[u8])]
    fn missing_repository_body_maps_to_internal_status(#[case] body: &[u8]) {
        let error = decode_repositories(body, "testuser").expect_err("missing body must fail");
        assert_eq!(error.status(), 500);
        assert_eq!(
            error.to_string(),
            "Failed to retrieve repositories for user: testuser"
        );
    }

    #[test]
    fn undecodable_repository_body_maps_to_internal_status() {
        let error = decode_repositories(b"{not json", "testuser").expect_err("decode must fail");
        assert_eq!(error.status(), 500);
        assert!(
            error
                .to_string()
                .starts_with("Unexpected error while retrieving repositories:")
        );
    }

    #[test]
    fn decodes_branches_with_commit_shas() {
        let body = br#"[
            {"name":"main","commit":{"sha":"abc123def456789"}},
            {"name":"develop","commit":{"sha":"def456ghi789012"}}
        ]"#;

        let branches = decode_branches(body, "test-repo-1").expect("body decodes");
        assert_eq!(
            branches,
            vec![
                GitHubBranch {
                    name: "main".to_owned(),
                    commit_sha: "abc123def456789".to_owned(),
                },
                GitHubBranch {
                    name: "develop".to_owned(),
                    commit_sha: "def456ghi789012".to_owned(),
                },
            ]
        );
    }

    #[test]
    fn missing_branch_body_names_the_repository() {
        let error = decode_branches(b"null", "test-repo-1").expect_err("missing body must fail");
        assert_eq!(error.status(), 500);
        assert_eq!(
            error.to_string(),
            "Failed to retrieve branches for repository: test-repo-1"
        );
    }

    #[rstest]
    #[case::forbidden(403)]
    #[case::too_many_requests(429)]
    #[case::bad_gateway(502)]
    #[case::service_unavailable(503)]
    fn non_success_statuses_propagate_the_upstream_code(#[case] status: u16) {
        let status_code = StatusCode::from_u16(status).expect("status is valid");
        let error = status_error(
            "Failed to retrieve branches",
            status_code,
            br#"{"message":"boom"}"#,
        );
        assert_eq!(error.status(), status);
        assert!(
            error
                .to_string()
                .starts_with("Failed to retrieve branches: status")
        );
    }

    #[test]
    fn status_error_compacts_the_body_preview() {
        let error = status_error(
            "Failed to retrieve repositories",
            StatusCode::SERVICE_UNAVAILABLE,
            b"{\n  \"message\": \"backend\t unavailable\"\n}",
        );
        assert_eq!(
            error.to_string(),
            "Failed to retrieve repositories: status 503: { \"message\": \"backend unavailable\" }"
        );
    }

    #[test]
    fn user_probe_maps_200_to_present() {
        assert_eq!(user_probe_outcome(StatusCode::OK), Ok(true));
    }

    #[test]
    fn user_probe_maps_404_to_absent() {
        assert_eq!(user_probe_outcome(StatusCode::NOT_FOUND), Ok(false));
    }

    #[test]
    fn user_probe_maps_other_success_codes_to_absent() {
        assert_eq!(user_probe_outcome(StatusCode::NO_CONTENT), Ok(false));
    }

    #[rstest]
    #[case::forbidden(StatusCode::FORBIDDEN)]
    #[case::internal_error(StatusCode::INTERNAL_SERVER_ERROR)]
    #[case::bad_gateway(StatusCode::BAD_GATEWAY)]
    fn user_probe_failures_surface_as_internal_status(#[case] status: StatusCode) {
        let error = user_probe_outcome(status).expect_err("probe must fail");
        assert_eq!(error.status(), 500);
        assert!(
            error
                .to_string()
                .starts_with("Error checking if user exists: status")
        );
    }
}
