//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! specification for the REST API. It registers the repository listing
//! route, the health probes, and the response schemas. The generated
//! specification backs Swagger UI in debug builds.

use utoipa::OpenApi;

use crate::domain::ApiError;
use crate::inbound::http::repositories::{BranchDto, RepositoryDto};

/// OpenAPI document for the gateway API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "GitHub repository gateway API",
        description = "Aggregated non-fork repository and branch listings for a GitHub user."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::repositories::list_user_repositories,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(RepositoryDto, BranchDto, ApiError)),
    tags(
        (name = "repositories", description = "Aggregated repository listings"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
