//! Gateway library modules.
//!
//! The crate follows a hexagonal layout: [`domain`] owns the aggregation
//! core and its ports, [`inbound`] adapts HTTP requests onto the driving
//! port, and [`outbound`] implements the driven port against the upstream
//! GitHub API.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Correlate;
