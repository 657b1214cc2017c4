//! Shared HTTP adapter state.
//!
//! Handlers receive this state via `actix_web::web::Data` so they depend
//! only on the driving port and stay testable without network I/O.

use std::sync::Arc;

use crate::domain::ports::RepositoriesQuery;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Aggregated repository listing use-case.
    pub repositories: Arc<dyn RepositoriesQuery>,
}

impl HttpState {
    /// Bundle the repository listing port for handler injection.
    pub fn new(repositories: Arc<dyn RepositoriesQuery>) -> Self {
        Self { repositories }
    }
}
