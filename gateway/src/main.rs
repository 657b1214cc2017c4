//! Gateway entry-point: wires configuration, the upstream adapter, REST
//! endpoints, and OpenAPI docs.

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use actix_web::{App, HttpServer, web};
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};
use url::Url;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use gateway::ApiDoc;
use gateway::Correlate;
use gateway::domain::RepositoryAggregator;
use gateway::inbound::http::HttpState;
use gateway::inbound::http::health::{HealthState, live, ready};
use gateway::inbound::http::repositories::list_user_repositories;
use gateway::outbound::github::GitHubHttpSource;

const DEFAULT_GITHUB_API_BASE_URL: &str = "https://api.github.com";
const DEFAULT_UPSTREAM_TIMEOUT_SECONDS: u64 = 30;
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let base_url = upstream_base_url()?;
    let timeout = upstream_timeout()?;
    let bind_addr = bind_addr()?;

    let source = GitHubHttpSource::new(base_url, timeout)
        .map_err(|e| std::io::Error::other(format!("failed to build upstream client: {e}")))?;
    let state = HttpState::new(Arc::new(RepositoryAggregator::new(Arc::new(source))));

    let health_state = web::Data::new(HealthState::new());
    // Clone for the server factory so the readiness probe stays reachable.
    let server_health_state = health_state.clone();
    let server = HttpServer::new(move || {
        let app = App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(server_health_state.clone())
            .wrap(Correlate)
            .service(web::scope("/api/github").service(list_user_repositories))
            .service(ready)
            .service(live);
        #[cfg(debug_assertions)]
        let app = app.service(
            SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
        );
        app
    })
    .bind(bind_addr)?;

    health_state.mark_ready();
    server.run().await
}

fn upstream_base_url() -> std::io::Result<Url> {
    let raw = env::var("GITHUB_API_BASE_URL")
        .unwrap_or_else(|_| DEFAULT_GITHUB_API_BASE_URL.to_owned());
    let url = Url::parse(&raw)
        .map_err(|e| std::io::Error::other(format!("invalid GITHUB_API_BASE_URL {raw}: {e}")))?;
    if url.cannot_be_a_base() {
        return Err(std::io::Error::other(format!(
            "GITHUB_API_BASE_URL {raw} cannot carry path segments"
        )));
    }
    Ok(url)
}

fn upstream_timeout() -> std::io::Result<Duration> {
    let raw = match env::var("GITHUB_API_TIMEOUT_SECONDS") {
        Ok(raw) => raw,
        Err(_) => return Ok(Duration::from_secs(DEFAULT_UPSTREAM_TIMEOUT_SECONDS)),
    };
    let seconds: u64 = raw.parse().map_err(|e| {
        std::io::Error::other(format!("invalid GITHUB_API_TIMEOUT_SECONDS {raw}: {e}"))
    })?;
    Ok(Duration::from_secs(seconds.max(1)))
}

fn bind_addr() -> std::io::Result<SocketAddr> {
    let raw = env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_owned());
    raw.parse()
        .map_err(|e| std::io::Error::other(format!("invalid BIND_ADDR {raw}: {e}")))
}
