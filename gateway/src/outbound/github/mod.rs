//! GitHub outbound adapters.
//!
//! This module provides a thin reqwest implementation of the
//! `GitHubSource` port.

mod dto;
mod http_source;

pub use http_source::GitHubHttpSource;
