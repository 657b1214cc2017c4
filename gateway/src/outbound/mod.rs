//! Outbound adapters implementing domain ports for external services.
//!
//! Adapters are thin translators between domain records and wire
//! representations; they contain no aggregation logic.

pub mod github;
