//! Actix middleware shared by the HTTP surface.

pub mod correlate;

pub use correlate::{Correlate, RequestId};
