//! HTTP surface: tool advertisement and invocation routes.

#![allow(missing_docs)]

pub mod handlers;
pub mod routes;

pub use routes::router;
