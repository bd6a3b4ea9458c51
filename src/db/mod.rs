//! Database clients.
//!
//! A single libsql-backed store holds the `evenements` table the query tool
//! runs agent-authored SQL against.

pub mod events;

pub use events::EventStore;
