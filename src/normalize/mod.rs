//! Response normalization.
//!
//! Converts raw external responses — SQL rows, search-engine result pages,
//! arbitrary HTML documents — into the gateway's stable output shapes.

/// HTML shaping: visible-text extraction, search result and agenda parsing.
pub mod html;
/// Row-to-text serialization for arbitrary query results.
pub mod rows;
