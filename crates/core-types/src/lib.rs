//! # Perfboard Core Types
//!
//! Layer 0 of the workspace: the plain data structures shared by every other crate.
//! It has no knowledge of files, configuration or rendering.
//!
//! ## Public API
//!
//! - `SalesRecord`: one row of an uploaded activity export.
//! - `ProductClass`: the AUM / SIP classification of a product-or-service name.
//! - `columns`: the header names an export must carry.

pub mod columns;
pub mod enums;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use enums::ProductClass;
pub use structs::SalesRecord;
