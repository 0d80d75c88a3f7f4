//! # Perfboard Metrics Engine
//!
//! This crate turns an uploaded activity export into the dashboard's tables: business
//! points and ranks, amount per category, the AUM/SIP split, per-owner activity and
//! the final candidate matrix.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of files,
//!   HTTP or terminals. It depends only on `core-types` and the rate table from
//!   `configuration`.
//! - **Stateless Calculation:** `MetricsEngine::calculate` takes the records and an
//!   owner selection and returns a `DashboardReport`. Nothing is cached between
//!   calls; every filter change is a fresh run.
//!
//! ## Public API
//!
//! - `MetricsEngine`: The struct that contains the calculation pipeline.
//! - `OwnerSelection`: The owner filter; empty means every owner.
//! - `DashboardReport`: The five tables and three summary figures.
//! - `AnalyticsError`: The specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod engine;
pub mod error;
pub mod ranking;
pub mod report;
pub mod selection;

// Re-export the key components to create a clean, public-facing API.
pub use engine::MetricsEngine;
pub use error::AnalyticsError;
pub use report::{
    AumSipRow, CategoryAmount, DashboardReport, MatrixRow, NO_RANK_AVAILABLE, OwnerPoints,
    OwnerRank, PerformanceRow, Summary,
};
pub use selection::OwnerSelection;
