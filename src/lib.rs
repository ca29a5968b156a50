//! # Fight Metrics
//!
//! Derived performance metrics and cohort-relative ratings for tracked MMA
//! fighters, read from a Firestore document database or a local snapshot.
//!
//! ## Architecture
//!
//! - **api**: Read-only document sources (Firestore REST client, wire models)
//! - **snapshot**: One immutable load of the fighter and weight-class collections
//! - **analysis**: Typed records, metric extraction, ratings, aggregation and profiles
//! - **display**: Terminal tables and JSON output
//! - **config**: Environment configuration
//! - **error**: Error types

pub mod analysis;
pub mod api;
pub mod config;
pub mod display;
pub mod error;
pub mod snapshot;

pub use error::AppError;
