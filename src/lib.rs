//! Retirement System - deterministic portfolio and income projection engine
//!
//! This library provides:
//! - Batch validation of raw text fields into typed projection inputs
//! - Exact-day roll-forward of a balance to the withdrawal start date
//! - Year-by-year withdrawal, growth, and Social Security schedules
//! - A CSV export contract and a session-keyed result cache

pub mod cache;
pub mod export;
pub mod input;
pub mod projection;

// Re-export commonly used types
pub use cache::{ResultStore, SessionCache};
pub use input::{validate, ProjectionInput, RawFields, ValidationReport};
pub use projection::{ProjectionEngine, ProjectionResult, ProjectionRow};
