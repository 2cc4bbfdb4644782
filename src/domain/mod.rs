//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `analysis` - Pure domain services for ranking and sensitivity analysis

pub mod analysis;
pub mod foundation;
