//! Student Migration DSS - Decision support for choosing a study destination
//!
//! This crate ranks countries against weighted, mixed-direction criteria with
//! Simple Additive Weighting and measures how sensitive the ranking is to the
//! user's weights.

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod ports;
