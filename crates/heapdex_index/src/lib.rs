//! Id-indexed instance collections for Heapdex.
//!
//! This crate provides:
//! - [`Instances`] - Instances sorted and deduplicated by id, with binary-search lookup
//! - [`IndexConfig`] - Logging and memory behavior of a collection
//! - [`BuildStats`] - Counters describing construction and pruning

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod instances;

pub use config::IndexConfig;
pub use instances::{BuildStats, Instances};
