//! Heapdex - Id-indexed instance collections for heap snapshot analysis
//!
//! This crate re-exports all layers of the Heapdex system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: heapdex_index       — Instances<T>, IndexConfig, BuildStats
//! Layer 0: heapdex_foundation  — Core types (InstanceId, Identified, Error)
//! ```

pub use heapdex_foundation as foundation;
pub use heapdex_index as index;
