//! Instance identifiers and error types for Heapdex.
//!
//! This crate provides:
//! - [`InstanceId`] - 64-bit heap instance identifiers
//! - [`Identified`] - The capability of exposing an [`InstanceId`]
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod id;

pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use id::{Identified, InstanceId};
