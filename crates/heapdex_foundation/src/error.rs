//! Error types for Heapdex.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

use crate::id::InstanceId;

/// The main error type for Heapdex operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a missing instance error for the slot at `position`.
    #[must_use]
    pub fn missing_instance(position: usize) -> Self {
        Self::new(ErrorKind::MissingInstance { position })
    }

    /// Creates an instance not found error.
    #[must_use]
    pub fn instance_not_found(id: InstanceId) -> Self {
        Self::new(ErrorKind::InstanceNotFound(id))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A slot in the construction input held no instance.
    #[error("missing instance at position {position}")]
    MissingInstance {
        /// Zero-based position of the empty slot in the input.
        position: usize,
    },

    /// No instance with the requested id exists.
    ///
    /// Collections report lookup misses as `None`; callers that treat a
    /// dangling reference as fatal convert it with
    /// [`Error::instance_not_found`].
    #[error("instance not found: {0}")]
    InstanceNotFound(InstanceId),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Source label, such as the path of the snapshot being loaded.
    pub source: Option<String>,
    /// Name of the heap the instances belong to.
    pub heap: Option<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source label.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the heap name.
    #[must_use]
    pub fn with_heap(mut self, heap: impl Into<String>) -> Self {
        self.heap = Some(heap.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.source, &self.heap) {
            (Some(source), Some(heap)) => write!(f, "at {source} (heap {heap})"),
            (Some(source), None) => write!(f, "at {source}"),
            (None, Some(heap)) => write!(f, "in heap {heap}"),
            (None, None) => Ok(()),
        }
    }
}

/// Result type alias using Heapdex's Error.
pub type Result<T> = std::result::Result<T, Error>;
