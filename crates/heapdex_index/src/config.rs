//! Configuration for instance collections.

/// Configuration for an [`Instances`](crate::Instances) collection.
#[derive(Clone, Debug)]
pub struct IndexConfig {
    /// Log a warning when construction drops duplicate ids.
    pub trace_duplicates: bool,

    /// Release spare capacity after a removal pass that removed anything.
    pub shrink_after_removal: bool,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            trace_duplicates: true,
            shrink_after_removal: false,
        }
    }
}

impl IndexConfig {
    /// Creates a configuration that never warns about duplicates.
    ///
    /// Useful for dumps from runtimes known to emit duplicate records.
    #[must_use]
    pub fn quiet() -> Self {
        Self {
            trace_duplicates: false,
            ..Self::default()
        }
    }

    /// Creates a configuration that keeps memory tight after pruning.
    #[must_use]
    pub fn compact() -> Self {
        Self {
            shrink_after_removal: true,
            ..Self::default()
        }
    }

    /// Builder method to enable/disable duplicate warnings.
    #[must_use]
    pub fn with_trace_duplicates(mut self, trace: bool) -> Self {
        self.trace_duplicates = trace;
        self
    }

    /// Builder method to enable/disable shrinking after removal.
    #[must_use]
    pub fn with_shrink_after_removal(mut self, shrink: bool) -> Self {
        self.shrink_after_removal = shrink;
        self
    }
}
