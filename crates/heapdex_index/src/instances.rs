//! Instance collections searchable by id.
//!
//! An [`Instances`] owns a batch of heap instances, sorted by
//! [`InstanceId`] with one entry per id, so references recorded as raw ids
//! can be resolved back to their instance with a binary search.
//!
//! ```
//! use heapdex_foundation::{Identified, InstanceId};
//! use heapdex_index::Instances;
//!
//! struct Obj {
//!     addr: u64,
//!     name: &'static str,
//! }
//!
//! impl Identified for Obj {
//!     fn id(&self) -> InstanceId {
//!         InstanceId::new(self.addr)
//!     }
//! }
//!
//! let mut heap = Instances::new(vec![
//!     Obj { addr: 0x30, name: "c" },
//!     Obj { addr: 0x10, name: "a" },
//!     Obj { addr: 0x20, name: "b" },
//! ]);
//!
//! assert_eq!(heap.get(0x20u64).map(|o| o.name), Some("b"));
//! assert!(heap.get(0x40u64).is_none());
//!
//! heap.remove_if(|o| o.name == "a");
//! let names: Vec<_> = heap.iter().map(|o| o.name).collect();
//! assert_eq!(names, ["b", "c"]);
//! ```

use std::fmt;
use std::iter::FromIterator;

use heapdex_foundation::{Error, Identified, InstanceId, Result};
use tracing::{debug, trace, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::IndexConfig;

/// Bookkeeping about how a collection was built and pruned.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BuildStats {
    /// Number of instances handed to the constructor.
    pub input_len: usize,
    /// Instances dropped because an earlier one had the same id.
    pub duplicates_dropped: usize,
    /// Total instances removed by [`Instances::remove_if`] so far.
    pub removed: usize,
}

/// A collection of instances that can be looked up by id.
///
/// Construction takes ownership of the instances, sorts them by id and
/// drops every instance whose id matches the one kept before it. The sort is
/// stable, so among instances sharing an id the earliest in the input wins.
/// After construction the collection only shrinks, through
/// [`remove_if`](Self::remove_if).
///
/// Ids must not change while an instance is held here.
#[derive(Clone)]
pub struct Instances<T> {
    /// Sorted by id, no two entries share an id.
    items: Vec<T>,
    stats: BuildStats,
    config: IndexConfig,
}

impl<T: Identified> Instances<T> {
    /// Creates a collection from `items` with the default configuration.
    #[must_use]
    pub fn new(items: Vec<T>) -> Self {
        Self::with_config(items, IndexConfig::default())
    }

    /// Creates a collection from `items` with the given configuration.
    #[must_use]
    pub fn with_config(mut items: Vec<T>, config: IndexConfig) -> Self {
        let input_len = items.len();

        items.sort_by_key(Identified::id);

        let mut first_duplicate = None;
        items.dedup_by(|later, kept| {
            let duplicate = later.id() == kept.id();
            if duplicate && first_duplicate.is_none() {
                first_duplicate = Some(later.id());
            }
            duplicate
        });

        let duplicates_dropped = input_len - items.len();
        debug!(
            input_len,
            retained = items.len(),
            duplicates_dropped,
            "built instance index"
        );
        if let Some(first) = first_duplicate.filter(|_| config.trace_duplicates) {
            warn!(
                duplicates_dropped,
                first = %first,
                "dropped instances with duplicate ids"
            );
        }

        Self {
            items,
            stats: BuildStats {
                input_len,
                duplicates_dropped,
                removed: 0,
            },
            config,
        }
    }

    /// Creates a collection from slots that may be empty.
    ///
    /// Fails on the first empty slot with
    /// [`ErrorKind::MissingInstance`](heapdex_foundation::ErrorKind::MissingInstance).
    pub fn try_from_slots<I>(slots: I) -> Result<Self>
    where
        I: IntoIterator<Item = Option<T>>,
    {
        Self::try_from_slots_with_config(slots, IndexConfig::default())
    }

    /// Like [`try_from_slots`](Self::try_from_slots), with a configuration.
    pub fn try_from_slots_with_config<I>(slots: I, config: IndexConfig) -> Result<Self>
    where
        I: IntoIterator<Item = Option<T>>,
    {
        let items = slots
            .into_iter()
            .enumerate()
            .map(|(position, slot)| slot.ok_or_else(|| Error::missing_instance(position)))
            .collect::<Result<Vec<T>>>()?;
        Ok(Self::with_config(items, config))
    }

    /// Looks up an instance by id.
    ///
    /// Returns `None` if no instance has the given id.
    #[must_use]
    pub fn get(&self, id: impl Into<InstanceId>) -> Option<&T> {
        self.position(id).and_then(|index| self.items.get(index))
    }

    /// Returns true if an instance with the given id is present.
    #[must_use]
    pub fn contains(&self, id: impl Into<InstanceId>) -> bool {
        self.position(id).is_some()
    }

    /// Returns the rank of `id` in ascending id order, if present.
    #[must_use]
    pub fn position(&self, id: impl Into<InstanceId>) -> Option<usize> {
        let id = id.into();
        self.items.binary_search_by_key(&id, Identified::id).ok()
    }

    /// Returns the ids of all instances in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = InstanceId> + '_ {
        self.items.iter().map(Identified::id)
    }
}

impl<T> Instances<T> {
    /// Removes every instance for which `predicate` returns true.
    ///
    /// Survivors keep their relative order, so the collection stays sorted.
    pub fn remove_if<F>(&mut self, mut predicate: F)
    where
        F: FnMut(&T) -> bool,
    {
        let before = self.items.len();
        self.items.retain(|item| !predicate(item));
        let removed = before - self.items.len();

        self.stats.removed += removed;
        if removed > 0 && self.config.shrink_after_removal {
            self.items.shrink_to_fit();
        }
        trace!(removed, remaining = self.items.len(), "pruned instances");
    }

    /// Returns the number of instances.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the collection holds no instances.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns an iterator over the instances in ascending id order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Returns the instance with the smallest id.
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    /// Returns the instance with the largest id.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    /// Returns the instances as a slice sorted by id.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Returns construction and pruning counters.
    #[must_use]
    pub fn stats(&self) -> &BuildStats {
        &self.stats
    }

    /// Returns the configuration this collection was built with.
    #[must_use]
    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    /// Consumes the collection, returning the instances sorted by id.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T> Default for Instances<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            stats: BuildStats::default(),
            config: IndexConfig::default(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Instances<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl<T: Identified> FromIterator<T> for Instances<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for Instances<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Instances<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
