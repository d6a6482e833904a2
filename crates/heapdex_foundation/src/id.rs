//! Instance identifiers and the [`Identified`] capability.

use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifier of a heap instance.
///
/// Heap dumps identify objects by a 64-bit value, usually the object's
/// address at the time the dump was taken. Ordering is plain numeric
/// ordering of the underlying `u64`, so ids with the top bit set (tagged
/// pointers, kernel-half addresses) sort after every smaller address rather
/// than before zero.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct InstanceId(u64);

impl InstanceId {
    /// Creates an identifier from its raw value.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw 64-bit value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for InstanceId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl From<InstanceId> for u64 {
    fn from(id: InstanceId) -> Self {
        id.0
    }
}

impl fmt::Debug for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "InstanceId({:#x})", self.0)
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{:#x}", self.0)
    }
}

/// Something that carries a stable [`InstanceId`].
///
/// The identifier must not change while the value is stored in an
/// id-indexed collection; collections sort and search on it once and
/// never re-validate.
pub trait Identified {
    /// Returns this value's identifier.
    fn id(&self) -> InstanceId;
}

impl Identified for InstanceId {
    fn id(&self) -> InstanceId {
        *self
    }
}

impl<T: Identified + ?Sized> Identified for &T {
    fn id(&self) -> InstanceId {
        (**self).id()
    }
}

impl<T: Identified + ?Sized> Identified for Box<T> {
    fn id(&self) -> InstanceId {
        (**self).id()
    }
}

impl<T: Identified + ?Sized> Identified for Rc<T> {
    fn id(&self) -> InstanceId {
        (**self).id()
    }
}

impl<T: Identified + ?Sized> Identified for Arc<T> {
    fn id(&self) -> InstanceId {
        (**self).id()
    }
}
