//! Ordered, multi-valued side-channel metadata attached to an [`Outcome`](crate::Outcome).
use core::any::{type_name, Any};
use core::fmt::{self, Debug};
use std::collections::HashMap;
use std::sync::Arc;

use crate::types::{InlineVec, PropertyKind};

/// Type-erased property value.
///
/// # Examples
///
/// ```
/// use outcome_rail::PropertyValue;
///
/// let value = PropertyValue::new(42_u32);
/// assert!(value.is::<u32>());
/// assert_eq!(value.downcast_ref::<u32>(), Some(&42));
/// assert_eq!(value.downcast_ref::<i64>(), None);
/// ```
#[derive(Clone)]
pub struct PropertyValue {
    value: Arc<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl PropertyValue {
    /// Wraps an arbitrary value.
    pub fn new<V: Any + Send + Sync>(value: V) -> Self {
        Self { value: Arc::new(value), type_name: type_name::<V>() }
    }

    /// Returns `true` if the wrapped value is a `V`.
    #[inline]
    pub fn is<V: Any>(&self) -> bool {
        self.value.is::<V>()
    }

    #[inline]
    pub fn downcast_ref<V: Any>(&self) -> Option<&V> {
        self.value.downcast_ref::<V>()
    }

    /// Type name of the wrapped value, for diagnostics.
    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl Debug for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PropertyValue").field(&self.type_name).finish()
    }
}

/// Values attached under a single property key, in insertion order.
pub type PropertyValues = InlineVec<PropertyValue>;

/// Map from property key to its ordered values.
///
/// Setting a key again appends rather than overwrites.
#[derive(Debug, Clone, Default)]
pub struct PropertyBag {
    entries: HashMap<PropertyKind, PropertyValues>,
}

impl PropertyBag {
    /// Appends `value` under `kind`, creating the list on first use.
    pub fn push(&mut self, kind: PropertyKind, value: PropertyValue) {
        self.entries.entry(kind).or_default().push(value);
    }

    #[inline]
    pub fn contains(&self, kind: &PropertyKind) -> bool {
        self.entries.contains_key(kind)
    }

    /// Values set under `kind`, or `None` if the key was never set.
    #[inline]
    pub fn get(&self, kind: &PropertyKind) -> Option<&[PropertyValue]> {
        self.entries.get(kind).map(|values| values.as_slice())
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct keys.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterates keys with their values; key order is unspecified.
    pub fn iter(&self) -> impl Iterator<Item = (&PropertyKind, &[PropertyValue])> {
        self.entries.iter().map(|(kind, values)| (kind, values.as_slice()))
    }
}
