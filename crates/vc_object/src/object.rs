use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;
use core::hash::BuildHasher;

use foldhash::fast::{FixedState, FoldHasher};
use hashbrown::HashMap;
use hashbrown::hash_map::{Iter, Keys, Values};

use crate::Node;

// -----------------------------------------------------------------------------
// Sequences

/// A homogeneous sequence of objects.
pub type ObjectArray = Vec<Object>;

/// A heterogeneous sequence of nodes.
pub type Array = Vec<Node>;

// -----------------------------------------------------------------------------
// KeyHashState

/// A fixed hash seed.
const FIXED_HASH_STATE: FixedState = FixedState::with_seed(0x95EE04C4F326B271);

/// Hash state used for object keys.
///
/// Based on `foldhash` with a fixed seed, so hashing only depends on the key.
#[derive(Copy, Clone, Default, Debug)]
pub struct KeyHashState;

impl BuildHasher for KeyHashState {
    type Hasher = FoldHasher<'static>;

    #[inline(always)]
    fn build_hasher(&self) -> Self::Hasher {
        FIXED_HASH_STATE.build_hasher()
    }
}

// -----------------------------------------------------------------------------
// Object

/// A string-keyed map of [`Node`]s, the container that paths walk through.
///
/// Iteration order is unspecified.
///
/// Keys are opaque strings. A key containing `.` can be stored, but no path
/// can ever reach it since `.` always separates path segments.
///
/// # Examples
///
/// ```
/// use vc_object::{Node, Object};
///
/// let mut object = Object::new();
/// object.insert("name", "Ann");
/// object.insert("age", 30_i32);
///
/// assert_eq!(object.len(), 2);
/// assert_eq!(object.get("age"), Some(&Node::I32(30)));
/// ```
#[derive(Clone, Default, PartialEq)]
pub struct Object {
    entries: HashMap<Box<str>, Node, KeyHashState>,
}

impl Object {
    /// Creates an empty `Object`.
    #[inline]
    pub fn new() -> Self {
        Self {
            entries: HashMap::with_hasher(KeyHashState),
        }
    }

    /// Creates an empty `Object` with at least the specified capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity_and_hasher(capacity, KeyHashState),
        }
    }

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the object holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the node stored directly under `key`.
    ///
    /// `key` is matched literally, it is not interpreted as a path.
    #[inline]
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.entries.get(key)
    }

    /// Returns `true` if a node is stored directly under `key`.
    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Inserts a node, returning the previous node stored under `key`.
    pub fn insert(&mut self, key: impl Into<Box<str>>, value: impl Into<Node>) -> Option<Node> {
        let key = key.into();
        if key.contains('.') {
            log::debug!("object key `{key}` contains `.` and is unreachable by path access");
        }
        self.entries.insert(key, value.into())
    }

    /// Returns an iterator over the entries.
    #[inline]
    pub fn iter(&self) -> Iter<'_, Box<str>, Node> {
        self.entries.iter()
    }

    /// Returns an iterator over the keys.
    #[inline]
    pub fn keys(&self) -> Keys<'_, Box<str>, Node> {
        self.entries.keys()
    }

    /// Returns an iterator over the nodes.
    #[inline]
    pub fn values(&self) -> Values<'_, Box<str>, Node> {
        self.entries.values()
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries.iter()).finish()
    }
}

impl<K: Into<Box<str>>, V: Into<Node>> Extend<(K, V)> for Object {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.entries.reserve(iter.size_hint().0);
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Into<Box<str>>, V: Into<Node>> FromIterator<(K, V)> for Object {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut object = Object::new();
        object.extend(iter);
        object
    }
}

impl<'a> IntoIterator for &'a Object {
    type Item = (&'a Box<str>, &'a Node);
    type IntoIter = Iter<'a, Box<str>, Node>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// -----------------------------------------------------------------------------
// Tests
