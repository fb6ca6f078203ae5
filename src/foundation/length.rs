//! Container cardinality capability.
//!
//! The emptiness and size checks are generic over [`HasLength`] instead of
//! being duplicated per container type. Strings are deliberately not
//! covered here: text subjects go through the blank/length checks in
//! [`crate::argument::text`], which attach different diagnostic payload.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

// ============================================================================
// HAS LENGTH
// ============================================================================

/// Types with a cardinality: collections and maps.
pub trait HasLength {
    /// Number of elements (entries, for maps).
    fn length(&self) -> usize;

    /// True when the container holds no elements.
    fn is_empty(&self) -> bool {
        self.length() == 0
    }
}

impl<T> HasLength for [T] {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T> HasLength for Vec<T> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T> HasLength for VecDeque<T> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<K, V, S> HasLength for HashMap<K, V, S> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<K, V> HasLength for BTreeMap<K, V> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T, S> HasLength for HashSet<T, S> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T> HasLength for BTreeSet<T> {
    fn length(&self) -> usize {
        self.len()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_length() {
        let values = [1, 2, 3];
        assert_eq!(values[..].length(), 3);
        assert!(!values[..].is_empty());
    }

    #[test]
    fn map_length_counts_entries() {
        let mut map = HashMap::new();
        map.insert("a", 1);
        map.insert("b", 2);
        assert_eq!(map.length(), 2);
    }

    #[test]
    fn empty_set() {
        let set: BTreeSet<i32> = BTreeSet::new();
        assert_eq!(set.length(), 0);
        assert!(HasLength::is_empty(&set));
    }
}
