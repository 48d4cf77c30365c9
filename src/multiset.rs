//! Order-independent multisets and the graph invariant
//! that a refinement run is pooled into.

use std::collections::BTreeMap;

use crate::colour::ColourKey;

/// Multiset with structural equality. It is itself ordered so
/// that multisets can nest (row/column pooling of 2-D colourings).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct MultiSet<T: Ord> {
    counts: BTreeMap<T, usize>,
}

impl<T: Ord> MultiSet<T> {
    pub fn add(&mut self, element: T) {
        *self.counts.entry(element).or_insert(0) += 1;
    }

    pub fn len(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn count(&self, element: &T) -> usize {
        self.counts.get(element).copied().unwrap_or(0)
    }
}

impl<T: Ord> std::iter::FromIterator<T> for MultiSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut multiset = MultiSet {
            counts: BTreeMap::new(),
        };
        for element in iter {
            multiset.add(element);
        }
        multiset
    }
}

/// Final comparable output of a refinement run. Flat for methods
/// that pool over all units at once, grouped for the row/column
/// pooling rules of the 2-D and edge-indexed methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invariant {
    Flat(MultiSet<ColourKey>),
    Grouped(MultiSet<MultiSet<ColourKey>>),
}
