//! Colour values for the refinement engines: composite,
//! totally ordered keys and the dense ranking that turns a
//! snapshot of keys back into small integers.

use std::collections::BTreeMap;

/// A colour after dense ranking. The alphabet of a ranked
/// snapshot is always `{0, ..., k - 1}` for k distinct keys.
pub type Colour = usize;

/// Composite colour key as produced by an aggregation round.
///
/// Nested sequences stand in for the heterogeneous tuples of
/// the usual presentations; the derived order is the canonical
/// total order over these keys. Aggregations over unordered
/// sets must sort their contributions before packaging them
/// into a `Seq`, otherwise ranking would not be deterministic.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum ColourKey {
    Bool(bool),
    Int(usize),
    Seq(Vec<ColourKey>),
}

impl ColourKey {
    /// Sorted sequence key over an unordered set of ranked colours.
    pub fn sorted_ints(colours: impl IntoIterator<Item = Colour>) -> Self {
        let mut elements: Vec<ColourKey> = colours.into_iter().map(ColourKey::Int).collect();
        elements.sort_unstable();
        ColourKey::Seq(elements)
    }

    /// Sorted sequence key over an unordered set of composite keys.
    pub fn sorted_seq(keys: impl IntoIterator<Item = ColourKey>) -> Self {
        let mut elements: Vec<ColourKey> = keys.into_iter().collect();
        elements.sort_unstable();
        ColourKey::Seq(elements)
    }
}

/// Relabel the keys to the smallest unused nonnegative integers,
/// preserving equality classes and the induced order.
pub fn dense_rank(keys: &[ColourKey]) -> Vec<Colour> {
    let mut ranks: BTreeMap<&ColourKey, Colour> = BTreeMap::new();
    for key in keys {
        ranks.insert(key, 0);
    }
    for (rank, slot) in ranks.values_mut().enumerate() {
        *slot = rank;
    }

    keys.iter().map(|key| ranks[key]).collect()
}
