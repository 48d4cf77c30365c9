//! 2-dimensional refinement over ordered vertex pairs and the
//! library of aggregation primitives that every 2-D hierarchy
//! member is composed from.
//!
//! The colouring is a row-major n×n matrix: entry `(u, v)` is
//! the colour `h(u, v)`. A named method is nothing more than a
//! list of primitives whose per-unit outputs are concatenated
//! into one composite key each round, plus a pooling rule.

use custom_debug_derive::Debug;
use itertools::Itertools;

use super::Refine;
use crate::{
    colour::{dense_rank, Colour, ColourKey},
    debug::Error,
    graph::AdjList,
    multiset::{Invariant, MultiSet},
};

/// One neighbour aggregation rule, evaluated for every ordered
/// pair `(u, v)` against the current colouring. The `u`/`v`
/// orientations follow the subgraph-WL literature: `LocalU`
/// aggregates along the row `h(u, ·)` but indexes it by the
/// neighbours of `v`, and vice versa for `LocalV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    /// h(u, v)
    PointwiseUv,
    /// h(v, u)
    PointwiseVu,
    /// h(u, u)
    PointwiseUu,
    /// h(v, v)
    PointwiseVv,
    /// sorted h(u, w) over all w
    GlobalU,
    /// sorted h(w, v) over all w
    GlobalV,
    /// sorted h(u, w) over w ∈ N(v)
    LocalU,
    /// sorted h(w, v) over w ∈ N(u)
    LocalV,
    /// sorted (h(u, w), h(w, v)) over all w
    FolkloreGlobal,
    /// sorted (h(u, w), h(w, v)) over w ∈ N(u)
    FolkloreLocalU,
    /// sorted (h(u, w), h(w, v)) over w ∈ N(v)
    FolkloreLocalV,
    /// sorted (h(u, w), h(w, v)) over w ∈ N(u) ∪ N(v)
    FolkloreLocalUv,
}

/// How the stable colouring is pooled into the invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pooling {
    /// One flat multiset over all pairs.
    All,
    /// Multiset of per-row multisets (fixed u).
    Vs,
    /// Multiset of per-column multisets (fixed v).
    Sv,
}

#[derive(Debug)]
pub struct PairRefinement<'a> {
    graph: &'a AdjList,
    #[debug(skip)]
    colour: Vec<Colour>,
    primitives: &'static [Primitive],
    pooling: Pooling,
}

impl<'a> PairRefinement<'a> {
    pub fn new(graph: &'a AdjList, primitives: &'static [Primitive], pooling: Pooling) -> Self {
        PairRefinement {
            graph,
            colour: Vec::new(),
            primitives,
            pooling,
        }
    }

    fn n(&self) -> usize {
        self.graph.num_nodes()
    }

    fn at(&self, u: usize, v: usize) -> Colour {
        self.colour[u * self.n() + v]
    }

    /// Initial pair colour: adjacency indicator, optionally the
    /// identity marker, and both endpoint precolours. The result
    /// is dense-ranked so later rounds work on small integers.
    pub fn initialize_colours(
        &mut self,
        identity: bool,
        precolour: Option<&[usize]>,
    ) -> Result<(), Error> {
        let n = self.n();
        if let Some(precolour) = precolour {
            if precolour.len() != n {
                return Err(Error::PrecolourMismatch {
                    expected: n,
                    found: precolour.len(),
                });
            }
        }

        let mut keys = Vec::with_capacity(n * n);
        for u in 0..n {
            for v in 0..n {
                let mut parts = vec![ColourKey::Bool(self.graph.has_edge(u, v))];
                if identity {
                    parts.push(ColourKey::Bool(u == v));
                }
                if let Some(precolour) = precolour {
                    parts.push(ColourKey::Int(precolour[u]));
                    parts.push(ColourKey::Int(precolour[v]));
                }
                keys.push(ColourKey::Seq(parts));
            }
        }

        self.colour = dense_rank(&keys);
        Ok(())
    }

    fn folklore_pair(&self, u: usize, v: usize, w: usize) -> ColourKey {
        ColourKey::Seq(vec![
            ColourKey::Int(self.at(u, w)),
            ColourKey::Int(self.at(w, v)),
        ])
    }

    /// Evaluate one primitive for every ordered pair.
    fn evaluate(&self, primitive: Primitive) -> Vec<ColourKey> {
        let n = self.n();
        let mut keys = Vec::with_capacity(n * n);

        match primitive {
            Primitive::PointwiseUv => {
                keys.extend(self.colour.iter().map(|c| ColourKey::Int(*c)));
            }
            Primitive::PointwiseVu => {
                for u in 0..n {
                    for v in 0..n {
                        keys.push(ColourKey::Int(self.at(v, u)));
                    }
                }
            }
            Primitive::PointwiseUu => {
                for u in 0..n {
                    let diagonal = ColourKey::Int(self.at(u, u));
                    keys.extend(std::iter::repeat(diagonal).take(n));
                }
            }
            Primitive::PointwiseVv => {
                for _ in 0..n {
                    for v in 0..n {
                        keys.push(ColourKey::Int(self.at(v, v)));
                    }
                }
            }
            Primitive::GlobalU => {
                for u in 0..n {
                    let row = ColourKey::sorted_ints((0..n).map(|w| self.at(u, w)));
                    keys.extend(std::iter::repeat(row).take(n));
                }
            }
            Primitive::GlobalV => {
                for _ in 0..n {
                    for v in 0..n {
                        keys.push(ColourKey::sorted_ints((0..n).map(|w| self.at(w, v))));
                    }
                }
            }
            Primitive::LocalU => {
                for u in 0..n {
                    for v in 0..n {
                        keys.push(ColourKey::sorted_ints(
                            self.graph.neighbours(v).iter().map(|w| self.at(u, *w)),
                        ));
                    }
                }
            }
            Primitive::LocalV => {
                for u in 0..n {
                    for v in 0..n {
                        keys.push(ColourKey::sorted_ints(
                            self.graph.neighbours(u).iter().map(|w| self.at(*w, v)),
                        ));
                    }
                }
            }
            Primitive::FolkloreGlobal => {
                for u in 0..n {
                    for v in 0..n {
                        keys.push(ColourKey::sorted_seq(
                            (0..n).map(|w| self.folklore_pair(u, v, w)),
                        ));
                    }
                }
            }
            Primitive::FolkloreLocalU => {
                for u in 0..n {
                    for v in 0..n {
                        keys.push(ColourKey::sorted_seq(
                            self.graph
                                .neighbours(u)
                                .iter()
                                .map(|w| self.folklore_pair(u, v, *w)),
                        ));
                    }
                }
            }
            Primitive::FolkloreLocalV => {
                for u in 0..n {
                    for v in 0..n {
                        keys.push(ColourKey::sorted_seq(
                            self.graph
                                .neighbours(v)
                                .iter()
                                .map(|w| self.folklore_pair(u, v, *w)),
                        ));
                    }
                }
            }
            Primitive::FolkloreLocalUv => {
                for u in 0..n {
                    for v in 0..n {
                        let union = self
                            .graph
                            .neighbours(u)
                            .iter()
                            .merge(self.graph.neighbours(v).iter())
                            .dedup();
                        keys.push(ColourKey::sorted_seq(
                            union.map(|w| self.folklore_pair(u, v, *w)),
                        ));
                    }
                }
            }
        }

        keys
    }
}

impl Refine for PairRefinement<'_> {
    fn colours(&self) -> &[Colour] {
        &self.colour
    }

    fn replace_colours(&mut self, colours: Vec<Colour>) {
        self.colour = colours;
    }

    /// Concatenate the configured primitives into one composite
    /// key per ordered pair.
    fn aggregate(&self) -> Vec<ColourKey> {
        let per_primitive: Vec<Vec<ColourKey>> = self
            .primitives
            .iter()
            .map(|primitive| self.evaluate(*primitive))
            .collect();

        (0..self.n() * self.n())
            .map(|unit| {
                ColourKey::Seq(
                    per_primitive
                        .iter()
                        .map(|column| column[unit].clone())
                        .collect(),
                )
            })
            .collect()
    }

    fn pool(&self, stable: &[ColourKey]) -> Invariant {
        let n = self.n();
        match self.pooling {
            Pooling::All => Invariant::Flat(stable.iter().cloned().collect()),
            Pooling::Vs => Invariant::Grouped(
                stable
                    .chunks(n)
                    .map(|row| row.iter().cloned().collect::<MultiSet<ColourKey>>())
                    .collect(),
            ),
            Pooling::Sv => Invariant::Grouped(
                (0..n)
                    .map(|v| {
                        (0..n)
                            .map(|u| stable[u * n + v].clone())
                            .collect::<MultiSet<ColourKey>>()
                    })
                    .collect(),
            ),
        }
    }
}
