//! Edge-indexed refinement: units are (arc, node) pairs and
//! every arc row runs a WL1-style refinement with its own
//! endpoints marked.

use custom_debug_derive::Debug;

use super::Refine;
use crate::{
    colour::{dense_rank, Colour, ColourKey},
    debug::Error,
    graph::{AdjList, VertexIndex},
    multiset::{Invariant, MultiSet},
};

#[derive(Debug)]
pub struct EdgeNodeRefinement<'a> {
    graph: &'a AdjList,
    arcs: &'a [(VertexIndex, VertexIndex)],
    #[debug(skip)]
    colour: Vec<Colour>,
}

impl<'a> EdgeNodeRefinement<'a> {
    pub fn new(graph: &'a AdjList, arcs: &'a [(VertexIndex, VertexIndex)]) -> Self {
        EdgeNodeRefinement {
            graph,
            arcs,
            colour: Vec::new(),
        }
    }

    fn n(&self) -> usize {
        self.graph.num_nodes()
    }

    /// Initial colour of unit (arc, k): whether k is an arc
    /// endpoint (if the identity marking is on) plus the
    /// precolours of both endpoints and of k.
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

        let mut keys = Vec::with_capacity(self.arcs.len() * n);
        for (start, end) in self.arcs {
            for k in 0..n {
                let mut parts = vec![ColourKey::Bool(identity && (k == *start || k == *end))];
                if let Some(precolour) = precolour {
                    parts.push(ColourKey::Int(precolour[*start]));
                    parts.push(ColourKey::Int(precolour[*end]));
                    parts.push(ColourKey::Int(precolour[k]));
                }
                keys.push(ColourKey::Seq(parts));
            }
        }

        self.colour = dense_rank(&keys);
        Ok(())
    }
}

impl Refine for EdgeNodeRefinement<'_> {
    fn colours(&self) -> &[Colour] {
        &self.colour
    }

    fn replace_colours(&mut self, colours: Vec<Colour>) {
        self.colour = colours;
    }

    /// WL1 aggregation within each arc row: own colour plus
    /// the sorted colours of the node's neighbours, all taken
    /// from the same row.
    fn aggregate(&self) -> Vec<ColourKey> {
        let n = self.n();
        let mut keys = Vec::with_capacity(self.colour.len());
        for row in self.colour.chunks(n) {
            for k in 0..n {
                keys.push(ColourKey::Seq(vec![
                    ColourKey::Int(row[k]),
                    ColourKey::sorted_ints(self.graph.neighbours(k).iter().map(|w| row[*w])),
                ]));
            }
        }
        keys
    }

    /// Multiset of per-arc-row multisets.
    fn pool(&self, stable: &[ColourKey]) -> Invariant {
        Invariant::Grouped(
            stable
                .chunks(self.n())
                .map(|row| row.iter().cloned().collect::<MultiSet<ColourKey>>())
                .collect(),
        )
    }
}
