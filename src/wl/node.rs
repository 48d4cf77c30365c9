//! Classic 1-dimensional WL refinement over node colours.

use super::Refine;
use crate::{
    colour::{dense_rank, Colour, ColourKey},
    debug::Error,
    graph::AdjList,
    multiset::Invariant,
};

pub struct NodeRefinement<'a> {
    graph: &'a AdjList,
    colour: Vec<Colour>,
}

impl<'a> NodeRefinement<'a> {
    pub fn new(graph: &'a AdjList) -> Self {
        NodeRefinement {
            graph,
            colour: Vec::new(),
        }
    }

    /// Initial colouring: the precolour partition if one is
    /// supplied, otherwise the uniform colouring.
    pub fn initialize_colours(&mut self, precolour: Option<&[usize]>) -> Result<(), Error> {
        let n = self.graph.num_nodes();
        self.colour = match precolour {
            Some(precolour) => {
                if precolour.len() != n {
                    return Err(Error::PrecolourMismatch {
                        expected: n,
                        found: precolour.len(),
                    });
                }
                dense_rank(&precolour.iter().map(|p| ColourKey::Int(*p)).collect::<Vec<_>>())
            }
            None => vec![0; n],
        };
        Ok(())
    }
}

impl Refine for NodeRefinement<'_> {
    fn colours(&self) -> &[Colour] {
        &self.colour
    }

    fn replace_colours(&mut self, colours: Vec<Colour>) {
        self.colour = colours;
    }

    /// Each node aggregates its own colour plus the sorted
    /// colours of its neighbours.
    fn aggregate(&self) -> Vec<ColourKey> {
        (0..self.graph.num_nodes())
            .map(|node| {
                ColourKey::Seq(vec![
                    ColourKey::Int(self.colour[node]),
                    ColourKey::sorted_ints(
                        self.graph.neighbours(node).iter().map(|w| self.colour[*w]),
                    ),
                ])
            })
            .collect()
    }

    fn pool(&self, stable: &[ColourKey]) -> Invariant {
        Invariant::Flat(stable.iter().cloned().collect())
    }
}
