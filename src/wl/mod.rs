//! The generic colour refinement engine behind every
//! WL-type method.
//!
//! A method only has to say three things: how its units get
//! their initial colours, how one round aggregates colours
//! into composite keys, and how the stable colouring is
//! pooled into a graph invariant. The fixpoint loop itself is
//! shared: aggregate, dense-rank, repeat until the colouring
//! no longer changes. Refinement only ever splits colour
//! classes, so the loop is bounded by the unit count.

use crate::{
    colour::{dense_rank, Colour, ColourKey},
    multiset::Invariant,
};

mod node;
pub use node::NodeRefinement;

mod pair;
pub use pair::{PairRefinement, Pooling, Primitive};

mod edge;
pub use edge::EdgeNodeRefinement;

pub trait Refine {
    /// Current colouring, one entry per unit.
    fn colours(&self) -> &[Colour];

    /// Replace the colouring with the next ranked round.
    fn replace_colours(&mut self, colours: Vec<Colour>);

    /// One raw aggregate key per unit, computed against the
    /// current colouring.
    fn aggregate(&self) -> Vec<ColourKey>;

    /// Pool the raw aggregate of the stable colouring into
    /// the comparable invariant.
    fn pool(&self, stable: &[ColourKey]) -> Invariant;

    /// Run one refinement round. Returns true once the
    /// colouring is stable, i.e. unchanged element-wise.
    fn step(&mut self) -> bool {
        let next = dense_rank(&self.aggregate());
        let stable = next == self.colours();
        self.replace_colours(next);
        stable
    }

    /// Refine until stable. Returns the number of rounds run.
    fn run_to_fixpoint(&mut self) -> usize {
        // Each non-final round splits at least one colour class
        // and there are at most `unit_count` classes, so the
        // loop must stop within unit_count + 1 rounds. A rogue
        // aggregation rule that merges classes would run forever;
        // the assert catches it.
        let round_cap = self.colours().len() + 1;
        let mut rounds = 0;
        while !self.step() {
            rounds += 1;
            assert!(
                rounds <= round_cap,
                "colour refinement exceeded the unit bound of {} rounds",
                round_cap
            );
        }
        rounds + 1
    }

    /// The multiset invariant of the stable colouring.
    fn representation(&mut self) -> Invariant {
        self.run_to_fixpoint();
        let stable = self.aggregate();
        self.pool(&stable)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::graph::AdjList;

    #[test]
    fn test_fixpoint_within_unit_bound() {
        // Path on 6 vertices: endpoints split first, then the
        // split propagates inwards.
        let mut path = AdjList::new(6);
        for i in 0..5 {
            path.add_edge(i, i + 1);
        }

        let mut refinement = NodeRefinement::new(&path);
        refinement.initialize_colours(None).unwrap();
        let rounds = refinement.run_to_fixpoint();
        assert!(rounds <= path.num_nodes() + 1);

        // 6 vertices fall into 3 degree/distance classes.
        let distinct = itertools::Itertools::unique(refinement.colours().iter()).count();
        assert_eq!(3, distinct);
    }

    #[test]
    fn test_step_reports_stability() {
        // A cycle is already uniform; the first round changes
        // nothing beyond re-ranking.
        let mut cycle = AdjList::new(3);
        cycle.add_edge(0, 1);
        cycle.add_edge(1, 2);
        cycle.add_edge(2, 0);

        let mut refinement = NodeRefinement::new(&cycle);
        refinement.initialize_colours(None).unwrap();
        assert!(refinement.step());
    }
}
