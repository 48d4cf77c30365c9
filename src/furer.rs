//! The Fürer gadget construction: blow each vertex up into one
//! gadget vertex per even-cardinality subset of its incident
//! half-edges and wire gadget vertices of adjacent originals
//! with a parity rule. Twisting the parity across a single
//! original edge yields the classic non-isomorphic pair that
//! low-dimensional refinement cannot tell apart.

use itertools::Itertools;

use crate::{
    debug::Error,
    graph::{AdjList, EdgeList, VertexIndex},
};

/// One gadget vertex: an even-cardinality subset of the
/// origin's incident half-edges, identified by the neighbours
/// at their far ends. The subset is kept sorted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FurerNode {
    origin: VertexIndex,
    subset: Vec<VertexIndex>,
}

impl FurerNode {
    fn contains(&self, vertex: VertexIndex) -> bool {
        self.subset.binary_search(&vertex).is_ok()
    }

    /// Parity rule: gadget vertices of distinct adjacent
    /// originals u, v with subsets S, T are connected iff
    /// `(v ∈ S) == (u ∈ T)`, inverted across a twisted edge.
    fn is_connected(&self, other: &FurerNode, twisted: bool) -> bool {
        if self.origin == other.origin {
            return false;
        }
        let forward = self.contains(other.origin);
        let backward = other.contains(self.origin);
        (forward == backward) ^ twisted
    }
}

/// All even-cardinality subsets of a sorted neighbour set, the
/// empty subset included. A vertex of degree d yields 2^(d-1)
/// of them.
fn even_subsets(neighbours: &[VertexIndex]) -> Vec<Vec<VertexIndex>> {
    neighbours
        .iter()
        .copied()
        .powerset()
        .filter(|subset| subset.len() % 2 == 0)
        .collect()
}

/// A fully expanded gadget graph over a base graph, with an
/// optional twist set of base edges.
#[derive(Debug)]
pub struct FurerGraph {
    nodes: Vec<FurerNode>,
    twist: Vec<(VertexIndex, VertexIndex)>,
}

impl FurerGraph {
    /// Expand `base` into its gadget graph. Every twist pair
    /// must be an edge of the base graph.
    pub fn new(base: &AdjList, twist: Vec<(VertexIndex, VertexIndex)>) -> Result<Self, Error> {
        for (start, end) in &twist {
            if !base.has_edge(*start, *end) {
                return Err(Error::TwistNotAnEdge(*start, *end));
            }
        }

        let nodes = (0..base.num_nodes())
            .flat_map(|origin| {
                even_subsets(base.neighbours(origin))
                    .into_iter()
                    .map(move |subset| FurerNode { origin, subset })
            })
            .collect();

        Ok(FurerGraph { nodes, twist })
    }

    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    fn is_twisted(&self, left: &FurerNode, right: &FurerNode) -> bool {
        self.twist.iter().any(|(start, end)| {
            (*start, *end) == (left.origin, right.origin)
                || (*start, *end) == (right.origin, left.origin)
        })
    }

    /// Arc list of the gadget graph, both directions per edge.
    pub fn to_sparse(&self) -> EdgeList {
        let mut arcs = Vec::new();
        for (i, left) in self.nodes.iter().enumerate() {
            for (j, right) in self.nodes.iter().enumerate() {
                if left.is_connected(right, self.is_twisted(left, right)) {
                    arcs.push((i, j));
                }
            }
        }
        arcs
    }

    /// Per-gadget-vertex precolour: the originating base vertex.
    /// Downstream refinement needs it to align structural position.
    pub fn precolour(&self) -> Vec<usize> {
        self.nodes.iter().map(|node| node.origin).collect()
    }
}

/// The gadget pair of a base graph together with the
/// precolourings that feed the refinement pipeline.
#[derive(Debug)]
pub struct FurerPair {
    pub g_edges: EdgeList,
    pub h_edges: EdgeList,
    pub g_precolour: Vec<usize>,
    pub h_precolour: Vec<usize>,
}

/// Build the untwisted gadget graph G and the variant H whose
/// single twisted edge is the first arc of the input. The input
/// must contain at least one arc and no self-loops.
pub fn furer_pair(edges: &[(VertexIndex, VertexIndex)]) -> Result<FurerPair, Error> {
    if edges.is_empty() {
        return Err(Error::EmptyGraph);
    }
    if let Some((vertex, _)) = edges.iter().find(|(start, end)| start == end) {
        return Err(Error::SelfLoop(*vertex));
    }

    let base = AdjList::from_sparse(edges);
    let g = FurerGraph::new(&base, Vec::new())?;
    let h = FurerGraph::new(&base, vec![edges[0]])?;

    Ok(FurerPair {
        g_edges: g.to_sparse(),
        h_edges: h.to_sparse(),
        g_precolour: g.precolour(),
        h_precolour: h.precolour(),
    })
}

#[cfg(test)]
mod test {
    use super::*;

    fn both_directions(edges: &[(usize, usize)]) -> EdgeList {
        edges
            .iter()
            .flat_map(|(a, b)| vec![(*a, *b), (*b, *a)])
            .collect()
    }

    fn triangle() -> EdgeList {
        both_directions(&[(0, 1), (1, 2), (2, 0)])
    }

    fn four_clique() -> EdgeList {
        both_directions(&[(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)])
    }

    fn connected_components(adj: &AdjList) -> usize {
        let n = adj.num_nodes();
        let mut seen = vec![false; n];
        let mut components = 0;
        for root in 0..n {
            if seen[root] {
                continue;
            }
            components += 1;
            let mut stack = vec![root];
            while let Some(vertex) = stack.pop() {
                if std::mem::replace(&mut seen[vertex], true) {
                    continue;
                }
                stack.extend(adj.neighbours(vertex).iter().filter(|w| !seen[**w]));
            }
        }
        components
    }

    /// Subgraph induced on the neighbourhood of `vertex`.
    fn neighbourhood(adj: &AdjList, vertex: usize) -> AdjList {
        let neighbours = adj.neighbours(vertex);
        let mut induced = AdjList::new(neighbours.len());
        for (i, a) in neighbours.iter().enumerate() {
            for (j, b) in neighbours.iter().enumerate() {
                if i < j && adj.has_edge(*a, *b) {
                    induced.add_edge(i, j);
                }
            }
        }
        induced
    }

    #[test]
    fn test_triangle_gadgets() -> Result<(), Error> {
        // Degree-2 vertices expand to two gadget vertices each:
        // untwisted, the empty and the full subsets form two
        // disjoint triangles; the twist merges them into a
        // 6-cycle.
        let pair = furer_pair(&triangle())?;

        assert_eq!(vec![0, 0, 1, 1, 2, 2], pair.g_precolour);
        assert_eq!(pair.g_precolour, pair.h_precolour);

        let g = AdjList::from_sparse(&pair.g_edges);
        let h = AdjList::from_sparse(&pair.h_edges);
        assert_eq!(6, g.num_nodes());
        assert_eq!(6, h.num_nodes());
        for vertex in 0..6 {
            assert_eq!(2, g.neighbours(vertex).len());
            assert_eq!(2, h.neighbours(vertex).len());
        }

        assert_eq!(2, connected_components(&g));
        assert_eq!(1, connected_components(&h));
        Ok(())
    }

    #[test]
    fn test_four_clique_gadgets_are_rook_and_shrikhande() -> Result<(), Error> {
        let pair = furer_pair(&four_clique())?;

        let g = AdjList::from_sparse(&pair.g_edges);
        let h = AdjList::from_sparse(&pair.h_edges);

        // Both are 6-regular on 16 vertices, strongly regular
        // with identical parameters.
        assert_eq!(16, g.num_nodes());
        assert_eq!(16, h.num_nodes());
        for vertex in 0..16 {
            assert_eq!(6, g.neighbours(vertex).len());
            assert_eq!(6, h.neighbours(vertex).len());
        }

        // They differ in their neighbourhood structure: in the
        // 4×4 rook's graph every neighbourhood is two disjoint
        // triangles, in the Shrikhande graph it is a 6-cycle.
        // That also proves the pair non-isomorphic.
        for vertex in 0..16 {
            let g_hood = neighbourhood(&g, vertex);
            assert_eq!(2, connected_components(&g_hood));
            for inner in 0..6 {
                assert_eq!(2, g_hood.neighbours(inner).len());
            }

            let h_hood = neighbourhood(&h, vertex);
            assert_eq!(1, connected_components(&h_hood));
            for inner in 0..6 {
                assert_eq!(2, h_hood.neighbours(inner).len());
            }
        }
        Ok(())
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(matches!(furer_pair(&[]), Err(Error::EmptyGraph)));
        assert!(matches!(
            furer_pair(&[(0, 1), (1, 0), (2, 2)]),
            Err(Error::SelfLoop(2))
        ));

        let base = AdjList::from_sparse(&triangle());
        assert!(matches!(
            FurerGraph::new(&base, vec![(0, 4)]),
            Err(Error::TwistNotAnEdge(0, 4))
        ));
    }

    #[test]
    fn test_even_subsets() {
        assert_eq!(vec![Vec::<usize>::new()], even_subsets(&[]));

        let subsets = even_subsets(&[1, 4, 7]);
        assert_eq!(4, subsets.len());
        assert!(subsets.contains(&vec![]));
        assert!(subsets.contains(&vec![1, 4]));
        assert!(subsets.contains(&vec![1, 7]));
        assert!(subsets.contains(&vec![4, 7]));
    }
}
