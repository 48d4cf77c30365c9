//! Minimal adjacency representation of undirected
//! graphs together with conversions between the
//! sparse (arc list) and dense (0/1 matrix) forms.

pub type VertexIndex = usize;

/// Sparse form of a graph: a list of directed arcs.
/// An undirected edge is represented by both of its arcs,
/// matching the 2×m layout of the usual edge-index matrices.
pub type EdgeList = Vec<(VertexIndex, VertexIndex)>;

#[derive(Debug, PartialEq, Eq)]
pub enum GraphError {
    /// A dense adjacency matrix was not square.
    NotSquare { rows: usize, columns: usize },
}

/// Fixed layout adjacency list. Every vertex in `[0, num_nodes)`
/// has a (possibly empty) neighbour entry, even if it never
/// occurred in the input arcs.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct AdjList {
    neighbours: Vec<Vec<VertexIndex>>,
    edge_number: usize,
}

impl AdjList {
    pub fn new(n: usize) -> Self {
        AdjList {
            neighbours: vec![Vec::new(); n],
            edge_number: 0,
        }
    }

    pub fn num_nodes(&self) -> usize {
        self.neighbours.len()
    }

    /// Number of directed arcs.
    pub fn num_edges(&self) -> usize {
        self.edge_number
    }

    /// Sorted neighbour set of `vertex`.
    pub fn neighbours(&self, vertex: VertexIndex) -> &[VertexIndex] {
        &self.neighbours[vertex]
    }

    pub fn has_edge(&self, start: VertexIndex, end: VertexIndex) -> bool {
        self.neighbours
            .get(start)
            .map_or(false, |ends| ends.binary_search(&end).is_ok())
    }

    fn add_arc(&mut self, start: VertexIndex, end: VertexIndex) {
        let needed = start.max(end) + 1;
        if needed > self.neighbours.len() {
            self.neighbours.resize(needed, Vec::new());
        }
        let ends = &mut self.neighbours[start];
        if let Err(position) = ends.binary_search(&end) {
            ends.insert(position, end);
            self.edge_number += 1;
        }
    }

    /// Add an undirected edge, i.e. both arcs. Grows the
    /// vertex range as needed and ignores duplicates.
    pub fn add_edge(&mut self, start: VertexIndex, end: VertexIndex) {
        self.add_arc(start, end);
        self.add_arc(end, start);
    }

    /// Build from a sparse arc list. The vertex range is
    /// `[0, max index + 1)`; duplicate arcs are dropped.
    pub fn from_sparse(edges: &[(VertexIndex, VertexIndex)]) -> Self {
        let mut adj = AdjList::new(0);
        for (start, end) in edges {
            adj.add_arc(*start, *end);
        }
        adj
    }

    /// Build from a dense 0/1 adjacency matrix.
    pub fn from_dense(matrix: &[Vec<bool>]) -> Result<Self, GraphError> {
        let n = matrix.len();
        let mut adj = AdjList::new(n);
        for (start, row) in matrix.iter().enumerate() {
            if row.len() != n {
                return Err(GraphError::NotSquare {
                    rows: n,
                    columns: row.len(),
                });
            }
            for (end, connected) in row.iter().enumerate() {
                if *connected {
                    adj.add_arc(start, end);
                }
            }
        }
        Ok(adj)
    }

    pub fn to_sparse(&self) -> EdgeList {
        self.neighbours
            .iter()
            .enumerate()
            .flat_map(|(start, ends)| ends.iter().map(move |end| (start, *end)))
            .collect()
    }

    pub fn to_dense(&self) -> Vec<Vec<bool>> {
        let n = self.num_nodes();
        let mut matrix = vec![vec![false; n]; n];
        for (start, ends) in self.neighbours.iter().enumerate() {
            for end in ends {
                matrix[start][*end] = true;
            }
        }
        matrix
    }
}
