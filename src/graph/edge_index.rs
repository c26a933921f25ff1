//! Sparse edge connectivity in coordinate form

use serde::{Deserialize, Serialize};

/// Edge index representation for sparse adjacency.
///
/// Stores directed arcs as parallel source/destination vectors. Undirected
/// edges are represented by a mirrored arc pair; [`EdgeIndex::from_canonical`]
/// keeps the two directions of each edge adjacent so per-edge annotations
/// (weights, masks) stay aligned.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeIndex {
    /// Source node for each arc
    pub src: Vec<usize>,
    /// Destination node for each arc
    pub dst: Vec<usize>,
}

impl EdgeIndex {
    /// Create an empty edge index
    pub fn new() -> Self {
        EdgeIndex::default()
    }

    /// Create from a list of directed arcs
    pub fn from_arcs(arcs: Vec<(usize, usize)>) -> Self {
        let (src, dst): (Vec<_>, Vec<_>) = arcs.into_iter().unzip();
        EdgeIndex { src, dst }
    }

    /// Create from canonical undirected edges, emitting both directions.
    ///
    /// For each `(u, v)` the arcs `u -> v` and `v -> u` are pushed back to
    /// back, so arc `2i` and `2i + 1` always belong to canonical edge `i`.
    pub fn from_canonical(edges: &[(usize, usize)]) -> Self {
        let mut index = EdgeIndex {
            src: Vec::with_capacity(edges.len() * 2),
            dst: Vec::with_capacity(edges.len() * 2),
        };
        for &(u, v) in edges {
            index.push_undirected(u, v);
        }
        index
    }

    /// Append both directions of an undirected edge
    pub fn push_undirected(&mut self, u: usize, v: usize) {
        self.src.push(u);
        self.dst.push(v);
        self.src.push(v);
        self.dst.push(u);
    }

    /// Number of directed arcs
    pub fn num_edges(&self) -> usize {
        self.src.len()
    }

    /// True when no arcs are stored
    pub fn is_empty(&self) -> bool {
        self.src.is_empty()
    }

    /// Iterate over arcs as `(src, dst)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.src.iter().copied().zip(self.dst.iter().copied())
    }

    /// Adjacency-list view for `num_nodes` nodes
    pub fn to_adjacency_list(&self, num_nodes: usize) -> Vec<Vec<usize>> {
        let mut adj = vec![Vec::new(); num_nodes];
        for (s, d) in self.iter() {
            adj[s].push(d);
        }
        adj
    }

    /// Per-node arc-out degree for `num_nodes` nodes
    pub fn out_degrees(&self, num_nodes: usize) -> Vec<usize> {
        let mut degrees = vec![0; num_nodes];
        for &s in &self.src {
            degrees[s] += 1;
        }
        degrees
    }
}
