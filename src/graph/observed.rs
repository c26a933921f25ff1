//! Immutable adjacency view over the observed training graph

use ndarray::Array2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::split::EdgeSplit;
use crate::{Result, ScaledError};

/// Immutable undirected graph in compressed sparse row form.
///
/// This is the shared, read-only view every sampling call works against. It
/// must only ever contain observed (training) edges; when built through
/// [`ObservedGraph::from_split`] the validation/test positives are excluded
/// here, once, and nowhere else.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ObservedGraph {
    num_nodes: usize,
    /// CSR row offsets, `num_nodes + 1` entries
    offsets: Vec<usize>,
    /// Neighbor ids, ascending within each row
    targets: Vec<usize>,
    /// Per-arc weights, parallel to `targets`
    weights: Option<Vec<f32>>,
    /// Node feature matrix `[num_nodes, feature_dim]`
    node_features: Option<Array2<f32>>,
}

impl ObservedGraph {
    /// Build from an undirected edge list.
    ///
    /// Edges are canonicalized and deduplicated; self loops are dropped.
    /// Returns `InvalidConfig` if an endpoint is out of range.
    pub fn new(num_nodes: usize, edges: &[(usize, usize)]) -> Result<Self> {
        let weighted: Vec<(usize, usize, f32)> =
            edges.iter().map(|&(u, v)| (u, v, 1.0)).collect();
        Self::build(num_nodes, &weighted, false)
    }

    /// Build from a weighted undirected edge list
    pub fn new_weighted(num_nodes: usize, edges: &[(usize, usize, f32)]) -> Result<Self> {
        Self::build(num_nodes, edges, true)
    }

    /// Build the observed graph from an edge split, using training positives
    /// only. This is the single test-set leakage exclusion point.
    pub fn from_split(split: &EdgeSplit) -> Result<Self> {
        Self::new(split.num_nodes, &split.train_pos)
    }

    fn build(num_nodes: usize, edges: &[(usize, usize, f32)], weighted: bool) -> Result<Self> {
        let mut canonical: Vec<(usize, usize, f32)> = Vec::with_capacity(edges.len());
        for &(u, v, w) in edges {
            if u >= num_nodes || v >= num_nodes {
                return Err(ScaledError::InvalidConfig(format!(
                    "edge ({}, {}) out of range for {} nodes",
                    u, v, num_nodes
                )));
            }
            if u == v {
                continue;
            }
            canonical.push((u.min(v), u.max(v), w));
        }
        canonical.sort_by_key(|&(u, v, _)| (u, v));
        canonical.dedup_by_key(|&mut (u, v, _)| (u, v));

        let mut degrees = vec![0usize; num_nodes];
        for &(u, v, _) in &canonical {
            degrees[u] += 1;
            degrees[v] += 1;
        }
        let mut offsets = Vec::with_capacity(num_nodes + 1);
        offsets.push(0);
        for node in 0..num_nodes {
            offsets.push(offsets[node] + degrees[node]);
        }

        let total_arcs = offsets[num_nodes];
        let mut targets = vec![0usize; total_arcs];
        let mut arc_weights = vec![0f32; total_arcs];
        let mut cursor = offsets.clone();
        for &(u, v, w) in &canonical {
            targets[cursor[u]] = v;
            arc_weights[cursor[u]] = w;
            cursor[u] += 1;
            targets[cursor[v]] = u;
            arc_weights[cursor[v]] = w;
            cursor[v] += 1;
        }
        // Rows are sorted by construction: with canonical edges in (u, v)
        // order, a node first collects its smaller neighbors (ascending u
        // while it is the high endpoint), then its larger ones (ascending v).

        Ok(ObservedGraph {
            num_nodes,
            offsets,
            targets,
            weights: weighted.then_some(arc_weights),
            node_features: None,
        })
    }

    /// Attach a node feature matrix with one row per node
    pub fn with_node_features(mut self, features: Array2<f32>) -> Result<Self> {
        if features.shape()[0] != self.num_nodes {
            return Err(ScaledError::InvalidConfig(format!(
                "feature matrix has {} rows for {} nodes",
                features.shape()[0],
                self.num_nodes
            )));
        }
        self.node_features = Some(features);
        Ok(self)
    }

    /// Number of nodes
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    /// Number of undirected edges
    pub fn num_edges(&self) -> usize {
        self.targets.len() / 2
    }

    /// Degree of a node
    pub fn degree(&self, node: usize) -> usize {
        self.offsets[node + 1] - self.offsets[node]
    }

    /// Neighbors of a node, ascending
    pub fn neighbors(&self, node: usize) -> &[usize] {
        &self.targets[self.offsets[node]..self.offsets[node + 1]]
    }

    /// Whether the undirected edge `(u, v)` is observed
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        if u >= self.num_nodes || v >= self.num_nodes {
            return false;
        }
        self.neighbors(u).binary_search(&v).is_ok()
    }

    /// Uniformly random neighbor of a node.
    ///
    /// Fails with [`ScaledError::EmptyNeighborhood`] on an isolated node;
    /// samplers treat that as "no further expansion", not as a fatal error.
    pub fn random_neighbor<R: Rng>(&self, node: usize, rng: &mut R) -> Result<usize> {
        let row = self.neighbors(node);
        if row.is_empty() {
            return Err(ScaledError::EmptyNeighborhood(node));
        }
        Ok(row[rng.gen_range(0..row.len())])
    }

    /// Weight of the undirected edge `(u, v)`, if the graph is weighted
    pub fn edge_weight(&self, u: usize, v: usize) -> Option<f32> {
        let weights = self.weights.as_ref()?;
        let row = self.neighbors(u);
        let slot = row.binary_search(&v).ok()?;
        Some(weights[self.offsets[u] + slot])
    }

    /// True when per-edge weights are stored
    pub fn is_weighted(&self) -> bool {
        self.weights.is_some()
    }

    /// Node feature matrix, if attached
    pub fn node_features(&self) -> Option<&Array2<f32>> {
        self.node_features.as_ref()
    }
}
