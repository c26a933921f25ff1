//! Assembled per-pair subgraph records

use ndarray::Array2;
use petgraph::graph::UnGraph;
use serde::{Deserialize, Serialize};

use crate::graph::EdgeIndex;
use crate::{Result, ScaledError};

/// One candidate pair's enclosing subgraph, ready for batching.
///
/// Node ids are local, with the source pinned at [`Self::SRC`] and the
/// destination at [`Self::DST`]. The edge list keeps both directions of each
/// undirected edge; arcs belonging to the target link itself are flagged in
/// `target_mask` and must be filtered out of anything message passing sees:
/// use [`EnclosingSubgraphRecord::message_edges`] or
/// [`EnclosingSubgraphRecord::masked_edge_index`] rather than reading
/// `edge_index` raw.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnclosingSubgraphRecord {
    /// Position of the originating pair in the candidate list
    pub pair_index: usize,
    /// Global node id for each local index
    pub node_ids: Vec<usize>,
    /// Local adjacency, both directions per undirected edge
    pub edge_index: EdgeIndex,
    /// Per-arc weight, parallel to `edge_index`
    pub edge_weight: Vec<f32>,
    /// Per-arc target flag: true marks the link being predicted
    pub target_mask: Vec<bool>,
    /// Per-node label classes
    pub node_labels: Vec<usize>,
    /// Optional per-node feature matrix
    pub node_features: Option<Array2<f32>>,
    /// Ground truth for the candidate link
    pub link_label: bool,
}

impl EnclosingSubgraphRecord {
    /// Local index of the source node
    pub const SRC: usize = 0;
    /// Local index of the destination node
    pub const DST: usize = 1;

    /// Number of nodes in the subgraph
    pub fn num_nodes(&self) -> usize {
        self.node_ids.len()
    }

    /// Number of directed arcs, including masked target arcs
    pub fn num_edges(&self) -> usize {
        self.edge_index.num_edges()
    }

    /// Number of directed arcs visible to message passing
    pub fn num_message_edges(&self) -> usize {
        self.target_mask.iter().filter(|&&m| !m).count()
    }

    /// Arcs visible to message passing: `(src, dst, weight)` with every
    /// target arc removed
    pub fn message_edges(&self) -> impl Iterator<Item = (usize, usize, f32)> + '_ {
        self.edge_index
            .iter()
            .zip(&self.edge_weight)
            .zip(&self.target_mask)
            .filter(|&(_, &masked)| !masked)
            .map(|(((s, d), &w), _)| (s, d, w))
    }

    /// Mask-filtered copies of the edge index and weights
    pub fn masked_edge_index(&self) -> (EdgeIndex, Vec<f32>) {
        let mut index = EdgeIndex::new();
        let mut weights = Vec::new();
        for (s, d, w) in self.message_edges() {
            index.src.push(s);
            index.dst.push(d);
            weights.push(w);
        }
        (index, weights)
    }

    /// Check that every arc between the two endpoints is target-flagged.
    ///
    /// An unmasked target arc would silently corrupt evaluation, so this is
    /// a fatal invariant, checked at assembly and available to consumers.
    pub fn verify_masked(&self) -> Result<()> {
        for (arc, (s, d)) in self.edge_index.iter().enumerate() {
            let is_target_arc = (s == Self::SRC && d == Self::DST)
                || (s == Self::DST && d == Self::SRC);
            if is_target_arc && !self.target_mask[arc] {
                return Err(ScaledError::Leakage {
                    index: self.pair_index,
                    detail: format!("arc {} ({} -> {}) is not masked", arc, s, d),
                });
            }
        }
        Ok(())
    }

    /// Export to a petgraph undirected graph for inspection or plotting.
    ///
    /// Nodes carry their global ids and edges their weights; masked target
    /// arcs are skipped, matching what the GNN would see.
    pub fn to_petgraph(&self) -> UnGraph<usize, f32> {
        let mut graph = UnGraph::with_capacity(self.num_nodes(), self.num_message_edges() / 2);
        let indices: Vec<_> = self.node_ids.iter().map(|&id| graph.add_node(id)).collect();
        for (s, d, w) in self.message_edges() {
            if s < d {
                graph.add_edge(indices[s], indices[d], w);
            }
        }
        graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with_target() -> EnclosingSubgraphRecord {
        EnclosingSubgraphRecord {
            pair_index: 0,
            node_ids: vec![5, 8, 2],
            edge_index: EdgeIndex::from_canonical(&[(0, 1), (0, 2), (1, 2)]),
            edge_weight: vec![1.0; 6],
            target_mask: vec![true, true, false, false, false, false],
            node_labels: vec![0, 1, 2],
            node_features: None,
            link_label: true,
        }
    }

    #[test]
    fn test_message_edges_exclude_target() {
        let record = record_with_target();
        assert_eq!(record.num_edges(), 6);
        assert_eq!(record.num_message_edges(), 4);
        assert!(record
            .message_edges()
            .all(|(s, d, _)| !(s < 2 && d < 2)));
    }

    #[test]
    fn test_masked_edge_index() {
        let (index, weights) = record_with_target().masked_edge_index();
        assert_eq!(index.num_edges(), 4);
        assert_eq!(weights.len(), 4);
    }

    #[test]
    fn test_verify_masked_catches_leak() {
        let mut record = record_with_target();
        assert!(record.verify_masked().is_ok());
        record.target_mask[0] = false;
        assert!(matches!(
            record.verify_masked(),
            Err(ScaledError::Leakage { index: 0, .. })
        ));
    }

    #[test]
    fn test_to_petgraph_skips_target() {
        let graph = record_with_target().to_petgraph();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);
    }
}
