//! Disjoint-union batching of subgraph records

use ndarray::{concatenate, Array2, Axis};
use serde::{Deserialize, Serialize};

use crate::graph::EdgeIndex;
use crate::subgraph::EnclosingSubgraphRecord;

/// A disjoint union of subgraph records.
///
/// Node indices of record `i` are shifted by `ptr[i]`; `node_to_graph` maps
/// every batched node back to its originating record. Pure data layout; the
/// per-record target masks and labels are concatenated unchanged.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Batch {
    /// Number of records in the batch
    pub num_graphs: usize,
    /// Total node count
    pub num_nodes: usize,
    /// Offset-shifted adjacency over all records
    pub edge_index: EdgeIndex,
    /// Per-arc weights
    pub edge_weight: Vec<f32>,
    /// Per-arc target flags
    pub target_mask: Vec<bool>,
    /// Per-node label classes
    pub node_labels: Vec<usize>,
    /// Per-node features, present only when every record carries them
    pub node_features: Option<Array2<f32>>,
    /// Originating record per node
    pub node_to_graph: Vec<usize>,
    /// Node offsets per record, `num_graphs + 1` entries
    pub ptr: Vec<usize>,
    /// Global node ids, concatenated
    pub node_ids: Vec<usize>,
    /// Link ground truth per record, 1.0 / 0.0
    pub link_labels: Vec<f32>,
    /// Originating pair index per record
    pub pair_indices: Vec<usize>,
}

impl Batch {
    /// Local node range of record `graph` within the batch
    pub fn node_range(&self, graph: usize) -> std::ops::Range<usize> {
        self.ptr[graph]..self.ptr[graph + 1]
    }
}

/// Pack records into a single batched structure
pub fn collate(records: &[EnclosingSubgraphRecord]) -> Batch {
    let num_graphs = records.len();
    let mut offset = 0;
    let mut ptr = Vec::with_capacity(num_graphs + 1);
    ptr.push(0);

    let mut edge_index = EdgeIndex::new();
    let mut edge_weight = Vec::new();
    let mut target_mask = Vec::new();
    let mut node_labels = Vec::new();
    let mut node_to_graph = Vec::new();
    let mut node_ids = Vec::new();
    let mut link_labels = Vec::with_capacity(num_graphs);
    let mut pair_indices = Vec::with_capacity(num_graphs);

    for (graph, record) in records.iter().enumerate() {
        for (s, d) in record.edge_index.iter() {
            edge_index.src.push(s + offset);
            edge_index.dst.push(d + offset);
        }
        edge_weight.extend_from_slice(&record.edge_weight);
        target_mask.extend_from_slice(&record.target_mask);
        node_labels.extend_from_slice(&record.node_labels);
        node_to_graph.extend(std::iter::repeat(graph).take(record.num_nodes()));
        node_ids.extend_from_slice(&record.node_ids);
        link_labels.push(if record.link_label { 1.0 } else { 0.0 });
        pair_indices.push(record.pair_index);
        offset += record.num_nodes();
        ptr.push(offset);
    }

    let views: Vec<_> = records
        .iter()
        .filter_map(|r| r.node_features.as_ref())
        .map(|features| features.view())
        .collect();
    let node_features = if num_graphs > 0 && views.len() == num_graphs {
        concatenate(Axis(0), &views).ok()
    } else {
        None
    };

    Batch {
        num_graphs,
        num_nodes: offset,
        edge_index,
        edge_weight,
        target_mask,
        node_labels,
        node_features,
        node_to_graph,
        ptr,
        node_ids,
        link_labels,
        pair_indices,
    }
}

/// Collate records into fixed-size batches, in order.
///
/// The final batch holds the remainder. `batch_size` of zero yields nothing.
pub fn into_batches(records: &[EnclosingSubgraphRecord], batch_size: usize) -> Vec<Batch> {
    if batch_size == 0 {
        return Vec::new();
    }
    records.chunks(batch_size).map(collate).collect()
}
