//! Induced-subgraph assembly

use std::collections::HashMap;

use ndarray::Axis;
use rand::Rng;

use super::EnclosingSubgraphRecord;
use crate::core::{CandidatePair, SamplingConfig};
use crate::graph::{EdgeIndex, ObservedGraph};
use crate::sampling::{dropedge_stream, ExtractedNodeSet};
use crate::Result;

/// Assemble the induced subgraph record for one extracted node set.
///
/// Global ids are remapped onto `0..set.len()` through an explicit
/// bidirectional table (the set's node order forward, a hash map back), so
/// local indices never depend on hash iteration order. The induced edge list
/// is gathered per canonical undirected edge in (low, high) local order;
/// both directions are emitted together. Arcs realizing the candidate link
/// itself are flagged, never dropped, and verified masked before the record
/// is returned. Edge dropout removes each non-target canonical edge with
/// probability `dropedge_rate`, drawing from the pair's dedicated stream.
pub fn assemble_record(
    graph: &ObservedGraph,
    set: &ExtractedNodeSet,
    node_labels: Vec<usize>,
    pair: &CandidatePair,
    pair_index: usize,
    config: &SamplingConfig,
) -> Result<EnclosingSubgraphRecord> {
    let local_of: HashMap<usize, usize> = set
        .nodes
        .iter()
        .enumerate()
        .map(|(local, &global)| (global, local))
        .collect();

    // Canonical induced edges: (low local, high local, weight, is_target).
    let mut canonical: Vec<(usize, usize, f32, bool)> = Vec::new();
    for (lu, &u) in set.nodes.iter().enumerate() {
        for &v in graph.neighbors(u) {
            if let Some(&lv) = local_of.get(&v) {
                if lu < lv {
                    let weight = if config.use_edge_weight {
                        graph.edge_weight(u, v).unwrap_or(1.0)
                    } else {
                        1.0
                    };
                    let is_target = lu == EnclosingSubgraphRecord::SRC
                        && lv == EnclosingSubgraphRecord::DST;
                    canonical.push((lu, lv, weight, is_target));
                }
            }
        }
    }

    if config.dropedge_rate > 0.0 {
        let mut rng = dropedge_stream(config.seed, pair_index);
        canonical.retain(|&(_, _, _, is_target)| {
            // Target arcs are handled by the mask, not by dropout; the draw
            // still happens for every edge to keep the stream aligned.
            let dropped = rng.gen::<f64>() < config.dropedge_rate;
            is_target || !dropped
        });
    }

    let mut edge_index = EdgeIndex::new();
    let mut edge_weight = Vec::with_capacity(canonical.len() * 2);
    let mut target_mask = Vec::with_capacity(canonical.len() * 2);
    for &(lu, lv, weight, is_target) in &canonical {
        edge_index.push_undirected(lu, lv);
        edge_weight.extend([weight, weight]);
        target_mask.extend([is_target, is_target]);
    }

    let node_features = if config.use_feature {
        graph
            .node_features()
            .map(|features| features.select(Axis(0), &set.nodes))
    } else {
        None
    };

    let record = EnclosingSubgraphRecord {
        pair_index,
        node_ids: set.nodes.clone(),
        edge_index,
        edge_weight,
        target_mask,
        node_labels,
        node_features,
        link_label: pair.label,
    };
    record.verify_masked()?;
    Ok(record)
}
