//! Node labeling schemes.
//!
//! Labels are categorical features that give the GNN positional awareness
//! relative to the candidate pair. The default is double-radius node labeling
//! ([`drnl_labels`]); the cheaper `Hop` and `ZeroOne` schemes are kept for
//! ablations.

mod drnl;

pub use drnl::drnl_labels;

use serde::{Deserialize, Serialize};

use crate::sampling::ExtractedNodeSet;

/// Which labeling trick to apply to extracted node sets
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeLabeling {
    /// Double-radius node labeling over (distance-to-source,
    /// distance-to-destination)
    #[default]
    Drnl,
    /// Minimum distance to either endpoint
    Hop,
    /// Endpoint indicator: 1 for the two endpoints, 0 elsewhere
    ZeroOne,
}

/// Compute per-node labels for an extracted set.
///
/// Labels are clipped to `max_label` so the consumer's embedding table size
/// does not depend on graph diameter. The source always gets label 0 and the
/// destination label 1 under `Drnl`; the other schemes use their own
/// endpoint conventions (see variants).
pub fn label_nodes(set: &ExtractedNodeSet, scheme: NodeLabeling, max_label: usize) -> Vec<usize> {
    match scheme {
        NodeLabeling::Drnl => drnl_labels(set, max_label),
        NodeLabeling::Hop => hop_labels(set, max_label),
        NodeLabeling::ZeroOne => zero_one_labels(set),
    }
}

/// Minimum hop distance to either endpoint, clipped; endpoints get 0
fn hop_labels(set: &ExtractedNodeSet, max_label: usize) -> Vec<usize> {
    let (dist_src, dist_dst) = drnl::resolve_distances(set);
    dist_src
        .iter()
        .zip(&dist_dst)
        .map(|(&dx, &dy)| dx.min(dy).min(max_label))
        .collect()
}

/// Endpoint indicator labels
fn zero_one_labels(set: &ExtractedNodeSet) -> Vec<usize> {
    (0..set.len()).map(|i| usize::from(i < 2)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_set() -> ExtractedNodeSet {
        ExtractedNodeSet {
            nodes: vec![10, 20, 30, 40],
            dist_src: vec![Some(0), Some(3), Some(1), None],
            dist_dst: vec![Some(3), Some(0), Some(2), Some(1)],
        }
    }

    #[test]
    fn test_hop_labels() {
        let labels = label_nodes(&sample_set(), NodeLabeling::Hop, 100);
        // unreached distance resolves to max observed + 1 = 4
        assert_eq!(labels, vec![0, 0, 1, 1]);
    }

    #[test]
    fn test_hop_labels_clipped() {
        let labels = label_nodes(&sample_set(), NodeLabeling::Hop, 0);
        assert_eq!(labels, vec![0, 0, 0, 0]);
    }

    #[test]
    fn test_zero_one_labels() {
        let labels = label_nodes(&sample_set(), NodeLabeling::ZeroOne, 100);
        assert_eq!(labels, vec![1, 1, 0, 0]);
    }
}
