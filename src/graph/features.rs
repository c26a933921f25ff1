//! Structural node features for extracted subgraphs

use ndarray::Array2;

use super::ObservedGraph;
use crate::labeling::drnl_labels;
use crate::sampling::ExtractedNodeSet;

/// Trait for producing node feature matrices from extracted sets.
///
/// Datasets that ship real node features bypass this entirely (the assembler
/// gathers rows from the observed graph); implementors exist for datasets
/// that do not, so downstream encoders always have something to embed
/// besides labels.
pub trait FeatureExtractor {
    /// Extract a `[set.len(), feature_dim]` matrix for one node set
    fn extract(&self, set: &ExtractedNodeSet, graph: &ObservedGraph) -> Array2<f32>;

    /// Number of feature columns produced
    fn feature_dim(&self) -> usize;
}

/// Cheap structural features: degree, endpoint indicators, and the
/// double-radius label class as a scalar.
#[derive(Clone, Debug)]
pub struct StructuralFeatures {
    /// Cap applied to the degree column
    pub max_degree: usize,
}

impl StructuralFeatures {
    /// Create with the conventional degree cap of 100
    pub fn new() -> Self {
        StructuralFeatures { max_degree: 100 }
    }
}

impl Default for StructuralFeatures {
    fn default() -> Self {
        Self::new()
    }
}

impl FeatureExtractor for StructuralFeatures {
    fn extract(&self, set: &ExtractedNodeSet, graph: &ObservedGraph) -> Array2<f32> {
        let labels = drnl_labels(set, self.max_degree.max(2));
        let mut features = Array2::zeros((set.len(), self.feature_dim()));
        for (local, &node) in set.nodes.iter().enumerate() {
            features[[local, 0]] = graph.degree(node).min(self.max_degree) as f32;
            features[[local, 1]] = if local == 0 { 1.0 } else { 0.0 };
            features[[local, 2]] = if local == 1 { 1.0 } else { 0.0 };
            features[[local, 3]] = labels[local] as f32;
        }
        features
    }

    fn feature_dim(&self) -> usize {
        4
    }
}
