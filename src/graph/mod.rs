//! Observed-graph adjacency and feature handling

mod edge_index;
mod features;
mod observed;

pub use edge_index::EdgeIndex;
pub use features::{FeatureExtractor, StructuralFeatures};
pub use observed::ObservedGraph;
