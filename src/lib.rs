//! # ScaLed-ML: Sampled Enclosing Subgraphs for Link Prediction
//!
//! This library prepares training data for GNN-based link prediction. For each
//! candidate node pair it extracts a bounded local "enclosing subgraph" around
//! the two endpoints, assigns double-radius structural node labels, and packs
//! the result into batched graph records ready for a GNN training loop.
//!
//! ## Features
//!
//! - **Full k-hop extraction**: exhaustive breadth-first expansion around both
//!   endpoints (the SEAL baseline)
//! - **Random-walk sampling**: bounded multi-walk extraction with tunable
//!   sparsity knobs, reproducible bit-for-bit under a fixed seed
//! - **Double-radius labeling**: distance-pair node labels with endpoint
//!   sentinels and a configurable class cap
//! - **Leakage-safe assembly**: the target link is flagged and masked out of
//!   every message-passing view
//! - **Parallel pipelines**: per-pair extraction fans out over a rayon pool
//!   without perturbing determinism

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Batching and sparsity diagnostics
pub mod batch;

/// Configuration and the parallel extraction pipeline
pub mod core;

/// Observed-graph adjacency and feature handling
pub mod graph;

/// Node labeling schemes
pub mod labeling;

/// Subgraph extraction strategies
pub mod sampling;

/// Train/validation/test edge splitting and negative sampling
pub mod split;

/// Enclosing-subgraph records and assembly
pub mod subgraph;

/// Utility functions and helpers
pub mod utils;

// Re-export commonly used types
pub use crate::core::{CandidatePair, SamplingConfig, SamplingMode};
pub use batch::{collate, Batch};
pub use graph::ObservedGraph;
pub use labeling::NodeLabeling;
pub use subgraph::EnclosingSubgraphRecord;

/// Error types for the library
#[derive(Debug, thiserror::Error)]
pub enum ScaledError {
    /// A walk or expansion step hit a node with no neighbors
    #[error("node {0} has no neighbors")]
    EmptyNeighborhood(usize),

    /// Rejected configuration, reported before any sampling starts
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Candidate pair that cannot be sampled: an endpoint outside the
    /// observed graph, or a self-pair
    #[error("invalid candidate pair {index}: ({src}, {dst}) in a graph of {num_nodes} nodes")]
    InvalidPair {
        /// Position of the pair in the candidate list
        index: usize,
        /// Source node id
        src: usize,
        /// Destination node id
        dst: usize,
        /// Number of nodes in the observed graph
        num_nodes: usize,
    },

    /// Internal invariant violation: the target link escaped its mask
    #[error("target link leaked in record for pair {index}: {detail}")]
    Leakage {
        /// Position of the pair in the candidate list
        index: usize,
        /// What was found unmasked
        detail: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, ScaledError>;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        batch::{collate, into_batches, Batch, SparsityReport},
        core::{extract_enclosing_subgraphs, CandidatePair, SamplingConfig, SamplingMode},
        graph::{EdgeIndex, ObservedGraph},
        labeling::NodeLabeling,
        split::{do_edge_split, EdgeSplit, SplitConfig},
        subgraph::EnclosingSubgraphRecord,
        Result, ScaledError,
    };
}
