//! Sampling configuration

use serde::{Deserialize, Serialize};

use crate::labeling::NodeLabeling;
use crate::{Result, ScaledError};

/// A candidate link with its binary ground truth
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidatePair {
    /// Source node id
    pub src: usize,
    /// Destination node id
    pub dst: usize,
    /// True for observed (positive) links, false for sampled negatives
    pub label: bool,
}

impl CandidatePair {
    /// A positive candidate
    pub fn positive(src: usize, dst: usize) -> Self {
        CandidatePair {
            src,
            dst,
            label: true,
        }
    }

    /// A negative candidate
    pub fn negative(src: usize, dst: usize) -> Self {
        CandidatePair {
            src,
            dst,
            label: false,
        }
    }
}

/// How the enclosing subgraph around a pair is chosen.
///
/// The strategy is fixed once at configuration time; call sites never infer
/// it from parameter presence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SamplingMode {
    /// Exhaustive breadth-first expansion to `num_hops` from both endpoints
    FullHop {
        /// Expansion depth per endpoint
        num_hops: usize,
    },
    /// Bounded multi-walk sampling
    RandomWalk {
        /// Steps per walk (`m`)
        walk_length: usize,
        /// Independent walks per endpoint (`M`)
        num_walks: usize,
    },
}

/// Configuration shared by a full sampling run
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SamplingConfig {
    /// Extraction strategy
    pub mode: SamplingMode,
    /// Node labeling scheme
    pub labeling: NodeLabeling,
    /// Probability of dropping each non-target subgraph edge, in `[0, 1]`
    pub dropedge_rate: f64,
    /// Upper bound on label classes
    pub max_label: usize,
    /// Forward the dataset's node feature matrix into records
    pub use_feature: bool,
    /// Forward observed edge weights into records (otherwise all 1.0)
    pub use_edge_weight: bool,
    /// Global seed every random stream is derived from
    pub seed: u64,
}

impl SamplingConfig {
    /// Full `num_hops`-hop extraction
    pub fn full_hop(num_hops: usize, seed: u64) -> Self {
        SamplingConfig {
            mode: SamplingMode::FullHop { num_hops },
            labeling: NodeLabeling::default(),
            dropedge_rate: 0.0,
            max_label: 100,
            use_feature: false,
            use_edge_weight: false,
            seed,
        }
    }

    /// Random-walk extraction with `walk_length` steps and `num_walks` walks
    /// per endpoint
    pub fn random_walk(walk_length: usize, num_walks: usize, seed: u64) -> Self {
        SamplingConfig {
            mode: SamplingMode::RandomWalk {
                walk_length,
                num_walks,
            },
            ..Self::full_hop(0, seed)
        }
    }

    /// Set the labeling scheme
    pub fn with_labeling(mut self, labeling: NodeLabeling) -> Self {
        self.labeling = labeling;
        self
    }

    /// Set the edge-dropout rate
    pub fn with_dropedge(mut self, rate: f64) -> Self {
        self.dropedge_rate = rate;
        self
    }

    /// Set the label class cap
    pub fn with_max_label(mut self, max_label: usize) -> Self {
        self.max_label = max_label;
        self
    }

    /// Forward dataset node features into records
    pub fn with_features(mut self) -> Self {
        self.use_feature = true;
        self
    }

    /// Forward observed edge weights into records
    pub fn with_edge_weight(mut self) -> Self {
        self.use_edge_weight = true;
        self
    }

    /// Validate the configuration.
    ///
    /// Runs once before any sampling; a bad configuration never produces a
    /// partial batch.
    pub fn validate(&self) -> Result<()> {
        match self.mode {
            SamplingMode::FullHop { num_hops } => {
                if num_hops == 0 {
                    return Err(ScaledError::InvalidConfig(
                        "num_hops must be at least 1".to_string(),
                    ));
                }
            }
            SamplingMode::RandomWalk {
                walk_length,
                num_walks,
            } => {
                if walk_length == 0 {
                    return Err(ScaledError::InvalidConfig(
                        "walk length (m) must be at least 1".to_string(),
                    ));
                }
                if num_walks == 0 {
                    return Err(ScaledError::InvalidConfig(
                        "walk count (M) must be at least 1".to_string(),
                    ));
                }
            }
        }
        if !(0.0..=1.0).contains(&self.dropedge_rate) {
            return Err(ScaledError::InvalidConfig(format!(
                "dropedge rate {} outside [0, 1]",
                self.dropedge_rate
            )));
        }
        if self.max_label < 2 {
            return Err(ScaledError::InvalidConfig(
                "max_label must leave room beyond the endpoint sentinels".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self::full_hop(2, 42)
    }
}
