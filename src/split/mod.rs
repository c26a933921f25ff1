//! Train/validation/test edge splitting and negative sampling.
//!
//! Produces the inputs the sampling pipeline consumes: positive edges per
//! split plus uniformly sampled negatives that avoid every observed edge.
//! The training slice of the result is what [`crate::graph::ObservedGraph`]
//! is built from, keeping validation/test positives out of the adjacency.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::core::CandidatePair;
use crate::{Result, ScaledError};

/// Edge split parameters
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SplitConfig {
    /// Fraction of edges held out for validation
    pub val_ratio: f64,
    /// Fraction of edges held out for testing
    pub test_ratio: f64,
    /// Negatives sampled per training positive
    pub neg_ratio: usize,
    /// Seed for shuffling and negative sampling
    pub seed: u64,
}

impl SplitConfig {
    /// Conventional 5% validation / 10% test split
    pub fn new(seed: u64) -> Self {
        SplitConfig {
            val_ratio: 0.05,
            test_ratio: 0.1,
            neg_ratio: 1,
            seed,
        }
    }

    /// Validate ratios and the negative budget
    pub fn validate(&self) -> Result<()> {
        if !(0.0..1.0).contains(&self.val_ratio) || !(0.0..1.0).contains(&self.test_ratio) {
            return Err(ScaledError::InvalidConfig(
                "split ratios must lie in [0, 1)".to_string(),
            ));
        }
        if self.val_ratio + self.test_ratio >= 1.0 {
            return Err(ScaledError::InvalidConfig(
                "val_ratio + test_ratio must leave room for training edges".to_string(),
            ));
        }
        if self.neg_ratio == 0 {
            return Err(ScaledError::InvalidConfig(
                "neg_ratio must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Partitioned edges with sampled negatives, all as canonical `(low, high)`
/// pairs
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EdgeSplit {
    /// Number of nodes in the underlying graph
    pub num_nodes: usize,
    /// Training positives: the observed graph
    pub train_pos: Vec<(usize, usize)>,
    /// Training negatives, `neg_ratio` per positive
    pub train_neg: Vec<(usize, usize)>,
    /// Validation positives
    pub val_pos: Vec<(usize, usize)>,
    /// Validation negatives, one per positive
    pub val_neg: Vec<(usize, usize)>,
    /// Test positives
    pub test_pos: Vec<(usize, usize)>,
    /// Test negatives, one per positive
    pub test_neg: Vec<(usize, usize)>,
}

impl EdgeSplit {
    /// Training candidates: positives then negatives, labeled
    pub fn train_pairs(&self) -> Vec<CandidatePair> {
        Self::pairs(&self.train_pos, &self.train_neg)
    }

    /// Validation candidates
    pub fn val_pairs(&self) -> Vec<CandidatePair> {
        Self::pairs(&self.val_pos, &self.val_neg)
    }

    /// Test candidates
    pub fn test_pairs(&self) -> Vec<CandidatePair> {
        Self::pairs(&self.test_pos, &self.test_neg)
    }

    fn pairs(pos: &[(usize, usize)], neg: &[(usize, usize)]) -> Vec<CandidatePair> {
        pos.iter()
            .map(|&(u, v)| CandidatePair::positive(u, v))
            .chain(neg.iter().map(|&(u, v)| CandidatePair::negative(u, v)))
            .collect()
    }
}

/// Randomly split an undirected edge list and sample negatives.
///
/// Edges are canonicalized and deduplicated, shuffled with a generator
/// seeded from `config.seed`, and cut into validation/test/train slices.
/// Negatives are uniform non-edges (no self loops, never colliding with any
/// observed edge or another sampled negative). Deterministic for a fixed
/// config.
pub fn do_edge_split(
    edges: &[(usize, usize)],
    num_nodes: usize,
    config: &SplitConfig,
) -> Result<EdgeSplit> {
    config.validate()?;

    let mut canonical: Vec<(usize, usize)> = Vec::with_capacity(edges.len());
    for &(u, v) in edges {
        if u >= num_nodes || v >= num_nodes {
            return Err(ScaledError::InvalidConfig(format!(
                "edge ({}, {}) out of range for {} nodes",
                u, v, num_nodes
            )));
        }
        if u != v {
            canonical.push((u.min(v), u.max(v)));
        }
    }
    canonical.sort_unstable();
    canonical.dedup();

    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    canonical.shuffle(&mut rng);

    let n_val = (config.val_ratio * canonical.len() as f64).floor() as usize;
    let n_test = (config.test_ratio * canonical.len() as f64).floor() as usize;
    let val_pos: Vec<_> = canonical[..n_val].to_vec();
    let test_pos: Vec<_> = canonical[n_val..n_val + n_test].to_vec();
    let train_pos: Vec<_> = canonical[n_val + n_test..].to_vec();

    let observed: HashSet<(usize, usize)> = canonical.iter().copied().collect();
    let mut taken = observed.clone();
    let train_neg = sample_negatives(
        num_nodes,
        train_pos.len() * config.neg_ratio,
        &mut taken,
        &mut rng,
    )?;
    let val_neg = sample_negatives(num_nodes, val_pos.len(), &mut taken, &mut rng)?;
    let test_neg = sample_negatives(num_nodes, test_pos.len(), &mut taken, &mut rng)?;

    Ok(EdgeSplit {
        num_nodes,
        train_pos,
        train_neg,
        val_pos,
        val_neg,
        test_pos,
        test_neg,
    })
}

/// Rejection-sample `count` distinct canonical non-edges, extending `taken`
fn sample_negatives(
    num_nodes: usize,
    count: usize,
    taken: &mut HashSet<(usize, usize)>,
    rng: &mut ChaCha8Rng,
) -> Result<Vec<(usize, usize)>> {
    let possible = num_nodes * num_nodes.saturating_sub(1) / 2;
    if taken.len() + count > possible {
        return Err(ScaledError::InvalidConfig(format!(
            "cannot sample {} negatives: only {} unordered pairs exist",
            count, possible
        )));
    }
    let mut negatives = Vec::with_capacity(count);
    while negatives.len() < count {
        let u = rng.gen_range(0..num_nodes);
        let v = rng.gen_range(0..num_nodes);
        if u == v {
            continue;
        }
        let pair = (u.min(v), u.max(v));
        if taken.insert(pair) {
            negatives.push(pair);
        }
    }
    Ok(negatives)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring(n: usize) -> Vec<(usize, usize)> {
        (0..n).map(|i| (i, (i + 1) % n)).collect()
    }

    #[test]
    fn test_split_sizes() {
        let edges = ring(40);
        let config = SplitConfig {
            val_ratio: 0.1,
            test_ratio: 0.2,
            neg_ratio: 2,
            seed: 42,
        };
        let split = do_edge_split(&edges, 40, &config).unwrap();
        assert_eq!(split.val_pos.len(), 4);
        assert_eq!(split.test_pos.len(), 8);
        assert_eq!(split.train_pos.len(), 28);
        assert_eq!(split.train_neg.len(), 56);
        assert_eq!(split.val_neg.len(), 4);
        assert_eq!(split.test_neg.len(), 8);
    }

    #[test]
    fn test_splits_disjoint_and_cover() {
        let edges = ring(30);
        let split = do_edge_split(&edges, 30, &SplitConfig::new(7)).unwrap();
        let mut all: Vec<_> = split
            .train_pos
            .iter()
            .chain(&split.val_pos)
            .chain(&split.test_pos)
            .copied()
            .collect();
        all.sort_unstable();
        let mut expected: Vec<_> = edges.iter().map(|&(u, v)| (u.min(v), u.max(v))).collect();
        expected.sort_unstable();
        assert_eq!(all, expected);
    }

    #[test]
    fn test_negatives_avoid_observed_edges() {
        let edges = ring(20);
        let observed: HashSet<_> = edges.iter().map(|&(u, v)| (u.min(v), u.max(v))).collect();
        let split = do_edge_split(&edges, 20, &SplitConfig::new(3)).unwrap();
        let negatives: Vec<_> = split
            .train_neg
            .iter()
            .chain(&split.val_neg)
            .chain(&split.test_neg)
            .copied()
            .collect();
        let distinct: HashSet<_> = negatives.iter().copied().collect();
        assert_eq!(distinct.len(), negatives.len());
        for (u, v) in negatives {
            assert!(u < v);
            assert!(!observed.contains(&(u, v)));
        }
    }

    #[test]
    fn test_split_deterministic() {
        let edges = ring(25);
        let a = do_edge_split(&edges, 25, &SplitConfig::new(11)).unwrap();
        let b = do_edge_split(&edges, 25, &SplitConfig::new(11)).unwrap();
        assert_eq!(a, b);
        let c = do_edge_split(&edges, 25, &SplitConfig::new(12)).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn test_train_pairs_labeled() {
        let split = do_edge_split(&ring(20), 20, &SplitConfig::new(1)).unwrap();
        let pairs = split.train_pairs();
        assert_eq!(pairs.len(), split.train_pos.len() + split.train_neg.len());
        assert!(pairs[..split.train_pos.len()].iter().all(|p| p.label));
        assert!(pairs[split.train_pos.len()..].iter().all(|p| !p.label));
    }

    #[test]
    fn test_invalid_ratios_rejected() {
        let bad = SplitConfig {
            val_ratio: 0.6,
            test_ratio: 0.5,
            neg_ratio: 1,
            seed: 0,
        };
        assert!(do_edge_split(&ring(10), 10, &bad).is_err());
    }

    #[test]
    fn test_too_many_negatives_rejected() {
        // A 4-clique leaves no room for negatives at all.
        let edges = vec![(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)];
        let config = SplitConfig {
            val_ratio: 0.0,
            test_ratio: 0.0,
            neg_ratio: 1,
            seed: 0,
        };
        assert!(do_edge_split(&edges, 4, &config).is_err());
    }
}
