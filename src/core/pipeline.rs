//! Parallel enclosing-subgraph extraction pipeline

use rayon::prelude::*;

use super::{CandidatePair, SamplingConfig, SamplingMode};
use crate::graph::ObservedGraph;
use crate::labeling::label_nodes;
use crate::sampling::{extract_full_hop, extract_random_walk};
use crate::subgraph::{assemble_record, EnclosingSubgraphRecord};
use crate::{Result, ScaledError};

/// Extract, label, and assemble the enclosing subgraph for every candidate.
///
/// Pairs are processed concurrently on the rayon pool; each worker reads the
/// shared graph and draws only from streams derived from its own pair index,
/// so output is identical to a sequential run. If any pair fails the whole
/// batch fails, reporting the lowest-indexed failure; silently skipping a
/// pair would change the dataset composition.
pub fn extract_enclosing_subgraphs(
    graph: &ObservedGraph,
    pairs: &[CandidatePair],
    config: &SamplingConfig,
) -> Result<Vec<EnclosingSubgraphRecord>> {
    config.validate()?;
    log::info!(
        "extracting {} enclosing subgraphs with {:?}",
        pairs.len(),
        config.mode
    );

    let results: Vec<Result<EnclosingSubgraphRecord>> = pairs
        .par_iter()
        .enumerate()
        .map(|(pair_index, pair)| extract_one(graph, pair, pair_index, config))
        .collect();
    results.into_iter().collect()
}

/// Run the full extraction for a single candidate pair.
///
/// Assumes `config` has already been validated.
pub fn extract_one(
    graph: &ObservedGraph,
    pair: &CandidatePair,
    pair_index: usize,
    config: &SamplingConfig,
) -> Result<EnclosingSubgraphRecord> {
    let num_nodes = graph.num_nodes();
    if pair.src >= num_nodes || pair.dst >= num_nodes || pair.src == pair.dst {
        return Err(ScaledError::InvalidPair {
            index: pair_index,
            src: pair.src,
            dst: pair.dst,
            num_nodes,
        });
    }

    let set = match config.mode {
        SamplingMode::FullHop { num_hops } => {
            extract_full_hop(graph, pair.src, pair.dst, num_hops)
        }
        SamplingMode::RandomWalk {
            walk_length,
            num_walks,
        } => extract_random_walk(
            graph,
            pair.src,
            pair.dst,
            walk_length,
            num_walks,
            config.seed,
            pair_index,
        ),
    };
    let labels = label_nodes(&set, config.labeling, config.max_label);
    assemble_record(graph, &set, labels, pair, pair_index, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labeling::NodeLabeling;

    fn two_triangles() -> ObservedGraph {
        // triangles 0-1-2 and 3-4-5 joined by 2-3
        ObservedGraph::new(
            6,
            &[(0, 1), (0, 2), (1, 2), (3, 4), (3, 5), (4, 5), (2, 3)],
        )
        .unwrap()
    }

    fn sample_pairs() -> Vec<CandidatePair> {
        vec![
            CandidatePair::positive(0, 1),
            CandidatePair::negative(0, 4),
            CandidatePair::positive(2, 3),
            CandidatePair::negative(1, 5),
        ]
    }

    #[test]
    fn test_batch_runs_end_to_end() {
        let graph = two_triangles();
        let config = SamplingConfig::random_walk(3, 4, 42);
        let records = extract_enclosing_subgraphs(&graph, &sample_pairs(), &config).unwrap();

        assert_eq!(records.len(), 4);
        for (i, record) in records.iter().enumerate() {
            assert_eq!(record.pair_index, i);
            assert_eq!(record.node_labels[0], 0);
            assert_eq!(record.node_labels[1], 1);
            assert!(record.verify_masked().is_ok());
        }
    }

    #[test]
    fn test_two_runs_identical() {
        let graph = two_triangles();
        for config in [
            SamplingConfig::full_hop(2, 42),
            SamplingConfig::random_walk(3, 4, 42).with_dropedge(0.3),
            SamplingConfig::random_walk(2, 2, 7).with_labeling(NodeLabeling::Hop),
        ] {
            let a = extract_enclosing_subgraphs(&graph, &sample_pairs(), &config).unwrap();
            let b = extract_enclosing_subgraphs(&graph, &sample_pairs(), &config).unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_seed_changes_walk_output() {
        let graph = two_triangles();
        let pairs = sample_pairs();
        let a = extract_enclosing_subgraphs(&graph, &pairs, &SamplingConfig::random_walk(3, 2, 1))
            .unwrap();
        let b = extract_enclosing_subgraphs(&graph, &pairs, &SamplingConfig::random_walk(3, 2, 2))
            .unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_invalid_config_reported_before_sampling() {
        let graph = two_triangles();
        let config = SamplingConfig::random_walk(0, 4, 42);
        assert!(matches!(
            extract_enclosing_subgraphs(&graph, &sample_pairs(), &config),
            Err(ScaledError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_bad_pair_fails_batch_with_identity() {
        let graph = two_triangles();
        let mut pairs = sample_pairs();
        pairs.push(CandidatePair::positive(0, 99));
        pairs.push(CandidatePair::positive(98, 99));
        let err = extract_enclosing_subgraphs(&graph, &pairs, &SamplingConfig::full_hop(1, 0))
            .unwrap_err();
        // the lowest-indexed failure wins
        assert!(matches!(err, ScaledError::InvalidPair { index: 4, .. }));
    }

    #[test]
    fn test_self_pair_rejected() {
        let graph = two_triangles();
        let pairs = vec![CandidatePair::positive(2, 2)];
        assert!(matches!(
            extract_enclosing_subgraphs(&graph, &pairs, &SamplingConfig::full_hop(1, 0)),
            Err(ScaledError::InvalidPair { .. })
        ));
    }

    #[test]
    fn test_full_and_walk_agree_on_endpoints() {
        let graph = two_triangles();
        let pair = CandidatePair::positive(1, 4);
        let full = extract_one(&graph, &pair, 0, &SamplingConfig::full_hop(2, 3)).unwrap();
        let walk = extract_one(&graph, &pair, 0, &SamplingConfig::random_walk(2, 3, 3)).unwrap();
        assert_eq!(full.node_ids[..2], [1, 4]);
        assert_eq!(walk.node_ids[..2], [1, 4]);
    }
}
