//! Sparsity comparison between the two extraction strategies

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{extract_one, CandidatePair, SamplingConfig, SamplingMode};
use crate::graph::ObservedGraph;
use crate::utils::timing::Timer;
use crate::{Result, ScaledError};

/// Mean and standard deviation of a sampled quantity
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SummaryStat {
    /// Sample mean
    pub mean: f64,
    /// Population standard deviation
    pub std: f64,
}

impl SummaryStat {
    fn from_samples(samples: &[f64]) -> Self {
        if samples.is_empty() {
            return SummaryStat { mean: 0.0, std: 0.0 };
        }
        let n = samples.len() as f64;
        let mean = samples.iter().sum::<f64>() / n;
        let var = samples.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / n;
        SummaryStat {
            mean,
            std: var.sqrt(),
        }
    }
}

impl fmt::Display for SummaryStat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} ± {:.2}", self.mean, self.std)
    }
}

/// Node/edge count comparison of full-hop versus random-walk extraction.
///
/// A diagnostic, not part of the training path: it quantifies how much
/// sparser the walk-sampled subgraphs are under matched parameters. Ratios
/// are full-hop counts over walk counts (larger means sparser sampling); an
/// empty walk subgraph contributes an edge ratio of 0, mirroring how the
/// comparison has conventionally been reported.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SparsityReport {
    /// Pairs compared
    pub pairs: usize,
    /// Full-hop node counts
    pub full_nodes: SummaryStat,
    /// Random-walk node counts
    pub walk_nodes: SummaryStat,
    /// Full-hop message-edge counts
    pub full_edges: SummaryStat,
    /// Random-walk message-edge counts
    pub walk_edges: SummaryStat,
    /// Per-pair node count ratio, full over walk
    pub node_ratio: SummaryStat,
    /// Per-pair edge count ratio, full over walk
    pub edge_ratio: SummaryStat,
}

impl SparsityReport {
    /// Serialize the report to pretty JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for SparsityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "sparsity over {} pairs", self.pairs)?;
        writeln!(f, "  full-hop nodes:    {}", self.full_nodes)?;
        writeln!(f, "  random-walk nodes: {}", self.walk_nodes)?;
        writeln!(f, "  full-hop edges:    {}", self.full_edges)?;
        writeln!(f, "  random-walk edges: {}", self.walk_edges)?;
        writeln!(f, "  node ratio:        {}", self.node_ratio)?;
        write!(f, "  edge ratio:        {}", self.edge_ratio)
    }
}

/// Compare the two extraction strategies over a sample of pairs.
///
/// Both strategies run under the same seed and labeling so the comparison is
/// fair; dropout is disabled for both. `num_hops` parameterizes the full
/// extractor, `walk_length`/`num_walks` the sampler.
pub fn sparsity_report(
    graph: &ObservedGraph,
    pairs: &[CandidatePair],
    num_hops: usize,
    walk_length: usize,
    num_walks: usize,
    seed: u64,
) -> Result<SparsityReport> {
    if pairs.is_empty() {
        return Err(ScaledError::InvalidConfig(
            "sparsity comparison needs at least one pair".to_string(),
        ));
    }
    let full_config = SamplingConfig::full_hop(num_hops, seed);
    let walk_config = SamplingConfig {
        mode: SamplingMode::RandomWalk {
            walk_length,
            num_walks,
        },
        ..full_config.clone()
    };
    full_config.validate()?;
    walk_config.validate()?;

    let timer = Timer::new("sparsity comparison");
    let mut full_nodes = Vec::with_capacity(pairs.len());
    let mut walk_nodes = Vec::with_capacity(pairs.len());
    let mut full_edges = Vec::with_capacity(pairs.len());
    let mut walk_edges = Vec::with_capacity(pairs.len());
    let mut node_ratio = Vec::with_capacity(pairs.len());
    let mut edge_ratio = Vec::with_capacity(pairs.len());

    for (pair_index, pair) in pairs.iter().enumerate() {
        let full = extract_one(graph, pair, pair_index, &full_config)?;
        let walk = extract_one(graph, pair, pair_index, &walk_config)?;

        let fnodes = full.num_nodes() as f64;
        let wnodes = walk.num_nodes() as f64;
        let fedges = full.num_message_edges() as f64;
        let wedges = walk.num_message_edges() as f64;

        full_nodes.push(fnodes);
        walk_nodes.push(wnodes);
        full_edges.push(fedges);
        walk_edges.push(wedges);
        node_ratio.push(fnodes / wnodes);
        edge_ratio.push(if wedges > 0.0 { fedges / wedges } else { 0.0 });
    }

    let report = SparsityReport {
        pairs: pairs.len(),
        full_nodes: SummaryStat::from_samples(&full_nodes),
        walk_nodes: SummaryStat::from_samples(&walk_nodes),
        full_edges: SummaryStat::from_samples(&full_edges),
        walk_edges: SummaryStat::from_samples(&walk_edges),
        node_ratio: SummaryStat::from_samples(&node_ratio),
        edge_ratio: SummaryStat::from_samples(&edge_ratio),
    };
    log::info!("{}", report);
    drop(timer);
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clique(n: usize) -> ObservedGraph {
        let mut edges = Vec::new();
        for u in 0..n {
            for v in (u + 1)..n {
                edges.push((u, v));
            }
        }
        ObservedGraph::new(n, &edges).unwrap()
    }

    #[test]
    fn test_summary_stat() {
        let stat = SummaryStat::from_samples(&[1.0, 2.0, 3.0]);
        assert!((stat.mean - 2.0).abs() < 1e-9);
        assert!((stat.std - (2.0f64 / 3.0).sqrt()).abs() < 1e-9);
        assert_eq!(format!("{}", stat), "2.00 ± 0.82");
    }

    #[test]
    fn test_walks_sparser_than_full_on_dense_graph() {
        // On a 30-clique a 2-hop expansion swallows the whole graph while a
        // single short walk per endpoint touches a handful of nodes.
        let graph = clique(30);
        let pairs: Vec<_> = (0..10)
            .map(|i| CandidatePair::positive(i, i + 10))
            .collect();
        let report = sparsity_report(&graph, &pairs, 2, 2, 1, 42).unwrap();

        assert!((report.full_nodes.mean - 30.0).abs() < 1e-9);
        assert!(report.walk_nodes.mean <= report.full_nodes.mean);
        assert!(report.node_ratio.mean >= 1.0);
    }

    #[test]
    fn test_report_round_trips_through_json() {
        let graph = clique(6);
        let pairs = vec![CandidatePair::positive(0, 3)];
        let report = sparsity_report(&graph, &pairs, 1, 1, 1, 7).unwrap();
        let back: SparsityReport = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(report, back);
    }

    #[test]
    fn test_empty_pairs_rejected() {
        let graph = clique(4);
        assert!(sparsity_report(&graph, &[], 1, 1, 1, 0).is_err());
    }
}
