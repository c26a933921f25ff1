//! Full k-hop enclosing-subgraph extraction

use std::collections::{HashMap, VecDeque};

use super::ExtractedNodeSet;
use crate::graph::ObservedGraph;

/// Extract the full `num_hops`-hop enclosing subgraph around `(src, dst)`.
///
/// Runs an independent breadth-first expansion from each endpoint up to depth
/// `num_hops` and unions the reached territories. Per node, the minimum BFS
/// distance to each endpoint is kept. Fully deterministic: no randomness, and
/// the result ordering is `[src, dst]` followed by the remaining nodes in
/// ascending id order.
pub fn extract_full_hop(
    graph: &ObservedGraph,
    src: usize,
    dst: usize,
    num_hops: usize,
) -> ExtractedNodeSet {
    let from_src = bfs_distances(graph, src, num_hops);
    let from_dst = bfs_distances(graph, dst, num_hops);

    let mut set = ExtractedNodeSet::for_pair(src, dst);
    set.dist_dst[0] = from_dst.get(&src).copied();
    set.dist_src[1] = from_src.get(&dst).copied();

    let mut rest: Vec<usize> = from_src
        .keys()
        .chain(from_dst.keys())
        .copied()
        .filter(|&n| n != src && n != dst)
        .collect();
    rest.sort_unstable();
    rest.dedup();

    for node in rest {
        set.nodes.push(node);
        set.dist_src.push(from_src.get(&node).copied());
        set.dist_dst.push(from_dst.get(&node).copied());
    }
    set
}

/// Breadth-first distances from `start`, capped at `max_depth` hops
fn bfs_distances(
    graph: &ObservedGraph,
    start: usize,
    max_depth: usize,
) -> HashMap<usize, usize> {
    let mut dist = HashMap::new();
    dist.insert(start, 0);
    let mut queue = VecDeque::new();
    queue.push_back(start);

    while let Some(node) = queue.pop_front() {
        let d = dist[&node];
        if d == max_depth {
            continue;
        }
        for &next in graph.neighbors(node) {
            if !dist.contains_key(&next) {
                dist.insert(next, d + 1);
                queue.push_back(next);
            }
        }
    }
    dist
}
