//! Random-walk enclosing-subgraph sampling

use std::collections::HashMap;

use super::{rng::walk_stream, ExtractedNodeSet};
use crate::graph::ObservedGraph;

/// Sample an enclosing subgraph around `(src, dst)` with random walks.
///
/// Launches `num_walks` independent walks of `walk_length` uniform steps from
/// each endpoint. Revisits are allowed; per node the minimum number of steps
/// to first reach it from each endpoint, across all of that endpoint's walks,
/// is kept as an optimistic distance estimate. The extracted set is the union
/// of all visited nodes plus the two endpoints, ordered by first visit over
/// the fixed walk schedule (source walks first, then destination walks), so
/// local index assignment is reproducible.
///
/// Total work is `O(num_walks * walk_length)` per endpoint regardless of the
/// graph's branching factor. Each walk draws from its own generator derived
/// from `(seed, pair_index, endpoint, walk)`, making the output bit-for-bit
/// reproducible no matter how pairs are scheduled across threads.
pub fn extract_random_walk(
    graph: &ObservedGraph,
    src: usize,
    dst: usize,
    walk_length: usize,
    num_walks: usize,
    seed: u64,
    pair_index: usize,
) -> ExtractedNodeSet {
    let mut set = ExtractedNodeSet::for_pair(src, dst);
    let mut position: HashMap<usize, usize> = HashMap::new();
    position.insert(src, 0);
    position.insert(dst, 1);

    for (endpoint, &start) in [src, dst].iter().enumerate() {
        for walk in 0..num_walks {
            let mut rng = walk_stream(seed, pair_index, endpoint, walk);
            let mut current = start;
            observe(&mut set, &mut position, endpoint, start, 0);
            for step in 1..=walk_length {
                match graph.random_neighbor(current, &mut rng) {
                    Ok(next) => {
                        observe(&mut set, &mut position, endpoint, next, step);
                        current = next;
                    }
                    // Isolated node: the walk simply ends early.
                    Err(_) => break,
                }
            }
        }
    }
    set
}

/// Record a visit of `node` at `steps` steps from the given endpoint,
/// keeping the minimum across walks.
fn observe(
    set: &mut ExtractedNodeSet,
    position: &mut HashMap<usize, usize>,
    endpoint: usize,
    node: usize,
    steps: usize,
) {
    let local = *position.entry(node).or_insert_with(|| {
        set.nodes.push(node);
        set.dist_src.push(None);
        set.dist_dst.push(None);
        set.nodes.len() - 1
    });
    let slot = if endpoint == 0 {
        &mut set.dist_src[local]
    } else {
        &mut set.dist_dst[local]
    };
    match slot {
        Some(best) if *best <= steps => {}
        _ => *slot = Some(steps),
    }
}
