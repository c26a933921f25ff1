//! Double-radius node labeling

use crate::sampling::ExtractedNodeSet;

/// Double-radius labels for an extracted node set.
///
/// Each node's pair of endpoint distances `(dx, dy)` is folded into a single
/// class with the pairing function
///
/// ```text
/// d = dx + dy
/// z = 1 + min(dx, dy) + (d / 2) * (d / 2 + d % 2 - 1)
/// ```
///
/// which is monotone in `d`: a node strictly closer to the pair (smaller
/// distance sum) never receives a larger class than a strictly farther one.
/// The source is always labeled 0 and the destination 1; every other
/// reachable node has `dx, dy >= 1` and therefore `z >= 2`, so the two
/// sentinel classes collide with nothing. Distances of nodes unreached from
/// one endpoint resolve to one more than the largest distance observed in
/// the set, and all labels are clipped to `max_label`.
pub fn drnl_labels(set: &ExtractedNodeSet, max_label: usize) -> Vec<usize> {
    let (dist_src, dist_dst) = resolve_distances(set);
    dist_src
        .iter()
        .zip(&dist_dst)
        .enumerate()
        .map(|(local, (&dx, &dy))| match local {
            0 => 0,
            1 => 1,
            _ => pairing(dx, dy).min(max_label),
        })
        .collect()
}

/// Fill unreached distances with a sentinel one past the largest observed
/// distance, keeping the result independent of map iteration order.
pub(crate) fn resolve_distances(set: &ExtractedNodeSet) -> (Vec<usize>, Vec<usize>) {
    let max_observed = set
        .dist_src
        .iter()
        .chain(set.dist_dst.iter())
        .flatten()
        .copied()
        .max()
        .unwrap_or(0);
    let sentinel = max_observed + 1;
    let fill = |dists: &[Option<usize>]| -> Vec<usize> {
        dists.iter().map(|d| d.unwrap_or(sentinel)).collect()
    };
    (fill(&set.dist_src), fill(&set.dist_dst))
}

fn pairing(dx: usize, dy: usize) -> usize {
    let d = dx + dy;
    1 + dx.min(dy) + (d / 2) * (d / 2 + d % 2).saturating_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn set_with(dist_src: Vec<Option<usize>>, dist_dst: Vec<Option<usize>>) -> ExtractedNodeSet {
        let nodes = (0..dist_src.len()).collect();
        ExtractedNodeSet {
            nodes,
            dist_src,
            dist_dst,
        }
    }

    #[test]
    fn test_endpoint_sentinels() {
        let set = set_with(
            vec![Some(0), Some(2), Some(1)],
            vec![Some(2), Some(0), Some(1)],
        );
        let labels = drnl_labels(&set, 100);
        assert_eq!(labels[0], 0);
        assert_eq!(labels[1], 1);
        assert!(labels[2] >= 2);
    }

    #[test]
    fn test_known_classes() {
        // (1, 1) -> 2; (1, 2) -> 3; (2, 2) -> 5
        assert_eq!(pairing(1, 1), 2);
        assert_eq!(pairing(1, 2), 3);
        assert_eq!(pairing(2, 1), 3);
        assert_eq!(pairing(2, 2), 5);
    }

    #[test]
    fn test_unreached_resolves_past_max_observed() {
        let set = set_with(
            vec![Some(0), Some(1), None],
            vec![Some(1), Some(0), Some(2)],
        );
        // max observed is 2, so the unreached slot acts as distance 3
        let (dist_src, _) = resolve_distances(&set);
        assert_eq!(dist_src[2], 3);
    }

    #[test]
    fn test_clipping() {
        let set = set_with(
            vec![Some(0), Some(9), Some(9)],
            vec![Some(9), Some(0), Some(9)],
        );
        let labels = drnl_labels(&set, 4);
        assert_eq!(labels[2], 4);
    }

    proptest! {
        #[test]
        fn prop_monotone_in_distance_sum(
            dx1 in 1usize..20, dy1 in 1usize..20,
            dx2 in 1usize..20, dy2 in 1usize..20,
        ) {
            prop_assume!(dx1 + dy1 < dx2 + dy2);
            prop_assert!(pairing(dx1, dy1) <= pairing(dx2, dy2));
        }

        #[test]
        fn prop_labels_never_exceed_cap(
            dists in proptest::collection::vec((1usize..50, 1usize..50), 1..30),
            cap in 2usize..200,
        ) {
            let mut dist_src = vec![Some(0)];
            let mut dist_dst = vec![Some(3)];
            dist_src.push(Some(3));
            dist_dst.push(Some(0));
            for (dx, dy) in dists {
                dist_src.push(Some(dx));
                dist_dst.push(Some(dy));
            }
            let set = set_with(dist_src, dist_dst);
            for label in drnl_labels(&set, cap) {
                prop_assert!(label <= cap);
            }
        }
    }
}
