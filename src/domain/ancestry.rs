//! Lowest-common-ancestor computation over precomputed ancestor paths.

use crate::domain::entities::{CommonAncestry, NodeId};

/// Walk two root-first ancestor paths in lock-step and report their shared
/// ancestry.
///
/// The first matched position is the shared root, the last matched position
/// before divergence is the lowest common ancestor, and depth counts matched
/// positions starting at 1. Paths from disjoint trees share no prefix and
/// yield the all-absent result.
///
/// O(min(len_a, len_b)); the paths are borrowed and never mutated.
pub fn common_ancestry(path_a: &[NodeId], path_b: &[NodeId]) -> CommonAncestry {
    let mut root_id: Option<NodeId> = None;
    let mut lowest: Option<NodeId> = None;
    let mut depth: u64 = 0;

    for (&a, &b) in path_a.iter().zip(path_b.iter()) {
        if a != b {
            break;
        }
        if root_id.is_none() {
            root_id = Some(a);
        }
        lowest = Some(a);
        depth += 1;
    }

    if depth == 0 {
        return CommonAncestry::absent();
    }

    CommonAncestry {
        root_id,
        lowest_common_ancestor: lowest,
        depth: Some(depth),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_paths_yield_self_as_lca_with_full_depth() {
        let path = [130, 125, 4430546];
        let result = common_ancestry(&path, &path);
        assert_eq!(result.root_id, Some(130));
        assert_eq!(result.lowest_common_ancestor, Some(4430546));
        assert_eq!(result.depth, Some(3));
    }

    #[test]
    fn diverging_paths_yield_last_shared_ancestor() {
        let result = common_ancestry(&[130, 125, 4430546, 5497637], &[130, 125, 2820230]);
        assert_eq!(result.root_id, Some(130));
        assert_eq!(result.lowest_common_ancestor, Some(125));
        assert_eq!(result.depth, Some(2));
    }

    #[test]
    fn ancestor_of_the_other_node_is_the_lca() {
        let result = common_ancestry(&[130, 125, 4430546, 5497637], &[130]);
        assert_eq!(result.root_id, Some(130));
        assert_eq!(result.lowest_common_ancestor, Some(130));
        assert_eq!(result.depth, Some(1));
    }

    #[test]
    fn disjoint_paths_yield_absent_result() {
        let result = common_ancestry(&[9], &[130, 125, 4430546]);
        assert!(result.is_absent());
        assert_eq!(result, CommonAncestry::absent());
    }

    #[test]
    fn walk_is_symmetric() {
        let a = [130, 125, 4430546, 5497637];
        let b = [130, 125, 2820230];
        assert_eq!(common_ancestry(&a, &b), common_ancestry(&b, &a));
    }

    #[test]
    fn empty_path_yields_absent_result() {
        assert!(common_ancestry(&[], &[130]).is_absent());
    }
}
