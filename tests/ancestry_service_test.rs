//! Tests for AncestryService

use std::sync::Arc;

use rstest::{fixture, rstest};

use aviary::application::services::AncestryService;
use aviary::domain::{CommonAncestry, Forest};
use aviary::infrastructure::MemoryStore;

/// 130 -> 125 -> {2820230, 4430546 -> 5497637}; 9 is a disjoint root
#[fixture]
fn service() -> AncestryService {
    aviary::util::testing::init_test_setup();
    let mut forest = Forest::new();
    forest.insert(130, None).unwrap();
    forest.insert(125, Some(130)).unwrap();
    forest.insert(2820230, Some(125)).unwrap();
    forest.insert(4430546, Some(125)).unwrap();
    forest.insert(5497637, Some(4430546)).unwrap();
    forest.insert(9, None).unwrap();
    AncestryService::new(Arc::new(MemoryStore::new(forest, [])))
}

#[rstest]
fn given_cousin_nodes_when_querying_then_reports_shared_branch(service: AncestryService) {
    // Act
    let result = service.common_ancestor(5497637, 2820230).unwrap();

    // Assert
    assert_eq!(result.root_id, Some(130));
    assert_eq!(result.lowest_common_ancestor, Some(125));
    assert_eq!(result.depth, Some(2));
}

#[rstest]
fn given_node_and_its_root_when_querying_then_root_is_the_lca(service: AncestryService) {
    let result = service.common_ancestor(5497637, 130).unwrap();

    assert_eq!(result.root_id, Some(130));
    assert_eq!(result.lowest_common_ancestor, Some(130));
    assert_eq!(result.depth, Some(1));
}

#[rstest]
fn given_disjoint_trees_when_querying_then_result_is_absent(service: AncestryService) {
    let result = service.common_ancestor(9, 4430546).unwrap();

    assert_eq!(result, CommonAncestry::absent());
}

#[rstest]
fn given_equal_nodes_when_querying_then_node_is_its_own_lca(service: AncestryService) {
    let result = service.common_ancestor(5497637, 5497637).unwrap();

    // depth equals the full ancestor path length: 130, 125, 4430546, 5497637
    assert_eq!(result.root_id, Some(130));
    assert_eq!(result.lowest_common_ancestor, Some(5497637));
    assert_eq!(result.depth, Some(4));
}

#[rstest]
fn given_any_pair_when_querying_then_result_is_symmetric(service: AncestryService) {
    assert_eq!(
        service.common_ancestor(5497637, 2820230).unwrap(),
        service.common_ancestor(2820230, 5497637).unwrap()
    );
    assert_eq!(
        service.common_ancestor(9, 130).unwrap(),
        service.common_ancestor(130, 9).unwrap()
    );
}

#[rstest]
fn given_unknown_node_when_querying_then_result_is_absent_not_an_error(service: AncestryService) {
    assert_eq!(
        service.common_ancestor(42, 130).unwrap(),
        CommonAncestry::absent()
    );
    assert_eq!(
        service.common_ancestor(130, 42).unwrap(),
        CommonAncestry::absent()
    );
}

#[rstest]
fn given_a_root_when_asking_its_path_then_it_is_its_own_sole_ancestor(service: AncestryService) {
    assert_eq!(service.ancestor_path(130).unwrap(), vec![130]);
}

#[rstest]
fn given_a_deep_node_when_asking_its_path_then_it_reads_root_to_node(service: AncestryService) {
    let path = service.ancestor_path(5497637).unwrap();

    assert_eq!(path, vec![130, 125, 4430546, 5497637]);
    assert_eq!(*path.last().unwrap(), 5497637);
}

#[rstest]
fn given_a_present_result_when_serializing_then_json_matches_wire_contract(
    service: AncestryService,
) {
    let result = service.common_ancestor(5497637, 2820230).unwrap();

    assert_eq!(
        serde_json::to_string(&result).unwrap(),
        r#"{"root_id":130,"lowest_common_ancestor":125,"depth":2}"#
    );
}

#[rstest]
fn given_an_absent_result_when_serializing_then_all_fields_are_null(service: AncestryService) {
    let result = service.common_ancestor(9, 4430546).unwrap();

    assert_eq!(
        serde_json::to_string(&result).unwrap(),
        r#"{"root_id":null,"lowest_common_ancestor":null,"depth":null}"#
    );
}
