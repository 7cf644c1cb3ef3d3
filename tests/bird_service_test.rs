//! Tests for BirdService

use std::sync::Arc;

use rstest::{fixture, rstest};

use aviary::application::services::BirdService;
use aviary::domain::{Bird, Forest};
use aviary::infrastructure::MemoryStore;

/// 123 -> 456; 789 and 555 are standalone roots.
/// Birds: joe and jane on 456, jimmy on 789, noop on 555.
#[fixture]
fn service() -> BirdService {
    aviary::util::testing::init_test_setup();
    let mut forest = Forest::new();
    forest.insert(123, None).unwrap();
    forest.insert(456, Some(123)).unwrap();
    forest.insert(789, None).unwrap();
    forest.insert(555, None).unwrap();

    let birds = vec![
        Bird { id: 1, node_id: 456, name: "joe".into() },
        Bird { id: 2, node_id: 456, name: "jane".into() },
        Bird { id: 3, node_id: 789, name: "jimmy".into() },
        Bird { id: 4, node_id: 555, name: "noop".into() },
    ];
    BirdService::new(Arc::new(MemoryStore::new(forest, birds)))
}

#[rstest]
fn given_seed_nodes_when_filtering_then_returns_birds_of_all_descendants(service: BirdService) {
    // Act
    let birds = service.for_all_descendants_of(&[123, 789]).unwrap();

    // Assert - ordered by bird id, node 555's bird excluded
    let summary: Vec<_> = birds
        .iter()
        .map(|b| (b.id, b.node_id, b.name.as_str()))
        .collect();
    assert_eq!(
        summary,
        vec![(1, 456, "joe"), (2, 456, "jane"), (3, 789, "jimmy")]
    );
}

#[rstest]
fn given_overlapping_seeds_when_filtering_then_birds_appear_once(service: BirdService) {
    // 456 is a descendant of 123
    let birds = service.for_all_descendants_of(&[123, 456]).unwrap();

    let ids: Vec<_> = birds.iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[rstest]
fn given_unknown_seeds_when_filtering_then_returns_empty_not_an_error(service: BirdService) {
    assert!(service.for_all_descendants_of(&[111, 345]).unwrap().is_empty());
}

#[rstest]
fn given_mixed_seeds_when_filtering_then_unknown_ids_are_ignored(service: BirdService) {
    let birds = service.for_all_descendants_of(&[111, 789]).unwrap();

    let ids: Vec<_> = birds.iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![3]);
}

#[test]
fn given_birdless_closure_when_filtering_then_returns_empty() {
    let mut forest = Forest::new();
    forest.insert(77, None).unwrap();
    let lonely = BirdService::new(Arc::new(MemoryStore::new(forest, [])));

    assert!(lonely.for_all_descendants_of(&[77]).unwrap().is_empty());
}

#[rstest]
fn given_seeds_when_asking_closure_then_it_is_sorted_and_deduplicated(service: BirdService) {
    assert_eq!(service.descendant_ids(&[123, 456]).unwrap(), vec![123, 456]);
    assert_eq!(
        service.descendant_ids(&[789, 123, 789]).unwrap(),
        vec![123, 456, 789]
    );
}

#[rstest]
fn given_birds_when_serializing_then_json_matches_wire_contract(service: BirdService) {
    let birds = service.for_all_descendants_of(&[123, 789]).unwrap();

    assert_eq!(
        serde_json::to_string(&birds).unwrap(),
        r#"[{"id":1,"node_id":456,"name":"joe"},{"id":2,"node_id":456,"name":"jane"},{"id":3,"node_id":789,"name":"jimmy"}]"#
    );
}

#[rstest]
fn given_no_matches_when_serializing_then_json_is_an_empty_array(service: BirdService) {
    let birds = service.for_all_descendants_of(&[111]).unwrap();

    assert_eq!(serde_json::to_string(&birds).unwrap(), "[]");
}
