//! Property tests for the search index and the interaction state machine.
//!
//! Catalogs are generated from a small alphabet so random queries hit often.

use destsearch_core::prelude::*;
use proptest::prelude::*;

fn entity_strategy(kind: EntityKind) -> impl Strategy<Value = SearchEntity> {
    "[a-cA-C ]{1,8}".prop_map(move |name| {
        let path = format!("/{}/{}", kind, destsearch_core::text::slugify(&name));
        SearchEntity::new(name, kind, LegalStatus::Unknown, path, "")
    })
}

fn index_strategy() -> impl Strategy<Value = (SearchIndex, usize)> {
    (
        proptest::collection::vec(entity_strategy(EntityKind::Region), 0..20),
        proptest::collection::vec(entity_strategy(EntityKind::Country), 0..20),
        1usize..10,
    )
        .prop_map(|(regions, world, max)| {
            let config = SearchConfig {
                max_suggestions: max,
                ..SearchConfig::default()
            };
            (SearchIndex::new(regions, world, config), max)
        })
}

/// Position of every hit in the index, compared by identity.
fn positions(index: &SearchIndex, hits: &[&SearchEntity]) -> Vec<usize> {
    hits.iter()
        .map(|hit| {
            index
                .entities()
                .iter()
                .position(|e| std::ptr::eq(e, *hit))
                .expect("hit comes from the index")
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn substring_invariant((index, _) in index_strategy(), query in "[a-cA-C ]{0,3}") {
        let hits: Vec<&SearchEntity> = index.matches(&query).collect();
        for e in index.entities() {
            let expected = !query.is_empty()
                && e.name.to_lowercase().contains(&query.to_lowercase());
            let found = hits.iter().any(|h| std::ptr::eq(*h, e));
            prop_assert_eq!(found, expected, "entity {:?} query {:?}", e.name, query);
        }
    }

    #[test]
    fn results_keep_index_order((index, _) in index_strategy(), query in "[a-c]{1,2}") {
        let hits = index.search(&query);
        let pos = positions(&index, &hits);
        prop_assert!(pos.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn results_are_bounded((index, max) in index_strategy(), query in "[a-c]{0,2}") {
        let hits = index.search(&query);
        prop_assert!(hits.len() <= max);
        let all: Vec<_> = index.matches(&query).collect();
        prop_assert_eq!(hits.len(), all.len().min(max));
        // Truncation keeps the head of the full match list.
        prop_assert_eq!(positions(&index, &hits), positions(&index, &all[..hits.len()]));
    }

    #[test]
    fn empty_query_yields_nothing((index, _) in index_strategy()) {
        prop_assert!(index.search("").is_empty());
        prop_assert_eq!(index.matches("").count(), 0);
    }

    #[test]
    fn selection_stays_in_range(
        (index, _) in index_strategy(),
        query in "[a-c]{1,2}",
        moves in proptest::collection::vec(any::<bool>(), 0..30),
    ) {
        let mut state = SearchState::new().on_type(&index, query);
        let n = state.results.len() as isize;
        for down in moves {
            let dir = if down { Direction::Down } else { Direction::Up };
            state = state.on_arrow(dir);
            prop_assert!(state.selected_index() >= -1);
            prop_assert!(state.selected_index() <= n - 1);
        }
    }
}
