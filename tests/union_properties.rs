use proptest::prelude::*;
use std::collections::BTreeSet;
use union_of_many_sets::benchmark_util::cross_check;
use union_of_many_sets::heap_union_util::union_using_min_heap;
use union_of_many_sets::int_set_util::IntSet;
use union_of_many_sets::pairwise_union_util::union_by_pairs;

fn collection_strategy() -> impl Strategy<Value = Vec<IntSet>> {
    prop::collection::vec(
        prop::collection::vec(0i64..2000, 0..60).prop_map(IntSet::from),
        1..24,
    )
}

fn is_strictly_ascending(set: &IntSet) -> bool {
    set.as_slice().windows(2).all(|w| w[0] < w[1])
}

proptest! {
    #[test]
    fn prop_algorithms_agree_with_reference(sets in collection_strategy()) {
        let expected: Vec<i64> = sets
            .iter()
            .flat_map(|set| set.iter().copied())
            .collect::<BTreeSet<i64>>()
            .into_iter()
            .collect();
        let pairwise = union_by_pairs(&sets);
        let heap = union_using_min_heap(&sets, 0).set;

        prop_assert_eq!(pairwise.as_slice(), expected.as_slice());
        prop_assert_eq!(heap.as_slice(), expected.as_slice());
        prop_assert!(is_strictly_ascending(&pairwise));
        prop_assert!(is_strictly_ascending(&heap));
        prop_assert!(cross_check(&pairwise, &heap).is_ok());
    }

    #[test]
    fn prop_single_non_empty_set_is_returned(
        values in prop::collection::vec(any::<i64>(), 1..200),
        empties in 0usize..10,
        position in 0usize..10,
    ) {
        let only = IntSet::from(values);
        let mut sets: Vec<IntSet> = vec![IntSet::new(); empties];
        sets.insert(position.min(empties), only.clone());

        prop_assert_eq!(&union_by_pairs(&sets), &only);
        prop_assert_eq!(&union_using_min_heap(&sets, only.len()).set, &only);
    }

    #[test]
    fn prop_disjoint_sets_sum_sizes(
        sizes in prop::collection::vec(0usize..80, 1..20),
    ) {
        let num_sets = sizes.len() as i64;
        let sets: Vec<IntSet> = sizes
            .iter()
            .enumerate()
            .map(|(i, size)| (0..*size as i64).map(|k| i as i64 + k * num_sets).collect())
            .collect();
        let total: usize = sets.iter().map(IntSet::len).sum();

        prop_assert_eq!(union_by_pairs(&sets).len(), total);
        prop_assert_eq!(union_using_min_heap(&sets, total).set.len(), total);
    }

    #[test]
    fn prop_identical_sets_collapse(
        values in prop::collection::vec(any::<i64>(), 0..200),
        copies in 1usize..16,
    ) {
        let set = IntSet::from(values);
        let sets: Vec<IntSet> = vec![set.clone(); copies];

        prop_assert_eq!(union_by_pairs(&sets).len(), set.len());
        prop_assert_eq!(union_using_min_heap(&sets, 0).set.len(), set.len());
    }

    #[test]
    fn prop_comparisons_bounded_by_log(sets in collection_strategy()) {
        let total: u64 = sets.iter().map(|set| set.len() as u64).sum();
        let levels: u64 = 64 - (sets.len() as u64).leading_zeros() as u64;
        let first = union_using_min_heap(&sets, 0).comparisons;
        let second = union_using_min_heap(&sets, 0).comparisons;

        prop_assert_eq!(first, second);
        prop_assert!(first <= 3 * total * levels);
    }
}
