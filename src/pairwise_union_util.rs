use crate::int_set_util::IntSet;

/// Union of `sets` built by merging the running result with one set at a time.
pub fn union_by_pairs(sets: &[IntSet]) -> IntSet {
    let Some((first, rest)) = sets.split_first() else {
        return IntSet::new();
    };
    let mut result: IntSet = first.clone();
    for current in rest {
        result = result.union(current);
    }
    result
}

#[cfg(test)]
mod tests {
    use crate::int_set_util::IntSet;
    use crate::pairwise_union_util::union_by_pairs;
    use ::function_name::named;

    #[test]
    #[named]
    fn three_overlapping_sets() {
        let sets: Vec<IntSet> = vec![
            IntSet::from(vec![1, 3, 5]),
            IntSet::from(vec![2, 3, 6]),
            IntSet::from(vec![3, 7]),
        ];
        let result = union_by_pairs(&sets);
        assert!(
            result.as_slice() == [1, 2, 3, 5, 6, 7],
            "{} failed: {:?}",
            function_name!(),
            result
        );
    }

    #[test]
    #[named]
    fn leading_empty_set() {
        let sets: Vec<IntSet> = vec![IntSet::new(), IntSet::from(vec![1, 2])];
        let result = union_by_pairs(&sets);
        assert!(result.as_slice() == [1, 2], "{} failed", function_name!());
    }

    #[test]
    #[named]
    fn single_set_is_copied() {
        let sets: Vec<IntSet> = vec![IntSet::from(vec![10, 20])];
        assert!(union_by_pairs(&sets) == sets[0], "{} failed", function_name!());
    }

    #[test]
    #[named]
    fn empty_collection_gives_empty_set() {
        assert!(union_by_pairs(&[]).is_empty(), "{} failed", function_name!());
    }
}
