use std::cmp::Ordering;

/// Sorted, duplicate-free set of `i64` stored in a flat vector.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IntSet {
    values: Vec<i64>,
}

impl IntSet {
    pub fn new() -> IntSet {
        IntSet { values: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> IntSet {
        IntSet {
            values: Vec::with_capacity(capacity),
        }
    }

    /// Sorts and deduplicates `values`; arbitrary order and repeats are fine.
    pub fn from_unsorted(mut values: Vec<i64>) -> IntSet {
        values.sort_unstable();
        values.dedup();
        IntSet { values }
    }

    /// Appends `value`, which must be greater than every element already present.
    pub(crate) fn push_greatest(&mut self, value: i64) {
        debug_assert!(
            self.values.last().map_or(true, |last| *last < value),
            "IntSet::push_greatest assertion failed: {:?} !< {}",
            self.values.last(),
            value
        );
        self.values.push(value);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.values
    }

    pub fn iter(&self) -> std::slice::Iter<'_, i64> {
        self.values.iter()
    }

    pub fn last(&self) -> Option<i64> {
        self.values.last().copied()
    }

    pub fn contains(&self, value: i64) -> bool {
        self.values.binary_search(&value).is_ok()
    }

    /// Sorted-merge union of two sets into a fresh set.
    pub fn union(&self, other: &IntSet) -> IntSet {
        let left = self.as_slice();
        let right = other.as_slice();
        let mut result = IntSet::with_capacity(left.len() + right.len());
        let mut i: usize = 0;
        let mut j: usize = 0;
        while i < left.len() && j < right.len() {
            match left[i].cmp(&right[j]) {
                Ordering::Less => {
                    result.values.push(left[i]);
                    i += 1;
                }
                Ordering::Greater => {
                    result.values.push(right[j]);
                    j += 1;
                }
                Ordering::Equal => {
                    result.values.push(left[i]);
                    i += 1;
                    j += 1;
                }
            }
        }
        result.values.extend_from_slice(&left[i..]);
        result.values.extend_from_slice(&right[j..]);
        result
    }
}

impl From<Vec<i64>> for IntSet {
    fn from(values: Vec<i64>) -> Self {
        IntSet::from_unsorted(values)
    }
}

impl FromIterator<i64> for IntSet {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        IntSet::from_unsorted(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a IntSet {
    type Item = &'a i64;
    type IntoIter = std::slice::Iter<'a, i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
