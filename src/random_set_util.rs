use crate::int_set_util::IntSet;
use rand::distributions::Uniform;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random input for one benchmark iteration.
///
/// `total_elements` keeps growing across every call to [`SetGenerator::generate`]
/// for the lifetime of the generator, so a sweep reports a running total.
pub struct SetGenerator {
    rng: StdRng,
    total_elements: u64,
}

impl SetGenerator {
    pub fn new(seed: u64) -> SetGenerator {
        SetGenerator {
            rng: StdRng::seed_from_u64(seed),
            total_elements: 0,
        }
    }

    pub fn total_elements(&self) -> u64 {
        self.total_elements
    }

    /// Builds `num_sets` sets. Each one draws its cardinality from
    /// `[min_elems, max_elems]` and its values from `[0, ceiling]`; collisions
    /// make a set smaller than the drawn cardinality.
    pub fn generate(
        &mut self,
        num_sets: usize,
        min_elems: usize,
        max_elems: usize,
        ceiling: i64,
    ) -> Vec<IntSet> {
        debug_assert!(
            min_elems <= max_elems,
            "SetGenerator::generate assertion failed: {} !<= {}",
            min_elems,
            max_elems
        );
        debug_assert!(
            ceiling >= 0,
            "SetGenerator::generate assertion failed: ceiling {} < 0",
            ceiling
        );
        let value_dist: Uniform<i64> = Uniform::new_inclusive(0, ceiling);
        let mut sets: Vec<IntSet> = Vec::with_capacity(num_sets);
        for _ in 0..num_sets {
            let cardinality: usize = self.rng.gen_range(min_elems..=max_elems);
            let mut values: Vec<i64> = Vec::with_capacity(cardinality);
            values.extend((&mut self.rng).sample_iter(&value_dist).take(cardinality));
            let set = IntSet::from_unsorted(values);
            self.total_elements += set.len() as u64;
            sets.push(set);
        }
        sets
    }
}
