pub mod benchmark_util;
pub mod heap_union_util;
pub mod int_set_util;
pub mod pairwise_union_util;
pub mod random_set_util;
