use crate::heap_union_util::union_using_min_heap;
use crate::int_set_util::IntSet;
use crate::pairwise_union_util::union_by_pairs;
use crate::random_set_util::SetGenerator;
use anyhow::{anyhow, bail, Context, Result};
use std::io::Write;
use std::time::Instant;

pub const MIN_ELEMS_PER_SET: usize = 200;

pub const SINGLE_NUM_SETS: usize = 4096;
pub const SINGLE_MAX_ELEMS_PER_SET: usize = 10000;
pub const SINGLE_CEILING: i64 = 1 << 16;

pub const SWEEP_CEILING_START: i64 = 1 << 16;
pub const SWEEP_CEILING_END: i64 = 1 << 30;
pub const SWEEP_NUM_SETS_START: usize = 16;
pub const SWEEP_NUM_SETS_END: usize = 16384;
pub const SWEEP_MAX_ELEMS_START: usize = 500;
pub const SWEEP_MAX_ELEMS_END: usize = 15000;
pub const SWEEP_MAX_ELEMS_STEP: usize = 1000;

pub const HEADER: [&str; 9] = [
    "numsets",
    "totalElemsOverAllSets",
    "maxbatchid",
    "setunion(us)",
    "minheap(us)",
    "speedup",
    "heapwon",
    "numheapcmp",
    "result_size",
];

/// Parameters of one benchmark iteration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Combination {
    pub num_sets: usize,
    pub min_elems_per_set: usize,
    pub max_elems_per_set: usize,
    /// Inclusive upper bound of element values.
    pub ceiling: i64,
}

impl Combination {
    pub fn single() -> Combination {
        Combination {
            num_sets: SINGLE_NUM_SETS,
            min_elems_per_set: MIN_ELEMS_PER_SET,
            max_elems_per_set: SINGLE_MAX_ELEMS_PER_SET,
            ceiling: SINGLE_CEILING,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Algorithms {
    pub heap: bool,
    pub pairwise: bool,
}

impl Algorithms {
    pub const BOTH: Algorithms = Algorithms {
        heap: true,
        pairwise: true,
    };
    pub const HEAP_ONLY: Algorithms = Algorithms {
        heap: true,
        pairwise: false,
    };
    pub const PAIRWISE_ONLY: Algorithms = Algorithms {
        heap: false,
        pairwise: true,
    };
    pub const NONE: Algorithms = Algorithms {
        heap: false,
        pairwise: false,
    };

    /// `P...` selects the heap merge, `S...` the pairwise union, anything else neither.
    pub fn from_selector(selector: &str) -> Algorithms {
        match selector.chars().next() {
            Some('P') => Algorithms::HEAP_ONLY,
            Some('S') => Algorithms::PAIRWISE_ONLY,
            _ => Algorithms::NONE,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verification {
    Enforce,
    Skip,
}

/// One CSV row.
#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    pub num_sets: usize,
    pub total_elements: u64,
    pub ceiling: i64,
    pub pairwise_us: u64,
    pub heap_us: u64,
    pub speedup: f32,
    pub heap_won: bool,
    pub heap_comparisons: u64,
    pub result_size: usize,
}

impl Report {
    pub fn record(&self) -> [String; 9] {
        [
            self.num_sets.to_string(),
            self.total_elements.to_string(),
            self.ceiling.to_string(),
            self.pairwise_us.to_string(),
            self.heap_us.to_string(),
            self.speedup.to_string(),
            if self.heap_won { "Y" } else { "N" }.to_string(),
            self.heap_comparisons.to_string(),
            self.result_size.to_string(),
        ]
    }
}

pub struct ReportWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> ReportWriter<W> {
    /// Writes the header line immediately.
    pub fn new(inner: W) -> Result<ReportWriter<W>> {
        let mut writer = csv::Writer::from_writer(inner);
        writer.write_record(HEADER).context("writing csv header")?;
        writer.flush().context("flushing csv header")?;
        Ok(ReportWriter { writer })
    }

    pub fn write(&mut self, report: &Report) -> Result<()> {
        self.writer
            .write_record(report.record())
            .context("writing csv row")?;
        self.writer.flush().context("flushing csv row")?;
        Ok(())
    }

    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|err| anyhow!("flushing csv writer: {}", err.error()))
    }
}

/// Size checks between the two results. `inter_set` is built with the same
/// merge as `union_set`.
pub fn cross_check(pairwise: &IntSet, heap: &IntSet) -> Result<()> {
    let union_set = pairwise.union(heap);
    let inter_set = pairwise.union(heap);
    log::trace!(
        "cross check: union {} inter {} pairwise {} heap {}",
        union_set.len(),
        inter_set.len(),
        pairwise.len(),
        heap.len()
    );
    if union_set.len() != inter_set.len()
        || union_set.len() != pairwise.len()
        || union_set.len() != heap.len()
    {
        bail!(
            "union results differ: union {} inter {} pairwise {} heap {}",
            union_set.len(),
            inter_set.len(),
            pairwise.len(),
            heap.len()
        );
    }
    Ok(())
}

fn capacity_hint(sets: &[IntSet], ceiling: i64) -> usize {
    let total: usize = sets.iter().map(IntSet::len).sum();
    let distinct_values: usize = usize::try_from(ceiling)
        .unwrap_or(usize::MAX)
        .saturating_add(1);
    total.min(distinct_values)
}

/// Generate, time the selected algorithms, cross-check and build the row.
pub fn run_combination(
    generator: &mut SetGenerator,
    combination: &Combination,
    algorithms: Algorithms,
    verification: Verification,
) -> Result<Report> {
    let sets: Vec<IntSet> = generator.generate(
        combination.num_sets,
        combination.min_elems_per_set,
        combination.max_elems_per_set,
        combination.ceiling,
    );
    log::debug!(
        "generated {} sets (elements [{}, {}], ceiling {}), total so far {}",
        sets.len(),
        combination.min_elems_per_set,
        combination.max_elems_per_set,
        combination.ceiling,
        generator.total_elements()
    );

    let mut pairwise_result = IntSet::new();
    let mut pairwise_us: u64 = 0;
    if algorithms.pairwise {
        let begin = Instant::now();
        pairwise_result = union_by_pairs(&sets);
        pairwise_us = begin.elapsed().as_micros() as u64;
        log::debug!(
            "pairwise union: {} us, {} values",
            pairwise_us,
            pairwise_result.len()
        );
    }

    let mut heap_result = IntSet::new();
    let mut heap_us: u64 = 0;
    let mut heap_comparisons: u64 = 0;
    if algorithms.heap {
        let hint = capacity_hint(&sets, combination.ceiling);
        let begin = Instant::now();
        let merged = union_using_min_heap(&sets, hint);
        heap_us = begin.elapsed().as_micros() as u64;
        heap_result = merged.set;
        heap_comparisons = merged.comparisons;
        log::debug!(
            "min heap union: {} us, {} values, {} comparisons",
            heap_us,
            heap_result.len(),
            heap_comparisons
        );
    }

    let mut speedup: f32 = 0.0;
    if algorithms.heap && algorithms.pairwise {
        if verification == Verification::Enforce {
            cross_check(&pairwise_result, &heap_result).with_context(|| {
                format!(
                    "numsets {} ceiling {} max elements {}",
                    combination.num_sets, combination.ceiling, combination.max_elems_per_set
                )
            })?;
        }
        speedup = pairwise_us as f32 / heap_us as f32;
    }

    Ok(Report {
        num_sets: combination.num_sets,
        total_elements: generator.total_elements(),
        ceiling: combination.ceiling,
        pairwise_us,
        heap_us,
        speedup,
        heap_won: speedup > 1.0,
        heap_comparisons,
        result_size: heap_result.len(),
    })
}

/// Every point of the sweep: ceiling outermost, then set count, then max elements.
pub fn sweep_combinations() -> impl Iterator<Item = Combination> {
    std::iter::successors(Some(SWEEP_CEILING_START), |ceiling| Some(ceiling << 1))
        .take_while(|ceiling| *ceiling < SWEEP_CEILING_END)
        .flat_map(|ceiling| {
            std::iter::successors(Some(SWEEP_NUM_SETS_START), |num_sets| Some(num_sets * 2))
                .take_while(|num_sets| *num_sets < SWEEP_NUM_SETS_END)
                .flat_map(move |num_sets| {
                    (SWEEP_MAX_ELEMS_START..SWEEP_MAX_ELEMS_END)
                        .step_by(SWEEP_MAX_ELEMS_STEP)
                        .map(move |max_elems_per_set| Combination {
                            num_sets,
                            min_elems_per_set: MIN_ELEMS_PER_SET,
                            max_elems_per_set,
                            ceiling,
                        })
                })
        })
}

pub fn run_sweep<W: Write>(
    generator: &mut SetGenerator,
    writer: &mut ReportWriter<W>,
    verification: Verification,
) -> Result<()> {
    let start_time = Instant::now();
    let mut rows: usize = 0;
    for combination in sweep_combinations() {
        let report = run_combination(generator, &combination, Algorithms::BOTH, verification)?;
        writer.write(&report)?;
        rows += 1;
    }
    log::info!("sweep finished: {} rows in {:?}", rows, start_time.elapsed());
    Ok(())
}

pub fn run_single<W: Write>(
    generator: &mut SetGenerator,
    writer: &mut ReportWriter<W>,
    combination: &Combination,
    algorithms: Algorithms,
) -> Result<()> {
    let report = run_combination(generator, combination, algorithms, Verification::Enforce)?;
    writer.write(&report)
}
