use crate::int_set_util::IntSet;
use binary_heap_plus::BinaryHeap;
use std::cell::Cell;

/// Position inside one input set. Only non-empty sets get a cursor, so
/// `current` is always in bounds while the cursor sits in the heap.
struct Cursor<'a> {
    values: &'a [i64],
    position: usize,
}

impl Cursor<'_> {
    fn current(&self) -> i64 {
        self.values[self.position]
    }
}

pub struct HeapUnion {
    pub set: IntSet,
    /// Number of heap-ordering comparisons made by this call; roughly
    /// log2(number of sets) * total elements.
    pub comparisons: u64,
}

/// k-way merge of `sets` through a min-heap of cursors.
///
/// `capacity_hint` pre-sizes the result and has no effect on its contents.
pub fn union_using_min_heap<'a>(sets: &'a [IntSet], capacity_hint: usize) -> HeapUnion {
    let comparisons: Cell<u64> = Cell::new(0);
    let mut heap = BinaryHeap::new_by(|a: &Cursor<'a>, b: &Cursor<'a>| {
        comparisons.set(comparisons.get() + 1);
        a.current().cmp(&b.current()).reverse() // We want a min-heap
    });
    heap.reserve(sets.len());

    for set in sets.iter().filter(|set| !set.is_empty()) {
        heap.push(Cursor {
            values: set.as_slice(),
            position: 0,
        });
    }

    let mut result = IntSet::with_capacity(capacity_hint);
    let mut last_written: Option<i64> = None;
    while let Some(mut cursor) = heap.pop() {
        let value = cursor.current();
        if last_written != Some(value) {
            result.push_greatest(value);
            last_written = Some(value);
        }
        cursor.position += 1;
        if cursor.position < cursor.values.len() {
            heap.push(cursor);
        }
    }

    HeapUnion {
        set: result,
        comparisons: comparisons.get(),
    }
}
