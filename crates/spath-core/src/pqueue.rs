use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::traits::{OpenList, QueueEntry};
use crate::Vertex;

/// Binary heap open list with lazy deletion.
///
/// `decrease_key` pushes a second entry instead of updating the first one, so a vertex whose
/// distance improved is queued several times. Only the most recent entry is authoritative; the
/// consumer discards the older ones when they are popped.
#[derive(Default)]
pub struct PriorityQueue {
    heap: BinaryHeap<HeapEntry>,
    sequence: u64,
}

struct HeapEntry {
    priority: f64,
    sequence: u64,
    vertex: Vertex,
}

impl PriorityQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a queue with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        PriorityQueue {
            heap: BinaryHeap::with_capacity(capacity),
            sequence: 0,
        }
    }

    /// Returns the entry that [`OpenList::pop_min`] would return next.
    pub fn peek(&self) -> Option<QueueEntry> {
        self.heap.peek().map(|entry| QueueEntry {
            priority: entry.priority,
            vertex: entry.vertex,
        })
    }
}

impl OpenList for PriorityQueue {
    fn clear(&mut self) {
        self.heap.clear();
        self.sequence = 0;
    }

    fn push(&mut self, priority: f64, vertex: Vertex) {
        let sequence = self.sequence;
        self.sequence += 1;
        self.heap.push(HeapEntry {
            priority,
            sequence,
            vertex,
        });
    }

    #[inline(always)]
    fn decrease_key(&mut self, vertex: Vertex, priority: f64) {
        self.push(priority, vertex);
    }

    fn pop_min(&mut self) -> Option<QueueEntry> {
        self.heap.pop().map(|entry| QueueEntry {
            priority: entry.priority,
            vertex: entry.vertex,
        })
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    // `BinaryHeap` is a max-heap, so the comparison is reversed: the smallest priority, then the
    // earliest insertion, compares greatest.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}
