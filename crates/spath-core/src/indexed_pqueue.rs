use crate::traits::{OpenList, QueueEntry};
use crate::Vertex;

const ABSENT: usize = usize::MAX;

/// Binary heap open list with in-place decrease-key.
///
/// Every queued vertex has exactly one entry; its heap position is tracked in a side table
/// indexed by [`Vertex`]. Changing a key gives the entry a fresh insertion number, so ties are
/// broken exactly as [`PriorityQueue`](crate::PriorityQueue) breaks them after discarding
/// stale entries.
#[derive(Default)]
pub struct IndexedQueue {
    heap: Vec<Slot>,
    index: Vec<usize>,
    sequence: u64,
}

#[derive(Clone, Copy)]
struct Slot {
    priority: f64,
    sequence: u64,
    vertex: Vertex,
}

impl Slot {
    #[inline(always)]
    fn le(&self, other: &Slot) -> bool {
        self.priority
            .total_cmp(&other.priority)
            .then(self.sequence.cmp(&other.sequence))
            .is_le()
    }
}

impl IndexedQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a queue sized for graphs of `vertices` vertices.
    pub fn with_capacity(vertices: usize) -> Self {
        IndexedQueue {
            heap: Vec::with_capacity(vertices),
            index: vec![ABSENT; vertices],
            sequence: 0,
        }
    }

    /// Whether `vertex` currently has an entry.
    pub fn contains(&self, vertex: Vertex) -> bool {
        self.position(vertex).is_some()
    }

    /// Priority of the entry for `vertex`, if it is queued.
    pub fn priority(&self, vertex: Vertex) -> Option<f64> {
        self.position(vertex).map(|i| self.heap[i].priority)
    }

    fn position(&self, vertex: Vertex) -> Option<usize> {
        match self.index.get(vertex.index()) {
            Some(&i) if i != ABSENT => Some(i),
            _ => None,
        }
    }

    fn next_sequence(&mut self) -> u64 {
        let sequence = self.sequence;
        self.sequence += 1;
        sequence
    }

    fn sift_up(&mut self, slot: Slot, mut index: usize) -> usize {
        while index > 0 {
            let parent_index = (index - 1) / 2;
            let parent = self.heap[parent_index];
            if parent.le(&slot) {
                break;
            }
            self.heap[index] = parent;
            self.index[parent.vertex.index()] = index;
            index = parent_index;
        }
        self.heap[index] = slot;
        self.index[slot.vertex.index()] = index;
        index
    }

    fn sift_down(&mut self, slot: Slot, mut index: usize) {
        loop {
            let child_1_index = index * 2 + 1;
            if child_1_index >= self.heap.len() {
                break;
            }
            let child_1 = self.heap[child_1_index];

            let child_2_index = child_1_index + 1;
            let (child_index, child) = match self.heap.get(child_2_index) {
                Some(child_2) if !child_1.le(child_2) => (child_2_index, *child_2),
                _ => (child_1_index, child_1),
            };

            if slot.le(&child) {
                break;
            }

            self.heap[index] = child;
            self.index[child.vertex.index()] = index;
            index = child_index;
        }

        self.heap[index] = slot;
        self.index[slot.vertex.index()] = index;
    }
}

impl OpenList for IndexedQueue {
    fn clear(&mut self) {
        for slot in &self.heap {
            self.index[slot.vertex.index()] = ABSENT;
        }
        self.heap.clear();
        self.sequence = 0;
    }

    fn push(&mut self, priority: f64, vertex: Vertex) {
        let slot = Slot {
            priority,
            sequence: self.next_sequence(),
            vertex,
        };
        match self.position(vertex) {
            Some(index) => {
                let index = self.sift_up(slot, index);
                self.sift_down(slot, index);
            }
            None => {
                if vertex.index() >= self.index.len() {
                    self.index.resize(vertex.index() + 1, ABSENT);
                }
                self.heap.push(slot);
                self.sift_up(slot, self.heap.len() - 1);
            }
        }
    }

    fn decrease_key(&mut self, vertex: Vertex, priority: f64) {
        if let Some(current) = self.priority(vertex) {
            if current <= priority {
                return;
            }
        }
        self.push(priority, vertex);
    }

    fn pop_min(&mut self) -> Option<QueueEntry> {
        if self.heap.is_empty() {
            return None;
        }
        let ret = self.heap.swap_remove(0);
        self.index[ret.vertex.index()] = ABSENT;
        if let Some(&slot) = self.heap.first() {
            self.sift_down(slot, 0);
        }
        Some(QueueEntry {
            priority: ret.priority,
            vertex: ret.vertex,
        })
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}
