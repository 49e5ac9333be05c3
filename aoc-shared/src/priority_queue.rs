//! Binary heap with stable handles for in-place priority updates
//!
//! Dijkstra-style searches push a node once and then lower its cost as better
//! paths appear. [`PriorityQueue::push`] returns an [`EntryHandle`] that stays
//! valid until the entry is popped, and [`PriorityQueue::update`] re-sifts the
//! entry wherever it currently sits in the heap.
//!
//! Ties on priority pop in push order. An updated entry pops ahead of every
//! entry already queued with the same priority.

/// Which end of the priority range pops first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HeapOrder {
    /// Smallest priority first.
    #[default]
    Min,
    /// Largest priority first.
    Max,
}

/// Opaque reference to a pushed entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryHandle(usize);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<T> {
    pub value: T,
    pub priority: i64,
}

#[derive(Debug, Clone)]
struct Node<T> {
    entry: Entry<T>,
    handle: usize,
    /// Tie-breaker: lower stamps pop first among equal priorities.
    stamp: i64,
}

#[derive(Debug, Clone)]
pub struct PriorityQueue<T> {
    heap: Vec<Node<T>>,
    /// `positions[handle]` is the heap index of a live entry, `None` once popped.
    positions: Vec<Option<usize>>,
    order: HeapOrder,
    /// Next stamp handed out by `push`, counting up from zero.
    next_stamp: i64,
    /// Last stamp handed out by `update`, counting down from zero.
    front_stamp: i64,
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PriorityQueue<T> {
    /// Min-heap.
    pub fn new() -> Self {
        Self::with_order(HeapOrder::Min)
    }

    pub fn with_order(order: HeapOrder) -> Self {
        Self {
            heap: Vec::new(),
            positions: Vec::new(),
            order,
            next_stamp: 0,
            front_stamp: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn push(&mut self, value: T, priority: i64) -> EntryHandle {
        let handle = self.positions.len();
        let idx = self.heap.len();
        let stamp = self.next_stamp;
        self.next_stamp += 1;
        self.heap.push(Node {
            entry: Entry { value, priority },
            handle,
            stamp,
        });
        self.positions.push(Some(idx));
        self.sift_up(idx);
        EntryHandle(handle)
    }

    pub fn peek(&self) -> Option<&Entry<T>> {
        self.heap.first().map(|n| &n.entry)
    }

    pub fn pop(&mut self) -> Option<Entry<T>> {
        if self.heap.is_empty() {
            return None;
        }
        let last = self.heap.len() - 1;
        self.swap(0, last);
        let node = self.heap.pop()?;
        self.positions[node.handle] = None;
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some(node.entry)
    }

    /// Whether the entry behind `handle` is still queued.
    pub fn contains(&self, handle: EntryHandle) -> bool {
        matches!(self.positions.get(handle.0), Some(Some(_)))
    }

    pub fn priority_of(&self, handle: EntryHandle) -> Option<i64> {
        let idx = (*self.positions.get(handle.0)?)?;
        Some(self.heap[idx].entry.priority)
    }

    /// Replaces the value and priority of a queued entry and restores heap order.
    /// Returns `false` if the entry has already been popped.
    pub fn update(&mut self, handle: EntryHandle, value: T, priority: i64) -> bool {
        let Some(&Some(idx)) = self.positions.get(handle.0) else {
            return false;
        };
        self.front_stamp -= 1;
        let node = &mut self.heap[idx];
        node.entry = Entry { value, priority };
        node.stamp = self.front_stamp;
        self.sift_up(idx);
        if let Some(&Some(idx)) = self.positions.get(handle.0) {
            self.sift_down(idx);
        }
        true
    }

    /// Whether the node at `i` pops before the node at `j`.
    fn before(&self, i: usize, j: usize) -> bool {
        let (a, b) = (&self.heap[i], &self.heap[j]);
        let by_priority = match self.order {
            HeapOrder::Min => a.entry.priority.cmp(&b.entry.priority),
            HeapOrder::Max => b.entry.priority.cmp(&a.entry.priority),
        };
        by_priority.then(a.stamp.cmp(&b.stamp)).is_lt()
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.heap.swap(i, j);
        self.positions[self.heap[i].handle] = Some(i);
        self.positions[self.heap[j].handle] = Some(j);
    }

    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if !self.before(idx, parent) {
                break;
            }
            self.swap(idx, parent);
            idx = parent;
        }
    }

    fn sift_down(&mut self, mut idx: usize) {
        let len = self.heap.len();
        loop {
            let mut best = idx;
            for child in [2 * idx + 1, 2 * idx + 2] {
                if child < len && self.before(child, best) {
                    best = child;
                }
            }
            if best == idx {
                break;
            }
            self.swap(idx, best);
            idx = best;
        }
    }
}
