use std::cmp::Ordering;

/// Handle to a tree node waiting to be merged, ordered by frequency.
///
/// The sequence number breaks frequency ties: of two entries with equal
/// frequency, the one inserted earlier is extracted first. Without this the
/// extraction order of equal frequencies would depend on heapify internals
/// and the resulting tree shape would not be reproducible.
#[derive(Clone, Copy)]
pub struct HeapEntry {
    pub frequency: usize,
    pub node_index: usize,
    sequence_number: usize,
}

impl HeapEntry {
    fn cmp_key(&self) -> (usize, usize) {
        (self.frequency, self.sequence_number)
    }
}

/// Array-backed binary min-heap over tree node handles.
pub struct MinHeap {
    entries: Vec<HeapEntry>,
    insertion_count: usize,
}

impl MinHeap {
    pub fn new() -> MinHeap {
        MinHeap {
            entries: Vec::new(),
            insertion_count: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> MinHeap {
        MinHeap {
            entries: Vec::with_capacity(capacity),
            insertion_count: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Appends an entry and restores heap order with a full heapify pass over
    /// every internal node, bottom-up. That is O(n) per insert where a single
    /// sift-up would be O(log n); it stays as is because the alphabet is at
    /// most 256 symbols and the original program rebuilt the heap the same
    /// way on every insert.
    pub fn insert(&mut self, frequency: usize, node_index: usize) {
        let entry = HeapEntry {
            frequency,
            node_index,
            sequence_number: self.insertion_count,
        };
        self.insertion_count += 1;
        self.entries.push(entry);
        self.rebuild_heap_order();
    }

    /// Removes and returns the entry with the smallest frequency, or `None`
    /// if the heap is empty.
    pub fn extract_min(&mut self) -> Option<HeapEntry> {
        if self.entries.is_empty() {
            return None;
        }
        let last_index = self.entries.len() - 1;
        self.entries.swap(0, last_index);
        let minimum = self.entries.pop();
        self.rebuild_heap_order();
        minimum
    }

    fn rebuild_heap_order(&mut self) {
        if self.entries.len() < 2 {
            return;
        }
        for index in (0..self.entries.len() / 2).rev() {
            self.heapify_down(index);
        }
    }

    /// Restores the heap property below `index`: swaps with the smaller
    /// child while one orders before the current entry.
    fn heapify_down(&mut self, index: usize) {
        let left = 2 * index + 1;
        let right = 2 * index + 2;
        let mut smallest = index;
        if left < self.entries.len() && self.orders_before(left, smallest) {
            smallest = left;
        }
        if right < self.entries.len() && self.orders_before(right, smallest) {
            smallest = right;
        }
        if smallest != index {
            self.entries.swap(index, smallest);
            self.heapify_down(smallest);
        }
    }

    fn orders_before(&self, a: usize, b: usize) -> bool {
        self.entries[a].cmp_key().cmp(&self.entries[b].cmp_key()) == Ordering::Less
    }
}

impl Default for MinHeap {
    fn default() -> Self {
        Self::new()
    }
}
