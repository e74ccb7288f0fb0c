use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// A min-priority queue for the graph algorithms, wrapping `BinaryHeap`
///
/// Entries compare by their natural `Ord`, smallest first, so callers queue
/// tuples with the priority in the leading position. Duplicate and stale
/// entries are allowed: consumers filter them on pop against a visited or
/// finalized marker (lazy deletion) rather than removing them eagerly.
#[derive(Debug)]
pub struct MinHeap<T>
where
    T: Ord,
{
    /// The underlying binary heap
    heap: BinaryHeap<Reverse<T>>,
}

impl<T> MinHeap<T>
where
    T: Ord,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        MinHeap {
            heap: BinaryHeap::new(),
        }
    }

    /// Returns true if the priority queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of elements in the priority queue
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes an entry into the priority queue
    pub fn push(&mut self, entry: T) {
        self.heap.push(Reverse(entry));
    }

    /// Removes and returns the smallest entry
    pub fn pop(&mut self) -> Option<T> {
        self.heap.pop().map(|Reverse(entry)| entry)
    }

    /// Returns the smallest entry without removing it
    pub fn peek(&self) -> Option<&T> {
        self.heap.peek().map(|Reverse(entry)| entry)
    }

    /// Clears the priority queue
    pub fn clear(&mut self) {
        self.heap.clear();
    }
}

impl<T> Default for MinHeap<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}
