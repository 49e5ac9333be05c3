use std::fmt;
use std::hash::{Hash, Hasher};

/// Fixed-capacity FIFO ring buffer.
///
/// Enqueueing into a full queue evicts the oldest element, which makes a
/// `FifoQueue` of capacity `n` a sliding window over the last `n` values.
/// Equality and hashing consider only the logical contents, oldest first.
#[derive(Debug, Clone)]
pub struct FifoQueue<T> {
    slots: Vec<Option<T>>,
    front: usize,
    len: usize,
}

impl<T> FifoQueue<T> {
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "FifoQueue capacity must be positive");
        Self {
            slots: std::iter::repeat_with(|| None).take(capacity).collect(),
            front: 0,
            len: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Appends `value`, returning the evicted oldest element when the queue was full.
    pub fn enqueue(&mut self, value: T) -> Option<T> {
        let cap = self.capacity();
        if self.is_full() {
            let evicted = self.slots[self.front].replace(value);
            self.front = (self.front + 1) % cap;
            evicted
        } else {
            let back = (self.front + self.len) % cap;
            self.slots[back] = Some(value);
            self.len += 1;
            None
        }
    }

    pub fn dequeue(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let value = self.slots[self.front].take();
        self.front = (self.front + 1) % self.capacity();
        self.len -= 1;
        value
    }

    pub fn front(&self) -> Option<&T> {
        if self.is_empty() {
            None
        } else {
            self.slots[self.front].as_ref()
        }
    }

    /// Elements from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        let cap = self.capacity();
        (0..self.len).filter_map(move |i| self.slots[(self.front + i) % cap].as_ref())
    }
}

impl<T: fmt::Display> FifoQueue<T> {
    /// Comma-joined contents, oldest first, suitable as a map key.
    pub fn key(&self) -> String {
        self.iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl<T: PartialEq> PartialEq for FifoQueue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for FifoQueue<T> {}

impl<T: Hash> Hash for FifoQueue<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for item in self.iter() {
            item.hash(state);
        }
    }
}

impl<T: fmt::Display> fmt::Display for FifoQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enqueue_evicts_oldest() {
        let mut q = FifoQueue::new(3);
        assert_eq!(q.enqueue(1), None);
        assert_eq!(q.enqueue(2), None);
        assert_eq!(q.enqueue(3), None);
        assert!(q.is_full());
        assert_eq!(q.enqueue(4), Some(1));
        assert_eq!(q.iter().copied().collect::<Vec<_>>(), vec![2, 3, 4]);
        assert_eq!(q.front(), Some(&2));
    }

    #[test]
    fn test_dequeue_wraps() {
        let mut q = FifoQueue::new(2);
        q.enqueue('a');
        q.enqueue('b');
        assert_eq!(q.dequeue(), Some('a'));
        q.enqueue('c');
        assert_eq!(q.dequeue(), Some('b'));
        assert_eq!(q.dequeue(), Some('c'));
        assert_eq!(q.dequeue(), None);
        assert!(q.is_empty());
    }

    #[test]
    fn test_key_and_display() {
        let mut q = FifoQueue::new(4);
        for d in [-2, 1, -1, 3, 2] {
            q.enqueue(d);
        }
        assert_eq!(q.key(), "1,-1,3,2");
        assert_eq!(q.to_string(), "[1, -1, 3, 2]");
    }

    #[test]
    fn test_equality_ignores_rotation() {
        let mut a = FifoQueue::new(2);
        a.enqueue(0);
        a.enqueue(1);
        a.enqueue(2);

        let mut b = FifoQueue::new(2);
        b.enqueue(1);
        b.enqueue(2);

        assert_eq!(a, b);
        let set: std::collections::HashSet<_> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    #[should_panic(expected = "capacity")]
    fn test_zero_capacity_panics() {
        let _ = FifoQueue::<u8>::new(0);
    }
}
