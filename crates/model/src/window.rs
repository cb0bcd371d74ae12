//! Fixed-capacity FIFO ring buffer.
//!
//! The pipeline keeps three of these: a 4-slot window for prediction
//! smoothing, a 50-slot window of recent predictions for diagnostics,
//! and the bounded training set inside each regressor.

use std::collections::VecDeque;

/// A FIFO window over the last `capacity` pushed elements.
///
/// Pushing beyond capacity evicts the oldest element, so `len() <=
/// capacity` always holds. Elements are indexable `0..len()` in
/// insertion order (0 is the oldest retained element).
#[derive(Debug, Clone)]
pub struct DataWindow<T> {
    data: VecDeque<T>,
    capacity: usize,
}

impl<T> DataWindow<T> {
    /// Create a window retaining at most `capacity` elements.
    /// A zero capacity is promoted to 1 so a window can always hold
    /// the most recent element.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            data: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Push an element, evicting the oldest if the window is full.
    pub fn push(&mut self, value: T) {
        if self.data.len() == self.capacity {
            self.data.pop_front();
        }
        self.data.push_back(value);
    }

    /// Number of retained elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Maximum number of retained elements.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Element by index in insertion order; 0 is the oldest retained.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    /// Most recently pushed element.
    pub fn last(&self) -> Option<&T> {
        self.data.back()
    }

    /// Iterate oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Drop all retained elements.
    pub fn clear(&mut self) {
        self.data.clear();
    }
}

impl<T: Clone> DataWindow<T> {
    /// Snapshot of retained elements, oldest first.
    pub fn to_vec(&self) -> Vec<T> {
        self.data.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_push_under_capacity() {
        let mut window = DataWindow::new(4);
        window.push(1);
        window.push(2);
        assert_eq!(window.len(), 2);
        assert_eq!(window.get(0), Some(&1));
        assert_eq!(window.get(1), Some(&2));
        assert_eq!(window.last(), Some(&2));
    }

    #[test]
    fn test_push_evicts_oldest() {
        let mut window = DataWindow::new(3);
        for i in 0..5 {
            window.push(i);
        }
        assert_eq!(window.len(), 3);
        assert_eq!(window.to_vec(), vec![2, 3, 4]);
    }

    #[test]
    fn test_zero_capacity_promoted() {
        let mut window = DataWindow::new(0);
        window.push(7);
        assert_eq!(window.len(), 1);
        assert_eq!(window.last(), Some(&7));
    }

    #[test]
    fn test_clear() {
        let mut window = DataWindow::new(2);
        window.push(1);
        window.clear();
        assert!(window.is_empty());
    }

    proptest! {
        // After pushing n + k elements the window holds exactly the last
        // n, in push order.
        #[test]
        fn prop_retains_last_n_in_order(
            capacity in 1usize..16,
            values in proptest::collection::vec(any::<i32>(), 0..64),
        ) {
            let mut window = DataWindow::new(capacity);
            for &v in &values {
                window.push(v);
            }
            let expected: Vec<i32> = values
                .iter()
                .rev()
                .take(capacity)
                .rev()
                .cloned()
                .collect();
            prop_assert_eq!(window.to_vec(), expected);
            prop_assert!(window.len() <= capacity);
        }
    }
}
