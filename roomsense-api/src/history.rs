use std::collections::VecDeque;
use std::collections::vec_deque;

pub const DEFAULT_CAPACITY: usize = 10;

/// Fixed-capacity FIFO of the most recent values, oldest first.
#[derive(Debug, Clone, PartialEq)]
pub struct History<T> {
    buffer: VecDeque<T>,
    capacity: usize,
}

impl<T> History<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            buffer: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends `value`, evicting the oldest entries beyond capacity.
    pub fn push(mut self, value: T) -> Self {
        self.buffer.push_back(value);
        while self.buffer.len() > self.capacity {
            self.buffer.pop_front();
        }

        self
    }

    pub fn latest(&self) -> Option<&T> {
        self.buffer.back()
    }

    pub fn iter(&self) -> vec_deque::Iter<'_, T> {
        self.buffer.iter()
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

impl<T> Default for History<T> {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl<'a, T> IntoIterator for &'a History<T> {
    type Item = &'a T;
    type IntoIter = vec_deque::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.buffer.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_last_ten_in_order() {
        let history = (1..=15).fold(History::default(), History::push);

        assert_eq!(history.len(), 10);
        assert_eq!(history.iter().copied().collect::<Vec<u32>>(), (6..=15).collect::<Vec<u32>>());
        assert_eq!(history.latest(), Some(&15));
    }

    #[test]
    fn test_below_capacity_keeps_everything() {
        let history = History::new(10).push(3).push(1).push(2);

        assert_eq!(history.iter().copied().collect::<Vec<u32>>(), vec![3, 1, 2]);
    }

    #[test]
    fn test_zero_capacity_stays_empty() {
        let history = History::new(0).push(1);

        assert!(history.is_empty());
        assert_eq!(history.latest(), None);
    }
}
