//! Per-day sequence numbers.

use std::collections::HashMap;

/// Next free sequence number for each `YYYYMMDD` date key.
///
/// Numbers start at 1 and are never handed out twice for the same key
/// within one counter's lifetime. A fresh counter knows nothing about
/// files renamed by an earlier run.
#[derive(Debug, Clone, Default)]
pub struct DateIndexCounter {
    next: HashMap<String, u32>,
}

impl DateIndexCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand out the next sequence number for `key` and advance it
    pub fn next_index(&mut self, key: &str) -> u32 {
        let next = self.next.entry(key.to_string()).or_insert(1);
        let index = *next;
        *next += 1;
        index
    }

    /// Number of distinct days seen
    pub fn days(&self) -> usize {
        self.next.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_one() {
        let mut counter = DateIndexCounter::new();
        assert_eq!(counter.days(), 0);
        assert_eq!(counter.next_index("20230704"), 1);
    }

    #[test]
    fn same_day_numbers_are_consecutive() {
        let mut counter = DateIndexCounter::new();
        let indices: Vec<_> = (0..4).map(|_| counter.next_index("20230704")).collect();
        assert_eq!(indices, vec![1, 2, 3, 4]);
        assert_eq!(counter.next_index("20230704"), 5);
    }

    #[test]
    fn days_are_independent() {
        let mut counter = DateIndexCounter::new();
        assert_eq!(counter.next_index("20230704"), 1);
        assert_eq!(counter.next_index("20230705"), 1);
        assert_eq!(counter.next_index("20230704"), 2);
        assert_eq!(counter.days(), 2);
    }
}
