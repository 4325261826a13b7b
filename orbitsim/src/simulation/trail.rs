//! Bounded position history used to draw orbit trails
//!
//! `Trail` is an index-based ring buffer: once `capacity` points are stored,
//! each push overwrites the oldest slot, so appends are O(1)

use super::states::NVec2;

#[derive(Debug, Clone, PartialEq)]
pub struct Trail {
    points: Vec<NVec2>, // storage, never longer than `capacity`
    head: usize, // index of the oldest point once the buffer is full
    capacity: usize,
}

impl Trail {
    pub fn new(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
            head: 0,
            capacity,
        }
    }

    /// Append a point, evicting the oldest one when full
    pub fn push(&mut self, p: NVec2) {
        if self.capacity == 0 {
            return;
        }
        if self.points.len() < self.capacity {
            self.points.push(p);
        } else {
            self.points[self.head] = p;
            self.head = (self.head + 1) % self.capacity;
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Points in insertion order, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &NVec2> + '_ {
        let (newer, older) = self.points.split_at(self.head);
        older.iter().chain(newer.iter())
    }

    pub fn oldest(&self) -> Option<&NVec2> {
        self.iter().next()
    }

    pub fn latest(&self) -> Option<&NVec2> {
        if self.points.is_empty() {
            return None;
        }
        let idx = (self.head + self.points.len() - 1) % self.points.len();
        self.points.get(idx)
    }

    pub fn to_vec(&self) -> Vec<NVec2> {
        self.iter().copied().collect()
    }

    /// Change the capacity, keeping the newest points that still fit
    pub fn set_capacity(&mut self, capacity: usize) {
        let keep = self.points.len().min(capacity);
        let skip = self.points.len() - keep;
        let points: Vec<NVec2> = self.iter().skip(skip).copied().collect();
        *self = Trail::new(capacity);
        for p in points {
            self.push(p);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64) -> NVec2 {
        NVec2::new(x, -x)
    }

    #[test]
    fn keeps_insertion_order_before_wrapping() {
        let mut trail = Trail::new(4);
        for i in 0..3 {
            trail.push(p(i as f64));
        }
        assert_eq!(trail.to_vec(), vec![p(0.0), p(1.0), p(2.0)]);
        assert_eq!(trail.latest(), Some(&p(2.0)));
    }

    #[test]
    fn evicts_oldest_first() {
        let mut trail = Trail::new(3);
        for i in 0..7 {
            trail.push(p(i as f64));
        }
        assert_eq!(trail.len(), 3);
        assert_eq!(trail.to_vec(), vec![p(4.0), p(5.0), p(6.0)]);
        assert_eq!(trail.oldest(), Some(&p(4.0)));
        assert_eq!(trail.latest(), Some(&p(6.0)));
    }

    #[test]
    fn zero_capacity_stores_nothing() {
        let mut trail = Trail::new(0);
        trail.push(p(1.0));
        assert!(trail.is_empty());
        assert_eq!(trail.latest(), None);
    }

    #[test]
    fn shrinking_keeps_newest_points() {
        let mut trail = Trail::new(5);
        for i in 0..8 {
            trail.push(p(i as f64));
        }
        trail.set_capacity(2);
        assert_eq!(trail.capacity(), 2);
        assert_eq!(trail.to_vec(), vec![p(6.0), p(7.0)]);

        trail.push(p(8.0));
        assert_eq!(trail.to_vec(), vec![p(7.0), p(8.0)]);
    }
}
