//! OffsetIndex - O(log n) section offsets via Fenwick tree
//!
//! Maps section indices to document offsets (prefix sums of section heights)
//! and finds the section under a given vertical offset.
//!
//! # Complexity
//!
//! - `set`: O(log n)
//! - `prefix_sum`: O(log n)
//! - `lower_bound`: O(log² n)
//! - `push`: O(log n) amortised (rebuilds on growth)
//! - `total`: O(log n)

/// Fenwick-tree backed prefix sums over section heights (pixels).
#[derive(Debug, Clone)]
pub struct OffsetIndex {
    /// Fenwick tree backing storage.
    tree: Vec<i64>,
    /// Plain heights, kept so the tree can be rebuilt when it grows.
    heights: Vec<u32>,
}

impl OffsetIndex {
    /// Creates an empty index with room for `capacity` sections.
    ///
    /// ```
    /// # use neuroverse_nav::page::offset_index::OffsetIndex;
    /// let index = OffsetIndex::new(4);
    /// assert!(index.is_empty());
    /// assert_eq!(index.total(), 0);
    /// ```
    pub fn new(capacity: usize) -> Self {
        Self {
            tree: vec![0; capacity],
            heights: Vec::with_capacity(capacity),
        }
    }

    /// Builds an index from a sequence of heights.
    pub fn from_heights(heights: impl IntoIterator<Item = u32>) -> Self {
        let heights: Vec<u32> = heights.into_iter().collect();
        let mut index = Self::new(heights.len());
        for height in heights {
            index.push(height);
        }
        index
    }

    /// Replaces the height at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn set(&mut self, index: usize, height: u32) {
        assert!(
            index < self.len(),
            "index {} out of bounds (len: {})",
            index,
            self.len()
        );
        let delta = i64::from(height) - i64::from(self.heights[index]);
        self.heights[index] = height;
        if delta != 0 {
            fenwick::array::update(&mut self.tree, index, delta);
        }
    }

    /// Cumulative height of sections `0..=index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    ///
    /// ```
    /// # use neuroverse_nav::page::offset_index::OffsetIndex;
    /// let index = OffsetIndex::from_heights([800, 600, 400]);
    /// assert_eq!(index.prefix_sum(0), 800);
    /// assert_eq!(index.prefix_sum(2), 1800);
    /// ```
    pub fn prefix_sum(&self, index: usize) -> u64 {
        assert!(
            index < self.len(),
            "index {} out of bounds (len: {})",
            index,
            self.len()
        );
        fenwick::array::prefix_sum(&self.tree, index).max(0) as u64
    }

    /// Document offset of the top edge of section `index`.
    pub fn offset_of(&self, index: usize) -> u64 {
        if index == 0 {
            0
        } else {
            self.prefix_sum(index - 1)
        }
    }

    /// First index whose cumulative height exceeds `value`, i.e. the section
    /// covering offset `value`. `None` past the document end.
    ///
    /// ```
    /// # use neuroverse_nav::page::offset_index::OffsetIndex;
    /// let index = OffsetIndex::from_heights([10, 20, 15]);
    /// assert_eq!(index.lower_bound(0), Some(0));
    /// assert_eq!(index.lower_bound(10), Some(1));
    /// assert_eq!(index.lower_bound(30), Some(2));
    /// assert_eq!(index.lower_bound(45), None);
    /// ```
    pub fn lower_bound(&self, value: u64) -> Option<usize> {
        let mut left = 0;
        let mut right = self.len();
        while left < right {
            let mid = left + (right - left) / 2;
            if self.prefix_sum(mid) > value {
                right = mid;
            } else {
                left = mid + 1;
            }
        }
        (left < self.len()).then_some(left)
    }

    /// Sum of all heights.
    pub fn total(&self) -> u64 {
        match self.len() {
            0 => 0,
            n => self.prefix_sum(n - 1),
        }
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.heights.len()
    }

    /// True when no sections are indexed.
    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }

    /// Appends a section height.
    pub fn push(&mut self, height: u32) {
        if self.heights.len() >= self.tree.len() {
            self.heights.push(height);
            self.rebuild(self.heights.len().max(1) * 2);
            return;
        }
        let idx = self.heights.len();
        self.heights.push(height);
        fenwick::array::update(&mut self.tree, idx, i64::from(height));
    }

    fn rebuild(&mut self, capacity: usize) {
        self.tree = vec![0; capacity];
        for (idx, &height) in self.heights.iter().enumerate() {
            fenwick::array::update(&mut self.tree, idx, i64::from(height));
        }
    }
}
