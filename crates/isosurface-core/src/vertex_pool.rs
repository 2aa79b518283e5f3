//! Append-only vertex storage with group-scoped deduplication.

use glam::{DVec3, DVec4};

/// Append-only store of emitted vertices.
///
/// Lookups only scan the *open group*: the vertices appended since the last
/// [`VertexPool::open_group`]. A vertex emitted for an earlier primitive is
/// never reused by a later one, even at identical coordinates. Shared
/// vertices only arise while one primitive is unrolled into its fan.
#[derive(Debug, Clone, Default)]
pub struct VertexPool {
    positions: Vec<DVec3>,
    values: Vec<f64>,
    group_start: usize,
}

impl VertexPool {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty pool with room for `capacity` vertices.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            positions: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
            group_start: 0,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Marks the current length as the floor for subsequent lookups.
    pub fn open_group(&mut self) {
        self.group_start = self.positions.len();
    }

    /// Appends a vertex unconditionally and returns its index.
    #[allow(clippy::cast_possible_truncation)]
    pub fn push(&mut self, position: DVec3, value: f64) -> u32 {
        self.positions.push(position);
        self.values.push(value);
        (self.positions.len() - 1) as u32
    }

    /// Index of a vertex in the open group at exactly `position`.
    #[allow(clippy::cast_possible_truncation)]
    #[must_use]
    pub fn find(&self, position: DVec3) -> Option<u32> {
        self.positions[self.group_start..]
            .iter()
            .position(|&p| p == position)
            .map(|offset| (self.group_start + offset) as u32)
    }

    /// Returns the open-group vertex at `xyzv`'s position, appending it first
    /// if there is none.
    pub fn find_or_add(&mut self, xyzv: DVec4) -> u32 {
        let position = xyzv.truncate();
        match self.find(position) {
            Some(id) => id,
            None => self.push(position, xyzv.w),
        }
    }

    #[must_use]
    pub fn position(&self, index: usize) -> Option<DVec3> {
        self.positions.get(index).copied()
    }

    #[must_use]
    pub fn value(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    #[must_use]
    pub fn positions(&self) -> &[DVec3] {
        &self.positions
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Consumes the pool, returning positions and scalar values.
    #[must_use]
    pub fn into_parts(self) -> (Vec<DVec3>, Vec<f64>) {
        (self.positions, self.values)
    }
}
