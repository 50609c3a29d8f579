/// Logical window of the strip inside the physical LED chain
///
/// Logical index `i` always lives at physical index `offset + i`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderingBounds {
    /// Physical index of the first logical LED
    pub offset: usize,
    /// Number of logical LEDs
    pub len: usize,
}

impl RenderingBounds {
    pub const fn new(offset: usize, len: usize) -> Self {
        Self { offset, len }
    }

    /// Bounds covering the physical LEDs `first..last`
    pub const fn between(first: usize, last: usize) -> Self {
        Self {
            offset: first,
            len: last.saturating_sub(first),
        }
    }

    /// Get the number of LEDs in the rendering area
    pub const fn count(self) -> usize {
        self.len
    }

    /// Physical index one past the last logical LED
    pub const fn end(self) -> usize {
        self.offset.saturating_add(self.len)
    }

    /// Physical index of a logical LED, if it is inside the window
    pub const fn physical_index(self, index: usize) -> Option<usize> {
        if index < self.len {
            self.offset.checked_add(index)
        } else {
            None
        }
    }

    /// Shrink the window so it fits into `capacity` physical LEDs
    pub const fn clamped(self, capacity: usize) -> Self {
        let offset = if self.offset < capacity {
            self.offset
        } else {
            capacity
        };
        let room = capacity - offset;
        let len = if self.len < room { self.len } else { room };
        Self { offset, len }
    }
}
