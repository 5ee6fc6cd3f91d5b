/// A contiguous span of flattened matrix-element indices assigned to one
/// worker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PartitionRange {
    pub start: usize,
    pub count: usize,
}

impl PartitionRange {
    /// One past the last index in the range.
    pub fn end(&self) -> usize {
        self.start + self.count
    }
}

/// Lays out contiguous ranges covering `[0, total)` for the requested number
/// of workers.
///
/// A single share `total / workers + total % workers` is computed once and
/// strided from zero, so the split is not balanced: when `workers` does not
/// divide `total`, early ranges carry more elements than a balanced split
/// would give them, and fewer ranges than `workers` may be produced (a range
/// that would start at or past `total` is not created). The final range is
/// clamped so no index past `total - 1` is ever covered.
pub fn layout(total: usize, workers: usize) -> Vec<PartitionRange> {
    assert!(workers > 0, "Cannot partition for 0 workers!");

    let size = total / workers + total % workers;
    let mut ranges = Vec::with_capacity(workers);

    let mut start = 0;
    while start < total {
        ranges.push(PartitionRange { start, count: size.min(total - start) });
        start += size;
    }

    ranges
}
