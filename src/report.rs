/// A snapshot of a [`Pool`](crate::Pool)'s usage counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Report {
    /// Total payload bytes currently available for allocation, summed
    /// across every free block.
    pub free_bytes: usize,
    /// The high-water mark of bytes occupied by block headers and used
    /// payloads, observed since the pool was last initialized.
    pub max_usage: usize,
    /// `free_bytes` immediately after initialization, i.e. the pool's total
    /// usable capacity.
    pub initial_free: usize,
    /// Number of blocks currently marked used (excluding the tail
    /// sentinel, which is always used and never vended to a caller).
    pub used_count: usize,
}
