mod greedy;


pub use greedy::{partition_balanced, partition_balanced_by_bytes, Bucket};

/// Bucket count used when a caller supplies none
pub const DEFAULT_BUCKET_COUNT: usize = 2;
