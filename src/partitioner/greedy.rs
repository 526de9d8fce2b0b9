use serde::Serialize;

/// An accumulating partition produced by the balanced partitioner
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Bucket {
    /// Items assigned to this bucket, in assignment order
    pub items: Vec<String>,
    /// Running total of the members' lengths
    pub total_len: usize,
}

impl Bucket {
    /// Append an item whose length has already been measured
    fn push(&mut self, item: String, len: usize) {
        self.total_len += len;
        self.items.push(item);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Distribute items across `bucket_count` buckets, keeping the buckets'
/// total lengths as even as the greedy rule allows:
/// - Each item goes, in input order, to the bucket with the smallest
///   running total at that moment
/// - Ties go to the lowest bucket index
/// - Lengths are counted in chars, not bytes
///
/// This is a greedy approximation; it never backtracks or rebalances, so
/// two buckets can differ by up to the length of the longest single item.
/// The output is deterministic for a given input order.
///
/// `bucket_count == 0` yields an empty vec rather than panicking.
pub fn partition_balanced(items: Vec<String>, bucket_count: usize) -> Vec<Bucket> {
    let mut buckets = vec![Bucket::default(); bucket_count];
    if bucket_count == 0 {
        return buckets;
    }

    for item in items {
        let len = item.chars().count();
        let target = min_bucket_index(&buckets);
        buckets[target].push(item, len);
    }

    buckets
}

/// Same distribution, measuring item length in bytes instead of chars
pub fn partition_balanced_by_bytes(items: Vec<String>, bucket_count: usize) -> Vec<Bucket> {
    let mut buckets = vec![Bucket::default(); bucket_count];
    if bucket_count == 0 {
        return buckets;
    }

    for item in items {
        let len = item.len();
        let target = min_bucket_index(&buckets);
        buckets[target].push(item, len);
    }

    buckets
}

/// Index of the bucket with the smallest running total, first one wins on ties
fn min_bucket_index(buckets: &[Bucket]) -> usize {
    let mut best = 0;
    for (i, bucket) in buckets.iter().enumerate().skip(1) {
        if bucket.total_len < buckets[best].total_len {
            best = i;
        }
    }
    best
}
