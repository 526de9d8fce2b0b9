use crate::partitioner::{
    partition_balanced, partition_balanced_by_bytes, Bucket, DEFAULT_BUCKET_COUNT,
};

/// How an item's length is measured when balancing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LengthMetric {
    /// Count of chars (what the display layer cares about)
    #[default]
    Chars,
    /// Count of bytes
    Bytes,
}

impl LengthMetric {
    /// Look up a metric by its wire name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "chars" => Some(Self::Chars),
            "bytes" => Some(Self::Bytes),
            _ => None,
        }
    }
}

/// Configured balancing service
///
/// Constructed explicitly and passed to consumers instead of living behind a
/// global; tests can build one with whatever configuration they need.
pub struct Balancer {
    bucket_count: usize,
    metric: LengthMetric,
}

/// Builder for a [`Balancer`]
pub struct BalancerBuilder {
    bucket_count: usize,
    metric: LengthMetric,
}

impl BalancerBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self {
            bucket_count: DEFAULT_BUCKET_COUNT,
            metric: LengthMetric::default(),
        }
    }

    /// Set the number of buckets to balance across
    pub fn bucket_count(mut self, count: usize) -> Self {
        self.bucket_count = count;
        self
    }

    /// Set the length metric
    pub fn metric(mut self, metric: LengthMetric) -> Self {
        self.metric = metric;
        self
    }

    pub fn build(self) -> Balancer {
        Balancer {
            bucket_count: self.bucket_count,
            metric: self.metric,
        }
    }
}

impl Default for BalancerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Balancer {
    /// Balance the items across the configured buckets
    pub fn balance(&self, items: Vec<String>) -> Vec<Bucket> {
        match self.metric {
            LengthMetric::Chars => partition_balanced(items, self.bucket_count),
            LengthMetric::Bytes => partition_balanced_by_bytes(items, self.bucket_count),
        }
    }

    pub fn bucket_count(&self) -> usize {
        self.bucket_count
    }

    pub fn metric(&self) -> LengthMetric {
        self.metric
    }
}
