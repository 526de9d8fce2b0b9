// Public API exports
pub mod balancer;
pub mod decode;
pub mod partitioner;

// Re-export main types for convenience
pub use balancer::{Balancer, BalancerBuilder, LengthMetric};
pub use decode::{BalanceRequest, DecodeError, Document, FromDocument};
pub use partitioner::{partition_balanced, Bucket, DEFAULT_BUCKET_COUNT};
