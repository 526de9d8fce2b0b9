mod service;

#[cfg(test)]
mod tests;

pub use service::{Balancer, BalancerBuilder, LengthMetric};
