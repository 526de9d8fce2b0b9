use super::*;

fn labels(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_builder_defaults() {
    let balancer = BalancerBuilder::new().build();

    assert_eq!(balancer.bucket_count(), 2);
    assert_eq!(balancer.metric(), LengthMetric::Chars);
}

#[test]
fn test_balance_uses_configured_count() {
    let balancer = BalancerBuilder::new().bucket_count(4).build();
    let buckets = balancer.balance(labels(&["a", "b", "c"]));

    assert_eq!(buckets.len(), 4);
}

#[test]
fn test_metric_changes_assignment() {
    // "éé" is 2 chars / 4 bytes. Under Chars the first two items tie at 2 and
    // "zz" goes to whichever bucket the tie-break left shorter; under Bytes
    // bucket 1 is strictly shorter after two items.
    let items = labels(&["éé", "xx", "zzzz"]);

    let by_chars = BalancerBuilder::new()
        .bucket_count(2)
        .metric(LengthMetric::Chars)
        .build()
        .balance(items.clone());
    let by_bytes = BalancerBuilder::new()
        .bucket_count(2)
        .metric(LengthMetric::Bytes)
        .build()
        .balance(items);

    assert_eq!(by_chars[0].items, vec!["éé", "zzzz"]);
    assert_eq!(by_bytes[1].items, vec!["xx", "zzzz"]);
}

#[test]
fn test_two_services_do_not_share_state() {
    let a = BalancerBuilder::new().bucket_count(2).build();
    let b = BalancerBuilder::new().bucket_count(3).build();

    let first = a.balance(labels(&["one", "two"]));
    let second = b.balance(labels(&["one", "two"]));

    assert_eq!(first.len(), 2);
    assert_eq!(second.len(), 3);
}
