use super::*;

#[test]
fn test_decode_defaults_compose() {
    // Mixed document: labels present, columns missing, metric wrong-typed
    let doc = Document::parse(r#"{"labels": ["a", "b"], "metric": 7}"#).unwrap();
    let req = BalanceRequest::from_document(&doc);

    assert_eq!(req.labels, vec!["a", "b"]);
    assert_eq!(req.columns, 2);
    assert_eq!(req.metric, "chars");
}

#[test]
fn test_non_string_labels_are_skipped() {
    let doc = Document::parse(r#"{"labels": ["a", 1, null, "b"]}"#).unwrap();
    let req = BalanceRequest::from_document(&doc);

    assert_eq!(req.labels, vec!["a", "b"]);
}

#[test]
fn test_typed_getters() {
    let doc = Document::parse(r#"{"name": "feed", "count": 4, "active": true}"#).unwrap();

    assert_eq!(doc.str_or("name", ""), "feed");
    assert_eq!(doc.u64_or("count", 0), 4);
    assert!(doc.bool_or("active", false));
    assert!(doc.contains("name"));
    assert!(!doc.contains("missing"));
    assert_eq!(doc.str_or("missing", "fallback"), "fallback");
}
