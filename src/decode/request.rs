use crate::decode::{Document, FromDocument};
use crate::partitioner::DEFAULT_BUCKET_COUNT;

/// Decoded balancing request
///
/// Every field carries a default so partial documents still produce a usable
/// request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceRequest {
    /// Labels to distribute
    pub labels: Vec<String>,
    /// Number of buckets to distribute across
    pub columns: u64,
    /// Length metric name, "chars" or "bytes"
    pub metric: String,
}

impl FromDocument for BalanceRequest {
    fn from_document(doc: &Document) -> Self {
        Self {
            labels: doc.str_list_or_empty("labels"),
            columns: doc.u64_or("columns", DEFAULT_BUCKET_COUNT as u64),
            metric: doc.str_or("metric", "chars"),
        }
    }
}

#[cfg(test)]
mod request_tests {
    use super::*;

    #[test]
    fn test_full_document() {
        let doc = Document::parse(
            r#"{"labels": ["Medicine", "Pharmacy"], "columns": 3, "metric": "bytes"}"#,
        )
        .unwrap();
        let req = BalanceRequest::from_document(&doc);

        assert_eq!(req.labels, vec!["Medicine", "Pharmacy"]);
        assert_eq!(req.columns, 3);
        assert_eq!(req.metric, "bytes");
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let doc = Document::parse("{}").unwrap();
        let req = BalanceRequest::from_document(&doc);

        assert!(req.labels.is_empty());
        assert_eq!(req.columns, 2);
        assert_eq!(req.metric, "chars");
    }
}
