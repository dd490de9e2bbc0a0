//! In-memory access log for tests and throwaway runs.
//!
//! State is not persisted across restarts.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::backend::{AccessLogResult, AccessLogStore};
use crate::models::{AccessLogEntry, PostalCodeCount};

/// Lock-based access log held in process memory.
#[derive(Debug, Default)]
pub struct InMemoryAccessLogStore {
    entries: RwLock<Vec<AccessLogEntry>>,
}

impl InMemoryAccessLogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all entries in insertion order.
    pub async fn entries(&self) -> Vec<AccessLogEntry> {
        self.entries.read().await.clone()
    }
}

#[async_trait]
impl AccessLogStore for InMemoryAccessLogStore {
    async fn record(&self, postal_code: &str) -> AccessLogResult<AccessLogEntry> {
        let mut entries = self.entries.write().await;
        let entry = AccessLogEntry {
            id: entries.len() as i32 + 1,
            postal_code: postal_code.to_string(),
            created_at: Utc::now(),
        };
        entries.push(entry.clone());
        Ok(entry)
    }

    async fn count_by_postal_code(&self) -> AccessLogResult<Vec<PostalCodeCount>> {
        let entries = self.entries.read().await;

        let mut counts: HashMap<&str, u64> = HashMap::new();
        for entry in entries.iter() {
            *counts.entry(entry.postal_code.as_str()).or_default() += 1;
        }

        let mut result: Vec<PostalCodeCount> = counts
            .into_iter()
            .map(|(code, count)| PostalCodeCount::new(code, count))
            .collect();
        result.sort_by(|a, b| {
            b.request_count
                .cmp(&a.request_count)
                .then_with(|| a.postal_code.cmp(&b.postal_code))
        });
        Ok(result)
    }

    async fn count(&self) -> AccessLogResult<u64> {
        Ok(self.entries.read().await.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_record_assigns_sequential_ids() {
        let store = InMemoryAccessLogStore::new();
        let first = store.record("1000014").await.unwrap();
        let second = store.record("1000014").await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert!(second.created_at >= first.created_at);
        assert_eq!(store.entries().await.len(), 2);
    }

    #[tokio::test]
    async fn test_count_by_postal_code() {
        let store = InMemoryAccessLogStore::new();
        for code in ["100", "100", "200"] {
            store.record(code).await.unwrap();
        }

        let counts = store.count_by_postal_code().await.unwrap();
        assert_eq!(
            counts,
            vec![PostalCodeCount::new("100", 2), PostalCodeCount::new("200", 1)]
        );
        assert_eq!(store.count().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_ties_ordered_by_postal_code() {
        let store = InMemoryAccessLogStore::new();
        for code in ["300", "100", "200", "300"] {
            store.record(code).await.unwrap();
        }

        let counts = store.count_by_postal_code().await.unwrap();
        let codes: Vec<&str> = counts.iter().map(|c| c.postal_code.as_str()).collect();
        assert_eq!(codes, vec!["300", "100", "200"]);
    }

    #[tokio::test]
    async fn test_empty() {
        let store = InMemoryAccessLogStore::new();
        assert!(store.count_by_postal_code().await.unwrap().is_empty());
        assert_eq!(store.count().await.unwrap(), 0);
    }
}
