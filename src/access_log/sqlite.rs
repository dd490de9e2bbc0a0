//! Diesel-backed access log stored in SQLite.

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use super::backend::{AccessLogResult, AccessLogStore};
use crate::models::{AccessLogEntry, PostalCodeCount};
use crate::repository::{parse_datetime, NewAccessLog, SqlitePool};
use crate::schema::access_logs;

#[derive(diesel::QueryableByName)]
struct PostalCodeCountRow {
    #[diesel(sql_type = diesel::sql_types::Text)]
    postal_code: String,
    #[diesel(sql_type = diesel::sql_types::BigInt)]
    request_count: i64,
}

#[derive(diesel::QueryableByName)]
struct LastInsertId {
    #[diesel(sql_type = diesel::sql_types::Integer)]
    id: i32,
}

/// Diesel-based access log repository.
#[derive(Clone)]
pub struct DieselAccessLogRepository {
    pool: SqlitePool,
}

impl DieselAccessLogRepository {
    /// Create a new Diesel access log repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Most recent entries first.
    pub async fn recent(&self, limit: u32) -> AccessLogResult<Vec<AccessLogEntry>> {
        use crate::repository::AccessLogRecord;

        let mut conn = self.pool.get().await?;
        let records: Vec<AccessLogRecord> = access_logs::table
            .order(access_logs::id.desc())
            .limit(i64::from(limit))
            .select(AccessLogRecord::as_select())
            .load(&mut conn)
            .await?;

        Ok(records
            .into_iter()
            .map(|r| AccessLogEntry {
                id: r.id,
                created_at: parse_datetime(&r.created_at),
                postal_code: r.postal_code,
            })
            .collect())
    }
}

#[async_trait]
impl AccessLogStore for DieselAccessLogRepository {
    async fn record(&self, postal_code: &str) -> AccessLogResult<AccessLogEntry> {
        let mut conn = self.pool.get().await?;
        let created_at = Utc::now();
        let created_at_str = created_at.to_rfc3339();

        diesel::insert_into(access_logs::table)
            .values(NewAccessLog {
                postal_code,
                created_at: &created_at_str,
            })
            .execute(&mut conn)
            .await?;

        // Same connection, so this is the row inserted above.
        let row: LastInsertId = diesel::sql_query("SELECT last_insert_rowid() AS id")
            .get_result(&mut conn)
            .await?;

        Ok(AccessLogEntry {
            id: row.id,
            postal_code: postal_code.to_string(),
            created_at: parse_datetime(&created_at_str),
        })
    }

    async fn count_by_postal_code(&self) -> AccessLogResult<Vec<PostalCodeCount>> {
        let mut conn = self.pool.get().await?;
        let rows: Vec<PostalCodeCountRow> = diesel::sql_query(
            "SELECT postal_code, COUNT(*) AS request_count FROM access_logs \
             GROUP BY postal_code ORDER BY request_count DESC, postal_code ASC",
        )
        .load(&mut conn)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| PostalCodeCount::new(row.postal_code, row.request_count.max(0) as u64))
            .collect())
    }

    async fn count(&self) -> AccessLogResult<u64> {
        use diesel::dsl::count_star;

        let mut conn = self.pool.get().await?;
        let count: i64 = access_logs::table
            .select(count_star())
            .get_result(&mut conn)
            .await?;
        Ok(count as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::DieselDbContext;
    use tempfile::tempdir;

    async fn setup() -> (DieselAccessLogRepository, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let ctx = DieselDbContext::new(&dir.path().join("logs.db"));
        ctx.init_schema().await.unwrap();
        (ctx.access_logs(), dir)
    }

    #[tokio::test]
    async fn test_record_and_count() {
        let (repo, _dir) = setup().await;

        let first = repo.record("1000014").await.unwrap();
        let second = repo.record("1500002").await.unwrap();

        assert_eq!(first.postal_code, "1000014");
        assert!(second.id > first.id);
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_count_by_postal_code() {
        let (repo, _dir) = setup().await;
        for code in ["100", "100", "200"] {
            repo.record(code).await.unwrap();
        }

        let counts = repo.count_by_postal_code().await.unwrap();
        assert_eq!(
            counts,
            vec![PostalCodeCount::new("100", 2), PostalCodeCount::new("200", 1)]
        );
    }

    #[tokio::test]
    async fn test_counts_sorted_and_sum_to_total() {
        let (repo, _dir) = setup().await;
        let codes = [
            "0600000", "1000014", "5300001", "1000014", "0600000", "1000014", "9000000",
        ];
        for code in codes {
            repo.record(code).await.unwrap();
        }

        let counts = repo.count_by_postal_code().await.unwrap();
        assert!(counts
            .windows(2)
            .all(|w| w[0].request_count >= w[1].request_count));
        assert_eq!(counts[0], PostalCodeCount::new("1000014", 3));

        let total: u64 = counts.iter().map(|c| c.request_count).sum();
        assert_eq!(total, repo.count().await.unwrap());
        assert_eq!(total, codes.len() as u64);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_records_are_all_kept() {
        let (repo, _dir) = setup().await;

        let handles: Vec<_> = (0..200)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move { repo.record(if i % 2 == 0 { "100" } else { "200" }).await })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(repo.count().await.unwrap(), 200);
        assert_eq!(
            repo.count_by_postal_code().await.unwrap(),
            vec![PostalCodeCount::new("100", 100), PostalCodeCount::new("200", 100)]
        );
    }

    #[tokio::test]
    async fn test_recent() {
        let (repo, _dir) = setup().await;
        for code in ["100", "200", "300"] {
            repo.record(code).await.unwrap();
        }

        let recent = repo.recent(2).await.unwrap();
        let codes: Vec<&str> = recent.iter().map(|e| e.postal_code.as_str()).collect();
        assert_eq!(codes, vec!["300", "200"]);
    }

    #[tokio::test]
    async fn test_missing_table_is_an_error() {
        let dir = tempdir().unwrap();
        let repo = DieselDbContext::new(&dir.path().join("empty.db")).access_logs();
        assert!(repo.count_by_postal_code().await.is_err());
    }
}
