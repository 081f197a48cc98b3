use std::str::FromStr;

use sqlx::sqlite::SqliteConnectOptions;
use sqlx::SqlitePool;

use crate::schema::REQUIRED_TABLES;

#[derive(Clone)]
pub struct Database {
    pub pool: SqlitePool,
}

impl Database {
    /// Opens the dataset read-only. The file is provisioned externally and
    /// never written by this process.
    pub async fn connect(sqlite_url: &str) -> anyhow::Result<Self> {
        let options = SqliteConnectOptions::from_str(sqlite_url)?.read_only(true);
        let pool = SqlitePool::connect_with(options).await?;

        Ok(Database { pool })
    }

    /// Fails fast when the dataset is missing an expected table, instead of
    /// letting the first request discover it.
    pub async fn verify_schema(&self) -> anyhow::Result<()> {
        for table in REQUIRED_TABLES {
            let present: bool = sqlx::query_scalar(
                "SELECT EXISTS (SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1);",
            )
            .bind(table)
            .fetch_one(&self.pool)
            .await?;

            if !present {
                anyhow::bail!("dataset is missing expected table '{table}'");
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use sqlx::sqlite::SqlitePoolOptions;

    use super::Database;
    use crate::schema::SCHEMA;

    async fn memory_db() -> Database {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();

        Database { pool }
    }

    #[tokio::test]
    async fn verify_schema_accepts_expected_tables() {
        let db = memory_db().await;
        sqlx::raw_sql(SCHEMA).execute(&db.pool).await.unwrap();

        assert!(db.verify_schema().await.is_ok());
    }

    #[tokio::test]
    async fn verify_schema_rejects_empty_store() {
        let db = memory_db().await;

        let err = db.verify_schema().await.unwrap_err();
        assert!(err.to_string().contains("missing expected table"));
    }

    #[tokio::test]
    async fn verify_schema_rejects_partial_store() {
        let db = memory_db().await;
        sqlx::raw_sql("CREATE TABLE station (id INTEGER PRIMARY KEY);")
            .execute(&db.pool)
            .await
            .unwrap();

        let err = db.verify_schema().await.unwrap_err();
        assert!(err.to_string().contains("'measurement'"));
    }
}
