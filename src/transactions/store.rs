use async_trait::async_trait;
use sqlx::PgPool;

use super::models::transaction::Transaction;

/// Persistence for withdrawal requests.
#[async_trait]
pub trait TransactionStore: Send + Sync {
    /// Stores a new record and returns it as persisted.
    async fn insert(&self, transaction: Transaction) -> Result<Transaction, sqlx::Error>;

    /// Deletes every record whose timestamp is strictly before `cutoff`
    /// (unix seconds) and returns how many were removed.
    async fn delete_older_than(&self, cutoff: i64) -> Result<u64, sqlx::Error>;
}

#[derive(Clone)]
pub struct PgTransactionStore {
    pool: PgPool,
}

impl PgTransactionStore {
    pub fn new(pool: PgPool) -> Self {
        return Self { pool };
    }

    pub async fn ensure_schema(&self) -> Result<(), sqlx::Error> {
        sqlx::query(
            "
            CREATE TABLE IF NOT EXISTS transactions (
                id TEXT PRIMARY KEY,
                nickname TEXT NOT NULL,
                phone TEXT NOT NULL,
                amount DOUBLE PRECISION NOT NULL,
                address TEXT,
                card_number TEXT NOT NULL,
                timestamp BIGINT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "
            CREATE INDEX IF NOT EXISTS transactions_timestamp_idx
            ON transactions (timestamp)
            ",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl TransactionStore for PgTransactionStore {
    async fn insert(&self, transaction: Transaction) -> Result<Transaction, sqlx::Error> {
        sqlx::query_as::<_, Transaction>(
            "
            INSERT INTO transactions (
                id, nickname, phone, amount, address, card_number, timestamp
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            ",
        )
        .bind(transaction.id)
        .bind(transaction.nickname)
        .bind(transaction.phone)
        .bind(transaction.amount)
        .bind(transaction.address)
        .bind(transaction.card_number)
        .bind(transaction.timestamp)
        .fetch_one(&self.pool)
        .await
    }

    async fn delete_older_than(&self, cutoff: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "
            DELETE FROM transactions
            WHERE timestamp < $1
            ",
        )
        .bind(cutoff)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}
