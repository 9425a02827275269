//! PostgreSQL implementation of the account store.
//!
//! All statements are parameterized and rows are decoded by column name
//! through `sqlx::FromRow`, so reordering table columns cannot corrupt reads.

use super::{AccountChanges, AccountStore, StorageError};
use crate::{db::DbPool, models::account::Account};

/// Idempotent schema for the single `accounts` table.
const CREATE_ACCOUNTS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS accounts (
        id SERIAL PRIMARY KEY,
        first_name TEXT NOT NULL,
        last_name TEXT NOT NULL,
        number BIGINT NOT NULL,
        balance BIGINT NOT NULL DEFAULT 0,
        created_at TIMESTAMPTZ NOT NULL
    )
"#;

/// Account store backed by a PostgreSQL connection pool.
///
/// Cloning is cheap: clones share the same pool.
#[derive(Debug, Clone)]
pub struct PgAccountStore {
    pool: DbPool,
}

impl PgAccountStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Create the `accounts` table if it does not exist yet.
    ///
    /// This is an administrative step run once before serving, never per request.
    pub async fn init(&self) -> Result<(), StorageError> {
        sqlx::query(CREATE_ACCOUNTS_TABLE)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

impl AccountStore for PgAccountStore {
    async fn create_account(&self, account: &Account) -> Result<Account, StorageError> {
        let created = sqlx::query_as::<_, Account>(
            r#"
            INSERT INTO accounts (first_name, last_name, number, balance, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, first_name, last_name, number, balance, created_at
            "#,
        )
        .bind(&account.first_name)
        .bind(&account.last_name)
        .bind(account.number)
        .bind(account.balance)
        .bind(account.created_at)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(account_id = created.id, "account inserted");
        Ok(created)
    }

    async fn update_account(&self, id: i32, changes: &AccountChanges) -> Result<(), StorageError> {
        // Zero matched rows is not an error.
        let updated = sqlx::query(
            r#"
            UPDATE accounts
            SET first_name = COALESCE($1, first_name),
                last_name = COALESCE($2, last_name)
            WHERE id = $3
            "#,
        )
        .bind(changes.first_name.as_deref())
        .bind(changes.last_name.as_deref())
        .bind(id)
        .execute(&self.pool)
        .await?
        .rows_affected();

        tracing::debug!(account_id = id, rows = updated, "account update applied");
        Ok(())
    }

    async fn get_account_by_id(&self, id: i32) -> Result<Account, StorageError> {
        sqlx::query_as::<_, Account>(
            r#"
            SELECT id, first_name, last_name, number, balance, created_at
            FROM accounts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StorageError::NotFound(id))
    }

    async fn delete_account(&self, id: i32) -> Result<(), StorageError> {
        let deleted = sqlx::query("DELETE FROM accounts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        tracing::debug!(account_id = id, rows = deleted, "account delete applied");
        Ok(())
    }

    async fn get_accounts(&self) -> Result<Vec<Account>, StorageError> {
        // No ORDER BY: callers must not rely on ordering.
        let accounts = sqlx::query_as::<_, Account>(
            "SELECT id, first_name, last_name, number, balance, created_at FROM accounts",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(accounts)
    }

    async fn ping(&self) -> Result<(), StorageError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
