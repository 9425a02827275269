//! Account storage abstraction.
//!
//! Handlers only ever talk to an [`AccountStore`]. The production backend is
//! [`postgres::PgAccountStore`]; tests substitute an in-memory store that
//! honours the same contract.

use std::future::Future;

use crate::models::account::Account;

#[cfg(test)]
pub mod memory;
pub mod postgres;

/// Failures surfaced by an [`AccountStore`].
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// No account exists with the given id. Only reads report this.
    #[error("sorry the account with the id of {0} was not found")]
    NotFound(i32),

    /// Connectivity, constraint or query failure in the database.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Name changes applied by [`AccountStore::update_account`].
///
/// `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountChanges {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// CRUD contract over account records.
///
/// Implementations must be safe to share between concurrent requests.
pub trait AccountStore: Clone + Send + Sync + 'static {
    /// Persist a new account and return it with its store-assigned id.
    ///
    /// The incoming `id` is ignored. Names of any length are accepted.
    fn create_account(
        &self,
        account: &Account,
    ) -> impl Future<Output = Result<Account, StorageError>> + Send;

    /// Apply name changes to the account at `id`.
    ///
    /// Succeeds even when no account has that id.
    fn update_account(
        &self,
        id: i32,
        changes: &AccountChanges,
    ) -> impl Future<Output = Result<(), StorageError>> + Send;

    /// Fetch one account, or [`StorageError::NotFound`].
    fn get_account_by_id(
        &self,
        id: i32,
    ) -> impl Future<Output = Result<Account, StorageError>> + Send;

    /// Remove the account at `id`. Succeeds even when nothing matched.
    fn delete_account(&self, id: i32) -> impl Future<Output = Result<(), StorageError>> + Send;

    /// Every stored account, in no particular order.
    fn get_accounts(&self) -> impl Future<Output = Result<Vec<Account>, StorageError>> + Send;

    /// Check that the backend is reachable.
    fn ping(&self) -> impl Future<Output = Result<(), StorageError>> + Send;
}

/// Contract checks shared by every store implementation's tests.
#[cfg(test)]
pub(crate) mod contract {
    use std::collections::HashSet;

    use super::*;

    pub async fn create_then_get_round_trips<S: AccountStore>(store: &S) {
        let account = Account::new("Ada", "Lovelace");
        let created = store.create_account(&account).await.unwrap();

        assert!(created.id > 0);
        assert_eq!(created.balance, 0);

        let fetched = store.get_account_by_id(created.id).await.unwrap();
        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.first_name, account.first_name);
        assert_eq!(fetched.last_name, account.last_name);
        assert_eq!(fetched.number, account.number);
        assert_eq!(fetched.balance, 0);
        assert_eq!(
            fetched.created_at.timestamp_micros(),
            account.created_at.timestamp_micros()
        );
    }

    pub async fn repeated_update_is_idempotent<S: AccountStore>(store: &S) {
        let created = store
            .create_account(&Account::new("Grace", "Hopper"))
            .await
            .unwrap();
        let changes = AccountChanges {
            first_name: Some("Amazing".to_string()),
            last_name: None,
        };

        store.update_account(created.id, &changes).await.unwrap();
        let once = store.get_account_by_id(created.id).await.unwrap();

        store.update_account(created.id, &changes).await.unwrap();
        let twice = store.get_account_by_id(created.id).await.unwrap();

        assert_eq!(once, twice);
        assert_eq!(twice.first_name, "Amazing");
        assert_eq!(twice.last_name, "Hopper");
        assert_eq!(twice.number, created.number);
    }

    pub async fn update_of_missing_id_succeeds<S: AccountStore>(store: &S) {
        let changes = AccountChanges {
            first_name: Some("Nobody".to_string()),
            last_name: Some("Home".to_string()),
        };
        store.update_account(i32::MAX, &changes).await.unwrap();
    }

    pub async fn delete_of_missing_id_succeeds_then_get_is_not_found<S: AccountStore>(store: &S) {
        let created = store
            .create_account(&Account::new("Alan", "Turing"))
            .await
            .unwrap();

        store.delete_account(created.id).await.unwrap();
        // Second delete matches zero rows and must still succeed.
        store.delete_account(created.id).await.unwrap();

        let err = store.get_account_by_id(created.id).await.unwrap_err();
        assert!(matches!(err, StorageError::NotFound(id) if id == created.id));
    }

    pub async fn listing_contains_inserted_accounts<S: AccountStore>(store: &S) {
        let mut inserted = HashSet::new();
        for (first, last) in [("R1", "One"), ("R2", "Two"), ("R3", "Three")] {
            let created = store
                .create_account(&Account::new(first, last))
                .await
                .unwrap();
            inserted.insert(created.id);
        }

        let listed: HashSet<i32> = store
            .get_accounts()
            .await
            .unwrap()
            .into_iter()
            .map(|account| account.id)
            .filter(|id| inserted.contains(id))
            .collect();

        assert_eq!(listed, inserted);
    }

    pub async fn long_names_are_stored_unchanged<S: AccountStore>(store: &S) {
        let first = "A".repeat(300);
        let last = "Z".repeat(51);
        let created = store
            .create_account(&Account::new(first.clone(), last.clone()))
            .await
            .unwrap();

        let fetched = store.get_account_by_id(created.id).await.unwrap();
        assert_eq!(fetched.first_name, first);
        assert_eq!(fetched.last_name, last);
    }
}
