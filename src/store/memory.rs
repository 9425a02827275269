//! In-memory [`AccountStore`] used to exercise handlers without a database.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use super::{AccountChanges, AccountStore, StorageError};
use crate::models::account::Account;

#[derive(Debug, Default)]
struct Inner {
    next_id: i32,
    accounts: BTreeMap<i32, Account>,
}

/// Account store backed by a shared map, with ids handed out like `SERIAL`.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAccountStore {
    inner: Arc<Mutex<Inner>>,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AccountStore for InMemoryAccountStore {
    async fn create_account(&self, account: &Account) -> Result<Account, StorageError> {
        let mut inner = self.inner.lock().unwrap();
        inner.next_id += 1;

        let stored = Account {
            id: inner.next_id,
            ..account.clone()
        };
        inner.accounts.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn update_account(&self, id: i32, changes: &AccountChanges) -> Result<(), StorageError> {
        let mut inner = self.inner.lock().unwrap();
        if let Some(account) = inner.accounts.get_mut(&id) {
            if let Some(first_name) = &changes.first_name {
                account.first_name = first_name.clone();
            }
            if let Some(last_name) = &changes.last_name {
                account.last_name = last_name.clone();
            }
        }
        Ok(())
    }

    async fn get_account_by_id(&self, id: i32) -> Result<Account, StorageError> {
        self.inner
            .lock()
            .unwrap()
            .accounts
            .get(&id)
            .cloned()
            .ok_or(StorageError::NotFound(id))
    }

    async fn delete_account(&self, id: i32) -> Result<(), StorageError> {
        self.inner.lock().unwrap().accounts.remove(&id);
        Ok(())
    }

    async fn get_accounts(&self) -> Result<Vec<Account>, StorageError> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .accounts
            .values()
            .cloned()
            .collect())
    }

    async fn ping(&self) -> Result<(), StorageError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::contract;

    #[tokio::test]
    async fn create_then_get_round_trips() {
        contract::create_then_get_round_trips(&InMemoryAccountStore::new()).await;
    }

    #[tokio::test]
    async fn repeated_update_is_idempotent() {
        contract::repeated_update_is_idempotent(&InMemoryAccountStore::new()).await;
    }

    #[tokio::test]
    async fn update_of_missing_id_succeeds() {
        contract::update_of_missing_id_succeeds(&InMemoryAccountStore::new()).await;
    }

    #[tokio::test]
    async fn delete_of_missing_id_succeeds_then_get_is_not_found() {
        contract::delete_of_missing_id_succeeds_then_get_is_not_found(&InMemoryAccountStore::new())
            .await;
    }

    #[tokio::test]
    async fn listing_returns_exactly_the_inserted_accounts() {
        let store = InMemoryAccountStore::new();
        contract::listing_contains_inserted_accounts(&store).await;
        assert_eq!(store.get_accounts().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn long_names_are_stored_unchanged() {
        contract::long_names_are_stored_unchanged(&InMemoryAccountStore::new()).await;
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let store = InMemoryAccountStore::new();
        let first = store.create_account(&Account::new("a", "b")).await.unwrap();
        store.delete_account(first.id).await.unwrap();
        let second = store.create_account(&Account::new("c", "d")).await.unwrap();

        assert!(second.id > first.id);
    }
}
