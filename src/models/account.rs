//! Account data models and API request types.
//!
//! This module defines:
//! - `Account`: Database entity representing an account
//! - `CreateAccountRequest`: Request body for creating accounts
//! - `UpdateAccountRequest`: Request body for renaming an account

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Upper bound (exclusive) for generated account numbers.
pub const ACCOUNT_NUMBER_RANGE: i64 = 10_000;

/// Represents an account record from the database.
///
/// # Database Table
///
/// Maps to the `accounts` table. Columns are decoded by name, so the
/// physical column order of the table does not matter.
///
/// # JSON Example
///
/// ```json
/// {
///   "id": 1,
///   "firstName": "Ada",
///   "lastName": "Lovelace",
///   "number": 4821,
///   "balance": 0,
///   "created_at": "2025-12-20T10:00:00Z"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Surrogate key assigned by the store on insert
    ///
    /// Zero until the account has been persisted.
    pub id: i32,

    pub first_name: String,

    pub last_name: String,

    /// Pseudo-random account number in `[0, 10000)`
    ///
    /// Not unique. Callers must not use it as a key.
    pub number: i64,

    /// Current balance. Always zero since nothing moves money yet.
    pub balance: i64,

    /// Timestamp when account was created
    #[serde(rename = "created_at")]
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Build a fresh, not yet persisted account.
    ///
    /// No validation is applied to the names; empty strings are accepted.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id: 0,
            first_name: first_name.into(),
            last_name: last_name.into(),
            number: rand::rng().random_range(0..ACCOUNT_NUMBER_RANGE),
            balance: 0,
            created_at: Utc::now(),
        }
    }
}

/// Request body for creating a new account.
///
/// # JSON Example
///
/// ```json
/// {
///   "firstName": "Ada",
///   "lastName": "Lovelace"
/// }
/// ```
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountRequest {
    pub first_name: String,
    pub last_name: String,
}

impl From<CreateAccountRequest> for Account {
    fn from(request: CreateAccountRequest) -> Self {
        Account::new(request.first_name, request.last_name)
    }
}

/// Request body for `PUT /account/{id}`.
///
/// Clients may send a whole account document; only the name fields are read
/// and every other field is ignored. A missing name keeps its stored value.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAccountRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}
