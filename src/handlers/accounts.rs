//! Account management HTTP handlers.
//!
//! This module implements the account-related API endpoints:
//! - GET /account - List all accounts
//! - POST /account - Create new account and issue its token
//! - GET /account/{id} - Get account by ID
//! - PUT /account/{id} - Rename an account
//! - DELETE /account/{id} - Delete an account
//!
//! Routes under `/account/{id}` only run after the token middleware accepted
//! the request.

use crate::{
    error::AppError,
    middleware::auth::AUTH_HEADER,
    models::account::{Account, CreateAccountRequest, UpdateAccountRequest},
    services::token_service::AccountClaims,
    state::AppState,
    store::{AccountChanges, AccountStore},
};
use axum::{
    Extension, Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::Method,
    response::IntoResponse,
};
use serde::Serialize;

/// Body returned by a successful update.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    #[serde(rename = "Message")]
    pub message: String,
}

/// List all accounts.
///
/// # Endpoint
///
/// `GET /account`
///
/// # Ordering
///
/// Unspecified; whatever order the store returns.
pub async fn list_accounts<S: AccountStore>(
    State(state): State<AppState<S>>,
) -> Result<Json<Vec<Account>>, AppError> {
    let accounts = state.store.get_accounts().await?;
    Ok(Json(accounts))
}

/// Create a new account.
///
/// # Endpoint
///
/// `POST /account`
///
/// # Request Body
///
/// ```json
/// { "firstName": "Ada", "lastName": "Lovelace" }
/// ```
///
/// # Response
///
/// - **Success (200 OK)**: the persisted account, with its token in the `X-Auth` header
/// - **Error (400)**: body is not a valid CreateAccountRequest
/// - **Error (500)**: database error
pub async fn create_account<S: AccountStore>(
    State(state): State<AppState<S>>,
    payload: Result<Json<CreateAccountRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(request) = payload?;
    let account = Account::from(request);

    // The token only depends on `number`, which the store never changes.
    let token = state.tokens.issue(&account)?;
    let account = state.store.create_account(&account).await?;

    tracing::info!(account_id = account.id, "account created");

    Ok(([(AUTH_HEADER, token)], Json(account)))
}

/// Get a specific account by ID.
///
/// # Response
///
/// - **Success (200 OK)**: Returns account details
/// - **Error (404)**: Account not found
pub async fn get_account<S: AccountStore>(
    State(state): State<AppState<S>>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<Account>, AppError> {
    let Path(account_id) = path?;
    let account = state.store.get_account_by_id(account_id).await?;
    Ok(Json(account))
}

/// Rename an account.
///
/// Only `firstName` and `lastName` are read from the body. The update
/// succeeds even if the account vanished after the middleware checked it.
pub async fn update_account<S: AccountStore>(
    State(state): State<AppState<S>>,
    Extension(claims): Extension<AccountClaims>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdateAccountRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let Path(account_id) = path?;
    let Json(request) = payload?;

    let changes = AccountChanges {
        first_name: request.first_name,
        last_name: request.last_name,
    };
    state.store.update_account(account_id, &changes).await?;

    tracing::info!(account_id, number = claims.number, "account updated");

    Ok(Json(MessageResponse {
        message: "Data Updated".to_string(),
    }))
}

/// Delete an account.
///
/// # Response
///
/// - **Success (200 OK)**: the JSON string `"Account Deleted"`
pub async fn delete_account<S: AccountStore>(
    State(state): State<AppState<S>>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<&'static str>, AppError> {
    let Path(account_id) = path?;
    state.store.delete_account(account_id).await?;

    tracing::info!(account_id, "account deleted");

    Ok(Json("Account Deleted"))
}

/// Fallback for verbs a route does not support.
pub async fn method_not_allowed(method: Method) -> AppError {
    AppError::MethodNotAllowed(method.to_string())
}
