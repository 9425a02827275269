//! Account token middleware.
//!
//! This middleware intercepts every request to `/account/{id}` to:
//! 1. Extract the token from the `x-auth` header
//! 2. Verify its signature and expiry with the server secret
//! 3. Check that the token was issued for the account being accessed
//! 4. Inject the verified claims into the request
//! 5. Reject everything else before the handler runs

use crate::{
    error::AppError,
    services::token_service::AccountClaims,
    state::AppState,
    store::AccountStore,
};
use axum::{
    extract::{Path, Request, State, rejection::PathRejection},
    middleware::Next,
    response::Response,
};

/// Request header carrying the account token.
pub const AUTH_HEADER: &str = "x-auth";

/// Account token validation middleware function.
///
/// # Flow
///
/// 1. Read `x-auth`; missing or non-ASCII header is a 401
/// 2. Verify the JWT; bad signature, expiry or garbage is a 401
/// 3. Parse the `{id}` path parameter; non-integer is a 400
/// 4. Load the account; unknown id is a 404
/// 5. Compare the `number` claim with the account; mismatch is a 403
/// 6. Insert [`AccountClaims`] into request extensions and call the handler
pub async fn require_account_token<S: AccountStore>(
    State(state): State<AppState<S>>,
    path: Result<Path<i32>, PathRejection>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = request
        .headers()
        .get(AUTH_HEADER)
        .and_then(|h| h.to_str().ok())
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AppError::Auth(format!("missing {AUTH_HEADER} token")))?;

    let claims = state.tokens.verify(token).inspect_err(|e| {
        tracing::warn!(error = %e, "rejected account token");
    })?;

    let Path(account_id) = path?;
    let account = state.store.get_account_by_id(account_id).await?;

    if account.number != claims.number {
        tracing::warn!(account_id, claimed = claims.number, "token issued for another account");
        return Err(AppError::Forbidden(account_id));
    }

    request.extensions_mut().insert::<AccountClaims>(claims);

    Ok(next.run(request).await)
}
