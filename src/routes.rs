//! HTTP route table.

use axum::{Router, middleware as axum_middleware, routing::get};
use tower_http::trace::TraceLayer;

use crate::{
    handlers::{accounts, health},
    middleware::auth::require_account_token,
    state::AppState,
    store::AccountStore,
};

/// Build the application router around an injected store.
///
/// Every verb on `/account/{id}` is gated by [`require_account_token`];
/// unsupported verbs on either account route answer 405 with the method name.
pub fn router<S: AccountStore>(state: AppState<S>) -> Router {
    let account_routes = Router::new()
        .route(
            "/account",
            get(accounts::list_accounts::<S>)
                .post(accounts::create_account::<S>)
                .fallback(accounts::method_not_allowed),
        )
        .route(
            "/account/{id}",
            get(accounts::get_account::<S>)
                .put(accounts::update_account::<S>)
                .delete(accounts::delete_account::<S>)
                .route_layer(axum_middleware::from_fn_with_state(
                    state.clone(),
                    require_account_token::<S>,
                ))
                .fallback(accounts::method_not_allowed),
        );

    Router::new()
        .route("/health", get(health::health_check::<S>))
        .merge(account_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
