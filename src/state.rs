use crate::{services::token_service::TokenService, store::AccountStore};

/// Shared application state, available to all route handlers via `State<AppState<S>>`.
///
/// The store is injected at construction; nothing reaches for a global handle.
#[derive(Clone)]
pub struct AppState<S: AccountStore> {
    pub store: S,
    pub tokens: TokenService,
}

impl<S: AccountStore> AppState<S> {
    pub fn new(store: S, tokens: TokenService) -> Self {
        Self { store, tokens }
    }
}
