//! HTTP middleware components.
//!
//! Middleware run before route handlers and may short-circuit a request.

/// Account token authentication middleware
pub mod auth;
