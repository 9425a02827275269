//! Business logic shared by handlers and middleware.

/// Account token signing and verification
pub mod token_service;
