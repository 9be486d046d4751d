//! HTTP API layer for loanforge.
//!
//! Axum router with three routes, open CORS, and request tracing.

pub mod error;
pub mod handlers;
pub mod router;

#[cfg(all(test, unix))]
pub(crate) mod test_support;
