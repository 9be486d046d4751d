//! HTTP request handlers.

pub mod deploy;
pub mod prompt;
pub mod status;
