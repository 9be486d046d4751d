//! Shared domain types for loanforge.
//!
//! Loan records, generated artifacts, deployment outcomes, LLM request and
//! response shapes, configuration, and the error enums used across the
//! workspace.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod artifact;
pub mod config;
pub mod deploy;
pub mod error;
pub mod llm;
pub mod loan;
