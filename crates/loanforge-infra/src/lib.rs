//! Infrastructure layer for loanforge.
//!
//! Contains implementations of the port traits defined in `loanforge-core`:
//! the OpenAI-compatible completion provider, the local filesystem adapter,
//! and the subprocess toolchain runner. Also loads `loanforge.toml`.

pub mod config;
pub mod filesystem;
pub mod llm;
pub mod toolchain;
