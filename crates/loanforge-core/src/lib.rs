//! Contract generation pipeline and port traits for loanforge.
//!
//! This crate defines the "ports" (`LlmProvider`, `FileSystem`,
//! `ToolchainRunner`) that the infrastructure layer implements. It depends
//! only on `loanforge-types`, never on `loanforge-infra` or any network or
//! process crate.

pub mod artifact;
pub mod codegen;
pub mod fs;
pub mod llm;
pub mod pipeline;
pub mod prompt;
pub mod toolchain;

#[cfg(test)]
mod testing;
