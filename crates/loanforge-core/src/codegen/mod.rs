//! Source text transformations applied between completion and disk.
//!
//! Fence stripping cleans the raw completion, renaming qualifies the contract
//! declaration, and migration rendering produces the companion deploy script.
//! None of these parse Solidity.

pub mod fence;
pub mod migration;
pub mod rename;

pub use fence::strip_code_fences;
pub use migration::render_migration_script;
pub use rename::qualify_contract_name;
