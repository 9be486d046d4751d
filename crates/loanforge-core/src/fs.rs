//! FileSystem trait for abstracting file I/O.
//!
//! Defined in loanforge-core so the artifact writer can write files without
//! depending on any specific filesystem implementation. The `LocalFileSystem`
//! adapter lives in loanforge-infra.

use std::path::Path;

/// Abstraction over filesystem operations.
///
/// This trait allows the pipeline to write files without coupling to the real
/// filesystem, enabling easy testing with in-memory implementations.
pub trait FileSystem: Send + Sync {
    /// Write string content to a file, replacing any existing content.
    fn write_file(
        &self,
        path: &Path,
        content: &str,
    ) -> impl std::future::Future<Output = Result<(), std::io::Error>> + Send;

    /// Read a file's content as a string.
    fn read_file(
        &self,
        path: &Path,
    ) -> impl std::future::Future<Output = Result<String, std::io::Error>> + Send;

    /// Create a directory and all parent directories. Succeeds if it already exists.
    fn create_dir_all(
        &self,
        path: &Path,
    ) -> impl std::future::Future<Output = Result<(), std::io::Error>> + Send;

    /// Check whether a path exists.
    fn exists(
        &self,
        path: &Path,
    ) -> impl std::future::Future<Output = bool> + Send;
}
