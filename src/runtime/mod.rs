//! Runtime abstraction for system operations.
//!
//! The fetch workflow touches the process environment and the filesystem
//! only through [`Runtime`], so tests can swap in `MockRuntime`.
//!
//! # Structure
//!
//! - `env` - Environment variables and the working directory
//! - `fs` - File creation for downloads

mod env;
mod fs;

use std::env as std_env;
use std::io;
use std::path::{Path, PathBuf};

#[cfg_attr(test, mockall::automock)]
pub trait Runtime: Send + Sync {
    // Environment
    fn env_var(&self, key: &str) -> Result<String, std_env::VarError>;
    fn current_dir(&self) -> io::Result<PathBuf>;

    // File System

    /// Create `path` for writing, truncating any existing file.
    fn create_file(&self, path: &Path) -> io::Result<Box<dyn io::Write + Send>>;
}

pub struct RealRuntime;

impl Runtime for RealRuntime {
    fn env_var(&self, key: &str) -> Result<String, std_env::VarError> {
        self.env_var_impl(key)
    }

    fn current_dir(&self) -> io::Result<PathBuf> {
        self.current_dir_impl()
    }

    fn create_file(&self, path: &Path) -> io::Result<Box<dyn io::Write + Send>> {
        self.create_file_impl(path)
    }
}
