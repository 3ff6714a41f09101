//! # Storage Layer
//!
//! The [`ArchiveStore`] trait is the narrow set of filesystem primitives clrd
//! needs: existence checks, listing direct children, creating directories,
//! renaming and recursive removal.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: the real filesystem via `std::fs`. Moves are plain
//!   renames, so they are atomic within one filesystem and fail across
//!   devices.
//! - [`memory::InMemoryStore`]: a path-keyed tree with per-path fault
//!   injection, for exercising partial failures in tests.
//!
//! Methods return `std::io::Result`; the command layer attaches the paths
//! involved when turning failures into [`crate::error::ClrdError`].

use crate::model::Entry;
use std::io;
use std::path::Path;

pub mod fs;
#[cfg(any(test, feature = "test_utils"))]
pub mod memory;

pub trait ArchiveStore {
    /// Whether anything exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Direct children of `dir`, sorted by name.
    fn list_entries(&self, dir: &Path) -> io::Result<Vec<Entry>>;

    /// Create `dir` and any missing parents. Succeeds if it already exists.
    fn ensure_dir(&mut self, dir: &Path) -> io::Result<()>;

    /// Create exactly `dir`. Fails with `AlreadyExists` if it is present.
    fn create_dir(&mut self, dir: &Path) -> io::Result<()>;

    /// Rename `from` to `to`, carrying any subtree along.
    fn move_entry(&mut self, from: &Path, to: &Path) -> io::Result<()>;

    /// Remove `path` and everything beneath it. A missing path is not an error.
    fn remove_entry(&mut self, path: &Path) -> io::Result<()>;
}
