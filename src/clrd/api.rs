//! # API Facade
//!
//! [`ClrdApi`] is the single entry point UI code uses. It owns the resolved
//! [`ClrdPaths`], the store and the clock, and dispatches to the command
//! modules. It does no I/O of its own and returns structured `CmdResult`s.
//!
//! Generic over both seams:
//! - Production: `ClrdApi<FileStore, SystemClock>`
//! - Testing: `ClrdApi<InMemoryStore, FixedClock>`

use crate::clock::Clock;
use crate::commands::{self, CmdResult};
use crate::config::ClrdPaths;
use crate::error::Result;
use crate::store::ArchiveStore;

pub use crate::commands::{CmdMessage, MessageLevel};

pub struct ClrdApi<S: ArchiveStore, C: Clock> {
    store: S,
    clock: C,
    paths: ClrdPaths,
}

impl<S: ArchiveStore, C: Clock> ClrdApi<S, C> {
    pub fn new(store: S, clock: C, paths: ClrdPaths) -> Self {
        Self {
            store,
            clock,
            paths,
        }
    }

    /// Move the download source into a new batch.
    pub fn archive(&mut self) -> Result<CmdResult> {
        commands::archive::run(&mut self.store, &self.paths, &self.clock)
    }

    /// Remove every batch under the archive root.
    pub fn purge(&mut self) -> Result<CmdResult> {
        commands::purge::run(&mut self.store, &self.paths.archive_root)
    }

    #[cfg(any(test, feature = "test_utils"))]
    pub fn store(&self) -> &S {
        &self.store
    }
}
