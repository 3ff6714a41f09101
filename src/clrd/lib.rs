//! # Clrd Architecture
//!
//! Clrd moves everything in a Downloads directory into a timestamped batch
//! under a persistent archive directory, and can purge that archive later.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses flags, prints messages, sets the exit code        │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Owns the resolved paths, the store and the clock         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Archive and purge logic                                  │
//! │  - Returns `CmdResult`, never prints                         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract ArchiveStore trait                              │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ambient state is injected
//!
//! The environment (`HOME`, `CLRD_PATH`, `Downloads`) is read through
//! [`config::EnvSource`] and the wall clock through [`clock::Clock`]. Commands
//! only ever see resolved [`config::ClrdPaths`] and a clock value, so tests
//! run deterministically without touching process-global state.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Archive and purge logic
//! - [`store`]: Filesystem abstraction and implementations
//! - [`model`]: `Entry` and `ArchiveBatch`
//! - [`config`]: Path resolution from the environment
//! - [`clock`]: Clock abstraction and batch naming
//! - [`logging`]: Tracing subscriber setup
//! - [`error`]: Error types
//! - `cli`: Flag parsing and printing for the binary (not part of the lib API)

pub mod api;
pub mod clock;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod store;
