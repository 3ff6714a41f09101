//! # CLI Layer
//!
//! The only place that parses flags, writes to stdout/stderr and picks exit
//! codes. Everything else goes through [`clrd::api::ClrdApi`].
//!
//! - `setup`: flag definitions, usage text, parse-error handling
//! - `commands`: context setup and per-mode handlers
//! - `print`: colored message output

mod commands;
mod print;
mod setup;

pub use commands::run;
pub use setup::parse_args;
