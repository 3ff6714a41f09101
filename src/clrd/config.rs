//! Path resolution for the archive root and the download source.
//!
//! Both paths come from the environment with a default under the user's
//! home directory. The environment is read through [`EnvSource`] so that
//! tests can supply a fixed map instead of mutating the process environment.

use crate::error::{ClrdError, Result};
#[cfg(not(unix))]
use directories::BaseDirs;
use std::collections::HashMap;
use std::ffi::OsString;
use std::path::PathBuf;

/// Overrides the archive root (default `$HOME/.clrd`).
pub const ARCHIVE_ROOT_VAR: &str = "CLRD_PATH";
/// Overrides the download source (default `$HOME/Downloads`).
pub const DOWNLOADS_VAR: &str = "Downloads";

const DEFAULT_ARCHIVE_DIR: &str = ".clrd";
const DEFAULT_DOWNLOADS_DIR: &str = "Downloads";

/// Read access to the variables and home directory clrd depends on.
pub trait EnvSource {
    fn var(&self, key: &str) -> Option<OsString>;
    fn home_dir(&self) -> Option<PathBuf>;
}

/// The real process environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<OsString> {
        std::env::var_os(key)
    }

    #[cfg(unix)]
    fn home_dir(&self) -> Option<PathBuf> {
        std::env::var_os("HOME")
            .filter(|h| !h.is_empty())
            .map(PathBuf::from)
    }

    #[cfg(not(unix))]
    fn home_dir(&self) -> Option<PathBuf> {
        BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf())
    }
}

/// A fixed environment, used by tests.
#[derive(Debug, Default, Clone)]
pub struct MapEnv {
    vars: HashMap<String, OsString>,
    home: Option<PathBuf>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_home(mut self, home: impl Into<PathBuf>) -> Self {
        self.home = Some(home.into());
        self
    }

    pub fn with_var(mut self, key: &str, value: impl Into<OsString>) -> Self {
        self.vars.insert(key.to_string(), value.into());
        self
    }
}

impl EnvSource for MapEnv {
    fn var(&self, key: &str) -> Option<OsString> {
        self.vars.get(key).cloned()
    }

    fn home_dir(&self) -> Option<PathBuf> {
        self.home.clone()
    }
}

/// Where a path came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathOrigin {
    Default,
    Override,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClrdPaths {
    pub archive_root: PathBuf,
    pub download_source: PathBuf,
    pub source_origin: PathOrigin,
}

impl ClrdPaths {
    /// Resolve both paths. The home directory is required even when both
    /// overrides are set.
    pub fn resolve<E: EnvSource>(env: &E) -> Result<Self> {
        let home = env
            .home_dir()
            .filter(|h| !h.as_os_str().is_empty())
            .ok_or(ClrdError::HomeUnavailable)?;

        let archive_root = match non_empty_var(env, ARCHIVE_ROOT_VAR) {
            Some(value) => PathBuf::from(value),
            None => home.join(DEFAULT_ARCHIVE_DIR),
        };

        let (download_source, source_origin) = match non_empty_var(env, DOWNLOADS_VAR) {
            Some(value) => (PathBuf::from(value), PathOrigin::Override),
            None => (home.join(DEFAULT_DOWNLOADS_DIR), PathOrigin::Default),
        };

        Ok(Self {
            archive_root,
            download_source,
            source_origin,
        })
    }
}

fn non_empty_var<E: EnvSource>(env: &E, key: &str) -> Option<OsString> {
    env.var(key).filter(|v| !v.is_empty())
}
