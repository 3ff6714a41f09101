use std::ffi::OsString;
use std::path::PathBuf;

/// A direct child of a listed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: OsString,
    pub is_dir: bool,
}

impl Entry {
    pub fn file(name: impl Into<OsString>) -> Self {
        Self {
            name: name.into(),
            is_dir: false,
        }
    }

    pub fn dir(name: impl Into<OsString>) -> Self {
        Self {
            name: name.into(),
            is_dir: true,
        }
    }
}

/// One timestamped directory produced by a single archive run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveBatch {
    pub name: String,
    pub path: PathBuf,
    /// Entries moved into the batch, in the order they were moved.
    pub entries: Vec<Entry>,
}
