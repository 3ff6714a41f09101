//! Purge mode: remove every direct entry of the archive root, one at a time.
//!
//! The root itself is kept. A missing or empty root is a silent no-op, so
//! purging twice in a row succeeds. The first removal failure stops the run
//! and names the entry that could not be removed.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{ClrdError, Result};
use crate::store::ArchiveStore;
use std::path::Path;
use tracing::{debug, warn};

pub fn run<S: ArchiveStore>(store: &mut S, root: &Path) -> Result<CmdResult> {
    if !store.exists(root) {
        debug!(path = %root.display(), "archive root missing, nothing to purge");
        return Ok(CmdResult::default());
    }

    let entries = store.list_entries(root).map_err(|source| ClrdError::List {
        path: root.to_path_buf(),
        source,
    })?;

    if entries.is_empty() {
        return Ok(CmdResult::default());
    }

    let mut removed = Vec::with_capacity(entries.len());
    for entry in entries {
        let path = root.join(&entry.name);
        if let Err(source) = store.remove_entry(&path) {
            warn!(path = %path.display(), error = %source, "removal failed, stopping");
            return Err(ClrdError::Remove { path, source });
        }
        debug!(path = %path.display(), "removed");
        removed.push(path);
    }

    let mut res = CmdResult::default().with_removed(removed);
    res.add_message(CmdMessage::success(format!(
        "cleared the content of {}",
        root.display()
    )));
    Ok(res)
}
