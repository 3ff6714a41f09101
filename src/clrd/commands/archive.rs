//! Archive mode: move every direct entry of the download source into a new
//! timestamped batch under the archive root.
//!
//! Steps run strictly in order and stop at the first failure. Entries moved
//! before a failure stay in the batch; nothing is rolled back.

use crate::clock::{batch_name, Clock};
use crate::commands::{CmdMessage, CmdResult};
use crate::config::{ClrdPaths, PathOrigin, DOWNLOADS_VAR};
use crate::error::{ClrdError, Result};
use crate::model::ArchiveBatch;
use crate::store::ArchiveStore;
use std::io;
use tracing::{debug, warn};

pub fn run<S: ArchiveStore, C: Clock>(
    store: &mut S,
    paths: &ClrdPaths,
    clock: &C,
) -> Result<CmdResult> {
    let root = &paths.archive_root;
    if !store.exists(root) {
        debug!(path = %root.display(), "creating archive root");
        store.ensure_dir(root).map_err(|source| ClrdError::CreateDir {
            path: root.clone(),
            source,
        })?;
    }

    let source_dir = &paths.download_source;
    if !store.exists(source_dir) {
        if paths.source_origin == PathOrigin::Override {
            warn!(path = %source_dir.display(), "download source override does not exist");
        }
        return Err(ClrdError::SourceMissing {
            path: source_dir.clone(),
            var: DOWNLOADS_VAR,
        });
    }

    let mut entries = store
        .list_entries(source_dir)
        .map_err(|source| ClrdError::List {
            path: source_dir.clone(),
            source,
        })?;
    // an archive root nested in the download source stays where it is
    entries.retain(|entry| source_dir.join(&entry.name) != *root);
    debug!(count = entries.len(), path = %source_dir.display(), "listed download source");

    if entries.is_empty() {
        let mut res = CmdResult::default();
        res.add_message(CmdMessage::info("nothing to clear"));
        return Ok(res);
    }

    let name = batch_name(clock.now());
    let batch_path = root.join(&name);
    store.create_dir(&batch_path).map_err(|source| {
        if source.kind() == io::ErrorKind::AlreadyExists {
            ClrdError::BatchExists {
                path: batch_path.clone(),
            }
        } else {
            ClrdError::CreateDir {
                path: batch_path.clone(),
                source,
            }
        }
    })?;

    for entry in &entries {
        let from = source_dir.join(&entry.name);
        let to = batch_path.join(&entry.name);
        if let Err(source) = store.move_entry(&from, &to) {
            warn!(from = %from.display(), error = %source, "move failed, stopping");
            return Err(ClrdError::Move { from, to, source });
        }
        debug!(from = %from.display(), to = %to.display(), "moved");
    }

    let mut res = CmdResult::default().with_batch(ArchiveBatch {
        name,
        path: batch_path.clone(),
        entries,
    });
    res.add_message(CmdMessage::success(format!(
        "moved data to {}",
        batch_path.display()
    )));
    Ok(res)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::commands::MessageLevel;
    use crate::model::Entry;
    use crate::store::memory::InMemoryStore;
    use std::path::{Path, PathBuf};

    fn default_paths() -> ClrdPaths {
        ClrdPaths {
            archive_root: PathBuf::from("/u/.clrd"),
            download_source: PathBuf::from("/u/Downloads"),
            source_origin: PathOrigin::Default,
        }
    }

    fn clock() -> FixedClock {
        FixedClock::at(2024, 1, 2, 3, 4, 5).unwrap()
    }

    #[test]
    fn test_moves_every_entry_into_batch() {
        let mut store = InMemoryStore::new()
            .with_file("/u/Downloads/a.txt", "alpha")
            .with_file("/u/Downloads/b/inner.bin", "beta");

        let res = run(&mut store, &default_paths(), &clock()).unwrap();

        let batch = res.batch.expect("batch");
        assert_eq!(batch.name, "2024-01-02 03:04:05");
        assert_eq!(batch.path, PathBuf::from("/u/.clrd/2024-01-02 03:04:05"));
        assert_eq!(batch.entries, vec![Entry::file("a.txt"), Entry::dir("b")]);

        assert_eq!(
            store.read("/u/.clrd/2024-01-02 03:04:05/a.txt"),
            Some(&b"alpha"[..])
        );
        assert_eq!(
            store.read("/u/.clrd/2024-01-02 03:04:05/b/inner.bin"),
            Some(&b"beta"[..])
        );
        assert!(store
            .list_entries(Path::new("/u/Downloads"))
            .unwrap()
            .is_empty());

        assert_eq!(res.messages.len(), 1);
        assert_eq!(res.messages[0].level, MessageLevel::Success);
        assert_eq!(
            res.messages[0].content,
            "moved data to /u/.clrd/2024-01-02 03:04:05"
        );
    }

    #[test]
    fn test_empty_source_creates_no_batch() {
        let mut store = InMemoryStore::new().with_dir("/u/Downloads");

        let res = run(&mut store, &default_paths(), &clock()).unwrap();

        assert!(res.batch.is_none());
        assert_eq!(res.messages[0].content, "nothing to clear");
        assert_eq!(res.messages[0].level, MessageLevel::Info);
        // the root is still created, but stays empty
        assert!(store.is_dir("/u/.clrd"));
        assert!(store.list_entries(Path::new("/u/.clrd")).unwrap().is_empty());
    }

    #[test]
    fn test_missing_default_source_names_path_and_variable() {
        let mut store = InMemoryStore::new().with_dir("/u");

        let err = run(&mut store, &default_paths(), &clock()).unwrap_err();

        assert!(matches!(err, ClrdError::SourceMissing { .. }));
        let msg = err.to_string();
        assert!(msg.contains("/u/Downloads"));
        assert!(msg.contains("$Downloads"));
    }

    #[test]
    fn test_missing_override_source_is_also_rejected() {
        let mut store = InMemoryStore::new().with_dir("/u");
        let paths = ClrdPaths {
            download_source: PathBuf::from("/mnt/dl"),
            source_origin: PathOrigin::Override,
            ..default_paths()
        };

        let err = run(&mut store, &paths, &clock()).unwrap_err();
        assert!(err.to_string().contains("/mnt/dl"));
    }

    #[test]
    fn test_override_source_is_listed_and_moved() {
        let mut store = InMemoryStore::new().with_file("/mnt/dl/x.iso", "iso");
        let paths = ClrdPaths {
            download_source: PathBuf::from("/mnt/dl"),
            source_origin: PathOrigin::Override,
            ..default_paths()
        };

        let res = run(&mut store, &paths, &clock()).unwrap();

        assert_eq!(res.batch.unwrap().entries, vec![Entry::file("x.iso")]);
        assert!(store.exists(Path::new("/u/.clrd/2024-01-02 03:04:05/x.iso")));
    }

    #[test]
    fn test_archive_root_inside_source_is_not_moved() {
        let mut store = InMemoryStore::new()
            .with_file("/u/Downloads/a.txt", "a")
            .with_file("/u/Downloads/.clrd/old/x.txt", "x");
        let paths = ClrdPaths {
            archive_root: PathBuf::from("/u/Downloads/.clrd"),
            ..default_paths()
        };

        let res = run(&mut store, &paths, &clock()).unwrap();

        assert_eq!(res.batch.unwrap().entries, vec![Entry::file("a.txt")]);
        assert!(store.exists(Path::new("/u/Downloads/.clrd/old/x.txt")));
        assert!(store.exists(Path::new(
            "/u/Downloads/.clrd/2024-01-02 03:04:05/a.txt"
        )));
        assert_eq!(
            store.list_entries(Path::new("/u/Downloads")).unwrap(),
            vec![Entry::dir(".clrd")]
        );
    }

    #[test]
    fn test_archive_root_alone_in_source_is_nothing_to_clear() {
        let mut store = InMemoryStore::new().with_dir("/u/Downloads/.clrd");
        let paths = ClrdPaths {
            archive_root: PathBuf::from("/u/Downloads/.clrd"),
            ..default_paths()
        };

        let res = run(&mut store, &paths, &clock()).unwrap();

        assert!(res.batch.is_none());
        assert_eq!(res.messages[0].content, "nothing to clear");
    }

    #[test]
    fn test_same_second_collision_moves_nothing() {
        let mut store = InMemoryStore::new()
            .with_file("/u/Downloads/new.txt", "new")
            .with_file("/u/.clrd/2024-01-02 03:04:05/old.txt", "old");

        let err = run(&mut store, &default_paths(), &clock()).unwrap_err();

        assert!(matches!(err, ClrdError::BatchExists { .. }));
        assert!(store.exists(Path::new("/u/Downloads/new.txt")));
        assert_eq!(
            store.list_entries(Path::new("/u/.clrd/2024-01-02 03:04:05")).unwrap(),
            vec![Entry::file("old.txt")]
        );
    }

    #[test]
    fn test_first_move_failure_aborts_without_rollback() {
        let mut store = InMemoryStore::new()
            .with_file("/u/Downloads/a.txt", "a")
            .with_file("/u/Downloads/b.txt", "b")
            .with_file("/u/Downloads/c.txt", "c")
            .fail_move("/u/Downloads/b.txt");

        let err = run(&mut store, &default_paths(), &clock()).unwrap_err();

        match &err {
            ClrdError::Move { from, to, .. } => {
                assert_eq!(from, &PathBuf::from("/u/Downloads/b.txt"));
                assert_eq!(to, &PathBuf::from("/u/.clrd/2024-01-02 03:04:05/b.txt"));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(store.exists(Path::new("/u/.clrd/2024-01-02 03:04:05/a.txt")));
        assert!(store.exists(Path::new("/u/Downloads/b.txt")));
        assert!(store.exists(Path::new("/u/Downloads/c.txt")));
    }
}
