use super::ArchiveStore;
use crate::model::Entry;
use std::collections::{BTreeMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Node {
    Dir,
    File(Vec<u8>),
}

/// In-memory tree for testing. Does NOT persist data.
///
/// Paths without a parent (`/`) always exist as directories. Individual
/// moves and removals can be made to fail with `PermissionDenied`.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    nodes: BTreeMap<PathBuf, Node>,
    failing_moves: HashSet<PathBuf>,
    failing_removals: HashSet<PathBuf>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file, creating its parent directories.
    pub fn with_file(mut self, path: impl AsRef<Path>, contents: &str) -> Self {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            self.insert_dirs(parent);
        }
        self.nodes
            .insert(path.to_path_buf(), Node::File(contents.as_bytes().to_vec()));
        self
    }

    /// Add a directory and its parents.
    pub fn with_dir(mut self, path: impl AsRef<Path>) -> Self {
        self.insert_dirs(path.as_ref());
        self
    }

    /// Make `move_entry` fail for this source path.
    pub fn fail_move(mut self, from: impl AsRef<Path>) -> Self {
        self.failing_moves.insert(from.as_ref().to_path_buf());
        self
    }

    /// Make `remove_entry` fail for this path.
    pub fn fail_remove(mut self, path: impl AsRef<Path>) -> Self {
        self.failing_removals.insert(path.as_ref().to_path_buf());
        self
    }

    pub fn read(&self, path: impl AsRef<Path>) -> Option<&[u8]> {
        match self.nodes.get(path.as_ref()) {
            Some(Node::File(bytes)) => Some(bytes),
            _ => None,
        }
    }

    pub fn is_dir(&self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        path.parent().is_none() || matches!(self.nodes.get(path), Some(Node::Dir))
    }

    fn insert_dirs(&mut self, path: &Path) {
        for ancestor in path.ancestors() {
            if ancestor.parent().is_some() {
                self.nodes.entry(ancestor.to_path_buf()).or_insert(Node::Dir);
            }
        }
    }

    fn subtree_keys(&self, root: &Path) -> Vec<PathBuf> {
        self.nodes
            .keys()
            .filter(|k| k.starts_with(root))
            .cloned()
            .collect()
    }
}

fn not_found(path: &Path) -> io::Error {
    io::Error::new(
        io::ErrorKind::NotFound,
        format!("no such file or directory: {}", path.display()),
    )
}

fn denied() -> io::Error {
    io::Error::new(io::ErrorKind::PermissionDenied, "permission denied")
}

impl ArchiveStore for InMemoryStore {
    fn exists(&self, path: &Path) -> bool {
        path.parent().is_none() || self.nodes.contains_key(path)
    }

    fn list_entries(&self, dir: &Path) -> io::Result<Vec<Entry>> {
        if !self.exists(dir) {
            return Err(not_found(dir));
        }
        if !self.is_dir(dir) {
            return Err(io::Error::new(io::ErrorKind::Other, "not a directory"));
        }
        Ok(self
            .nodes
            .iter()
            .filter(|(path, _)| path.parent() == Some(dir))
            .filter_map(|(path, node)| {
                path.file_name().map(|name| Entry {
                    name: name.to_os_string(),
                    is_dir: matches!(node, Node::Dir),
                })
            })
            .collect())
    }

    fn ensure_dir(&mut self, dir: &Path) -> io::Result<()> {
        if self.exists(dir) && !self.is_dir(dir) {
            return Err(io::Error::new(io::ErrorKind::AlreadyExists, "file exists"));
        }
        self.insert_dirs(dir);
        Ok(())
    }

    fn create_dir(&mut self, dir: &Path) -> io::Result<()> {
        if self.exists(dir) {
            return Err(io::Error::new(io::ErrorKind::AlreadyExists, "file exists"));
        }
        match dir.parent() {
            Some(parent) if self.is_dir(parent) => {
                self.nodes.insert(dir.to_path_buf(), Node::Dir);
                Ok(())
            }
            Some(parent) => Err(not_found(parent)),
            None => Err(io::Error::new(io::ErrorKind::AlreadyExists, "file exists")),
        }
    }

    fn move_entry(&mut self, from: &Path, to: &Path) -> io::Result<()> {
        if self.failing_moves.contains(from) {
            return Err(denied());
        }
        if !self.nodes.contains_key(from) {
            return Err(not_found(from));
        }
        if self.exists(to) {
            return Err(io::Error::new(io::ErrorKind::AlreadyExists, "file exists"));
        }
        match to.parent() {
            Some(parent) if self.is_dir(parent) => {}
            _ => return Err(not_found(to)),
        }

        for key in self.subtree_keys(from) {
            if let Some(node) = self.nodes.remove(&key) {
                let rest = key.strip_prefix(from).unwrap_or(Path::new(""));
                let new_key = if rest.as_os_str().is_empty() {
                    to.to_path_buf()
                } else {
                    to.join(rest)
                };
                self.nodes.insert(new_key, node);
            }
        }
        Ok(())
    }

    fn remove_entry(&mut self, path: &Path) -> io::Result<()> {
        if self.failing_removals.contains(path) {
            return Err(denied());
        }
        for key in self.subtree_keys(path) {
            self.nodes.remove(&key);
        }
        Ok(())
    }
}
