use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClrdError {
    #[error("couldn't get user's home directory. set $HOME env variable")]
    HomeUnavailable,

    #[error("directory {} not found. set the ${var} env variable", path.display())]
    SourceMissing { path: PathBuf, var: &'static str },

    #[error("couldn't create the directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(
        "batch directory {} already exists. wait a second and run again",
        path.display()
    )]
    BatchExists { path: PathBuf },

    #[error("error when listing {}: {source}", path.display())]
    List {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("couldn't move {} to {}: {source}", from.display(), to.display())]
    Move {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("couldn't remove {}: {source}", path.display())]
    Remove {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ClrdError>;
