use crate::model::ArchiveBatch;
use std::path::PathBuf;

pub mod archive;
pub mod purge;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// The batch created by an archive run, if anything was moved.
    pub batch: Option<ArchiveBatch>,
    /// Paths removed by a purge run.
    pub removed: Vec<PathBuf>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_batch(mut self, batch: ArchiveBatch) -> Self {
        self.batch = Some(batch);
        self
    }

    pub fn with_removed(mut self, removed: Vec<PathBuf>) -> Self {
        self.removed = removed;
        self
    }
}
