//! Host-provided capabilities.
//!
//! The card logic never talks to a file system, a dialog or a download
//! manager directly. The host hands it these three traits, and each one may
//! suspend while the user answers.

use async_trait::async_trait;
use std::sync::Arc;

use crate::file::{FileHandle, FileMeta};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FilePicker: Send + Sync {
    /// Let the user choose a file. `None` means the picker was dismissed.
    async fn open(&self) -> Option<FileMeta>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FileDownloader: Send + Sync {
    /// Hand content to the host's save/download mechanism. Fire-and-forget:
    /// failures are the host's to report.
    async fn save(&self, content: FileHandle, suggested_name: String);
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConfirmPrompt: Send + Sync {
    /// Ask a yes/no question. Dismissing the prompt counts as "no".
    async fn ask(&self, message: &str) -> bool;
}

#[derive(Clone)]
pub struct Capabilities {
    pub picker: Arc<dyn FilePicker>,
    pub downloader: Arc<dyn FileDownloader>,
    pub confirm: Arc<dyn ConfirmPrompt>,
}

impl Capabilities {
    pub fn new(
        picker: Arc<dyn FilePicker>,
        downloader: Arc<dyn FileDownloader>,
        confirm: Arc<dyn ConfirmPrompt>,
    ) -> Self {
        Self {
            picker,
            downloader,
            confirm,
        }
    }
}
