//! Terminal implementations of the card capabilities.
//!
//! Prompts are answered inside the app loop: each capability posts a
//! [`PromptRequest`] carrying a oneshot reply and waits on it. Files are read
//! from and written to the local filesystem.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use doccards_core::{AppConfig, DocCardsError, DocCardsResult};
use doccards_domain::{
    Capabilities, ConfirmPrompt, FileDownloader, FileHandle, FileMeta, FilePicker,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::oneshot;

use crate::events::{Event, EventSender, PromptRequest};

const FALLBACK_DOWNLOAD_NAME: &str = "download.bin";

pub fn tui_capabilities(config: &AppConfig, events: EventSender) -> Capabilities {
    Capabilities::new(
        Arc::new(TuiFilePicker::new(events.clone())),
        Arc::new(TuiDownloader::new(
            config.effective_download_dir(),
            events.clone(),
        )),
        Arc::new(TuiConfirmPrompt::new(events)),
    )
}

pub struct TuiFilePicker {
    events: EventSender,
}

impl TuiFilePicker {
    pub fn new(events: EventSender) -> Self {
        Self { events }
    }
}

#[async_trait]
impl FilePicker for TuiFilePicker {
    async fn open(&self) -> Option<FileMeta> {
        let (reply, answer) = oneshot::channel();
        if self
            .events
            .send(Event::Prompt(PromptRequest::PickFile { reply }))
            .is_err()
        {
            return None;
        }

        let path = answer.await.ok().flatten()?;
        match read_file_meta(&path).await {
            Ok(meta) => Some(meta),
            Err(e) => {
                tracing::error!("Failed to read {}: {}", path.display(), e);
                let _ = self
                    .events
                    .send(Event::HostError(format!("Cannot open {}: {}", path.display(), e)));
                None
            }
        }
    }
}

pub struct TuiDownloader {
    download_dir: PathBuf,
    events: EventSender,
}

impl TuiDownloader {
    pub fn new(download_dir: PathBuf, events: EventSender) -> Self {
        Self {
            download_dir,
            events,
        }
    }
}

#[async_trait]
impl FileDownloader for TuiDownloader {
    async fn save(&self, content: FileHandle, suggested_name: String) {
        match write_download(&self.download_dir, &suggested_name, &content).await {
            Ok(path) => tracing::info!("Saved {} bytes to {}", content.len(), path.display()),
            Err(e) => {
                tracing::error!("Failed to save {}: {}", suggested_name, e);
                let _ = self
                    .events
                    .send(Event::HostError(format!("Cannot save {}: {}", suggested_name, e)));
            }
        }
    }
}

pub struct TuiConfirmPrompt {
    events: EventSender,
}

impl TuiConfirmPrompt {
    pub fn new(events: EventSender) -> Self {
        Self { events }
    }
}

#[async_trait]
impl ConfirmPrompt for TuiConfirmPrompt {
    async fn ask(&self, message: &str) -> bool {
        let (reply, answer) = oneshot::channel();
        let request = PromptRequest::Confirm {
            message: message.to_string(),
            reply,
        };
        if self.events.send(Event::Prompt(request)).is_err() {
            return false;
        }
        answer.await.unwrap_or(false)
    }
}

/// Load a file from disk into a session handle.
pub async fn read_file_meta(path: &Path) -> DocCardsResult<FileMeta> {
    let name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| DocCardsError::Validation(format!("{} has no file name", path.display())))?
        .to_string();

    let metadata = tokio::fs::metadata(path).await?;
    if !metadata.is_file() {
        return Err(DocCardsError::Validation(format!(
            "{} is not a file",
            path.display()
        )));
    }

    let bytes = tokio::fs::read(path).await?;
    let mime_type = mime_guess::from_path(path)
        .first_raw()
        .unwrap_or_default()
        .to_string();
    let last_modified_at = metadata
        .modified()
        .map(DateTime::<Utc>::from)
        .unwrap_or_else(|_| Utc::now());

    Ok(FileMeta::new(
        FileHandle::from_bytes(bytes),
        name,
        mime_type,
        last_modified_at,
    ))
}

/// Write content under `dir`, never overwriting: a taken name becomes
/// `name (1).ext`, `name (2).ext`, and so on.
pub async fn write_download(
    dir: &Path,
    suggested_name: &str,
    content: &FileHandle,
) -> DocCardsResult<PathBuf> {
    tokio::fs::create_dir_all(dir).await?;
    let destination = unique_destination(dir, suggested_name);
    tokio::fs::write(&destination, content.as_bytes()).await?;
    Ok(destination)
}

pub fn unique_destination(dir: &Path, suggested_name: &str) -> PathBuf {
    // Only the final component is honoured, so a name cannot escape `dir`.
    let name = Path::new(suggested_name)
        .file_name()
        .and_then(|name| name.to_str())
        .filter(|name| !name.is_empty())
        .unwrap_or(FALLBACK_DOWNLOAD_NAME);

    let candidate = dir.join(name);
    if !candidate.exists() {
        return candidate;
    }

    let stem = Path::new(name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(name);
    let extension = Path::new(name).extension().and_then(|e| e.to_str());

    (1..)
        .map(|n| match extension {
            Some(ext) => dir.join(format!("{} ({}).{}", stem, n, ext)),
            None => dir.join(format!("{} ({})", stem, n)),
        })
        .find(|path| !path.exists())
        .unwrap_or(candidate)
}
