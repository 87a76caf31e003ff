use serde::{Deserialize, Serialize};

use crate::file::{AttachedFile, FileMeta};
use crate::tag::Tag;

pub type CardId = u32;

pub const NEW_CARD_DESCRIPTION: &str = "New document - Upload a file";
pub const EMPTY_SIZE_LABEL: &str = "0mb";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardRecord {
    pub id: CardId,
    pub description: String,
    pub size_label: String,
    /// Corner action is delete when set, download otherwise.
    pub deletable: bool,
    pub tag: Tag,
    #[serde(default)]
    pub attached_file: Option<AttachedFile>,
}

impl CardRecord {
    /// A fresh slot waiting for an upload.
    pub fn new(id: CardId) -> Self {
        Self {
            id,
            description: NEW_CARD_DESCRIPTION.to_string(),
            size_label: EMPTY_SIZE_LABEL.to_string(),
            deletable: true,
            tag: Tag::upload(),
            attached_file: None,
        }
    }

    pub fn has_file(&self) -> bool {
        self.attached_file.is_some()
    }

    pub fn update_description(&mut self, description: String) {
        self.description = description;
    }

    /// Attaching always wins over whatever label, size and tag the card had.
    pub fn attach(&mut self, file: FileMeta) {
        self.description = file.name.clone();
        self.size_label = file.size_label();
        self.tag = Tag::download_now();
        self.attached_file = Some(file);
    }
}
