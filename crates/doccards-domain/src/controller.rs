//! Per-card interaction logic.
//!
//! A [`CardController`] owns the only state a card keeps outside the store:
//! whether its label is being edited, and the draft text while it is.
//! Everything else it shows is derived from the [`CardRecord`] on each call.

use doccards_core::TextBuffer;

use crate::capabilities::Capabilities;
use crate::card::{CardId, CardRecord};
use crate::commands::{AttachFile, DeleteCard, EditDescription};
use crate::outcome::{Notice, Outcome};
use crate::tag::{Emphasis, TagAction};

pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this card?";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Viewing,
    Editing(TextBuffer),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CornerAction {
    Delete,
    Download,
}

impl CornerAction {
    pub fn for_record(record: &CardRecord) -> Self {
        if record.deletable {
            CornerAction::Delete
        } else {
            CornerAction::Download
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CornerAction::Delete => "Delete",
            CornerAction::Download => "Download",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagStrip {
    pub action: TagAction,
    pub title: &'static str,
    pub emphasis: Option<Emphasis>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSummary {
    pub mime_type: String,
    pub size_label: String,
}

/// What the rendering layer needs to draw one card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub id: CardId,
    pub description: String,
    pub size_label: String,
    /// Cards holding a file are drawn distinctly.
    pub emphasized: bool,
    pub corner: CornerAction,
    pub tag: Option<TagStrip>,
    pub file: Option<FileSummary>,
    pub editing: bool,
}

#[derive(Debug, Clone)]
pub struct CardController {
    card_id: CardId,
    mode: Mode,
}

impl CardController {
    pub fn new(card_id: CardId) -> Self {
        Self {
            card_id,
            mode: Mode::Viewing,
        }
    }

    pub fn card_id(&self) -> CardId {
        self.card_id
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, Mode::Editing(_))
    }

    /// Enter editing with a draft seeded from the current description. A card
    /// already being edited keeps its draft.
    pub fn start_edit(&mut self, record: &CardRecord) {
        if !self.is_editing() {
            self.mode = Mode::Editing(TextBuffer::from_text(record.description.as_str()));
        }
    }

    pub fn draft(&self) -> Option<&TextBuffer> {
        match &self.mode {
            Mode::Editing(draft) => Some(draft),
            Mode::Viewing => None,
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut TextBuffer> {
        match &mut self.mode {
            Mode::Editing(draft) => Some(draft),
            Mode::Viewing => None,
        }
    }

    /// Leave editing and hand back the command that commits the draft.
    /// Returns `None` if the card was not being edited.
    pub fn save(&mut self) -> Option<EditDescription> {
        match std::mem::take(&mut self.mode) {
            Mode::Editing(draft) => Some(EditDescription {
                card_id: self.card_id,
                description: draft.into_string(),
            }),
            Mode::Viewing => None,
        }
    }

    /// Leave editing and throw the draft away.
    pub fn cancel(&mut self) {
        self.mode = Mode::Viewing;
    }

    pub fn present(&self, record: &CardRecord) -> CardView {
        let tag = record.tag.visible.then(|| TagStrip {
            action: record.tag.action,
            title: record.tag.title(),
            emphasis: record.tag.emphasis,
        });
        let file = record.attached_file.as_ref().map(|file| FileSummary {
            mime_type: file.display_mime_type().to_string(),
            size_label: record.size_label.clone(),
        });

        CardView {
            id: record.id,
            description: record.description.clone(),
            size_label: record.size_label.clone(),
            emphasized: record.has_file(),
            corner: CornerAction::for_record(record),
            tag,
            file,
            editing: self.is_editing(),
        }
    }

    /// The corner icon: delete (after confirmation) or download.
    pub async fn press_corner(&self, record: &CardRecord, caps: &Capabilities) -> Outcome {
        match CornerAction::for_record(record) {
            CornerAction::Delete => self.delete(record, caps).await,
            CornerAction::Download => self.download(record, caps).await,
        }
    }

    /// The tag strip: upload or download depending on its action. A hidden
    /// strip cannot be pressed.
    pub async fn press_tag(&self, record: &CardRecord, caps: &Capabilities) -> Outcome {
        if !record.tag.visible {
            return Outcome::Aborted;
        }
        match record.tag.action {
            TagAction::Upload => self.upload(record, caps).await,
            TagAction::DownloadNow => self.download(record, caps).await,
        }
    }

    async fn delete(&self, record: &CardRecord, caps: &Capabilities) -> Outcome {
        tracing::debug!("Delete triggered for card {}", record.id);
        if caps.confirm.ask(DELETE_CONFIRMATION).await {
            Outcome::mutate(DeleteCard { card_id: record.id })
        } else {
            tracing::debug!("Delete of card {} not confirmed", record.id);
            Outcome::Aborted
        }
    }

    async fn download(&self, record: &CardRecord, caps: &Capabilities) -> Outcome {
        match &record.attached_file {
            Some(file) => {
                caps.downloader
                    .save(file.handle.clone(), file.name.clone())
                    .await;
                tracing::info!("Downloaded {} from card {}", file.name, record.id);
                Outcome::Notify(Notice::Downloaded {
                    name: file.name.clone(),
                })
            }
            None => {
                tracing::debug!("Card {} has no file to download", record.id);
                Outcome::Notify(Notice::NothingToDownload)
            }
        }
    }

    async fn upload(&self, record: &CardRecord, caps: &Capabilities) -> Outcome {
        tracing::debug!("Upload triggered for card {}", record.id);
        match caps.picker.open().await {
            Some(file) => {
                tracing::info!(
                    "File selected for card {}: {} ({} bytes)",
                    record.id,
                    file.name,
                    file.byte_size
                );
                let notice = Notice::Uploaded {
                    name: file.name.clone(),
                };
                Outcome::mutate(AttachFile {
                    card_id: record.id,
                    file,
                })
                .with_notice(notice)
            }
            None => Outcome::Aborted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capabilities::{MockConfirmPrompt, MockFileDownloader, MockFilePicker};
    use crate::commands::Command;
    use crate::file::{FileHandle, FileMeta};
    use crate::seed::seeded_board;
    use crate::tag::Tag;
    use crate::CardBoard;
    use chrono::Utc;
    use std::sync::Arc;

    fn caps(
        picker: MockFilePicker,
        downloader: MockFileDownloader,
        confirm: MockConfirmPrompt,
    ) -> Capabilities {
        Capabilities::new(Arc::new(picker), Arc::new(downloader), Arc::new(confirm))
    }

    fn idle_caps() -> Capabilities {
        caps(
            MockFilePicker::new(),
            MockFileDownloader::new(),
            MockConfirmPrompt::new(),
        )
    }

    fn sample_file() -> FileMeta {
        FileMeta::new(
            FileHandle::from_bytes(b"%PDF-1.7".to_vec()),
            "a.pdf",
            "application/pdf",
            Utc::now(),
        )
    }

    fn apply(outcome: Outcome, board: &CardBoard) -> CardBoard {
        match outcome {
            Outcome::Mutate { command, .. } => command.execute(board),
            _ => board.clone(),
        }
    }

    #[test]
    fn test_edit_save_commits_draft() {
        let board = seeded_board();
        let record = board.get(1).unwrap();
        let mut controller = CardController::new(1);

        controller.start_edit(record);
        assert!(controller.is_editing());
        assert_eq!(controller.draft().unwrap().as_str(), record.description);

        let draft = controller.draft_mut().unwrap();
        draft.clear();
        for c in "lease".chars() {
            draft.insert_char(c);
        }

        let command = controller.save().unwrap();
        assert_eq!(*controller.mode(), Mode::Viewing);
        assert_eq!(command.execute(&board).get(1).unwrap().description, "lease");
    }

    #[test]
    fn test_edit_cancel_discards_draft() {
        let board = seeded_board();
        let mut controller = CardController::new(3);

        controller.start_edit(board.get(3).unwrap());
        controller.draft_mut().unwrap().insert_char('!');
        controller.cancel();

        assert_eq!(*controller.mode(), Mode::Viewing);
        assert!(controller.save().is_none());

        controller.start_edit(board.get(3).unwrap());
        assert_eq!(
            controller.draft().unwrap().as_str(),
            "this is the docs important to me"
        );
    }

    #[test]
    fn test_start_edit_twice_keeps_draft() {
        let board = seeded_board();
        let mut controller = CardController::new(1);
        controller.start_edit(board.get(1).unwrap());
        controller.draft_mut().unwrap().insert_char('?');
        controller.start_edit(board.get(1).unwrap());
        assert!(controller.draft().unwrap().as_str().ends_with('?'));
    }

    #[test]
    fn test_present_derives_from_record() {
        let board = seeded_board();
        let controller = CardController::new(2);

        let view = controller.present(board.get(2).unwrap());
        assert_eq!(view.corner, CornerAction::Download);
        assert!(view.tag.is_none());
        assert!(!view.emphasized);
        assert!(view.file.is_none());

        let attached = board.attach_file(2, sample_file());
        let view = controller.present(attached.get(2).unwrap());
        assert!(view.emphasized);
        assert_eq!(view.tag.unwrap().title, "Download Now");
        assert_eq!(view.tag.unwrap().emphasis, Some(Emphasis::Blue));
        assert_eq!(view.file.unwrap().mime_type, "application/pdf");
    }

    #[test]
    fn test_present_reports_editing() {
        let board = seeded_board();
        let mut controller = CardController::new(1);
        controller.start_edit(board.get(1).unwrap());
        assert!(controller.present(board.get(1).unwrap()).editing);
    }

    #[tokio::test]
    async fn test_download_corner_without_file_notifies() {
        let board = seeded_board();
        let record = board.get(2).unwrap();

        let mut downloader = MockFileDownloader::new();
        downloader.expect_save().never();
        let caps = caps(MockFilePicker::new(), downloader, MockConfirmPrompt::new());

        let outcome = CardController::new(2).press_corner(record, &caps).await;
        assert!(matches!(outcome, Outcome::Notify(Notice::NothingToDownload)));
        assert_eq!(apply(outcome, &board), board);
    }

    #[tokio::test]
    async fn test_download_corner_with_file_saves() {
        let board = seeded_board().attach_file(2, sample_file());
        let record = board.get(2).unwrap();

        let mut downloader = MockFileDownloader::new();
        downloader
            .expect_save()
            .withf(|content, name| content.as_bytes() == b"%PDF-1.7" && name == "a.pdf")
            .times(1)
            .returning(|_, _| ());
        let caps = caps(MockFilePicker::new(), downloader, MockConfirmPrompt::new());

        let outcome = CardController::new(2).press_corner(record, &caps).await;
        assert_eq!(
            outcome.notice(),
            Some(&Notice::Downloaded {
                name: "a.pdf".to_string()
            })
        );
        assert!(!outcome.is_mutation());
    }

    #[tokio::test]
    async fn test_delete_declined_keeps_card() {
        let board = seeded_board();

        let mut confirm = MockConfirmPrompt::new();
        confirm
            .expect_ask()
            .withf(|message| message == DELETE_CONFIRMATION)
            .times(1)
            .returning(|_| false);
        let caps = caps(MockFilePicker::new(), MockFileDownloader::new(), confirm);

        let outcome = CardController::new(1)
            .press_corner(board.get(1).unwrap(), &caps)
            .await;
        assert!(matches!(outcome, Outcome::Aborted));
        assert!(apply(outcome, &board).contains(1));
    }

    #[tokio::test]
    async fn test_delete_confirmed_removes_card() {
        let board = seeded_board();

        let mut confirm = MockConfirmPrompt::new();
        confirm.expect_ask().times(1).returning(|_| true);
        let caps = caps(MockFilePicker::new(), MockFileDownloader::new(), confirm);

        let outcome = CardController::new(1)
            .press_corner(board.get(1).unwrap(), &caps)
            .await;
        let next = apply(outcome, &board);
        assert!(!next.contains(1));
        assert_eq!(next.len(), 2);
    }

    #[tokio::test]
    async fn test_upload_tag_attaches_picked_file() {
        let board = seeded_board();

        let mut picker = MockFilePicker::new();
        picker.expect_open().times(1).returning(|| Some(sample_file()));
        let caps = caps(picker, MockFileDownloader::new(), MockConfirmPrompt::new());

        let outcome = CardController::new(3)
            .press_tag(board.get(3).unwrap(), &caps)
            .await;
        assert_eq!(
            outcome.notice(),
            Some(&Notice::Uploaded {
                name: "a.pdf".to_string()
            })
        );

        let next = apply(outcome, &board);
        let card = next.get(3).unwrap();
        assert_eq!(card.description, "a.pdf");
        assert_eq!(card.tag, Tag::download_now());
        assert!(card.has_file());
    }

    #[tokio::test]
    async fn test_upload_dismissed_is_noop() {
        let board = seeded_board();

        let mut picker = MockFilePicker::new();
        picker.expect_open().times(1).returning(|| None);
        let caps = caps(picker, MockFileDownloader::new(), MockConfirmPrompt::new());

        let outcome = CardController::new(3)
            .press_tag(board.get(3).unwrap(), &caps)
            .await;
        assert!(matches!(outcome, Outcome::Aborted));
    }

    #[tokio::test]
    async fn test_download_now_tag_without_file() {
        let board = seeded_board();
        let outcome = CardController::new(1)
            .press_tag(board.get(1).unwrap(), &idle_caps())
            .await;
        assert!(matches!(outcome, Outcome::Notify(Notice::NothingToDownload)));
    }

    #[tokio::test]
    async fn test_hidden_tag_does_nothing() {
        let board = seeded_board();
        let outcome = CardController::new(2)
            .press_tag(board.get(2).unwrap(), &idle_caps())
            .await;
        assert!(matches!(outcome, Outcome::Aborted));
    }
}
