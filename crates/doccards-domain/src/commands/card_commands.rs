use super::Command;
use crate::{CardBoard, CardId, FileMeta};

fn log_if_stale(board: &CardBoard, card_id: CardId) {
    if !board.contains(card_id) {
        tracing::debug!("Card {} is no longer on the board, ignoring", card_id);
    }
}

/// Append a new upload-ready card
pub struct AddCard;

impl Command for AddCard {
    fn execute(&self, board: &CardBoard) -> CardBoard {
        let next = board.add_card();
        tracing::debug!("Added card {}", board.next_id());
        next
    }

    fn description(&self) -> String {
        "Add card".to_string()
    }
}

/// Remove a card. Only issued after the user confirmed.
pub struct DeleteCard {
    pub card_id: CardId,
}

impl Command for DeleteCard {
    fn execute(&self, board: &CardBoard) -> CardBoard {
        log_if_stale(board, self.card_id);
        board.delete_card(self.card_id)
    }

    fn description(&self) -> String {
        format!("Delete card {}", self.card_id)
    }
}

pub struct EditDescription {
    pub card_id: CardId,
    pub description: String,
}

impl Command for EditDescription {
    fn execute(&self, board: &CardBoard) -> CardBoard {
        log_if_stale(board, self.card_id);
        board.edit_description(self.card_id, &self.description)
    }

    fn description(&self) -> String {
        format!("Edit description of card {}", self.card_id)
    }
}

/// Attach a picked file, which also turns the tag into "Download Now"
pub struct AttachFile {
    pub card_id: CardId,
    pub file: FileMeta,
}

impl Command for AttachFile {
    fn execute(&self, board: &CardBoard) -> CardBoard {
        log_if_stale(board, self.card_id);
        board.attach_file(self.card_id, self.file.clone())
    }

    fn description(&self) -> String {
        format!("Attach '{}' to card {}", self.file.name, self.card_id)
    }
}
