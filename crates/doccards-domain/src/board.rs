//! The card store.
//!
//! A [`CardBoard`] is an immutable snapshot of the ordered card collection.
//! Every operation returns a new board and leaves `self` untouched, so the
//! host can swap snapshots wholesale and keep old ones for undo.

use serde::{Deserialize, Serialize};

use crate::card::{CardId, CardRecord};
use crate::file::FileMeta;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CardBoard {
    #[serde(default)]
    cards: Vec<CardRecord>,
}

impl CardBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from existing records. Later duplicates of an id are
    /// dropped so ids stay unique.
    pub fn from_records(records: Vec<CardRecord>) -> Self {
        let mut cards: Vec<CardRecord> = Vec::with_capacity(records.len());
        for record in records {
            if cards.iter().any(|c| c.id == record.id) {
                tracing::warn!("Dropping duplicate card id {}", record.id);
                continue;
            }
            cards.push(record);
        }
        Self { cards }
    }

    pub fn cards(&self) -> &[CardRecord] {
        &self.cards
    }

    pub fn iter(&self) -> impl Iterator<Item = &CardRecord> {
        self.cards.iter()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, id: CardId) -> Option<&CardRecord> {
        self.cards.iter().find(|c| c.id == id)
    }

    pub fn contains(&self, id: CardId) -> bool {
        self.get(id).is_some()
    }

    /// `max(ids) + 1`, or `1` on an empty board.
    pub fn next_id(&self) -> CardId {
        self.cards.iter().map(|c| c.id).max().map_or(1, |max| max + 1)
    }

    /// Append a new upload-ready card.
    #[must_use]
    pub fn add_card(&self) -> Self {
        let mut cards = self.cards.clone();
        cards.push(CardRecord::new(self.next_id()));
        Self { cards }
    }

    #[must_use]
    pub fn delete_card(&self, id: CardId) -> Self {
        if !self.contains(id) {
            return self.clone();
        }
        let cards = self.cards.iter().filter(|c| c.id != id).cloned().collect();
        Self { cards }
    }

    #[must_use]
    pub fn edit_description(&self, id: CardId, description: &str) -> Self {
        self.map_card(id, |card| card.update_description(description.to_string()))
    }

    #[must_use]
    pub fn attach_file(&self, id: CardId, file: FileMeta) -> Self {
        self.map_card(id, |card| card.attach(file))
    }

    fn map_card(&self, id: CardId, update: impl FnOnce(&mut CardRecord)) -> Self {
        let mut board = self.clone();
        if let Some(card) = board.cards.iter_mut().find(|c| c.id == id) {
            update(card);
        }
        board
    }
}

impl<'a> IntoIterator for &'a CardBoard {
    type Item = &'a CardRecord;
    type IntoIter = std::slice::Iter<'a, CardRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::file::FileHandle;
    use crate::seed::seeded_board;
    use crate::tag::Tag;
    use chrono::Utc;
    use std::collections::HashSet;

    fn pdf_meta() -> FileMeta {
        FileMeta {
            handle: FileHandle::default(),
            name: "a.pdf".to_string(),
            byte_size: 2_424_832,
            mime_type: "application/pdf".to_string(),
            last_modified_at: Utc::now(),
        }
    }

    #[test]
    fn test_add_card_to_empty_board() {
        let board = CardBoard::new().add_card();
        assert_eq!(board.cards()[0].id, 1);

        let board = board.add_card();
        assert_eq!(board.cards()[1].id, 2);
        assert_eq!(board.len(), 2);
    }

    #[test]
    fn test_add_card_ids_strictly_increase() {
        let mut board = seeded_board().delete_card(2);
        let mut last = board.next_id() - 1;
        for _ in 0..10 {
            board = board.add_card();
            let id = board.cards().last().unwrap().id;
            assert!(id > last);
            last = id;
        }
        let ids: HashSet<_> = board.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), board.len());
    }

    #[test]
    fn test_deleting_max_id_frees_it() {
        let board = seeded_board().delete_card(3);
        assert_eq!(board.next_id(), 3);

        let board = board.add_card();
        assert_eq!(board.cards().last().unwrap().id, 3);
        assert_eq!(board.len(), 3);
    }

    #[test]
    fn test_add_card_leaves_original_untouched() {
        let board = seeded_board();
        let grown = board.add_card();
        assert_eq!(board.len(), 3);
        assert_eq!(grown.len(), 4);
    }

    #[test]
    fn test_delete_preserves_order() {
        let board = seeded_board().add_card().delete_card(2);
        let ids: Vec<_> = board.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 3, 4]);
    }

    #[test]
    fn test_delete_is_idempotent() {
        let once = seeded_board().delete_card(1);
        let twice = once.delete_card(1);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_edit_description_round_trip() {
        let board = seeded_board();
        let original = board.get(3).unwrap().description.clone();

        let edited = board.edit_description(3, "tax forms");
        assert_eq!(edited.get(3).unwrap().description, "tax forms");

        let restored = edited.edit_description(3, &original);
        assert_eq!(restored, board);
    }

    #[test]
    fn test_edit_unknown_id_is_noop() {
        let board = seeded_board();
        assert_eq!(board.edit_description(99, "ghost"), board);
    }

    #[test]
    fn test_attach_file_scenario() {
        let board = seeded_board().attach_file(3, pdf_meta());
        let card = board.get(3).unwrap();
        assert_eq!(card.size_label, "2.31MB");
        assert_eq!(card.description, "a.pdf");
        assert_eq!(card.tag, Tag::download_now());
        assert!(card.deletable);
    }

    #[test]
    fn test_attach_file_forces_download_tag_from_any_state() {
        for id in [1, 2, 3] {
            let board = seeded_board().attach_file(id, pdf_meta());
            assert_eq!(board.get(id).unwrap().tag, Tag::download_now());
        }
    }

    #[test]
    fn test_attach_file_unknown_id_is_noop() {
        let board = seeded_board();
        assert_eq!(board.attach_file(42, pdf_meta()), board);
    }

    #[test]
    fn test_from_records_drops_duplicate_ids() {
        let board = CardBoard::from_records(vec![
            CardRecord::new(1),
            CardRecord::new(1),
            CardRecord::new(2),
        ]);
        assert_eq!(board.len(), 2);
    }

    #[test]
    fn test_board_serialization_roundtrip() {
        let board = seeded_board();
        let json = serde_json::to_string(&board).unwrap();
        let restored: CardBoard = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, board);
    }
}
