use crate::board::CardBoard;
use crate::card::CardRecord;
use crate::tag::Tag;

const SEED_DESCRIPTION: &str = "this is the docs important to me";
const SEED_SIZE_LABEL: &str = ".9mb";

fn seed_card(id: u32, deletable: bool, tag: Tag) -> CardRecord {
    CardRecord {
        id,
        description: SEED_DESCRIPTION.to_string(),
        size_label: SEED_SIZE_LABEL.to_string(),
        deletable,
        tag,
        attached_file: None,
    }
}

/// The three demo cards a fresh session starts with: a deletable
/// download-now card, a download-only card without a strip, and a deletable
/// upload card.
pub fn seeded_board() -> CardBoard {
    CardBoard::from_records(vec![
        seed_card(1, true, Tag::download_now()),
        seed_card(2, false, Tag::hidden()),
        seed_card(3, true, Tag::upload()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::TagAction;

    #[test]
    fn test_seeded_board_shape() {
        let board = seeded_board();
        let ids: Vec<_> = board.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert!(board.iter().all(|c| !c.has_file()));

        let second = board.get(2).unwrap();
        assert!(!second.deletable);
        assert!(!second.tag.visible);

        assert_eq!(board.get(3).unwrap().tag.action, TagAction::Upload);
        assert_eq!(board.next_id(), 4);
    }
}
