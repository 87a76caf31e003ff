pub mod board;
pub mod capabilities;
pub mod card;
pub mod commands;
pub mod controller;
pub mod file;
pub mod history;
pub mod outcome;
pub mod seed;
pub mod tag;

pub use board::CardBoard;
pub use capabilities::{Capabilities, ConfirmPrompt, FileDownloader, FilePicker};
pub use card::{CardId, CardRecord};
pub use commands::{AddCard, AttachFile, Command, DeleteCard, EditDescription};
pub use controller::{CardController, CardView, CornerAction, FileSummary, Mode, TagStrip};
pub use file::{format_size_label, AttachedFile, FileHandle, FileMeta};
pub use history::HistoryManager;
pub use outcome::{Notice, NoticeLevel, Outcome};
pub use tag::{Emphasis, Tag, TagAction};
