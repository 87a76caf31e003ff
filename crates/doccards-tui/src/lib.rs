pub mod activity;
pub mod app;
pub mod components;
pub mod dialog;
pub mod events;
pub mod host;
pub mod selection;
pub mod theme;
pub mod ui;

pub use app::{App, AppMode};
pub use events::{Event, EventHandler, EventSender, PromptRequest};
