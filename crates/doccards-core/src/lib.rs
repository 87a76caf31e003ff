pub mod config;
pub mod error;
pub mod logging;
pub mod result;
pub mod text_buffer;

pub use config::AppConfig;
pub use error::DocCardsError;
pub use logging::{LogEntry, Loggable};
pub use result::DocCardsResult;
pub use text_buffer::TextBuffer;
