use doccards_core::{LogEntry, Loggable};

const MAX_ENTRIES: usize = 100;

/// User-facing trail of what happened to the cards this session.
#[derive(Debug, Default)]
pub struct ActivityLog {
    entries: Vec<LogEntry>,
}

impl ActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn recent(&self, count: usize) -> &[LogEntry] {
        let start = self.entries.len().saturating_sub(count);
        &self.entries[start..]
    }
}

impl Loggable for ActivityLog {
    fn add_log(&mut self, message: String) {
        self.entries.push(LogEntry::new(message));
        if self.entries.len() > MAX_ENTRIES {
            let overflow = self.entries.len() - MAX_ENTRIES;
            self.entries.drain(..overflow);
        }
    }

    fn get_logs(&self) -> &[LogEntry] {
        &self.entries
    }
}
