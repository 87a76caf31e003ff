use std::fmt;

use crate::commands::Command;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Warning,
}

/// Something the user should be told after an interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Download requested on a card without a file.
    NothingToDownload,
    Uploaded { name: String },
    Downloaded { name: String },
}

impl Notice {
    pub fn level(&self) -> NoticeLevel {
        match self {
            Notice::NothingToDownload => NoticeLevel::Warning,
            Notice::Uploaded { .. } | Notice::Downloaded { .. } => NoticeLevel::Success,
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::NothingToDownload => write!(
                f,
                "No file available to download. Please upload a file first."
            ),
            Notice::Uploaded { name } => write!(f, "File \"{}\" uploaded successfully!", name),
            Notice::Downloaded { name } => write!(f, "Downloaded: {}", name),
        }
    }
}

/// Result of dispatching a card intent.
///
/// At most one store mutation comes out of any single interaction.
pub enum Outcome {
    Mutate {
        command: Box<dyn Command>,
        notice: Option<Notice>,
    },
    /// No state change, but the user gets told something.
    Notify(Notice),
    /// The user dismissed a prompt or picker. Nothing happens.
    Aborted,
}

impl Outcome {
    pub fn mutate(command: impl Command + 'static) -> Self {
        Outcome::Mutate {
            command: Box::new(command),
            notice: None,
        }
    }

    pub fn with_notice(self, notice: Notice) -> Self {
        match self {
            Outcome::Mutate { command, .. } => Outcome::Mutate {
                command,
                notice: Some(notice),
            },
            other => other,
        }
    }

    pub fn notice(&self) -> Option<&Notice> {
        match self {
            Outcome::Mutate { notice, .. } => notice.as_ref(),
            Outcome::Notify(notice) => Some(notice),
            Outcome::Aborted => None,
        }
    }

    pub fn is_mutation(&self) -> bool {
        matches!(self, Outcome::Mutate { .. })
    }
}

impl fmt::Debug for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Mutate { command, notice } => f
                .debug_struct("Mutate")
                .field("command", &command.description())
                .field("notice", notice)
                .finish(),
            Outcome::Notify(notice) => f.debug_tuple("Notify").field(notice).finish(),
            Outcome::Aborted => write!(f, "Aborted"),
        }
    }
}
