use serde::{Deserialize, Serialize};

/// What clicking a tag strip does. Display text is derived from this, never
/// the other way around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TagAction {
    #[serde(rename = "Upload")]
    Upload,
    #[serde(rename = "Download Now")]
    DownloadNow,
}

impl TagAction {
    pub fn title(self) -> &'static str {
        match self {
            TagAction::Upload => "Upload",
            TagAction::DownloadNow => "Download Now",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emphasis {
    Blue,
    Green,
}

/// Call-to-action strip at the bottom of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub visible: bool,
    #[serde(rename = "title")]
    pub action: TagAction,
    #[serde(default)]
    pub emphasis: Option<Emphasis>,
}

impl Tag {
    pub fn upload() -> Self {
        Self {
            visible: true,
            action: TagAction::Upload,
            emphasis: Some(Emphasis::Green),
        }
    }

    /// The strip every card carries once a file is attached.
    pub fn download_now() -> Self {
        Self {
            visible: true,
            action: TagAction::DownloadNow,
            emphasis: Some(Emphasis::Blue),
        }
    }

    pub fn hidden() -> Self {
        Self {
            visible: false,
            action: TagAction::DownloadNow,
            emphasis: None,
        }
    }

    pub fn title(&self) -> &'static str {
        self.action.title()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_titles() {
        assert_eq!(Tag::upload().title(), "Upload");
        assert_eq!(Tag::download_now().title(), "Download Now");
    }

    #[test]
    fn test_serialized_title_is_display_text() {
        let json = serde_json::to_value(Tag::download_now()).unwrap();
        assert_eq!(json["title"], "Download Now");
        assert_eq!(json["emphasis"], "blue");
        assert_eq!(json["visible"], true);
    }

    #[test]
    fn test_unknown_title_is_rejected() {
        let json = r#"{"visible": true, "title": "Maybe Later", "emphasis": "green"}"#;
        assert!(serde_json::from_str::<Tag>(json).is_err());
    }

    #[test]
    fn test_missing_emphasis_defaults_to_none() {
        let json = r#"{"visible": false, "title": "Download Now"}"#;
        let tag: Tag = serde_json::from_str(json).unwrap();
        assert_eq!(tag, Tag::hidden());
    }
}
