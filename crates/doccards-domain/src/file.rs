use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

const BYTES_PER_MEGABYTE: f64 = 1024.0 * 1024.0;

/// Session-only handle to the bytes of an uploaded file.
///
/// Cloning is cheap. The handle is never serialized: a record read back from
/// JSON keeps its file metadata but carries an empty handle.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct FileHandle(Arc<[u8]>);

impl FileHandle {
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self(Arc::from(bytes.into()))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for FileHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FileHandle({} bytes)", self.0.len())
    }
}

/// A selected file: what the picker resolves with and what a card holds once
/// the file is attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileMeta {
    #[serde(skip)]
    pub handle: FileHandle,
    pub name: String,
    pub byte_size: u64,
    /// Empty when the host could not determine a type.
    #[serde(default)]
    pub mime_type: String,
    pub last_modified_at: DateTime<Utc>,
}

pub type AttachedFile = FileMeta;

impl FileMeta {
    pub fn new(
        handle: FileHandle,
        name: impl Into<String>,
        mime_type: impl Into<String>,
        last_modified_at: DateTime<Utc>,
    ) -> Self {
        Self {
            byte_size: handle.len() as u64,
            handle,
            name: name.into(),
            mime_type: mime_type.into(),
            last_modified_at,
        }
    }

    pub fn size_label(&self) -> String {
        format_size_label(self.byte_size)
    }

    pub fn display_mime_type(&self) -> &str {
        if self.mime_type.is_empty() {
            "Unknown"
        } else {
            &self.mime_type
        }
    }
}

/// Size in megabytes, two decimals, `MB` suffix: `2424832` -> `"2.31MB"`.
pub fn format_size_label(bytes: u64) -> String {
    format!("{:.2}MB", bytes as f64 / BYTES_PER_MEGABYTE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size_label() {
        assert_eq!(format_size_label(0), "0.00MB");
        assert_eq!(format_size_label(1024 * 1024), "1.00MB");
        assert_eq!(format_size_label(2_424_832), "2.31MB");
        assert_eq!(format_size_label(943_718), "0.90MB");
    }

    #[test]
    fn test_meta_takes_size_from_handle() {
        let meta = FileMeta::new(
            FileHandle::from_bytes(vec![0u8; 2048]),
            "notes.txt",
            "text/plain",
            Utc::now(),
        );
        assert_eq!(meta.byte_size, 2048);
        assert_eq!(meta.size_label(), "0.00MB");
    }

    #[test]
    fn test_display_mime_type_falls_back() {
        let meta = FileMeta::new(FileHandle::default(), "blob", "", Utc::now());
        assert_eq!(meta.display_mime_type(), "Unknown");
    }

    #[test]
    fn test_handle_is_not_serialized() {
        let meta = FileMeta::new(
            FileHandle::from_bytes(b"secret".to_vec()),
            "a.txt",
            "text/plain",
            Utc::now(),
        );
        let json = serde_json::to_string(&meta).unwrap();
        assert!(!json.contains("handle"));

        let restored: FileMeta = serde_json::from_str(&json).unwrap();
        assert!(restored.handle.is_empty());
        assert_eq!(restored.byte_size, 6);
        assert_eq!(restored.name, "a.txt");
    }

    #[test]
    fn test_handle_debug_hides_bytes() {
        let handle = FileHandle::from_bytes(vec![1, 2, 3]);
        assert_eq!(format!("{:?}", handle), "FileHandle(3 bytes)");
    }
}
