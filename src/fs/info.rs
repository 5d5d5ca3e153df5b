//! File Info Module
//!
//! The metadata record cached per path.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Whether a path names an object or a prefix holding objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Directory,
}

// == File Info ==
/// Details of the entry at a path, as returned by `info`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileInfo {
    /// Full path of the entry
    pub name: String,
    /// File or directory
    #[serde(rename = "type")]
    pub kind: EntryKind,
    /// Size in bytes, 0 for directories
    pub size: u64,
    /// Last modification time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mtime: Option<DateTime<Utc>>,
    /// Permission bits
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gid: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<u32>,
}

impl FileInfo {
    /// Creates the record for an object of `size` bytes.
    pub fn file(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::File,
            size,
            mtime: None,
            mode: None,
            gid: None,
            uid: None,
        }
    }

    /// Creates the record for a directory.
    pub fn directory(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::Directory,
            size: 0,
            mtime: None,
            mode: None,
            gid: None,
            uid: None,
        }
    }

    pub fn with_mtime(mut self, mtime: DateTime<Utc>) -> Self {
        self.mtime = Some(mtime);
        self
    }

    pub fn with_mode(mut self, mode: u32) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn with_owner(mut self, uid: u32, gid: u32) -> Self {
        self.uid = Some(uid);
        self.gid = Some(gid);
        self
    }

    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_info_serialize() {
        let info = FileInfo::file("/bucket/data.csv", 42).with_mode(0o100644);
        let json = serde_json::to_value(&info).unwrap();

        assert_eq!(json["name"], "/bucket/data.csv");
        assert_eq!(json["type"], "file");
        assert_eq!(json["size"], 42);
        assert_eq!(json["mode"], 0o100644);
        assert!(json.get("mtime").is_none());
    }

    #[test]
    fn test_directory_info() {
        let info = FileInfo::directory("/bucket/logs");
        assert!(info.is_dir());
        assert!(!info.is_file());
        assert_eq!(info.size, 0);

        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["type"], "directory");
    }

    #[test]
    fn test_file_info_deserialize_defaults() {
        let json = r#"{"name": "/bucket/a", "type": "file", "size": 3}"#;
        let info: FileInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info, FileInfo::file("/bucket/a", 3));
    }
}
