//! Request DTOs for the metadata service API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

/// Maximum object size accepted by the in-memory backend
pub const MAX_OBJECT_SIZE: u64 = 1 << 40;

/// Request body for storing an object (PUT /objects/*path)
///
/// # Fields
/// - `size`: Object size in bytes
/// - `mode`: Optional permission bits
#[derive(Debug, Clone, Deserialize)]
pub struct PutObjectRequest {
    /// Object size in bytes
    pub size: u64,
    /// Optional permission bits
    #[serde(default)]
    pub mode: Option<u32>,
}

impl PutObjectRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.size > MAX_OBJECT_SIZE {
            return Some(format!(
                "Object size exceeds maximum of {} bytes",
                MAX_OBJECT_SIZE
            ));
        }
        if matches!(self.mode, Some(mode) if mode > 0o177777) {
            return Some("Mode must fit in 16 bits".to_string());
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_object_request_deserialize() {
        let json = r#"{"size": 12}"#;
        let req: PutObjectRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.size, 12);
        assert!(req.mode.is_none());
    }

    #[test]
    fn test_put_object_request_with_mode() {
        let json = r#"{"size": 12, "mode": 420}"#;
        let req: PutObjectRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.mode, Some(0o644));
        assert!(req.validate().is_none());
    }

    #[test]
    fn test_validate_oversized_object() {
        let req = PutObjectRequest {
            size: MAX_OBJECT_SIZE + 1,
            mode: None,
        };
        assert!(req.validate().is_some());
    }

    #[test]
    fn test_validate_bad_mode() {
        let req = PutObjectRequest {
            size: 1,
            mode: Some(0o1_000_000),
        };
        assert!(req.validate().is_some());
    }
}
