use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Body of `POST /api/manim`.
///
/// `prompt` is optional at the wire level so that an absent field gets the
/// same 400 as an empty one, rather than a deserialization rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateRequest {
    pub prompt: Option<String>,
}

/// Successful generation response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub text: String,
    pub video_url: Option<String>,
    pub code: String,
    pub script: String,
}

/// Wire format shared by every failure response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// Response of the `GET /debug/files` diagnostic route.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MediaTreeResponse {
    pub cwd: String,
    pub layout_version: String,
    pub videos_directory_exists: bool,
    pub video_subdirectories: Vec<String>,
    pub deeper_structure: BTreeMap<String, Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_omits_absent_fields() {
        let body = ErrorResponse {
            error: "Missing prompt in request body".to_string(),
            details: None,
            code: None,
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "error": "Missing prompt in request body" })
        );
    }

    #[test]
    fn test_generate_response_uses_camel_case() {
        let body = GenerateResponse {
            text: "Here's the result.".to_string(),
            video_url: Some("/videos/x.mp4".to_string()),
            code: "pass".to_string(),
            script: "/generated_scripts/x.py".to_string(),
        };
        let value = serde_json::to_value(&body).unwrap();
        assert!(value.get("videoUrl").is_some());
        assert!(value.get("video_url").is_none());
    }
}
