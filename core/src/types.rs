//! Wire DTOs for the compile service API.
//!
//! # Design
//! These types mirror the server's JSON schema but are defined independently
//! from the mock-server crate; integration tests catch any schema drift
//! between the two. The server uses camelCase for `fileName`, so that field
//! carries a serde rename.

use serde::{Deserialize, Serialize};

/// Language tag used when the caller does not specify one.
pub const DEFAULT_LANGUAGE: &str = "kotlin";

/// File name used when the caller does not specify one.
pub const DEFAULT_FILE_NAME: &str = "Main.kt";

/// Request payload for a compile call.
///
/// Constructed fresh per call and never retained by the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompileRequest {
    pub code: String,
    pub language: String,
    #[serde(rename = "fileName")]
    pub file_name: String,
}

impl CompileRequest {
    /// Build a request for `code` with the default language and file name.
    pub fn new(code: &str) -> Self {
        Self {
            code: code.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            file_name: DEFAULT_FILE_NAME.to_string(),
        }
    }

    pub fn with_language(mut self, language: &str) -> Self {
        self.language = language.to_string();
        self
    }

    pub fn with_file_name(mut self, file_name: &str) -> Self {
        self.file_name = file_name.to_string();
        self
    }
}

/// The uniform result shape for every compile attempt, successful or not.
///
/// `output` and `errors` default to empty so a terse server reply still
/// parses; `success` is required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompileResponse {
    pub success: bool,
    #[serde(default)]
    pub output: String,
    #[serde(default)]
    pub errors: Vec<String>,
}

/// Payload of the `/languages` endpoint. The server also sends a `count`
/// field; unknown extra fields are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguagesBody {
    pub languages: Vec<String>,
    #[serde(default)]
    pub count: usize,
}
