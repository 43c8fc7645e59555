//! Mock compile server with the same HTTP surface as the real service.
//!
//! Compilation is simulated deterministically: the language is validated
//! against a fixed set, blank code and a `syntax error` marker fail, and
//! everything else succeeds with a transcript-shaped output. Good enough to
//! exercise every client path without a toolchain installed.

use axum::{
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

/// Languages the simulated service accepts.
pub const LANGUAGES: [&str; 7] = ["python", "java", "kotlin", "c", "cpp", "javascript", "go"];

#[derive(Debug, Deserialize)]
pub struct CompileRequest {
    pub code: String,
    pub language: String,
    #[serde(rename = "fileName", default)]
    pub file_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompileResponse {
    pub success: bool,
    pub output: String,
    pub errors: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LanguagesBody {
    pub languages: Vec<String>,
    pub count: usize,
}

pub fn app() -> Router {
    Router::new()
        .route("/compile", post(compile))
        .route("/health", get(health))
        .route("/languages", get(languages))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn health() -> &'static str {
    "OK"
}

async fn languages() -> Json<LanguagesBody> {
    let languages: Vec<String> = LANGUAGES.iter().map(|l| l.to_string()).collect();
    let count = languages.len();
    Json(LanguagesBody { languages, count })
}

async fn compile(Json(input): Json<CompileRequest>) -> Json<CompileResponse> {
    Json(simulate(&input))
}

fn default_file_name(language: &str) -> &'static str {
    match language {
        "python" => "main.py",
        "java" => "Main.java",
        "kotlin" => "Main.kt",
        "c" => "main.c",
        "cpp" => "main.cpp",
        "javascript" => "main.js",
        _ => "main.go",
    }
}

fn simulate(input: &CompileRequest) -> CompileResponse {
    let language = input.language.to_lowercase();
    if !LANGUAGES.contains(&language.as_str()) {
        return CompileResponse {
            success: false,
            output: String::new(),
            errors: vec![format!("Unsupported language: {}", input.language)],
        };
    }
    if input.code.trim().is_empty() {
        return CompileResponse {
            success: false,
            output: String::new(),
            errors: vec!["Empty request body".to_string()],
        };
    }

    let file_name = input
        .file_name
        .clone()
        .unwrap_or_else(|| default_file_name(&language).to_string());

    if input.code.contains("syntax error") {
        return CompileResponse {
            success: false,
            output: format!("{file_name}: error: syntax error"),
            errors: vec!["Compilation failed with exit code: 1".to_string()],
        };
    }

    CompileResponse {
        success: true,
        output: format!(
            "Compilation successful\n--- Execution Output ---\n{file_name} ran as {language}"
        ),
        errors: Vec::new(),
    }
}
