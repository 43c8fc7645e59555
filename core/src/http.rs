//! HTTP requests and responses as plain data.
//!
//! # Design
//! The client builds `HttpRequest` values and parses `HttpResponse` values
//! separately from executing them, so request construction and response
//! interpretation stay deterministic and testable without a network. The
//! `transport` module bridges the two over ureq.
//!
//! All fields use owned types (`String`, `Vec`) so values can be moved
//! between threads without lifetime concerns.

/// HTTP method for a request. The compile API only ever uses GET and POST.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// An HTTP request described as plain data, built by `CompileClient::build_*`.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data, consumed by
/// `CompileClient::parse_*`.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}
