//! HTTP request builder, response parser, and executing client for the
//! compile service.
//!
//! # Design
//! `CompileClient` holds only its configuration and carries no mutable state
//! between calls. Each operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`, keeping construction and interpretation deterministic and
//! testable without a network. The executing operations (`compile`,
//! `test_connection`, `supported_languages`) compose build, transport, and
//! parse, and never let a failure escape: `compile` maps every error to a
//! failed `CompileResponse`, and the auxiliary probes collapse all failures
//! to `false` / an empty list.

use crate::config::{normalize_base_url, ClientConfig};
use crate::error::ClientError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::transport;
use crate::types::{CompileRequest, CompileResponse, LanguagesBody};

/// Guidance appended to every transport-failure result.
const SERVER_GUIDANCE: &str =
    "Check that the compile server is running and reachable at the configured URL.";

/// Longest slice of a raw response body echoed back in `errors`.
const MAX_REPORTED_BODY: usize = 2048;

/// Client for the remote compile service.
///
/// Each call is a single-shot request/response cycle; no state is shared
/// across calls beyond the configured URL and timeouts.
#[derive(Debug, Clone)]
pub struct CompileClient {
    config: ClientConfig,
}

impl CompileClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            config: ClientConfig::new(base_url),
        }
    }

    pub fn with_config(config: ClientConfig) -> Self {
        Self { config }
    }

    /// Retarget all three operations starting with the next invocation.
    /// Calls already in flight are unaffected.
    pub fn set_server_url(&mut self, url: &str) {
        self.config.base_url = normalize_base_url(url);
    }

    fn endpoint(&self, suffix: &str) -> String {
        format!("{}{}", self.config.base_url, suffix)
    }

    pub fn build_compile(&self, input: &CompileRequest) -> Result<HttpRequest, ClientError> {
        let body =
            serde_json::to_string(input).map_err(|e| ClientError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: self.endpoint("/compile"),
            headers: vec![
                ("content-type".to_string(), "application/json".to_string()),
                // One connection per compile; the server may be restarted
                // between calls.
                ("connection".to_string(), "close".to_string()),
            ],
            body: Some(body),
        })
    }

    pub fn build_health(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.endpoint("/health"),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_languages(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.endpoint("/languages"),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_compile(&self, response: HttpResponse) -> Result<CompileResponse, ClientError> {
        if !is_success(response.status) {
            return Err(ClientError::Http {
                status: response.status,
                body: response.body,
            });
        }
        if response.body.is_empty() {
            return Err(ClientError::EmptyBody);
        }
        serde_json::from_str(&response.body).map_err(|e| ClientError::Deserialization {
            message: e.to_string(),
            body: response.body,
        })
    }

    pub fn parse_health(&self, response: &HttpResponse) -> bool {
        is_success(response.status)
    }

    pub fn parse_languages(&self, response: &HttpResponse) -> Vec<String> {
        if !is_success(response.status) {
            return Vec::new();
        }
        match serde_json::from_str::<LanguagesBody>(&response.body) {
            Ok(body) => body.languages,
            Err(_) => Vec::new(),
        }
    }

    /// Send `input` to the compile endpoint and return the server's verdict.
    ///
    /// Every exit path yields a well-formed `CompileResponse`; transport,
    /// HTTP, and payload failures are folded into a failed result rather
    /// than returned as errors.
    pub fn compile(&self, input: &CompileRequest) -> CompileResponse {
        let request = match self.build_compile(input) {
            Ok(request) => request,
            Err(err) => return failure_response(&err),
        };
        let result = transport::execute(&request, &self.config)
            .and_then(|response| self.parse_compile(response));
        match result {
            Ok(response) => response,
            Err(err) => {
                log::warn!("compile request failed: {err}");
                failure_response(&err)
            }
        }
    }

    /// Probe the health endpoint. True iff the server answered 2xx; any
    /// failure, including timeout, is false. No retries.
    pub fn test_connection(&self) -> bool {
        let request = self.build_health();
        match transport::execute(&request, &self.config) {
            Ok(response) => self.parse_health(&response),
            Err(err) => {
                log::debug!("health probe failed: {err}");
                false
            }
        }
    }

    /// Fetch the server's language list. Empty on any failure; callers
    /// cannot distinguish cause, this is a best-effort probe.
    pub fn supported_languages(&self) -> Vec<String> {
        let request = self.build_languages();
        match transport::execute(&request, &self.config) {
            Ok(response) => self.parse_languages(&response),
            Err(err) => {
                log::debug!("languages probe failed: {err}");
                Vec::new()
            }
        }
    }
}

impl Default for CompileClient {
    fn default() -> Self {
        Self::with_config(ClientConfig::default())
    }
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Fold a `ClientError` into the uniform failed `CompileResponse` shape.
fn failure_response(err: &ClientError) -> CompileResponse {
    match err {
        ClientError::Transport { kind, message } => CompileResponse {
            success: false,
            output: format!("{kind}. {SERVER_GUIDANCE}"),
            errors: vec![message.clone()],
        },
        ClientError::Http { status, body } => CompileResponse {
            success: false,
            output: format!("HTTP Error: {status}"),
            errors: vec![if body.is_empty() {
                format!("server returned status {status} with no body")
            } else {
                format!("server returned status {status}: {}", cap_body(body))
            }],
        },
        ClientError::EmptyBody => CompileResponse {
            success: false,
            output: "empty response".to_string(),
            errors: vec!["no response body".to_string()],
        },
        ClientError::Deserialization { message, body } => CompileResponse {
            success: false,
            output: format!("failed to parse server response: {message}"),
            errors: vec![cap_body(body)],
        },
        ClientError::Serialization(msg) => CompileResponse {
            success: false,
            output: format!("failed to encode compile request: {msg}"),
            errors: vec![format!("internal error: {msg}")],
        },
    }
}

/// Truncate an offending body before echoing it back in `errors`.
fn cap_body(body: &str) -> String {
    if body.len() <= MAX_REPORTED_BODY {
        return body.to_string();
    }
    let mut end = MAX_REPORTED_BODY;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{} [truncated]", &body[..end])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransportKind;

    fn client() -> CompileClient {
        CompileClient::new("http://localhost:5000")
    }

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn build_compile_produces_correct_request() {
        let input = CompileRequest::new("fun main() {}");
        let req = client().build_compile(&input).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:5000/compile");
        assert!(req
            .headers
            .contains(&("content-type".to_string(), "application/json".to_string())));
        assert!(req
            .headers
            .contains(&("connection".to_string(), "close".to_string())));
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["code"], "fun main() {}");
        assert_eq!(body["language"], "kotlin");
        assert_eq!(body["fileName"], "Main.kt");
    }

    #[test]
    fn build_health_produces_correct_request() {
        let req = client().build_health();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:5000/health");
        assert!(req.body.is_none());
    }

    #[test]
    fn build_languages_produces_correct_request() {
        let req = client().build_languages();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:5000/languages");
        assert!(req.body.is_none());
    }

    #[test]
    fn compile_endpoint_url_accepted_as_base() {
        let client = CompileClient::new("http://localhost:5000/compile");
        let req = client.build_health();
        assert_eq!(req.path, "http://localhost:5000/health");
    }

    #[test]
    fn set_server_url_retargets_all_endpoints() {
        let mut client = client();
        client.set_server_url("http://10.0.0.7:9000/compile");
        let input = CompileRequest::new("x");
        assert_eq!(
            client.build_compile(&input).unwrap().path,
            "http://10.0.0.7:9000/compile"
        );
        assert_eq!(client.build_health().path, "http://10.0.0.7:9000/health");
        assert_eq!(client.build_languages().path, "http://10.0.0.7:9000/languages");
    }

    #[test]
    fn parse_compile_success() {
        let resp = response(200, r#"{"success":true,"output":"ok","errors":[]}"#);
        let result = client().parse_compile(resp).unwrap();
        assert!(result.success);
        assert_eq!(result.output, "ok");
        assert!(result.errors.is_empty());
    }

    #[test]
    fn parse_compile_server_side_failure_is_still_ok() {
        let resp = response(
            200,
            r#"{"success":false,"output":"","errors":["Unsupported language: brainfuck"]}"#,
        );
        let result = client().parse_compile(resp).unwrap();
        assert!(!result.success);
        assert_eq!(result.errors.len(), 1);
    }

    #[test]
    fn parse_compile_non_2xx_is_http_error() {
        let err = client().parse_compile(response(500, "boom")).unwrap_err();
        assert!(matches!(err, ClientError::Http { status: 500, .. }));
    }

    #[test]
    fn parse_compile_empty_body() {
        let err = client().parse_compile(response(200, "")).unwrap_err();
        assert!(matches!(err, ClientError::EmptyBody));
    }

    #[test]
    fn parse_compile_bad_json_carries_raw_body() {
        let err = client().parse_compile(response(200, "not json")).unwrap_err();
        match err {
            ClientError::Deserialization { body, .. } => assert_eq!(body, "not json"),
            other => panic!("expected Deserialization, got {other:?}"),
        }
    }

    #[test]
    fn parse_health_checks_status_range() {
        let c = client();
        assert!(c.parse_health(&response(200, "OK")));
        assert!(c.parse_health(&response(204, "")));
        assert!(!c.parse_health(&response(500, "")));
        assert!(!c.parse_health(&response(301, "")));
    }

    #[test]
    fn parse_languages_extracts_list() {
        let resp = response(200, r#"{"languages":["python","go"],"count":2}"#);
        assert_eq!(client().parse_languages(&resp), vec!["python", "go"]);
    }

    #[test]
    fn parse_languages_missing_field_is_empty() {
        let resp = response(200, r#"{"count":2}"#);
        assert!(client().parse_languages(&resp).is_empty());
    }

    #[test]
    fn parse_languages_non_2xx_is_empty() {
        let resp = response(503, r#"{"languages":["python"]}"#);
        assert!(client().parse_languages(&resp).is_empty());
    }

    #[test]
    fn parse_languages_bad_json_is_empty() {
        let resp = response(200, "not json");
        assert!(client().parse_languages(&resp).is_empty());
    }

    #[test]
    fn failure_response_for_http_error_names_status() {
        let resp = failure_response(&ClientError::Http {
            status: 500,
            body: "boom".to_string(),
        });
        assert!(!resp.success);
        assert_eq!(resp.output, "HTTP Error: 500");
        assert!(resp.errors[0].contains("boom"));
    }

    #[test]
    fn failure_response_for_empty_body_uses_fixed_markers() {
        let resp = failure_response(&ClientError::EmptyBody);
        assert!(!resp.success);
        assert_eq!(resp.output, "empty response");
        assert_eq!(resp.errors, vec!["no response body".to_string()]);
    }

    #[test]
    fn failure_response_for_transport_includes_guidance() {
        let resp = failure_response(&ClientError::Transport {
            kind: TransportKind::Refused,
            message: "tcp connect".to_string(),
        });
        assert!(!resp.success);
        assert!(resp.output.contains("connection refused"));
        assert!(resp.output.contains(SERVER_GUIDANCE));
    }

    #[test]
    fn failure_response_for_bad_json_echoes_body() {
        let resp = failure_response(&ClientError::Deserialization {
            message: "expected value".to_string(),
            body: "not json".to_string(),
        });
        assert!(!resp.success);
        assert_eq!(resp.errors, vec!["not json".to_string()]);
    }

    #[test]
    fn cap_body_truncates_long_bodies() {
        let long = "x".repeat(MAX_REPORTED_BODY + 100);
        let capped = cap_body(&long);
        assert!(capped.ends_with("[truncated]"));
        assert!(capped.len() < long.len());
        assert_eq!(cap_body("short"), "short");
    }

    #[test]
    fn cap_body_respects_char_boundaries() {
        let long = "é".repeat(MAX_REPORTED_BODY);
        let capped = cap_body(&long);
        assert!(capped.ends_with("[truncated]"));
    }
}
