//! Blocking HTTP executor for `HttpRequest` values.
//!
//! # Design
//! A fresh ureq agent is created per call, so each call gets its own
//! connection with no pooling and the connection is released on every exit
//! path. Status-code-as-error behavior is disabled so 4xx/5xx responses come
//! back as data and the client decides how to interpret them.

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

pub(crate) fn execute(
    request: &HttpRequest,
    config: &ClientConfig,
) -> Result<HttpResponse, ClientError> {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .timeout_connect(Some(config.connect_timeout))
        .timeout_global(Some(config.request_timeout))
        .build()
        .new_agent();

    log::debug!(
        "{:?} {} ({} byte body)",
        request.method,
        request.path,
        request.body.as_deref().map_or(0, str::len)
    );

    let result = match (&request.method, &request.body) {
        (HttpMethod::Get, _) => {
            let mut builder = agent.get(&request.path);
            for (name, value) in &request.headers {
                builder = builder.header(name.as_str(), value.as_str());
            }
            builder.call()
        }
        (HttpMethod::Post, Some(body)) => {
            let mut builder = agent.post(&request.path);
            for (name, value) in &request.headers {
                builder = builder.header(name.as_str(), value.as_str());
            }
            builder.send(body.as_bytes())
        }
        (HttpMethod::Post, None) => {
            let mut builder = agent.post(&request.path);
            for (name, value) in &request.headers {
                builder = builder.header(name.as_str(), value.as_str());
            }
            builder.send_empty()
        }
    };

    let mut response = result.map_err(ClientError::from_transport)?;
    let status = response.status().as_u16();
    let body = response
        .body_mut()
        .read_to_string()
        .map_err(ClientError::from_transport)?;

    log::debug!("{} {} ({} byte body)", status, request.path, body.len());

    Ok(HttpResponse {
        status,
        headers: Vec::new(),
        body,
    })
}
