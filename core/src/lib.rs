//! Client for a remote code compilation service.
//!
//! # Overview
//! Forwards source code to a compile server over HTTP and relays back a
//! structured verdict, plus two best-effort probes (health check,
//! supported-language listing). All compilation happens on the server; this
//! crate only marshals the request, unmarshals the response, and maps every
//! transport or payload failure into the uniform `CompileResponse` shape.
//!
//! # Design
//! - `CompileClient` holds an explicit `ClientConfig` (base URL, timeouts);
//!   there is no process-global state.
//! - Each operation is split into `build_*` (produces an `HttpRequest`) and
//!   `parse_*` (consumes an `HttpResponse`), so the I/O boundary is explicit
//!   and both halves are testable without a network.
//! - The blocking `transport` module executes requests with a fresh
//!   connection per call; `compile` never returns an error or panics, it
//!   folds every failure into a failed `CompileResponse`.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
mod transport;
pub mod types;

pub use client::CompileClient;
pub use config::{ClientConfig, DEFAULT_SERVER_URL};
pub use error::{ClientError, TransportKind};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{CompileRequest, CompileResponse, LanguagesBody};
