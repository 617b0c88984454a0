//! # llmmar Ollama client
//!
//! Talks to an Ollama-compatible inference server over plain HTTP.
//!
//! ```text
//! ┌──────────────┐  GET /api/tags      ┌─────────────────┐
//! │              │ ------------------> │                 │
//! │ OllamaClient │                     │  Ollama server  │
//! │              │ POST /api/generate  │  {host}:11434   │
//! │              │ ------------------> │                 │
//! └──────────────┘ <--- NDJSON body -- └─────────────────┘
//! ```
//!
//! Two calls are exposed through [`OllamaApi`]:
//!
//! - **probe** - reachability check, collapses every failure into
//!   [`ServerStatus::Offline`]
//! - **generate** - sends a [`GenerateRequest`] and returns the raw response
//!   body, which [`accumulate_response`] folds into the final text
//!
//! ## Usage
//!
//! ```ignore
//! use llmmar_ollama::{accumulate_response, Endpoint, GenerateRequest, OllamaApi, OllamaClient};
//!
//! let client = OllamaClient::new();
//! let endpoint = Endpoint::from_host("192.168.1.20").unwrap();
//! let body = client
//!     .generate(&endpoint, &GenerateRequest::new("qwen3:4b", "hello", false))
//!     .await?;
//! println!("{}", accumulate_response(&body).trim());
//! ```

mod client;
mod config;
mod endpoint;
mod response;

#[cfg(test)]
mod mock;

pub use client::{GenerateRequest, OllamaApi, OllamaClient, OllamaError, ServerStatus};
pub use config::{ClientConfig, ClientConfigBuilder};
pub use endpoint::{Endpoint, OLLAMA_PORT};
pub use response::accumulate_response;
