//! # zabbix-rs
//!
//! A Rust client library for the Zabbix JSON-RPC management API, with
//! session handling, default-parameter merging, and on-disk token
//! caching with transparent re-login.
//!
//! ## Quick Start
//!
//! ```no_run
//! use zabbix_rs::ZabbixApiClient;
//! use serde_json::json;
//!
//! # async fn example() -> zabbix_rs::Result<()> {
//! let mut client = ZabbixApiClient::new("https://zabbix.example.com/api_jsonrpc.php")?;
//!
//! // Log in; the token is cached on disk and reused on the next run.
//! client.login(json!({"user": "Admin", "password": "zabbix"}), "", None).await?;
//!
//! // One wrapper per remote method, all funneling into `call`.
//! let hosts = client.host_get(json!({"output": "extend"})).await?;
//!
//! // Re-key a list result into a map by a chosen field.
//! let by_id = client
//!     .call("host.get", json!({"output": "extend"}), "hostid", true)
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! - **Generic request pipeline**: parameter normalization, JSON-RPC 2.0
//!   envelopes, error decoding, result re-keying
//! - **Session management**: credential login, direct token injection,
//!   token cache keyed by API user and OS user
//! - **Injected transport**: bring your own [`Transport`] or configure
//!   the built-in reqwest one via [`TransportOptions`]
//! - **Full method surface**: wrappers for the host, item, trigger,
//!   template, user and other object families
//!
//! ## Configuration
//!
//! Clients can also be built from a TOML file:
//!
//! ```toml
//! [api]
//! url = "https://zabbix.example.com/api_jsonrpc.php"
//! username = "Admin"
//! password = "zabbix"
//! ```
//!
//! and connected with [`ZabbixApiClient::connect`], which logs in
//! immediately when credentials are present.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod params;
pub mod rpc;
pub mod token_cache;
pub mod transport;

// Re-export commonly used types at the crate root
pub use api::{requires_auth, ANONYMOUS_METHODS};
pub use client::{ZabbixApiClient, ZabbixApiClientBuilder};
pub use config::{ApiConfig, Config};
pub use error::{Error, Result};
pub use params::Params;
pub use rpc::{JsonRpcError, JsonRpcRequest};
pub use token_cache::TokenCache;
pub use transport::{HttpResponse, HttpTransport, Transport, TransportOptions};
