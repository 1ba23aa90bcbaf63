//! Command implementations behind the CLI subcommands.

pub mod goals;
pub mod groups;
pub mod last_match;
pub mod leagues;
pub mod matches;
pub mod sports;
pub mod teams;

use std::fmt::Display;

use crate::{
    client::Client,
    transport::{TransportConfig, DEFAULT_ENDPOINT},
    Result, ENDPOINT_ENV_VAR,
};


/// Build the client the command handlers talk through.
///
/// The endpoint comes from the `--endpoint` flag when given, then from
/// the `OPENLIGADB_ENDPOINT` environment variable, then from the
/// built-in default.
pub fn build_client(endpoint: Option<String>) -> Result<Client> {
    let config = TransportConfig {
        endpoint: resolve_endpoint(endpoint),
        ..TransportConfig::default()
    };
    Client::with_config(config)
}

/// Resolve the endpoint from flag, environment variable, or default
fn resolve_endpoint(endpoint: Option<String>) -> String {
    endpoint
        .or_else(|| std::env::var(ENDPOINT_ENV_VAR).ok())
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string())
}

/// Render an optional field for line output, `-` when absent
pub(crate) fn display_or_dash<T: Display>(value: Option<T>) -> String {
    value
        .map(|value| value.to_string())
        .unwrap_or_else(|| "-".to_string())
}
