//! Error types for the OpenLigaDB client

use serde_json::Value;
use thiserror::Error;

use crate::transport::{Envelope, TransportError};


pub type Result<T> = std::result::Result<T, LigaError>;

/// Failure modes of a single remote call.
///
/// A call either fully succeeds with a valid typed result or fails with
/// exactly one of these kinds. Nothing is retried or recovered internally;
/// callers branch on the kind to tell "no data for this query"
/// ([`LigaError::EmptyEntity`]) apart from "the service answered but the
/// payload cannot be trusted" ([`LigaError::InvalidResponse`],
/// [`LigaError::InvalidEntity`]) and "the service could not be reached"
/// ([`LigaError::Transport`]).
#[derive(Error, Debug)]
pub enum LigaError {
    /// The transport collaborator itself failed (connectivity, protocol
    /// fault, malformed wire data). Propagated unchanged.
    #[error("transport call failed: {0}")]
    Transport(#[from] TransportError),

    /// The response envelope carries no `<operation>Result` field.
    #[error("field `{field}` does not exist in response envelope")]
    InvalidResponse {
        /// The result field the dispatcher expected to find.
        field: String,
        /// The raw envelope, kept for diagnostics.
        envelope: Envelope,
    },

    /// The unwrapped result value holds no data.
    #[error("mapped entity is empty")]
    EmptyEntity {
        /// The raw result value as received.
        value: Value,
    },

    /// The unwrapped result value holds data of the wrong shape.
    #[error("mapped entity is invalid")]
    InvalidEntity {
        /// The raw result value as received.
        value: Value,
    },

    /// JSON serialization failed while rendering output. Never produced by
    /// the dispatch path itself.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}
