//! Binding of unwrapped response payloads into checked typed values.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use super::checkable::Checkable;
use crate::error::{LigaError, Result};


/// Bind a response payload into `T` and apply its checks, emptiness
/// first.
///
/// A `null` payload is empty by definition and is rejected before any
/// binding is attempted. The service sometimes wraps a singular result
/// in a one-element list; when the direct bind fails on such a list,
/// its sole element is bound instead. A payload serde cannot shape
/// into `T` either way is reported as invalid; the raw payload rides
/// along in the error for diagnostics.
pub fn bind_checked<T>(payload: Value) -> Result<T>
where
    T: DeserializeOwned + Checkable,
{
    if payload.is_null() {
        return Err(LigaError::EmptyEntity { value: payload });
    }

    let bound: T = match bind(&payload) {
        Ok(bound) => bound,
        Err(err) => {
            debug!("payload does not bind: {err}");
            return Err(LigaError::InvalidEntity { value: payload });
        }
    };

    if bound.is_empty() {
        return Err(LigaError::EmptyEntity { value: payload });
    }
    if !bound.is_valid() {
        return Err(LigaError::InvalidEntity { value: payload });
    }

    Ok(bound)
}

fn bind<T>(payload: &Value) -> serde_json::Result<T>
where
    T: DeserializeOwned,
{
    serde_json::from_value(payload.clone()).or_else(|err| match payload.as_array() {
        Some(items) if items.len() == 1 => serde_json::from_value(items[0].clone()),
        _ => Err(err),
    })
}
