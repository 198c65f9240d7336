//! Serialization outcome logging.

use tracing::debug;

use crate::{Endpoint, QueryParams, Result};

/// Log the outcome of serializing an `E` request and pass it through.
///
/// Parameter values are never logged; they carry the API key.
pub(crate) fn traced<E: Endpoint>(result: Result<QueryParams>) -> Result<QueryParams> {
    match &result {
        Ok(params) => debug!(
            endpoint = %E::PATH,
            params = params.len(),
            names = ?params.names(),
            "request serialized"
        ),
        Err(error) => debug!(endpoint = %E::PATH, %error, "request rejected"),
    }
    result
}
