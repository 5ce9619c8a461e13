use entity::EmployeeCollectionResponse;
use tracing::warn;

use crate::error::DecodeError;

/// Parse a response body. Missing fields decode to defaults; anything that is
/// not a JSON object of the expected shape is an error.
pub fn decode(bytes: &[u8]) -> Result<EmployeeCollectionResponse, DecodeError> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Lenient variant: logs the parse error and yields `None`.
pub fn decode_or_log(bytes: &[u8]) -> Option<EmployeeCollectionResponse> {
    match decode(bytes) {
        Ok(response) => Some(response),
        Err(err) => {
            warn!(error = %err, bytes = bytes.len(), "failed to parse employee response");
            None
        }
    }
}
