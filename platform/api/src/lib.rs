//! Remote side of the employee directory: one GET, one JSON shape.
//!
//! [`EmployeeSource`] fetches raw bytes, [`decode`] turns them into an
//! [`EmployeeCollectionResponse`], and [`load_employees`] chains the two.

mod decode;
mod error;
mod source;

pub use decode::{decode, decode_or_log};
pub use entity::{EmployeeCollectionResponse, EmployeeRecord};
pub use error::{ApiError, ApiResult, DecodeError, FetchError};
pub use reqwest::StatusCode;
pub use source::{
    DEFAULT_EMPLOYEES_URL, DEFAULT_TIMEOUT, EmployeeSource, HttpEmployeeSource, REQUEST_ID_HEADER,
    SourceSettings,
};

/// Fetch the directory and decode it.
pub async fn load_employees<S>(source: &S) -> ApiResult<EmployeeCollectionResponse>
where
    S: EmployeeSource,
{
    let body = source.fetch().await?;
    let response = decode(&body)?;
    tracing::debug!(count = response.len(), message = %response.message, "employees decoded");
    Ok(response)
}
