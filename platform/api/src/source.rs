use std::{future::Future, time::Duration};

use tracing::{Instrument, debug, info_span, warn};
use url::Url;
use uuid::Uuid;

use crate::error::FetchError;

pub const DEFAULT_EMPLOYEES_URL: &str = "https://mocki.io/v1/1a44a28a-7c86-4738-8a03-1eafeffe38c8";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Anything that can hand over the raw directory body.
pub trait EmployeeSource: Send + Sync {
    fn fetch(&self) -> impl Future<Output = Result<Vec<u8>, FetchError>> + Send;
}

#[derive(Clone, Debug)]
pub struct SourceSettings {
    pub url: Url,
    pub timeout: Duration,
}

impl SourceSettings {
    pub fn new(url: Url) -> Self {
        Self {
            url,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// `reqwest`-backed source issuing a single GET per call.
#[derive(Clone, Debug)]
pub struct HttpEmployeeSource {
    client: reqwest::Client,
    url: Url,
}

impl HttpEmployeeSource {
    pub fn new(settings: &SourceSettings) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self {
            client,
            url: settings.url.clone(),
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    fn transport(&self, source: reqwest::Error) -> FetchError {
        FetchError::Transport {
            url: self.url.to_string(),
            source,
        }
    }
}

impl EmployeeSource for HttpEmployeeSource {
    async fn fetch(&self) -> Result<Vec<u8>, FetchError> {
        let request_id = Uuid::new_v4();
        let span = info_span!("fetch_employees", url = %self.url, %request_id);
        async move {
            let response = self
                .client
                .get(self.url.clone())
                .header(REQUEST_ID_HEADER, request_id.to_string())
                .send()
                .await
                .map_err(|err| self.transport(err))?;

            let status = response.status();
            if !status.is_success() {
                warn!(%status, "employee endpoint returned an error status");
                return Err(FetchError::Status {
                    url: self.url.to_string(),
                    status,
                });
            }

            let body = response.bytes().await.map_err(|err| self.transport(err))?;
            debug!(%status, bytes = body.len(), "employee response received");
            Ok(body.to_vec())
        }
        .instrument(span)
        .await
    }
}
