//! Client for the third-party provider of upcoming book titles.

use async_trait::async_trait;

use bookshelf_kernel::settings::ThirdPartySettings;

use super::error::GatewayError;

/// Source of upcoming book titles
#[async_trait]
pub trait UpcomingBooks: Send + Sync {
    async fn fetch_upcoming(&self) -> Result<Vec<String>, GatewayError>;
}

/// `UpcomingBooks` backed by a single HTTP GET per call
pub struct HttpUpcomingBooks {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpUpcomingBooks {
    pub fn new(settings: &ThirdPartySettings) -> Self {
        Self::with_client(reqwest::Client::new(), settings)
    }

    pub fn with_client(client: reqwest::Client, settings: &ThirdPartySettings) -> Self {
        let endpoint = format!(
            "{}{}",
            settings.url.trim_end_matches('/'),
            settings.upcoming_path
        );
        Self { client, endpoint }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl UpcomingBooks for HttpUpcomingBooks {
    async fn fetch_upcoming(&self) -> Result<Vec<String>, GatewayError> {
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| GatewayError {
                status: None,
                cause: format!("request to {} failed: {}", self.endpoint, e),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError {
                status: Some(status.as_u16()),
                cause: format!("{} responded with {}", self.endpoint, status),
            });
        }

        response
            .json::<Vec<String>>()
            .await
            .map_err(|e| GatewayError {
                status: Some(status.as_u16()),
                cause: format!("unexpected body from {}: {}", self.endpoint, e),
            })
    }
}

/// Fixed list of titles, for wiring without a provider
#[derive(Debug, Clone, Default)]
pub struct StaticUpcomingBooks {
    titles: Vec<String>,
}

impl StaticUpcomingBooks {
    pub fn new<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            titles: titles.into_iter().map(Into::into).collect(),
        }
    }
}

#[async_trait]
impl UpcomingBooks for StaticUpcomingBooks {
    async fn fetch_upcoming(&self) -> Result<Vec<String>, GatewayError> {
        Ok(self.titles.clone())
    }
}
