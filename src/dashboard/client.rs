use crate::errors::ErrorBody;
use crate::models::{AnalyticsItem, DateRange, Expense, MessageResponse};
use chrono::NaiveDate;
use reqwest::{Client, Response, StatusCode};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug)]
pub enum ClientError {
    /// The API could not be reached.
    Transport(reqwest::Error),
    /// The API answered with a success status but a body that is not the
    /// expected JSON.
    Decode(reqwest::Error),
    /// The API answered with a non-success status.
    Status { status: StatusCode, detail: String },
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(err) => write!(f, "request to expense API failed: {err}"),
            Self::Decode(err) => write!(f, "unexpected response from expense API: {err}"),
            Self::Status { status, detail } => write!(f, "expense API returned {status}: {detail}"),
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Transport(err) | Self::Decode(err) => Some(err),
            Self::Status { .. } => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err)
    }
}

/// Thin HTTP client for the expense API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn fetch_expenses(&self, date: NaiveDate) -> Result<Vec<Expense>, ClientError> {
        let response = self
            .http
            .get(format!("{}/expenses/{date}", self.base_url))
            .send()
            .await?;
        check(response)
            .await?
            .json()
            .await
            .map_err(ClientError::Decode)
    }

    pub async fn replace_expenses(
        &self,
        date: NaiveDate,
        expenses: &[Expense],
    ) -> Result<MessageResponse, ClientError> {
        let response = self
            .http
            .post(format!("{}/expenses/{date}", self.base_url))
            .json(expenses)
            .send()
            .await?;
        check(response)
            .await?
            .json()
            .await
            .map_err(ClientError::Decode)
    }

    pub async fn fetch_analytics(
        &self,
        range: DateRange,
    ) -> Result<BTreeMap<String, AnalyticsItem>, ClientError> {
        let response = self
            .http
            .post(format!("{}/analytics/", self.base_url))
            .json(&range)
            .send()
            .await?;
        check(response)
            .await?
            .json()
            .await
            .map_err(ClientError::Decode)
    }
}

async fn check(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let detail = match response.json::<ErrorBody>().await {
        Ok(body) => body.detail,
        Err(_) => status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string(),
    };
    Err(ClientError::Status { status, detail })
}
