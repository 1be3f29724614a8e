use crate::core::{ImportedUser, UserSource};
use crate::utils::error::{ContactsError, ErrorCategory, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

pub const DEFAULT_USERS_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/users";

/// Fetches the initial user list with a single GET. No retries.
#[derive(Debug, Clone)]
pub struct HttpUserSource {
    endpoint: String,
    client: Client,
}

impl HttpUserSource {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            endpoint: endpoint.into(),
            client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn try_fetch(&self) -> Result<Vec<ImportedUser>> {
        tracing::debug!("Making API request to: {}", self.endpoint);
        let response = self.client.get(&self.endpoint).send().await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);
        if !status.is_success() {
            return Err(ContactsError::UpstreamStatusError {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let records: Vec<serde_json::Value> = serde_json::from_str(&body)?;
        Ok(decode_users(records))
    }
}

/// Keeps every record that decodes; the ones that don't are logged and skipped.
fn decode_users(records: Vec<serde_json::Value>) -> Vec<ImportedUser> {
    let total = records.len();
    let users: Vec<ImportedUser> = records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value(record) {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::warn!("Skipping users record #{}: {}", index, e);
                None
            }
        })
        .collect();
    if users.len() < total {
        tracing::warn!("Decoded {} of {} users records", users.len(), total);
    }
    users
}

#[async_trait]
impl UserSource for HttpUserSource {
    async fn fetch(&self) -> Vec<ImportedUser> {
        match self.try_fetch().await {
            Ok(users) => {
                tracing::info!("Fetched {} users from {}", users.len(), self.endpoint);
                users
            }
            Err(e) => {
                match e.category() {
                    ErrorCategory::Network => {
                        tracing::warn!("Failed to fetch users from {}: {}", self.endpoint, e)
                    }
                    _ => tracing::error!("Unusable users payload from {}: {}", self.endpoint, e),
                }
                Vec::new()
            }
        }
    }
}
