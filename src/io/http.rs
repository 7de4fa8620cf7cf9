use crate::io::{EntrySource, SourceError};
use async_trait::async_trait;
use reqwest::Client;

/// Fetches entries over HTTP from `<base_url>/entries/<name>`.
pub struct HttpEntrySource {
    pub client: Client,
    pub base_url: String,
}

impl HttpEntrySource {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub fn url_for(&self, name: &str) -> String {
        format!("{}/entries/{}", self.base_url.trim_end_matches('/'), name)
    }
}

#[async_trait]
impl EntrySource for HttpEntrySource {
    async fn fetch(&self, name: &str) -> Result<String, SourceError> {
        let url = self.url_for(name);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| SourceError::Request {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status { url, status });
        }

        response
            .text()
            .await
            .map_err(|source| SourceError::Request { url, source })
    }
}
