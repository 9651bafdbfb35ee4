use std::future::Future;

use reqwest::Url;

use crate::error::SearchError;

/// Fetches the full body of a server path as text.
pub trait Transport: Send + Sync {
    fn fetch_text(&self, path: String) -> impl Future<Output = Result<String, SearchError>> + Send;
}

#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpTransport {
    pub fn new(base_url: &str) -> Result<HttpTransport, SearchError> {
        let base_url =
            Url::parse(base_url).map_err(|e| SearchError::InvalidBaseUrl(format!("{base_url}: {e}")))?;
        log::info!("search transport targeting {base_url}");
        Ok(HttpTransport {
            client: reqwest::Client::new(),
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

impl Transport for HttpTransport {
    async fn fetch_text(&self, path: String) -> Result<String, SearchError> {
        let url = self
            .base_url
            .join(&path)
            .map_err(|e| SearchError::InvalidBaseUrl(format!("{path}: {e}")))?;

        let res = self.client.get(url).send().await?;
        let status = res.status();
        if !status.is_success() {
            return Err(SearchError::Status {
                status: status.as_u16(),
                path,
            });
        }
        let body = res.text().await?;
        Ok(body)
    }
}
