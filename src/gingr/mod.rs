mod error;
mod params;
mod payload;

use serde_json::Value;

use crate::config::Config;

pub use error::GingrError;
pub use params::{ParamValue, Params, split_ids};
pub use payload::Payload;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Parameters go in the query string.
    Get,
    /// Parameters go in a form-encoded body.
    Post,
}

/// Client for the Gingr REST API (`<base>/api/v1/<endpoint>`).
#[derive(Clone)]
pub struct GingrClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl GingrClient {
    pub fn new(http: reqwest::Client, config: &Config) -> Self {
        Self {
            http,
            base_url: config.gingr_base_url.trim_end_matches('/').to_string(),
            api_key: config.gingr_api_key.clone(),
        }
    }

    pub async fn get(&self, endpoint: &str, params: Params) -> Result<Value, GingrError> {
        self.call(endpoint, Method::Get, params).await
    }

    pub async fn post(&self, endpoint: &str, params: Params) -> Result<Value, GingrError> {
        self.call(endpoint, Method::Post, params).await
    }

    /// Issue one call and return the unwrapped payload.
    pub async fn call(
        &self,
        endpoint: &str,
        method: Method,
        params: Params,
    ) -> Result<Value, GingrError> {
        let url = format!(
            "{}/api/v1/{}",
            self.base_url,
            endpoint.trim_start_matches('/')
        );
        let pairs = params.to_pairs(&self.api_key);

        let request = match method {
            Method::Get => self.http.get(&url).query(&pairs),
            Method::Post => self.http.post(&url).form(&pairs),
        };

        tracing::debug!(endpoint, ?method, "calling Gingr API");

        let result = send(request).await;
        if let Err(e) = &result {
            tracing::error!(endpoint, error = %e, "Gingr API request failed");
        }
        result
    }
}

async fn send(request: reqwest::RequestBuilder) -> Result<Value, GingrError> {
    let resp = request
        .send()
        .await
        .map_err(|e| GingrError::Transport(e.to_string()))?;

    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        tracing::warn!(status = %status, body = %body, "Gingr returned error");
        return Err(GingrError::Status {
            status: status.as_u16(),
            body,
        });
    }

    let body: Value = resp
        .json()
        .await
        .map_err(|e| GingrError::Decode(e.to_string()))?;

    Ok(Payload::from(body).into_inner())
}
