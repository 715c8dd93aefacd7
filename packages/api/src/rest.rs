//! PostgREST client for the hosted table store.
//!
//! Requests go to `{url}/rest/v1/{table}` with the project's public key in both
//! the `apikey` and `Authorization` headers. Inserts and updates ask for the
//! stored row back as a single JSON object.

use reqwest::{Client, Method, RequestBuilder, Response};
use serde::Deserialize;
use serde_json::Value;
use store::config::BackendConfig;

use crate::backend::TableBackend;
use crate::error::{ApiError, Result};
use crate::query::Query;

const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";
const RETURN_REPRESENTATION: &str = "return=representation";

/// Error body returned by PostgREST.
#[derive(Debug, Deserialize)]
struct StoreErrorBody {
    message: Option<String>,
}

#[derive(Clone, Debug)]
pub struct RestBackend {
    client: Client,
    base_url: String,
    anon_key: String,
}

impl RestBackend {
    pub fn new(config: &BackendConfig) -> Result<Self> {
        let base_url = config.url.trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(ApiError::Config("backend url is empty".to_string()));
        }
        if config.anon_key.trim().is_empty() {
            return Err(ApiError::Config("anon key is empty".to_string()));
        }
        Ok(Self {
            client: Client::new(),
            base_url,
            anon_key: config.anon_key.trim().to_string(),
        })
    }

    fn endpoint(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    fn request(&self, method: Method, table: &str, query: &Query) -> RequestBuilder {
        self.client
            .request(method, self.endpoint(table))
            .query(&query.to_pairs())
            .header("apikey", &self.anon_key)
            .header("Authorization", format!("Bearer {}", self.anon_key))
    }

    fn returning_single(builder: RequestBuilder) -> RequestBuilder {
        builder
            .header("Prefer", RETURN_REPRESENTATION)
            .header("Accept", SINGLE_OBJECT)
    }

    async fn check(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<StoreErrorBody>(&text)
            .ok()
            .and_then(|body| body.message)
            .unwrap_or(text);
        Err(ApiError::Status {
            status: status.as_u16(),
            message,
        })
    }
}

impl TableBackend for RestBackend {
    async fn select(&self, table: &str, query: &Query) -> Result<Vec<Value>> {
        let response = self.request(Method::GET, table, query).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    async fn insert(&self, table: &str, row: Value) -> Result<Value> {
        let builder = self.request(Method::POST, table, &Query::new()).json(&row);
        let response = Self::returning_single(builder).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    async fn update(&self, table: &str, query: &Query, patch: Value) -> Result<Value> {
        let builder = self.request(Method::PATCH, table, query).json(&patch);
        let response = Self::returning_single(builder).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    async fn delete(&self, table: &str, query: &Query) -> Result<()> {
        let response = self.request(Method::DELETE, table, query).send().await?;
        Self::check(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_url_and_key() {
        let missing_url = BackendConfig {
            url: "  ".into(),
            anon_key: "k".into(),
        };
        assert!(matches!(RestBackend::new(&missing_url), Err(ApiError::Config(_))));

        let missing_key = BackendConfig {
            url: "https://demo.supabase.co".into(),
            anon_key: String::new(),
        };
        assert!(matches!(RestBackend::new(&missing_key), Err(ApiError::Config(_))));
    }

    #[test]
    fn test_endpoint_strips_trailing_slash() {
        let backend = RestBackend::new(&BackendConfig {
            url: "https://demo.supabase.co/".into(),
            anon_key: "k".into(),
        })
        .unwrap();
        assert_eq!(
            backend.endpoint("appointments"),
            "https://demo.supabase.co/rest/v1/appointments"
        );
    }
}
