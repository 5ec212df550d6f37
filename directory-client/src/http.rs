//! HTTP client for the directory REST API

use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use shared::{Employee, EmployeeCreate, EmployeeUpdate, ErrorBody, HealthResponse};

/// HTTP client for making requests to the directory server
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Send and decode a JSON body
    async fn send<T: DeserializeOwned>(request: RequestBuilder) -> ClientResult<T> {
        let response = Self::check(request.send().await?).await?;
        response.json().await.map_err(Into::into)
    }

    /// Turn non-2xx responses into `ClientError::Api`
    async fn check(response: Response) -> ClientResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await?;
        let message = serde_json::from_str::<ErrorBody>(&text)
            .map(|body| body.error)
            .unwrap_or_else(|_| {
                if text.is_empty() {
                    status.to_string()
                } else {
                    text
                }
            });
        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }

    // ========== Health API ==========

    pub async fn health(&self) -> ClientResult<HealthResponse> {
        Self::send(self.client.get(self.url("/health"))).await
    }

    // ========== Employee API ==========

    /// List employees; an empty `search` lists everyone
    pub async fn list_employees(&self, search: Option<&str>) -> ClientResult<Vec<Employee>> {
        let mut request = self.client.get(self.url("/api/employees"));
        if let Some(term) = search.filter(|s| !s.is_empty()) {
            request = request.query(&[("search", term)]);
        }
        Self::send(request).await
    }

    pub async fn get_employee(&self, id: i64) -> ClientResult<Employee> {
        Self::send(self.client.get(self.url(&format!("/api/employees/{id}")))).await
    }

    pub async fn create_employee(&self, data: &EmployeeCreate) -> ClientResult<Employee> {
        Self::send(self.client.post(self.url("/api/employees")).json(data)).await
    }

    pub async fn update_employee(&self, id: i64, data: &EmployeeUpdate) -> ClientResult<Employee> {
        Self::send(
            self.client
                .put(self.url(&format!("/api/employees/{id}")))
                .json(data),
        )
        .await
    }

    /// Delete an employee; 204 carries no body
    pub async fn delete_employee(&self, id: i64) -> ClientResult<()> {
        let response = self
            .client
            .delete(self.url(&format!("/api/employees/{id}")))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }
}
