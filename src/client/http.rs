//! `reqwest` implementation of the task API port.

use super::{ApiClientError, ApiClientResult, TaskApi};
use crate::http::ErrorBody;
use crate::task::{
    domain::{Task, TaskId},
    validation::TaskPayload,
};
use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;

/// Collection URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/tasks";

/// Task API client speaking JSON over HTTP.
#[derive(Debug, Clone)]
pub struct HttpTaskApi {
    client: Client,
    base_url: Url,
}

impl HttpTaskApi {
    /// Creates a client for the task collection at `base_url`, for example
    /// `http://localhost:3000/tasks`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError::InvalidBaseUrl`] when the URL does not parse
    /// or cannot carry path segments.
    pub fn new(base_url: &str) -> ApiClientResult<Self> {
        Self::with_client(Client::new(), base_url)
    }

    /// Creates a client reusing an existing `reqwest` client.
    ///
    /// A trailing slash on `base_url` is dropped, so `/tasks/` and `/tasks`
    /// address the same collection.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError::InvalidBaseUrl`] when the URL does not parse
    /// or cannot carry path segments.
    pub fn with_client(client: Client, base_url: &str) -> ApiClientResult<Self> {
        let mut parsed =
            Url::parse(base_url).map_err(|err| ApiClientError::InvalidBaseUrl(err.to_string()))?;
        parsed
            .path_segments_mut()
            .map_err(|()| ApiClientError::InvalidBaseUrl(base_url.to_owned()))?
            .pop_if_empty();
        Ok(Self {
            client,
            base_url: parsed,
        })
    }

    /// Returns the collection URL.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn task_url(&self, id: &TaskId) -> ApiClientResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ApiClientError::InvalidBaseUrl(self.base_url.to_string()))?
            .push(id.as_str());
        Ok(url)
    }
}

#[async_trait]
impl TaskApi for HttpTaskApi {
    async fn list(&self) -> ApiClientResult<Vec<Task>> {
        let response = self
            .client
            .get(self.base_url.clone())
            .send()
            .await
            .map_err(ApiClientError::transport)?;
        decode(response).await
    }

    async fn create(&self, payload: &TaskPayload) -> ApiClientResult<Task> {
        let response = self
            .client
            .post(self.base_url.clone())
            .json(payload)
            .send()
            .await
            .map_err(ApiClientError::transport)?;
        decode(response).await
    }

    async fn update(&self, id: &TaskId, payload: &TaskPayload) -> ApiClientResult<Task> {
        let response = self
            .client
            .put(self.task_url(id)?)
            .json(payload)
            .send()
            .await
            .map_err(ApiClientError::transport)?;
        decode(response).await
    }

    async fn delete(&self, id: &TaskId) -> ApiClientResult<()> {
        let response = self
            .client
            .delete(self.task_url(id)?)
            .send()
            .await
            .map_err(ApiClientError::transport)?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(rejection(response).await)
        }
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> ApiClientResult<T> {
    if !response.status().is_success() {
        return Err(rejection(response).await);
    }
    response.json::<T>().await.map_err(ApiClientError::transport)
}

async fn rejection(response: Response) -> ApiClientError {
    let status = response.status().as_u16();
    let message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .map(|body| body.error);
    ApiClientError::Rejected { status, message }
}
