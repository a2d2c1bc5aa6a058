use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Response;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use super::{RemoteError, TaskApi};
use crate::model::{Task, TaskDraft, TaskId, UpdatedTask};

const COLLECTION: &str = "todos";
const JSON_UTF8: &str = "application/json; charset=UTF-8";

/// `TaskApi` over the placeholder REST collection (`/todos`, `/todos/{id}`).
pub struct HttpTaskApi {
    client: reqwest::Client,
    base: Url,
}

impl HttpTaskApi {
    pub fn new(base: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            base,
        }
    }

    fn endpoint(&self, id: Option<TaskId>) -> Result<Url, RemoteError> {
        let mut url = self.base.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| RemoteError::InvalidUrl(self.base.clone()))?;
            segments.pop_if_empty().push(COLLECTION);
            if let Some(id) = id {
                segments.push(&id.to_string());
            }
        }
        Ok(url)
    }

    // Request bodies are encoded by reqwest, so `Decode` only covers responses.
    async fn read<T: DeserializeOwned>(response: Response) -> Result<T, RemoteError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            return Err(RemoteError::Status { status, body });
        }
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl TaskApi for HttpTaskApi {
    async fn list(&self) -> Result<Vec<Task>, RemoteError> {
        let url = self.endpoint(None)?;
        debug!(url = %url, "GET");
        let response = self.client.get(url).send().await?;
        Self::read(response).await
    }

    async fn create(&self, draft: &TaskDraft) -> Result<Task, RemoteError> {
        let url = self.endpoint(None)?;
        debug!(url = %url, "POST");
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, JSON_UTF8)
            .json(draft)
            .send()
            .await?;
        Self::read(response).await
    }

    async fn update(&self, id: TaskId, draft: &TaskDraft) -> Result<UpdatedTask, RemoteError> {
        let url = self.endpoint(Some(id))?;
        debug!(url = %url, "PUT");
        let response = self
            .client
            .put(url)
            .header(CONTENT_TYPE, JSON_UTF8)
            .json(draft)
            .send()
            .await?;
        Self::read(response).await
    }
}
