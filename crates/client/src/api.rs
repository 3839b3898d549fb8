use async_trait::async_trait;
use common::types::{Article, ArticleInput, ErrorResponse, MessageResponse};
use configs::ClientConfig;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::errors::ClientError;

/// Operations the screens need from the articles API.
#[async_trait]
pub trait ArticleApi: Send + Sync {
    async fn list(&self) -> Result<Vec<Article>, ClientError>;
    async fn get(&self, id: i32) -> Result<Article, ClientError>;
    /// Returns the server's confirmation message; the new id is not echoed.
    async fn create(&self, input: &ArticleInput) -> Result<String, ClientError>;
    async fn update(&self, id: i32, input: &ArticleInput) -> Result<String, ClientError>;
    async fn delete(&self, id: i32) -> Result<String, ClientError>;
}

#[derive(Clone, Debug)]
pub struct HttpArticleApi {
    base_url: String,
    http: Client,
}

impl HttpArticleApi {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let http = Client::builder()
            .build()
            .map_err(|e| ClientError::Network(e.to_string()))?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { base_url, http })
    }

    pub fn from_config(cfg: &ClientConfig) -> Result<Self, ClientError> {
        Self::new(cfg.base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn articles_url(&self) -> String {
        format!("{}/articles", self.base_url)
    }

    fn article_url(&self, id: i32) -> String {
        format!("{}/articles/{id}", self.base_url)
    }
}

/// Decode a 2xx body, or turn the `{error}` body of a failure into a `ClientError`.
async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ClientError> {
    let status = resp.status();
    if status.is_success() {
        return resp.json::<T>().await.map_err(|e| ClientError::Parse(e.to_string()));
    }
    let text = resp.text().await.map_err(|e| ClientError::Network(e.to_string()))?;
    let message = serde_json::from_str::<ErrorResponse>(&text)
        .map(|b| b.error)
        .unwrap_or(text);
    debug!(status = status.as_u16(), %message, "api error");
    if status == StatusCode::NOT_FOUND {
        Err(ClientError::NotFound(message))
    } else {
        Err(ClientError::Api { status: status.as_u16(), message })
    }
}

async fn message(resp: Response) -> Result<String, ClientError> {
    decode::<MessageResponse>(resp).await.map(|m| m.message)
}

fn network(e: reqwest::Error) -> ClientError {
    ClientError::Network(e.to_string())
}

#[async_trait]
impl ArticleApi for HttpArticleApi {
    async fn list(&self) -> Result<Vec<Article>, ClientError> {
        let resp = self.http.get(self.articles_url()).send().await.map_err(network)?;
        decode(resp).await
    }

    async fn get(&self, id: i32) -> Result<Article, ClientError> {
        let resp = self.http.get(self.article_url(id)).send().await.map_err(network)?;
        decode(resp).await
    }

    async fn create(&self, input: &ArticleInput) -> Result<String, ClientError> {
        let resp = self.http.post(self.articles_url()).json(input).send().await.map_err(network)?;
        message(resp).await
    }

    async fn update(&self, id: i32, input: &ArticleInput) -> Result<String, ClientError> {
        let resp = self.http.put(self.article_url(id)).json(input).send().await.map_err(network)?;
        message(resp).await
    }

    async fn delete(&self, id: i32) -> Result<String, ClientError> {
        let resp = self.http.delete(self.article_url(id)).send().await.map_err(network)?;
        message(resp).await
    }
}
