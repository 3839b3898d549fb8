use std::sync::Arc;

use common::types::{Article, ArticleInput};
use tracing::{info, instrument};

use crate::article::repository::ArticleRepository;
use crate::errors::ServiceError;

/// Application service in front of the article repository.
/// Converts rows to wire articles and turns missing rows into `NotFound`.
pub struct ArticleService<R: ArticleRepository> {
    repo: Arc<R>,
}

impl<R: ArticleRepository> ArticleService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    pub async fn list(&self) -> Result<Vec<Article>, ServiceError> {
        let rows = self.repo.list().await?;
        Ok(rows.into_iter().map(Article::from).collect())
    }

    /// Returns the new id for logging; the HTTP contract does not expose it.
    #[instrument(skip(self, input), fields(id_app = %input.id_app))]
    pub async fn create(&self, input: &ArticleInput) -> Result<i32, ServiceError> {
        let created = self.repo.create(input).await?;
        info!(id = created.id, photos = input.photo_urls.len(), "article_created");
        Ok(created.id)
    }

    pub async fn get(&self, id: i32) -> Result<Article, ServiceError> {
        self.repo
            .get(id)
            .await?
            .map(Article::from)
            .ok_or_else(|| ServiceError::not_found("article"))
    }

    #[instrument(skip(self, input))]
    pub async fn update(&self, id: i32, input: &ArticleInput) -> Result<Article, ServiceError> {
        let updated = self.repo.update(id, input).await?;
        info!(id, "article_updated");
        Ok(updated.into())
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        if self.repo.delete(id).await? {
            info!(id, "article_deleted");
            Ok(())
        } else {
            Err(ServiceError::not_found("article"))
        }
    }
}
