use async_trait::async_trait;
use common::types::ArticleInput;
use sea_orm::DatabaseConnection;

use crate::errors::ServiceError;

#[async_trait]
pub trait ArticleRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<models::article::Model>, ServiceError>;
    async fn create(&self, input: &ArticleInput) -> Result<models::article::Model, ServiceError>;
    async fn get(&self, id: i32) -> Result<Option<models::article::Model>, ServiceError>;
    async fn update(&self, id: i32, input: &ArticleInput) -> Result<models::article::Model, ServiceError>;
    async fn delete(&self, id: i32) -> Result<bool, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmArticleRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl ArticleRepository for SeaOrmArticleRepository {
    async fn list(&self) -> Result<Vec<models::article::Model>, ServiceError> {
        crate::db::article_service::list_articles(&self.db).await
    }

    async fn create(&self, input: &ArticleInput) -> Result<models::article::Model, ServiceError> {
        crate::db::article_service::create_article(&self.db, input).await
    }

    async fn get(&self, id: i32) -> Result<Option<models::article::Model>, ServiceError> {
        crate::db::article_service::get_article(&self.db, id).await
    }

    async fn update(&self, id: i32, input: &ArticleInput) -> Result<models::article::Model, ServiceError> {
        crate::db::article_service::update_article(&self.db, id, input).await
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        crate::db::article_service::delete_article(&self.db, id).await
    }
}
