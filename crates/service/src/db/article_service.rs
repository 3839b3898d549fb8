use common::types::ArticleInput;
use models::article::{self, Entity as ArticleEntity};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder};

use crate::errors::ServiceError;

/// Insert one article; the database assigns the id.
pub async fn create_article(db: &DatabaseConnection, input: &ArticleInput) -> Result<article::Model, ServiceError> {
    let created = article::create(db, input).await?;
    Ok(created)
}

/// Every row, unfiltered and unpaginated.
pub async fn list_articles(db: &DatabaseConnection) -> Result<Vec<article::Model>, ServiceError> {
    let rows = ArticleEntity::find().order_by_asc(article::Column::Id).all(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(rows)
}

pub async fn get_article(db: &DatabaseConnection, id: i32) -> Result<Option<article::Model>, ServiceError> {
    let found = ArticleEntity::find_by_id(id).one(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(found)
}

/// Replace all seven fields of an existing article.
///
/// The row is looked up first so that rewriting identical values is not
/// reported as a missing row by backends that count changed rows only.
pub async fn update_article(db: &DatabaseConnection, id: i32, input: &ArticleInput) -> Result<article::Model, ServiceError> {
    let current = ArticleEntity::find_by_id(id).one(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    let Some(existing) = current else { return Err(ServiceError::not_found("article")); };
    let mut am: article::ActiveModel = existing.into();
    article::replace_fields(&mut am, input);
    let updated = am.update(db).await?;
    Ok(updated)
}

/// Delete an article; returns true if a row was removed.
pub async fn delete_article(db: &DatabaseConnection, id: i32) -> Result<bool, ServiceError> {
    let res = ArticleEntity::delete_by_id(id).exec(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(res.rows_affected > 0)
}
