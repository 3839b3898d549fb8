use common::types::{Article, ArticleInput, PhotoUrls};
use sea_orm::{entity::prelude::*, ActiveValue::NotSet, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};

use crate::errors;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "articles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_name = "idApp")]
    #[serde(rename = "idApp")]
    pub id_app: String,
    pub surface: String,
    pub ville: String,
    pub prix: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub status: String,
    #[sea_orm(column_type = "Text")]
    pub photo_urls: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn photos(&self) -> PhotoUrls {
        PhotoUrls::parse(&self.photo_urls)
    }
}

impl From<Model> for Article {
    fn from(m: Model) -> Self {
        let photo_urls = m.photos();
        Self {
            id: m.id,
            id_app: m.id_app,
            surface: m.surface,
            ville: m.ville,
            prix: m.prix,
            description: m.description,
            status: m.status,
            photo_urls,
        }
    }
}

/// Insert model; `id` is left to the database.
pub fn new_active_model(input: &ArticleInput) -> ActiveModel {
    ActiveModel {
        id: NotSet,
        id_app: Set(input.id_app.clone()),
        surface: Set(input.surface.clone()),
        ville: Set(input.ville.clone()),
        prix: Set(input.prix.clone()),
        description: Set(input.description.clone()),
        status: Set(input.status.clone()),
        photo_urls: Set(input.photo_urls.encode()),
    }
}

/// Overwrite all seven client-supplied columns.
pub fn replace_fields(am: &mut ActiveModel, input: &ArticleInput) {
    am.id_app = Set(input.id_app.clone());
    am.surface = Set(input.surface.clone());
    am.ville = Set(input.ville.clone());
    am.prix = Set(input.prix.clone());
    am.description = Set(input.description.clone());
    am.status = Set(input.status.clone());
    am.photo_urls = Set(input.photo_urls.encode());
}

pub async fn create(db: &DatabaseConnection, input: &ArticleInput) -> Result<Model, errors::ModelError> {
    let created = new_active_model(input).insert(db).await?;
    Ok(created)
}
