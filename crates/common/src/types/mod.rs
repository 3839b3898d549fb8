use serde::{Deserialize, Serialize};

use crate::utils::serde_utils;

pub mod photos;

pub use photos::PhotoUrls;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Health {
    pub status: String,
}

impl Health {
    pub fn ok() -> Self {
        Self { status: "ok".into() }
    }
}

/// One listing row as exchanged over HTTP.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Article {
    pub id: i32,
    #[serde(rename = "idApp")]
    pub id_app: String,
    #[serde(deserialize_with = "serde_utils::string_or_number")]
    pub surface: String,
    pub ville: String,
    #[serde(deserialize_with = "serde_utils::string_or_number")]
    pub prix: String,
    pub description: String,
    pub status: String,
    pub photo_urls: PhotoUrls,
}

impl Article {
    pub fn thumbnail(&self) -> Option<&str> {
        self.photo_urls.thumbnail()
    }

    /// Current values as a full replacement body.
    pub fn to_input(&self) -> ArticleInput {
        ArticleInput {
            id_app: self.id_app.clone(),
            surface: self.surface.clone(),
            ville: self.ville.clone(),
            prix: self.prix.clone(),
            description: self.description.clone(),
            status: self.status.clone(),
            photo_urls: self.photo_urls.clone(),
        }
    }
}

/// Body of `POST /articles` and `PUT /articles/:id`; every field is required.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ArticleInput {
    #[serde(rename = "idApp")]
    pub id_app: String,
    #[serde(deserialize_with = "serde_utils::string_or_number")]
    pub surface: String,
    pub ville: String,
    #[serde(deserialize_with = "serde_utils::string_or_number")]
    pub prix: String,
    pub description: String,
    pub status: String,
    pub photo_urls: PhotoUrls,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}
