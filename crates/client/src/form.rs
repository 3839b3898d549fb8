//! Form state for creating and editing articles.
//!
//! Both forms are plain structs moved forward by pure transitions; the screens
//! own them and decide when to talk to the API.

use common::types::{Article, ArticleInput, PhotoUrls};
use thiserror::Error;

/// A picked photo, identified by its URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    pub uri: String,
}

impl Photo {
    pub fn new(uri: impl Into<String>) -> Self {
        Self { uri: uri.into() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    IdApp,
    Surface,
    Ville,
    Prix,
    Description,
    Status,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::IdApp,
        Field::Surface,
        Field::Ville,
        Field::Prix,
        Field::Description,
        Field::Status,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Field::IdApp => "idApp",
            Field::Surface => "surface",
            Field::Ville => "ville",
            Field::Prix => "prix",
            Field::Description => "description",
            Field::Status => "status",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("missing fields: {}", .0.iter().map(|f| f.name()).collect::<Vec<_>>().join(", "))]
    MissingFields(Vec<Field>),
    #[error("at least one photo must be selected")]
    NoPhotos,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormAction {
    UpdateField(Field, String),
    AddPhotos(Vec<Photo>),
    Reset,
}

/// Add-screen form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleForm {
    pub id_app: String,
    pub surface: String,
    pub ville: String,
    pub prix: String,
    pub description: String,
    pub status: String,
    pub photos: Vec<Photo>,
}

impl ArticleForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::IdApp => &self.id_app,
            Field::Surface => &self.surface,
            Field::Ville => &self.ville,
            Field::Prix => &self.prix,
            Field::Description => &self.description,
            Field::Status => &self.status,
        }
    }

    fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::IdApp => &mut self.id_app,
            Field::Surface => &mut self.surface,
            Field::Ville => &mut self.ville,
            Field::Prix => &mut self.prix,
            Field::Description => &mut self.description,
            Field::Status => &mut self.status,
        }
    }

    /// Next state after `action`.
    pub fn apply(mut self, action: FormAction) -> Self {
        match action {
            FormAction::UpdateField(field, value) => {
                *self.field_mut(field) = value;
                self
            }
            FormAction::AddPhotos(picked) => {
                for photo in picked {
                    if !self.photos.iter().any(|p| p.uri == photo.uri) {
                        self.photos.push(photo);
                    }
                }
                self
            }
            FormAction::Reset => Self::default(),
        }
    }

    pub fn missing_fields(&self) -> Vec<Field> {
        Field::ALL.into_iter().filter(|f| self.value(*f).is_empty()).collect()
    }

    /// Request body, or the reason submission is blocked.
    pub fn to_input(&self) -> Result<ArticleInput, FormError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(FormError::MissingFields(missing));
        }
        if self.photos.is_empty() {
            return Err(FormError::NoPhotos);
        }
        Ok(ArticleInput {
            id_app: self.id_app.clone(),
            surface: self.surface.clone(),
            ville: self.ville.clone(),
            prix: self.prix.clone(),
            description: self.description.clone(),
            status: self.status.clone(),
            photo_urls: PhotoUrls::new(self.photos.iter().map(|p| p.uri.clone()).collect()),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum EditAction {
    UpdateField(Field, String),
    /// The picked photo becomes the whole list.
    ReplacePhoto(Photo),
}

/// Edit-modal form, seeded from the row being edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditForm {
    pub id: i32,
    pub id_app: String,
    pub surface: String,
    pub ville: String,
    pub prix: String,
    pub description: String,
    pub status: String,
    pub photo_urls: PhotoUrls,
}

impl EditForm {
    pub fn from_article(article: &Article) -> Self {
        Self {
            id: article.id,
            id_app: article.id_app.clone(),
            surface: article.surface.clone(),
            ville: article.ville.clone(),
            prix: article.prix.clone(),
            description: article.description.clone(),
            status: article.status.clone(),
            photo_urls: article.photo_urls.clone(),
        }
    }

    fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::IdApp => &mut self.id_app,
            Field::Surface => &mut self.surface,
            Field::Ville => &mut self.ville,
            Field::Prix => &mut self.prix,
            Field::Description => &mut self.description,
            Field::Status => &mut self.status,
        }
    }

    pub fn apply(mut self, action: EditAction) -> Self {
        match action {
            EditAction::UpdateField(field, value) => {
                *self.field_mut(field) = value;
            }
            EditAction::ReplacePhoto(photo) => {
                self.photo_urls = PhotoUrls::new(vec![photo.uri]);
            }
        }
        self
    }

    /// Full replacement body; the edit modal sends whatever it holds.
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
