#![cfg(test)]
use std::sync::Mutex;

use async_trait::async_trait;
use common::types::{Article, ArticleInput, PhotoUrls};

use crate::api::ArticleApi;
use crate::errors::ClientError;
use crate::form::{ArticleForm, Photo};

pub fn article(id: i32, description: &str, ville: &str, status: &str) -> Article {
    Article {
        id,
        id_app: format!("APP-{id}"),
        surface: "120".into(),
        ville: ville.into(),
        prix: "250000".into(),
        description: description.into(),
        status: status.into(),
        photo_urls: PhotoUrls::parse("file:///a.jpg,file:///b.jpg"),
    }
}

pub fn filled_form() -> ArticleForm {
    ArticleForm {
        id_app: "APP-9".into(),
        surface: "75".into(),
        ville: "Nabeul".into(),
        prix: "120000".into(),
        description: "Appartement vue mer".into(),
        status: "Vente".into(),
        photos: vec![Photo::new("file:///1.jpg"), Photo::new("file:///2.jpg")],
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Calls {
    pub list: usize,
    pub get: usize,
    pub create: usize,
    pub update: usize,
    pub delete: usize,
}

#[derive(Default)]
struct Inner {
    rows: Vec<Article>,
    next_id: i32,
    calls: Calls,
    fail_next: Option<String>,
    fail_always: Option<String>,
}

impl Inner {
    fn failure(&mut self) -> Option<ClientError> {
        self.fail_next
            .take()
            .or_else(|| self.fail_always.clone())
            .map(|message| ClientError::Api { status: 500, message })
    }
}

/// In-memory `ArticleApi` that counts every call.
#[derive(Default)]
pub struct MockApi {
    inner: Mutex<Inner>,
}

impl MockApi {
    pub fn with_articles(rows: Vec<Article>) -> Self {
        let next_id = rows.iter().map(|a| a.id).max().unwrap_or(0);
        Self { inner: Mutex::new(Inner { rows, next_id, ..Inner::default() }) }
    }

    pub fn failing(message: &str) -> Self {
        Self { inner: Mutex::new(Inner { fail_always: Some(message.into()), ..Inner::default() }) }
    }

    pub fn fail_next(&self, message: &str) {
        self.inner.lock().unwrap().fail_next = Some(message.into());
    }

    pub fn calls(&self) -> Calls {
        self.inner.lock().unwrap().calls
    }

    pub fn snapshot(&self) -> Vec<Article> {
        self.inner.lock().unwrap().rows.clone()
    }
}

fn build(id: i32, input: &ArticleInput) -> Article {
    Article {
        id,
        id_app: input.id_app.clone(),
        surface: input.surface.clone(),
        ville: input.ville.clone(),
        prix: input.prix.clone(),
        description: input.description.clone(),
        status: input.status.clone(),
        photo_urls: input.photo_urls.clone(),
    }
}

fn not_found() -> ClientError {
    ClientError::NotFound("Article not found".into())
}

#[async_trait]
impl ArticleApi for MockApi {
    async fn list(&self) -> Result<Vec<Article>, ClientError> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.list += 1;
        match inner.failure() {
            Some(e) => Err(e),
            None => Ok(inner.rows.clone()),
        }
    }

    async fn get(&self, id: i32) -> Result<Article, ClientError> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.get += 1;
        if let Some(e) = inner.failure() {
            return Err(e);
        }
        inner.rows.iter().find(|a| a.id == id).cloned().ok_or_else(not_found)
    }

    async fn create(&self, input: &ArticleInput) -> Result<String, ClientError> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.create += 1;
        if let Some(e) = inner.failure() {
            return Err(e);
        }
        inner.next_id += 1;
        let row = build(inner.next_id, input);
        inner.rows.push(row);
        Ok("Article created successfully".into())
    }

    async fn update(&self, id: i32, input: &ArticleInput) -> Result<String, ClientError> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.update += 1;
        if let Some(e) = inner.failure() {
            return Err(e);
        }
        let row = inner.rows.iter_mut().find(|a| a.id == id).ok_or_else(not_found)?;
        *row = build(id, input);
        Ok("Article updated successfully".into())
    }

    async fn delete(&self, id: i32) -> Result<String, ClientError> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.delete += 1;
        if let Some(e) = inner.failure() {
            return Err(e);
        }
        let before = inner.rows.len();
        inner.rows.retain(|a| a.id != id);
        if inner.rows.len() == before {
            return Err(not_found());
        }
        Ok("Article deleted successfully".into())
    }
}
