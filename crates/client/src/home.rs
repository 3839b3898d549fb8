use std::sync::Arc;

use common::types::Article;
use tracing::{info, warn};

use crate::alert::Alert;
use crate::api::ArticleApi;
use crate::filter::filter_articles;
use crate::form::{EditAction, EditForm};
use crate::load_state::LoadState;

/// Listing screen: the full article set, a search box, the edit modal and the
/// delete confirmation.
pub struct HomeScreen<A> {
    api: Arc<A>,
    articles: LoadState<Vec<Article>>,
    search: String,
    editor: Option<EditForm>,
    pending_delete: Option<i32>,
}

impl<A: ArticleApi> HomeScreen<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self {
            api,
            articles: LoadState::Loading,
            search: String::new(),
            editor: None,
            pending_delete: None,
        }
    }

    pub fn state(&self) -> &LoadState<Vec<Article>> {
        &self.articles
    }

    /// Called each time the screen gains focus.
    pub async fn on_focus(&mut self) {
        self.refresh().await;
    }

    pub async fn refresh(&mut self) {
        self.articles = LoadState::Loading;
        let result = self.api.list().await;
        self.articles = match result {
            Ok(list) => {
                info!(count = list.len(), "articles loaded");
                LoadState::Ready(list)
            }
            Err(e) => {
                warn!(error = %e, "loading articles failed");
                LoadState::Failed(e.message())
            }
        };
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    /// Rows to render for the current search; empty unless loaded.
    pub fn visible(&self) -> Vec<&Article> {
        match &self.articles {
            LoadState::Ready(list) => filter_articles(list, &self.search),
            _ => Vec::new(),
        }
    }

    /// Open the edit modal on a loaded row. Returns false when the id is not on screen.
    pub fn open_editor(&mut self, id: i32) -> bool {
        let found = self
            .articles
            .ready()
            .and_then(|list| list.iter().find(|a| a.id == id))
            .map(EditForm::from_article);
        let opened = found.is_some();
        if opened {
            self.editor = found;
        }
        opened
    }

    pub fn editor(&self) -> Option<&EditForm> {
        self.editor.as_ref()
    }

    pub fn edit(&mut self, action: EditAction) {
        if let Some(form) = self.editor.take() {
            self.editor = Some(form.apply(action));
        }
    }

    pub fn close_editor(&mut self) {
        self.editor = None;
    }

    /// Send the modal's values. On success the modal closes and the list reloads;
    /// on failure the modal stays open. `None` when no modal is open.
    pub async fn submit_edit(&mut self) -> Option<Alert> {
        let form = self.editor.as_ref()?;
        let (id, input) = (form.id, form.to_input());
        let result = self.api.update(id, &input).await;
        match result {
            Ok(message) => {
                info!(id, "article updated");
                self.editor = None;
                self.refresh().await;
                Some(Alert::success(message))
            }
            Err(e) => {
                warn!(id, error = %e, "update failed");
                Some(Alert::error("Error", e.message()))
            }
        }
    }

    pub fn request_delete(&mut self, id: i32) {
        self.pending_delete = Some(id);
    }

    pub fn pending_delete(&self) -> Option<i32> {
        self.pending_delete
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Delete the row awaiting confirmation. `None` when nothing is pending.
    pub async fn confirm_delete(&mut self) -> Option<Alert> {
        let id = self.pending_delete.take()?;
        let result = self.api.delete(id).await;
        match result {
            Ok(message) => {
                info!(id, "article deleted");
                self.refresh().await;
                Some(Alert::success(message))
            }
            Err(e) => {
                warn!(id, error = %e, "delete failed");
                Some(Alert::error("Error", e.message()))
            }
        }
    }
}
