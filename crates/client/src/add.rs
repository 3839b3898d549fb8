use std::sync::Arc;

use tracing::{info, warn};

use crate::alert::Alert;
use crate::api::ArticleApi;
use crate::errors::ClientError;
use crate::form::{ArticleForm, FormAction, FormError};

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Saved; the form was reset and the host should leave the screen.
    Created(String),
    /// Not sent: a field is empty or no photo is selected.
    Rejected(FormError),
    /// Sent and refused, or never reached the server. The form is kept.
    Failed(ClientError),
}

impl SubmitOutcome {
    pub fn should_close(&self) -> bool {
        matches!(self, SubmitOutcome::Created(_))
    }

    pub fn alert(&self) -> Alert {
        match self {
            SubmitOutcome::Created(message) => Alert::success(message.clone()),
            SubmitOutcome::Rejected(e) => Alert::error("Error", e.to_string()),
            SubmitOutcome::Failed(e @ ClientError::Network(_)) => Alert::error("Network error", e.message()),
            SubmitOutcome::Failed(e) => Alert::error("Error", e.message()),
        }
    }
}

pub struct AddArticleScreen<A> {
    api: Arc<A>,
    form: ArticleForm,
}

impl<A: ArticleApi> AddArticleScreen<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self { api, form: ArticleForm::default() }
    }

    pub fn form(&self) -> &ArticleForm {
        &self.form
    }

    pub fn dispatch(&mut self, action: FormAction) {
        let form = std::mem::take(&mut self.form);
        self.form = form.apply(action);
    }

    pub async fn submit(&mut self) -> SubmitOutcome {
        let input = match self.form.to_input() {
            Ok(input) => input,
            Err(e) => return SubmitOutcome::Rejected(e),
        };
        let result = self.api.create(&input).await;
        match result {
            Ok(message) => {
                info!(id_app = %input.id_app, photos = input.photo_urls.len(), "article created");
                self.dispatch(FormAction::Reset);
                SubmitOutcome::Created(message)
            }
            Err(e) => {
                warn!(error = %e, "create failed");
                SubmitOutcome::Failed(e)
            }
        }
    }
}
