//! Listing client: HTTP access to the articles API plus the state of the
//! listing and add screens, expressed as plain structs and transitions so a
//! UI layer only has to render them.

pub mod add;
pub mod alert;
pub mod api;
pub mod errors;
pub mod filter;
pub mod form;
pub mod home;
pub mod load_state;

#[cfg(test)]
mod test_support;

pub use add::{AddArticleScreen, SubmitOutcome};
pub use alert::{Alert, AlertKind};
pub use api::{ArticleApi, HttpArticleApi};
pub use errors::ClientError;
pub use filter::filter_articles;
pub use form::{ArticleForm, EditAction, EditForm, Field, FormAction, FormError, Photo};
pub use home::HomeScreen;
pub use load_state::LoadState;
