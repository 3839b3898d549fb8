//! Service layer for listing articles.
//! - Repository trait over the `articles` table, SeaORM implementation in `db`.
//! - `ArticleService` is what the HTTP layer talks to.

pub mod errors;
pub mod db;
pub mod article;
#[cfg(test)]
pub mod test_support;
