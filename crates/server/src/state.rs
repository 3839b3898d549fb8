use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::article::{ArticleService, SeaOrmArticleRepository};

#[derive(Clone)]
pub struct ServerState {
    pub articles: Arc<ArticleService<SeaOrmArticleRepository>>,
}

impl ServerState {
    pub fn new(db: DatabaseConnection) -> Self {
        let repo = SeaOrmArticleRepository { db };
        Self { articles: Arc::new(ArticleService::new(Arc::new(repo))) }
    }
}
