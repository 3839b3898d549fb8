pub mod repository;
pub mod service;

pub use repository::{ArticleRepository, SeaOrmArticleRepository};
pub use service::ArticleService;
