use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(Serialize, ToSchema)]
pub struct MessageDoc { pub message: String }

#[derive(Serialize, ToSchema)]
pub struct ErrorDoc { pub error: String }

/// `surface` and `prix` are numbers carried as strings; `photo_urls` is comma-joined.
#[derive(Serialize, ToSchema)]
pub struct ArticleInputDoc {
    #[serde(rename = "idApp")]
    pub id_app: String,
    pub surface: String,
    pub ville: String,
    pub prix: String,
    pub description: String,
    pub status: String,
    pub photo_urls: String,
}

#[derive(Serialize, ToSchema)]
pub struct ArticleDoc {
    pub id: i32,
    #[serde(rename = "idApp")]
    pub id_app: String,
    pub surface: String,
    pub ville: String,
    pub prix: String,
    pub description: String,
    pub status: String,
    pub photo_urls: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::articles::list,
        crate::routes::articles::create,
        crate::routes::articles::get,
        crate::routes::articles::update,
        crate::routes::articles::delete,
    ),
    components(
        schemas(
            HealthResponse,
            MessageDoc,
            ErrorDoc,
            ArticleInputDoc,
            ArticleDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "articles", description = "Real-estate listings")
    )
)]
pub struct ApiDoc;
