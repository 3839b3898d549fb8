use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use migration::MigratorTrait;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn app() -> anyhow::Result<Router> {
    let cfg = configs::DatabaseConfig::with_url("sqlite::memory:");
    let db = models::db::connect_with_config(&cfg).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(server::build_app(db))
}

fn sample(id_app: &str) -> Value {
    json!({
        "idApp": id_app,
        "surface": "120",
        "ville": "Tunis",
        "prix": "250000",
        "description": "Bright flat near the station",
        "status": "Vente",
        "photo_urls": "file:///a.jpg,file:///b.jpg"
    })
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> anyhow::Result<(StatusCode, Value)> {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(v) => builder
            .header("content-type", "application/json")
            .body(Body::from(v.to_string()))?,
        None => builder.body(Body::empty())?,
    };
    let res = app.clone().oneshot(req).await?;
    let status = res.status();
    let bytes = to_bytes(res.into_body(), usize::MAX).await?;
    let value = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes)? };
    Ok((status, value))
}

#[tokio::test]
async fn create_then_list_and_get() -> anyhow::Result<()> {
    let app = app().await?;

    let (status, body) = send(&app, "POST", "/articles", Some(sample("APP-1"))).await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Article created successfully");

    let (status, list) = send(&app, "GET", "/articles", None).await?;
    assert_eq!(status, StatusCode::OK);
    let list = list.as_array().cloned().unwrap_or_default();
    assert_eq!(list.len(), 1);
    let id = list[0]["id"].as_i64().unwrap_or_default();
    assert!(id > 0);
    assert_eq!(list[0]["idApp"], "APP-1");
    assert_eq!(list[0]["photo_urls"], "file:///a.jpg,file:///b.jpg");

    let (status, one) = send(&app, "GET", &format!("/articles/{id}"), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(one, list[0]);
    Ok(())
}

#[tokio::test]
async fn list_is_empty_array_on_fresh_store() -> anyhow::Result<()> {
    let app = app().await?;
    let (status, list) = send(&app, "GET", "/articles", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list, json!([]));
    Ok(())
}

#[tokio::test]
async fn numeric_fields_and_photo_array_are_accepted() -> anyhow::Result<()> {
    let app = app().await?;
    let mut body = sample("APP-2");
    body["surface"] = json!(95);
    body["prix"] = json!(180000.5);
    body["photo_urls"] = json!(["p1.jpg", "p2.jpg"]);

    let (status, _) = send(&app, "POST", "/articles", Some(body)).await?;
    assert_eq!(status, StatusCode::CREATED);

    let (_, list) = send(&app, "GET", "/articles", None).await?;
    assert_eq!(list[0]["surface"], "95");
    assert_eq!(list[0]["prix"], "180000.5");
    assert_eq!(list[0]["photo_urls"], "p1.jpg,p2.jpg");
    Ok(())
}

#[tokio::test]
async fn get_missing_is_404() -> anyhow::Result<()> {
    let app = app().await?;
    let (status, body) = send(&app, "GET", "/articles/9999", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Article not found");
    Ok(())
}

#[tokio::test]
async fn update_touches_only_the_target_row() -> anyhow::Result<()> {
    let app = app().await?;
    send(&app, "POST", "/articles", Some(sample("A"))).await?;
    send(&app, "POST", "/articles", Some(sample("B"))).await?;
    let (_, list) = send(&app, "GET", "/articles", None).await?;
    let first = list[0]["id"].as_i64().unwrap_or_default();
    let untouched = list[1].clone();

    let mut changed = sample("A");
    changed["ville"] = json!("Sousse");
    changed["photo_urls"] = json!("file:///c.jpg");
    let (status, body) = send(&app, "PUT", &format!("/articles/{first}"), Some(changed)).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Article updated successfully");

    let (_, one) = send(&app, "GET", &format!("/articles/{first}"), None).await?;
    assert_eq!(one["ville"], "Sousse");
    assert_eq!(one["photo_urls"], "file:///c.jpg");
    assert_eq!(one["id"].as_i64(), Some(first));

    let second = untouched["id"].as_i64().unwrap_or_default();
    let (_, other) = send(&app, "GET", &format!("/articles/{second}"), None).await?;
    assert_eq!(other, untouched);
    Ok(())
}

#[tokio::test]
async fn update_missing_is_404() -> anyhow::Result<()> {
    let app = app().await?;
    let (status, body) = send(&app, "PUT", "/articles/4242", Some(sample("X"))).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Article not found");

    let (_, list) = send(&app, "GET", "/articles", None).await?;
    assert_eq!(list, json!([]));
    Ok(())
}

#[tokio::test]
async fn delete_removes_row_and_missing_is_404() -> anyhow::Result<()> {
    let app = app().await?;
    send(&app, "POST", "/articles", Some(sample("A"))).await?;
    send(&app, "POST", "/articles", Some(sample("B"))).await?;
    let (_, list) = send(&app, "GET", "/articles", None).await?;
    let id = list[0]["id"].as_i64().unwrap_or_default();

    let (status, body) = send(&app, "DELETE", "/articles/777", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Article not found");
    let (_, still) = send(&app, "GET", "/articles", None).await?;
    assert_eq!(still.as_array().map(Vec::len), Some(2));

    let (status, body) = send(&app, "DELETE", &format!("/articles/{id}"), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Article deleted successfully");

    let (status, _) = send(&app, "GET", &format!("/articles/{id}"), None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (_, after) = send(&app, "GET", "/articles", None).await?;
    assert_eq!(after.as_array().map(Vec::len), Some(1));
    Ok(())
}

#[tokio::test]
async fn malformed_requests_are_400() -> anyhow::Result<()> {
    let app = app().await?;

    let req = Request::builder()
        .method("POST")
        .uri("/articles")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))?;
    let res = app.clone().oneshot(req).await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let bytes = to_bytes(res.into_body(), usize::MAX).await?;
    let body: Value = serde_json::from_slice(&bytes)?;
    assert!(body["error"].is_string());

    let (status, _) = send(&app, "POST", "/articles", Some(json!({ "idApp": "only" }))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let mut joined_uri = sample("comma");
    joined_uri["photo_urls"] = json!(["data:image/png;base64,AAAA"]);
    let (status, body) = send(&app, "POST", "/articles", Some(joined_uri)).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap_or_default().contains("photo_urls"));
    let (_, list) = send(&app, "GET", "/articles", None).await?;
    assert_eq!(list, json!([]));

    let (status, body) = send(&app, "GET", "/articles/abc", None).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
    Ok(())
}

#[tokio::test]
async fn health_openapi_and_fallback() -> anyhow::Result<()> {
    let app = app().await?;
    let (status, body) = send(&app, "GET", "/health", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, doc) = send(&app, "GET", "/openapi.json", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"]["/articles/{id}"].is_object());

    let (status, body) = send(&app, "GET", "/nope", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());
    Ok(())
}

fn memory_config(auto_migrate: bool) -> configs::AppConfig {
    let mut cfg = configs::AppConfig::default();
    cfg.database = configs::DatabaseConfig::with_url("sqlite::memory:");
    cfg.database.auto_migrate = auto_migrate;
    cfg
}

#[tokio::test]
async fn prepare_migrates_when_enabled() -> anyhow::Result<()> {
    let app = server::prepare(&memory_config(true)).await?;
    let (status, list) = send(&app, "GET", "/articles", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list, json!([]));
    Ok(())
}

#[tokio::test]
async fn missing_schema_surfaces_driver_error_as_500() -> anyhow::Result<()> {
    let app = server::prepare(&memory_config(false)).await?;
    let (status, body) = send(&app, "GET", "/articles", None).await?;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let message = body["error"].as_str().unwrap_or_default();
    assert!(message.contains("no such table"), "unexpected error: {message}");

    let (status, body) = send(&app, "POST", "/articles", Some(sample("A"))).await?;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap_or_default().contains("no such table"));
    Ok(())
}
