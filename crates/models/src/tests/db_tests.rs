use std::time::Duration;

use configs::DatabaseConfig;
use sea_orm::{ConnectionTrait, DatabaseBackend};

use crate::db::{connect_options, connect_with_config};

#[test]
fn options_follow_config() {
    let mut cfg = DatabaseConfig::with_url("postgres://app@localhost/gestion_vente");
    cfg.max_connections = 7;
    cfg.min_connections = 2;
    cfg.acquire_timeout_secs = 5;
    let opts = connect_options(&cfg);
    assert_eq!(opts.get_max_connections(), Some(7));
    assert_eq!(opts.get_min_connections(), Some(2));
    assert_eq!(opts.get_acquire_timeout(), Some(Duration::from_secs(5)));
}

#[test]
fn in_memory_sqlite_is_pinned_to_one_connection() {
    let cfg = DatabaseConfig::with_url("sqlite::memory:");
    let opts = connect_options(&cfg);
    assert_eq!(opts.get_max_connections(), Some(1));
    assert_eq!(opts.get_min_connections(), Some(1));
}

#[tokio::test]
async fn connects_to_sqlite() -> anyhow::Result<()> {
    let db = connect_with_config(&DatabaseConfig::with_url("sqlite::memory:")).await?;
    assert_eq!(db.get_database_backend(), DatabaseBackend::Sqlite);
    Ok(())
}
