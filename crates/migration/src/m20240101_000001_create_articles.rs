//! Create the `articles` table.
//! One row per listing; `photo_urls` keeps the comma-joined photo references.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Articles::Table)
                    .if_not_exists()
                    .col(pk_auto(Articles::Id))
                    .col(string_len(Articles::IdApp, 255))
                    .col(string_len(Articles::Surface, 64))
                    .col(string_len(Articles::Ville, 255))
                    .col(string_len(Articles::Prix, 64))
                    .col(text(Articles::Description))
                    .col(string_len(Articles::Status, 64))
                    .col(text(Articles::PhotoUrls))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Articles::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Articles {
    Table,
    Id,
    #[sea_orm(iden = "idApp")]
    IdApp,
    Surface,
    Ville,
    Prix,
    Description,
    Status,
    PhotoUrls,
}
