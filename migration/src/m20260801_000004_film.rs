use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Film::Table)
                    .if_not_exists()
                    .col(pk_auto(Film::Id))
                    .col(string(Film::Name))
                    .col(integer(Film::EpisodeId))
                    .col(string(Film::Producer))
                    .col(string(Film::Director))
                    .col(string(Film::ReleaseDate))
                    .col(text_null(Film::Opening))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Film::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Film {
    Table,
    Id,
    Name,
    EpisodeId,
    Producer,
    Director,
    ReleaseDate,
    Opening,
}
