use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260801_000002_character::Character, m20260801_000004_film::Film};

static FK_FILM_CHARACTERS_CHARACTER_ID: &str = "fk-film_characters-character_id";
static FK_FILM_CHARACTERS_FILM_ID: &str = "fk-film_characters-film_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FilmCharacters::Table)
                    .if_not_exists()
                    .col(integer(FilmCharacters::CharacterId))
                    .col(integer(FilmCharacters::FilmId))
                    .primary_key(
                        Index::create()
                            .col(FilmCharacters::CharacterId)
                            .col(FilmCharacters::FilmId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FILM_CHARACTERS_CHARACTER_ID)
                    .from_tbl(FilmCharacters::Table)
                    .from_col(FilmCharacters::CharacterId)
                    .to_tbl(Character::Table)
                    .to_col(Character::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FILM_CHARACTERS_FILM_ID)
                    .from_tbl(FilmCharacters::Table)
                    .from_col(FilmCharacters::FilmId)
                    .to_tbl(Film::Table)
                    .to_col(Film::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_FILM_CHARACTERS_FILM_ID)
                    .table(FilmCharacters::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_FILM_CHARACTERS_CHARACTER_ID)
                    .table(FilmCharacters::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(FilmCharacters::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum FilmCharacters {
    Table,
    CharacterId,
    FilmId,
}
