use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260801_000003_specie::Specie, m20260801_000004_film::Film};

static FK_FILM_SPECIES_SPECIE_ID: &str = "fk-film_species-specie_id";
static FK_FILM_SPECIES_FILM_ID: &str = "fk-film_species-film_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FilmSpecies::Table)
                    .if_not_exists()
                    .col(integer(FilmSpecies::SpecieId))
                    .col(integer(FilmSpecies::FilmId))
                    .primary_key(
                        Index::create()
                            .col(FilmSpecies::SpecieId)
                            .col(FilmSpecies::FilmId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FILM_SPECIES_SPECIE_ID)
                    .from_tbl(FilmSpecies::Table)
                    .from_col(FilmSpecies::SpecieId)
                    .to_tbl(Specie::Table)
                    .to_col(Specie::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FILM_SPECIES_FILM_ID)
                    .from_tbl(FilmSpecies::Table)
                    .from_col(FilmSpecies::FilmId)
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
                    .name(FK_FILM_SPECIES_FILM_ID)
                    .table(FilmSpecies::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_FILM_SPECIES_SPECIE_ID)
                    .table(FilmSpecies::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(FilmSpecies::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum FilmSpecies {
    Table,
    SpecieId,
    FilmId,
}
