use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260801_000001_planet::Planet, m20260801_000004_film::Film};

static FK_FILM_PLANETS_PLANET_ID: &str = "fk-film_planets-planet_id";
static FK_FILM_PLANETS_FILM_ID: &str = "fk-film_planets-film_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FilmPlanets::Table)
                    .if_not_exists()
                    .col(integer(FilmPlanets::PlanetId))
                    .col(integer(FilmPlanets::FilmId))
                    .primary_key(
                        Index::create()
                            .col(FilmPlanets::PlanetId)
                            .col(FilmPlanets::FilmId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FILM_PLANETS_PLANET_ID)
                    .from_tbl(FilmPlanets::Table)
                    .from_col(FilmPlanets::PlanetId)
                    .to_tbl(Planet::Table)
                    .to_col(Planet::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FILM_PLANETS_FILM_ID)
                    .from_tbl(FilmPlanets::Table)
                    .from_col(FilmPlanets::FilmId)
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
                    .name(FK_FILM_PLANETS_FILM_ID)
                    .table(FilmPlanets::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_FILM_PLANETS_PLANET_ID)
                    .table(FilmPlanets::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(FilmPlanets::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum FilmPlanets {
    Table,
    PlanetId,
    FilmId,
}
