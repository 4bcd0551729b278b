use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260801_000001_planet::Planet;

static FK_CHARACTER_PLANET_ID: &str = "fk-character-planet_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Character::Table)
                    .if_not_exists()
                    .col(pk_auto(Character::Id))
                    .col(string(Character::Name))
                    .col(integer(Character::Height))
                    .col(integer(Character::Mass))
                    .col(string_null(Character::HairColor))
                    .col(string_null(Character::SkinColor))
                    .col(string_null(Character::EyeColor))
                    .col(string(Character::BirthYear))
                    .col(string(Character::Gender))
                    .col(integer_null(Character::PlanetId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CHARACTER_PLANET_ID)
                    .from_tbl(Character::Table)
                    .from_col(Character::PlanetId)
                    .to_tbl(Planet::Table)
                    .to_col(Planet::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_CHARACTER_PLANET_ID)
                    .table(Character::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Character::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Character {
    Table,
    Id,
    Name,
    Height,
    Mass,
    HairColor,
    SkinColor,
    EyeColor,
    BirthYear,
    Gender,
    PlanetId,
}
