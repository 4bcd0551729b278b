use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260801_000002_character::Character, m20260801_000003_specie::Specie};

static FK_SPECIES_CHARACTERS_CHARACTER_ID: &str = "fk-species_characters-character_id";
static FK_SPECIES_CHARACTERS_SPECIE_ID: &str = "fk-species_characters-specie_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SpeciesCharacters::Table)
                    .if_not_exists()
                    .col(integer(SpeciesCharacters::CharacterId))
                    .col(integer(SpeciesCharacters::SpecieId))
                    .primary_key(
                        Index::create()
                            .col(SpeciesCharacters::CharacterId)
                            .col(SpeciesCharacters::SpecieId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SPECIES_CHARACTERS_CHARACTER_ID)
                    .from_tbl(SpeciesCharacters::Table)
                    .from_col(SpeciesCharacters::CharacterId)
                    .to_tbl(Character::Table)
                    .to_col(Character::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SPECIES_CHARACTERS_SPECIE_ID)
                    .from_tbl(SpeciesCharacters::Table)
                    .from_col(SpeciesCharacters::SpecieId)
                    .to_tbl(Specie::Table)
                    .to_col(Specie::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_SPECIES_CHARACTERS_SPECIE_ID)
                    .table(SpeciesCharacters::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_SPECIES_CHARACTERS_CHARACTER_ID)
                    .table(SpeciesCharacters::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(SpeciesCharacters::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum SpeciesCharacters {
    Table,
    CharacterId,
    SpecieId,
}
