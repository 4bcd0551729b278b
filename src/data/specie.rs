use sea_orm::{ConnectionTrait, DbErr, EntityTrait};

pub struct SpecieRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SpecieRepository<'a, C> {
    /// Creates a new instance of [`SpecieRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets every specie with its member characters (through the join table)
    pub async fn all_with_characters(
        &self,
    ) -> Result<Vec<(entity::specie::Model, Vec<entity::character::Model>)>, DbErr> {
        entity::prelude::Specie::find()
            .find_with_related(entity::prelude::Character)
            .all(self.db)
            .await
    }

    /// Gets a single specie with its member characters
    pub async fn get_with_characters(
        &self,
        specie_id: i32,
    ) -> Result<Option<(entity::specie::Model, Vec<entity::character::Model>)>, DbErr> {
        let mut rows = entity::prelude::Specie::find_by_id(specie_id)
            .find_with_related(entity::prelude::Character)
            .all(self.db)
            .await?;

        Ok(rows.pop())
    }
}
