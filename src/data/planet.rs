use sea_orm::{ConnectionTrait, DbErr, EntityTrait};

pub struct PlanetRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlanetRepository<'a, C> {
    /// Creates a new instance of [`PlanetRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets every planet with its resident characters
    pub async fn all_with_characters(
        &self,
    ) -> Result<Vec<(entity::planet::Model, Vec<entity::character::Model>)>, DbErr> {
        entity::prelude::Planet::find()
            .find_with_related(entity::prelude::Character)
            .all(self.db)
            .await
    }

    /// Gets a single planet with its resident characters
    pub async fn get_with_characters(
        &self,
        planet_id: i32,
    ) -> Result<Option<(entity::planet::Model, Vec<entity::character::Model>)>, DbErr> {
        let mut rows = entity::prelude::Planet::find_by_id(planet_id)
            .find_with_related(entity::prelude::Character)
            .all(self.db)
            .await?;

        Ok(rows.pop())
    }
}
