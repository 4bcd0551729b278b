//! Planet, character, specie, and film fixture utilities.
//!
//! These helpers insert rows with standard values so tests only specify the
//! fields they care about. Join table links are inserted through the dedicated
//! `link_*` methods.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};

use crate::error::TestError;

pub struct GalaxyFixtures<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GalaxyFixtures<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Insert a planet with standard test values.
    pub async fn insert_planet(&self, name: &str) -> Result<entity::planet::Model, TestError> {
        let planet = entity::planet::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            diameter: ActiveValue::Set(Some(10465)),
            rotation_period: ActiveValue::Set(Some(23)),
            orbital_period: ActiveValue::Set(Some(304)),
            gravity: ActiveValue::Set(Some("1 standard".to_string())),
            population: ActiveValue::Set(200_000),
            climate: ActiveValue::Set(Some("arid".to_string())),
            terrain: ActiveValue::Set("desert".to_string()),
            surface_water: ActiveValue::Set(Some(1)),
            ..Default::default()
        };

        Ok(planet.insert(self.db).await?)
    }

    /// Insert a character, optionally homed on a planet.
    pub async fn insert_character(
        &self,
        name: &str,
        planet_id: Option<i32>,
    ) -> Result<entity::character::Model, TestError> {
        let character = entity::character::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            height: ActiveValue::Set(172),
            mass: ActiveValue::Set(77),
            hair_color: ActiveValue::Set(Some("blond".to_string())),
            skin_color: ActiveValue::Set(Some("fair".to_string())),
            eye_color: ActiveValue::Set(Some("blue".to_string())),
            birth_year: ActiveValue::Set("19BBY".to_string()),
            gender: ActiveValue::Set("male".to_string()),
            planet_id: ActiveValue::Set(planet_id),
            ..Default::default()
        };

        Ok(character.insert(self.db).await?)
    }

    /// Insert a specie, optionally homed on a planet.
    pub async fn insert_specie(
        &self,
        name: &str,
        planet_id: Option<i32>,
    ) -> Result<entity::specie::Model, TestError> {
        let specie = entity::specie::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            classification: ActiveValue::Set("mammal".to_string()),
            designation: ActiveValue::Set(Some("sentient".to_string())),
            average_height: ActiveValue::Set(Some(180)),
            average_lifespan: ActiveValue::Set(Some(120)),
            hair_colors: ActiveValue::Set(Some("blonde, brown, black".to_string())),
            skin_colors: ActiveValue::Set(Some("caucasian, black, tan".to_string())),
            eye_colors: ActiveValue::Set(Some("brown, blue, green".to_string())),
            language: ActiveValue::Set(Some("Galactic Basic".to_string())),
            planet_id: ActiveValue::Set(planet_id),
            ..Default::default()
        };

        Ok(specie.insert(self.db).await?)
    }

    /// Insert a film with standard test values.
    pub async fn insert_film(
        &self,
        name: &str,
        episode_id: i32,
    ) -> Result<entity::film::Model, TestError> {
        let film = entity::film::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            episode_id: ActiveValue::Set(episode_id),
            producer: ActiveValue::Set("Gary Kurtz, Rick McCallum".to_string()),
            director: ActiveValue::Set("George Lucas".to_string()),
            release_date: ActiveValue::Set("1977-05-25".to_string()),
            opening: ActiveValue::Set(Some("It is a period of civil war.".to_string())),
            ..Default::default()
        };

        Ok(film.insert(self.db).await?)
    }

    /// Link a character to a specie.
    pub async fn link_character_specie(
        &self,
        character_id: i32,
        specie_id: i32,
    ) -> Result<entity::species_characters::Model, TestError> {
        let link = entity::species_characters::ActiveModel {
            character_id: ActiveValue::Set(character_id),
            specie_id: ActiveValue::Set(specie_id),
        };

        Ok(link.insert(self.db).await?)
    }
}
