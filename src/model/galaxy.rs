use serde::{Deserialize, Serialize};

/// Abbreviated character reference embedded in planet and specie responses.
///
/// Deliberately limited to id and name: embedding full characters would pull
/// their planet, which pulls its species and films, and so on. Truncating the
/// cycle here keeps serialization bounded.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CharacterSummaryDto {
    pub id: i32,
    pub name: String,
}

impl From<entity::character::Model> for CharacterSummaryDto {
    fn from(character: entity::character::Model) -> Self {
        Self {
            id: character.id,
            name: character.name,
        }
    }
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PlanetDto {
    pub id: i32,
    pub name: String,
    pub diameter: Option<i32>,
    pub rotation_period: Option<i32>,
    pub orbital_period: Option<i32>,
    pub gravity: Option<String>,
    pub population: i64,
    pub climate: Option<String>,
    pub terrain: String,
    pub surface_water: Option<i32>,
    pub characters: Vec<CharacterSummaryDto>,
}

impl From<(entity::planet::Model, Vec<entity::character::Model>)> for PlanetDto {
    fn from((planet, characters): (entity::planet::Model, Vec<entity::character::Model>)) -> Self {
        Self {
            id: planet.id,
            name: planet.name,
            diameter: planet.diameter,
            rotation_period: planet.rotation_period,
            orbital_period: planet.orbital_period,
            gravity: planet.gravity,
            population: planet.population,
            climate: planet.climate,
            terrain: planet.terrain,
            surface_water: planet.surface_water,
            characters: characters
                .into_iter()
                .map(CharacterSummaryDto::from)
                .collect(),
        }
    }
}

/// Full character record. The home planet appears as an id reference only.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CharacterDto {
    pub id: i32,
    pub name: String,
    pub height: i32,
    pub mass: i32,
    pub hair_color: Option<String>,
    pub skin_color: Option<String>,
    pub eye_color: Option<String>,
    pub birth_year: String,
    pub gender: String,
    pub planet_id: Option<i32>,
}

impl From<entity::character::Model> for CharacterDto {
    fn from(character: entity::character::Model) -> Self {
        Self {
            id: character.id,
            name: character.name,
            height: character.height,
            mass: character.mass,
            hair_color: character.hair_color,
            skin_color: character.skin_color,
            eye_color: character.eye_color,
            birth_year: character.birth_year,
            gender: character.gender,
            planet_id: character.planet_id,
        }
    }
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SpecieDto {
    pub id: i32,
    pub name: String,
    pub classification: String,
    pub designation: Option<String>,
    pub average_height: Option<i32>,
    pub average_lifespan: Option<i32>,
    pub hair_colors: Option<String>,
    pub skin_colors: Option<String>,
    pub eye_colors: Option<String>,
    pub language: Option<String>,
    pub planet_id: Option<i32>,
    pub characters: Vec<CharacterSummaryDto>,
}

impl From<(entity::specie::Model, Vec<entity::character::Model>)> for SpecieDto {
    fn from((specie, characters): (entity::specie::Model, Vec<entity::character::Model>)) -> Self {
        Self {
            id: specie.id,
            name: specie.name,
            classification: specie.classification,
            designation: specie.designation,
            average_height: specie.average_height,
            average_lifespan: specie.average_lifespan,
            hair_colors: specie.hair_colors,
            skin_colors: specie.skin_colors,
            eye_colors: specie.eye_colors,
            language: specie.language,
            planet_id: specie.planet_id,
            characters: characters
                .into_iter()
                .map(CharacterSummaryDto::from)
                .collect(),
        }
    }
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FilmDto {
    pub id: i32,
    pub name: String,
    pub episode_id: i32,
    pub producer: String,
    pub director: String,
    pub release_date: String,
    pub opening: Option<String>,
}

impl From<entity::film::Model> for FilmDto {
    fn from(film: entity::film::Model) -> Self {
        Self {
            id: film.id,
            name: film.name,
            episode_id: film.episode_id,
            producer: film.producer,
            director: film.director,
            release_date: film.release_date,
            opening: film.opening,
        }
    }
}
