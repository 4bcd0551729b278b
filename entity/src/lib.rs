pub mod character;
pub mod favorite;
pub mod film;
pub mod film_characters;
pub mod film_planets;
pub mod film_species;
pub mod planet;
pub mod specie;
pub mod species_characters;
pub mod user;

pub mod prelude {
    pub use super::character::Entity as Character;
    pub use super::favorite::Entity as Favorite;
    pub use super::film::Entity as Film;
    pub use super::film_characters::Entity as FilmCharacters;
    pub use super::film_planets::Entity as FilmPlanets;
    pub use super::film_species::Entity as FilmSpecies;
    pub use super::planet::Entity as Planet;
    pub use super::specie::Entity as Specie;
    pub use super::species_characters::Entity as SpeciesCharacters;
    pub use super::user::Entity as User;
}
