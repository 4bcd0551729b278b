pub use sea_orm_migration::prelude::*;

mod m20260801_000001_planet;
mod m20260801_000002_character;
mod m20260801_000003_specie;
mod m20260801_000004_film;
mod m20260801_000005_user;
mod m20260801_000006_favorite;
mod m20260801_000007_species_characters;
mod m20260801_000008_film_characters;
mod m20260801_000009_film_planets;
mod m20260801_000010_film_species;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260801_000001_planet::Migration),
            Box::new(m20260801_000002_character::Migration),
            Box::new(m20260801_000003_specie::Migration),
            Box::new(m20260801_000004_film::Migration),
            Box::new(m20260801_000005_user::Migration),
            Box::new(m20260801_000006_favorite::Migration),
            Box::new(m20260801_000007_species_characters::Migration),
            Box::new(m20260801_000008_film_characters::Migration),
            Box::new(m20260801_000009_film_planets::Migration),
            Box::new(m20260801_000010_film_species::Migration),
        ]
    }
}
