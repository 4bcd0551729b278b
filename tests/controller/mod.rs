mod auth;
mod character;
mod favorite;
mod film;
mod planet;
mod sitemap;
mod specie;
mod user;
