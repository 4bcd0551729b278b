use sea_orm::ConnectionTrait;

use crate::{
    data::{favorite::FavoriteRepository, user::UserRepository},
    error::{resource::ResourceError, Error},
    model::favorite::{FavoriteQueryDto, NewFavoriteDto},
};

pub struct FavoriteService<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteService<'a, C> {
    /// Creates a new instance of [`FavoriteService`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Lists a user's favorites, failing if the user does not exist
    pub async fn list_for_user(&self, user_id: i32) -> Result<Vec<entity::favorite::Model>, Error> {
        self.ensure_user_exists(user_id).await?;

        let favorite_repository = FavoriteRepository::new(self.db);

        Ok(favorite_repository.get_many_by_user_id(user_id).await?)
    }

    /// Adds a favorite for a user, failing if the user does not exist
    pub async fn add_for_user(
        &self,
        user_id: i32,
        new_favorite: NewFavoriteDto,
    ) -> Result<entity::favorite::Model, Error> {
        self.ensure_user_exists(user_id).await?;

        let favorite_repository = FavoriteRepository::new(self.db);

        Ok(favorite_repository
            .create(
                user_id,
                new_favorite.favorite_id,
                &new_favorite.favorite_name,
                new_favorite.favorite_type.as_deref(),
            )
            .await?)
    }

    /// Deletes a favorite by id, failing if it does not exist
    ///
    /// A repeated delete for the same id fails the existence check, so the
    /// operation reports 404 rather than silently succeeding twice.
    pub async fn remove(&self, favorite_id: i32) -> Result<(), Error> {
        let favorite_repository = FavoriteRepository::new(self.db);

        if favorite_repository.get(favorite_id).await?.is_none() {
            return Err(ResourceError::FavoriteNotFound(favorite_id).into());
        }

        favorite_repository.delete(favorite_id).await?;

        Ok(())
    }

    /// Finds the first favorite matching the composite filter
    pub async fn find_match(
        &self,
        query: FavoriteQueryDto,
    ) -> Result<entity::favorite::Model, Error> {
        let favorite_repository = FavoriteRepository::new(self.db);

        favorite_repository
            .find_match(
                query.favorite_id,
                &query.favorite_name,
                query.favorite_type.as_deref(),
                query.user_id,
            )
            .await?
            .ok_or_else(|| ResourceError::FavoriteNoMatch.into())
    }

    async fn ensure_user_exists(&self, user_id: i32) -> Result<(), Error> {
        let user_repository = UserRepository::new(self.db);

        if user_repository.get(user_id).await?.is_none() {
            return Err(ResourceError::UserNotFound(user_id).into());
        }

        Ok(())
    }
}
