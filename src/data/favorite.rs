use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter,
};

pub struct FavoriteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteRepository<'a, C> {
    /// Creates a new instance of [`FavoriteRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new favorite owned by the given user
    pub async fn create(
        &self,
        user_id: i32,
        favorite_id: i32,
        favorite_name: &str,
        favorite_type: Option<&str>,
    ) -> Result<entity::favorite::Model, DbErr> {
        let favorite = entity::favorite::ActiveModel {
            user_id: ActiveValue::Set(Some(user_id)),
            favorite_id: ActiveValue::Set(favorite_id),
            favorite_name: ActiveValue::Set(favorite_name.to_string()),
            favorite_type: ActiveValue::Set(favorite_type.map(str::to_string)),
            ..Default::default()
        };

        favorite.insert(self.db).await
    }

    pub async fn get(&self, favorite_id: i32) -> Result<Option<entity::favorite::Model>, DbErr> {
        entity::prelude::Favorite::find_by_id(favorite_id)
            .one(self.db)
            .await
    }

    /// Gets every favorite across all users
    pub async fn all(&self) -> Result<Vec<entity::favorite::Model>, DbErr> {
        entity::prelude::Favorite::find().all(self.db).await
    }

    /// Gets all favorites owned by the given user
    pub async fn get_many_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::favorite::Model>, DbErr> {
        entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .all(self.db)
            .await
    }

    /// Finds the first favorite matching the full composite filter
    pub async fn find_match(
        &self,
        favorite_id: i32,
        favorite_name: &str,
        favorite_type: Option<&str>,
        user_id: i32,
    ) -> Result<Option<entity::favorite::Model>, DbErr> {
        let mut query = entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::FavoriteId.eq(favorite_id))
            .filter(entity::favorite::Column::FavoriteName.eq(favorite_name))
            .filter(entity::favorite::Column::UserId.eq(user_id));

        if let Some(favorite_type) = favorite_type {
            query = query.filter(entity::favorite::Column::FavoriteType.eq(favorite_type));
        }

        query.one(self.db).await
    }

    /// Deletes a favorite
    ///
    /// Returns OK regardless of the favorite existing, to confirm the deletion
    /// result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, favorite_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Favorite::delete_by_id(favorite_id)
            .exec(self.db)
            .await
    }
}
