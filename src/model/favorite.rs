use serde::{Deserialize, Serialize};

/// A user's favorite. Matches the original serializer, which omits `user_id`.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FavoriteDto {
    pub id: i32,
    pub favorite_id: i32,
    pub favorite_name: String,
    pub favorite_type: Option<String>,
}

impl From<entity::favorite::Model> for FavoriteDto {
    fn from(favorite: entity::favorite::Model) -> Self {
        Self {
            id: favorite.id,
            favorite_id: favorite.favorite_id,
            favorite_name: favorite.favorite_name,
            favorite_type: favorite.favorite_type,
        }
    }
}

/// Request body for adding a favorite to a user.
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct NewFavoriteDto {
    pub favorite_id: i32,
    pub favorite_name: String,
    pub favorite_type: Option<String>,
}

/// Composite filter for looking up a single favorite.
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct FavoriteQueryDto {
    pub favorite_id: i32,
    pub favorite_name: String,
    pub favorite_type: Option<String>,
    pub user_id: i32,
}
