//! User and favorite fixture utilities.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};

use crate::{
    constant::{TEST_USER_EMAIL, TEST_USER_PASSWORD},
    error::TestError,
};

pub struct UserFixtures<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserFixtures<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Insert a user with the given credentials.
    pub async fn insert_user(
        &self,
        email: &str,
        password: &str,
    ) -> Result<entity::user::Model, TestError> {
        let user = entity::user::ActiveModel {
            email: ActiveValue::Set(email.to_string()),
            password: ActiveValue::Set(password.to_string()),
            is_active: ActiveValue::Set(true),
            ..Default::default()
        };

        Ok(user.insert(self.db).await?)
    }

    /// Insert a user with the standard test credentials.
    pub async fn insert_default_user(&self) -> Result<entity::user::Model, TestError> {
        self.insert_user(TEST_USER_EMAIL, TEST_USER_PASSWORD).await
    }

    /// Insert a favorite bookmark owned by the given user.
    pub async fn insert_favorite(
        &self,
        user_id: i32,
        favorite_id: i32,
        favorite_name: &str,
        favorite_type: &str,
    ) -> Result<entity::favorite::Model, TestError> {
        let favorite = entity::favorite::ActiveModel {
            user_id: ActiveValue::Set(Some(user_id)),
            favorite_id: ActiveValue::Set(favorite_id),
            favorite_name: ActiveValue::Set(favorite_name.to_string()),
            favorite_type: ActiveValue::Set(Some(favorite_type.to_string())),
            ..Default::default()
        };

        Ok(favorite.insert(self.db).await?)
    }
}
