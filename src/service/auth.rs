use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, Header, Validation};
use sea_orm::ConnectionTrait;

use crate::{
    data::user::UserRepository,
    error::{auth::AuthError, Error},
    model::{
        app::AuthKeys,
        auth::Claims,
    },
};

/// Signs a login token embedding the user's id.
///
/// The token carries no expiry: once issued it stays valid until the signing
/// secret changes.
pub fn issue_token(keys: &AuthKeys, user_id: i32) -> Result<String, jsonwebtoken::errors::Error> {
    let claims = Claims {
        sub: user_id,
        iat: Utc::now().timestamp(),
    };

    encode(&Header::new(Algorithm::HS256), &claims, &keys.encoding)
}

/// Verifies a login token signature and returns its claims.
pub fn decode_token(keys: &AuthKeys, token: &str) -> Result<Claims, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);
    // Tokens are issued without an expiry claim.
    validation.validate_exp = false;
    validation.required_spec_claims.clear();

    decode::<Claims>(token, &keys.decoding, &validation)
        .map(|data| data.claims)
        .map_err(|_| AuthError::InvalidToken)
}

pub struct AuthService<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AuthService<'a, C> {
    /// Creates a new instance of [`AuthService`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Registers a new user, rejecting emails that are already taken.
    ///
    /// The password is stored as provided; credential comparison at login is
    /// an exact match against the stored value.
    pub async fn register(&self, email: &str, password: &str) -> Result<entity::user::Model, Error> {
        let user_repository = UserRepository::new(self.db);

        if user_repository.get_by_email(email).await?.is_some() {
            return Err(AuthError::EmailTaken.into());
        }

        let user = user_repository.create(email, password).await?;

        tracing::info!(user_id = %user.id, "Registered new user");

        Ok(user)
    }

    /// Verifies credentials and issues a login token on success.
    pub async fn login(
        &self,
        keys: &AuthKeys,
        email: &str,
        password: &str,
    ) -> Result<String, Error> {
        let user_repository = UserRepository::new(self.db);

        let user = user_repository
            .get_by_credentials(email, password)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        Ok(issue_token(keys, user.id)?)
    }
}
