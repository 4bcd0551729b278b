use jsonwebtoken::{DecodingKey, EncodingKey};
use sea_orm::DatabaseConnection;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub auth: AuthKeys,
}

/// HS256 key pair used to sign and verify login tokens.
#[derive(Clone)]
pub struct AuthKeys {
    pub encoding: EncodingKey,
    pub decoding: DecodingKey,
}

impl AuthKeys {
    pub fn from_secret(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }
}

impl From<(DatabaseConnection, String)> for AppState {
    fn from((db, token_secret): (DatabaseConnection, String)) -> Self {
        Self {
            db,
            auth: AuthKeys::from_secret(&token_secret),
        }
    }
}
