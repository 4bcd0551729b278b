use crate::error::config::ConfigError;

const DEFAULT_PORT: u16 = 3000;

pub struct Config {
    pub database_url: String,
    pub token_secret: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: require_var("DATABASE_URL")?,
            token_secret: require_var("TOKEN_SECRET")?,
            port: match std::env::var("PORT") {
                Ok(value) => value
                    .parse()
                    .map_err(|_| ConfigError::InvalidEnvVar("PORT"))?,
                Err(_) => DEFAULT_PORT,
            },
        })
    }
}

fn require_var(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name))
}
