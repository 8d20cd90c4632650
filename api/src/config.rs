use std::env;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    /// Base URL of the hosted user directory (identity provider backend API)
    pub directory_url: String,
    /// Secret key for authenticating against the directory API
    pub directory_secret_key: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            directory_url: env::var("DIRECTORY_URL")
                .unwrap_or_else(|_| "http://localhost:3100".to_string()),
            directory_secret_key: env::var("DIRECTORY_SECRET_KEY").unwrap_or_default(),
        }
    }
}
