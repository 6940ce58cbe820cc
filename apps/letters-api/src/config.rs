//! Environment configuration for the letters API

use std::path::PathBuf;

const DEFAULT_PORT: u16 = 3002;

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub port: u16,
    pub database_url: String,
}

impl ApiConfig {
    /// Read `PORT` and `DATABASE_URL`, falling back to local defaults
    pub fn from_env() -> Self {
        let port: u16 = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let database_url = std::env::var("DATABASE_URL").unwrap_or_else(|_| {
            let data_dir = dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("letters-api");
            std::fs::create_dir_all(&data_dir).ok();
            format!("sqlite:{}/letters.db?mode=rwc", data_dir.display())
        });

        Self { port, database_url }
    }
}
