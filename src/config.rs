use anyhow::{bail, Result};
use std::net::SocketAddr;

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub port: u16,

    // Persisted preferences (the selected language)
    pub preferences_file: String,

    // Built front-end bundle and static images
    pub public_dir: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let config = Self {
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),

            preferences_file: std::env::var("PREFERENCES_FILE")
                .unwrap_or_else(|_| "data/preferences.json".to_string()),

            public_dir: std::env::var("PUBLIC_DIR").unwrap_or_else(|_| "public".to_string()),
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.preferences_file.trim().is_empty() {
            bail!("PREFERENCES_FILE must not be empty");
        }
        if self.public_dir.trim().is_empty() {
            bail!("PUBLIC_DIR must not be empty");
        }
        Ok(())
    }

    pub fn bind_address(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}
