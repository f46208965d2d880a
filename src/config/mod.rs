use crate::utils::error::{ApiError, Result};
use crate::utils::validation::Validate;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "camp-api")]
#[command(about = "Camp signup API server")]
pub struct CliConfig {
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    #[arg(long, default_value = "5555")]
    pub port: u16,

    #[arg(long, default_value = "sqlite:app.db")]
    pub database_url: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if self.database_url.trim().is_empty() {
            return Err(ApiError::Config {
                message: "database_url cannot be empty".to_string(),
            });
        }
        if !self.database_url.starts_with("sqlite:") {
            return Err(ApiError::Config {
                message: format!("Unsupported database URL: {}", self.database_url),
            });
        }
        Ok(())
    }
}
