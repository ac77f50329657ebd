use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// Origin of the deployed frontend, allowed by default.
pub const DEFAULT_ALLOWED_ORIGIN: &str = "https://metropolia-coding-marathon-2.onrender.com";

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    pub port: u16,
    pub jwt_secret: String,
    pub jwt_issuer: String,
    pub jwt_ttl_hours: i64,
    pub bcrypt_cost: u32,
    pub allowed_origins: Vec<String>,
    pub public_job_reads: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            database_url: env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            database_max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .context("DATABASE_MAX_CONNECTIONS must be a valid number")?,
            port: env::var("PORT")
                .unwrap_or_else(|_| "4000".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            jwt_secret: env::var("JWT_SECRET").context("JWT_SECRET must be set")?,
            jwt_issuer: env::var("JWT_ISSUER").unwrap_or_else(|_| "jobboard".to_string()),
            jwt_ttl_hours: env::var("JWT_TTL_HOURS")
                .unwrap_or_else(|_| "72".to_string())
                .parse()
                .context("JWT_TTL_HOURS must be a valid number")?,
            bcrypt_cost: parse_bcrypt_cost(env::var("BCRYPT_COST").ok().as_deref())?,
            allowed_origins: parse_origins(
                &env::var("ALLOWED_ORIGINS").unwrap_or_else(|_| DEFAULT_ALLOWED_ORIGIN.to_string()),
            ),
            public_job_reads: parse_flag(&env::var("PUBLIC_JOB_READS").unwrap_or_default()),
        })
    }
}

/// bcrypt work factor, `bcrypt::DEFAULT_COST` when unset. bcrypt accepts 4 to 31.
pub fn parse_bcrypt_cost(raw: Option<&str>) -> Result<u32> {
    let Some(raw) = raw else {
        return Ok(bcrypt::DEFAULT_COST);
    };
    let cost: u32 = raw
        .trim()
        .parse()
        .context("BCRYPT_COST must be a valid number")?;
    anyhow::ensure!(
        (4..=31).contains(&cost),
        "BCRYPT_COST must be between 4 and 31, got {cost}"
    );
    Ok(cost)
}

/// Split a comma-separated origin list, dropping blanks
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
