use std::net::IpAddr;

/// One year. Longer lifetimes overflow token expiry arithmetic.
pub const MAX_TOKEN_TTL_MINUTES: i64 = 525_600;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub host: IpAddr,
    pub port: u16,
    pub token_ttl_minutes: i64,
    pub max_page_size: i64,
    pub max_body_size: usize,
    pub db_max_connections: u32,
    pub cors_origins: CorsOrigins,
    pub seed_default_users: bool,
    pub log_level: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CorsOrigins {
    Any,
    List(Vec<String>),
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let database_url = env_required("DATABASE_URL")?;
        let jwt_secret = env_required("JWT_SECRET")?;

        let host: IpAddr = env_or("KART_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid KART_HOST: {e}"))?;

        let port: u16 = env_or("KART_PORT", "8000")
            .parse()
            .map_err(|e| format!("Invalid KART_PORT: {e}"))?;

        let token_ttl_minutes = parse_token_ttl(&env_or("KART_TOKEN_TTL_MINUTES", "30"))?;

        let max_page_size: i64 = env_or("KART_MAX_PAGE_SIZE", "1000")
            .parse()
            .map_err(|e| format!("Invalid KART_MAX_PAGE_SIZE: {e}"))?;
        if max_page_size <= 0 {
            return Err("KART_MAX_PAGE_SIZE must be positive".to_string());
        }

        let max_body_size: usize = env_or("KART_MAX_BODY_SIZE", "1048576")
            .parse()
            .map_err(|e| format!("Invalid KART_MAX_BODY_SIZE: {e}"))?;

        let db_max_connections: u32 = env_or("KART_DB_MAX_CONNECTIONS", "10")
            .parse()
            .map_err(|e| format!("Invalid KART_DB_MAX_CONNECTIONS: {e}"))?;

        let cors_origins = parse_cors_origins(&env_or("KART_CORS_ORIGINS", "*"));

        let seed_default_users = parse_bool(&env_or("KART_SEED_DEFAULT_USERS", "false"))
            .ok_or_else(|| "Invalid KART_SEED_DEFAULT_USERS: expected true or false".to_string())?;

        let log_level = env_or("KART_LOG_LEVEL", "info");

        Ok(Config {
            database_url,
            jwt_secret,
            host,
            port,
            token_ttl_minutes,
            max_page_size,
            max_body_size,
            db_max_connections,
            cors_origins,
            seed_default_users,
            log_level,
        })
    }
}

pub fn parse_token_ttl(raw: &str) -> Result<i64, String> {
    let minutes: i64 = raw
        .trim()
        .parse()
        .map_err(|e| format!("Invalid KART_TOKEN_TTL_MINUTES: {e}"))?;
    if minutes <= 0 {
        return Err("KART_TOKEN_TTL_MINUTES must be positive".to_string());
    }
    if minutes > MAX_TOKEN_TTL_MINUTES {
        return Err(format!(
            "KART_TOKEN_TTL_MINUTES must be at most {MAX_TOKEN_TTL_MINUTES}"
        ));
    }
    Ok(minutes)
}

pub fn parse_cors_origins(raw: &str) -> CorsOrigins {
    let origins: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    if origins.is_empty() || origins.iter().any(|o| o == "*") {
        CorsOrigins::Any
    } else {
        CorsOrigins::List(origins)
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

fn env_required(key: &str) -> Result<String, String> {
    std::env::var(key).map_err(|_| format!("Missing required environment variable: {key}"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
