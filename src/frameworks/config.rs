use std::env;

// Runtime configuration read from the environment (and `.env` when present).

pub const DEFAULT_HTTP_PORT: u16 = 5000;
pub const DEFAULT_MAX_DB_CONNECTIONS: u32 = 5;

pub fn http_port() -> u16 {
    parse_or(env::var("SONG_SERVER_PORT").ok(), DEFAULT_HTTP_PORT)
}

// Unset or blank means the in-memory store is used.
pub fn database_url() -> Option<String> {
    env::var("DATABASE_URL")
        .ok()
        .filter(|value| !value.trim().is_empty())
}

pub fn database_max_connections() -> u32 {
    parse_or(
        env::var("DATABASE_MAX_CONNECTIONS").ok(),
        DEFAULT_MAX_DB_CONNECTIONS,
    )
}

pub fn seed_enabled() -> bool {
    parse_flag(env::var("SONG_SEED").ok(), true)
}

fn parse_or<T: std::str::FromStr>(value: Option<String>, default: T) -> T {
    value
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}

fn parse_flag(value: Option<String>, default: bool) -> bool {
    match value.as_deref().map(str::trim) {
        Some("1" | "true" | "yes" | "on") => true,
        Some("0" | "false" | "no" | "off") => false,
        _ => default,
    }
}
