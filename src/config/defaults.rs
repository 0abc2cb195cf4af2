pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: i64 = 5555;
pub const DEFAULT_RUST_LOG: &str = "debug,tower_http=debug,sqlx=warn";
pub const DEFAULT_DATABASE_URL: &str = "sqlite://app.db?mode=rwc";
pub const DEFAULT_DB_MAX_CONNECTIONS: i64 = 10;
pub const DEFAULT_DB_MIN_IDLE: i64 = 2;
pub const DEFAULT_DB_SEED: bool = true;

/// Connection string variable understood for compatibility with older deployments.
pub const LEGACY_DATABASE_URL_VAR: &str = "DB_URI";
