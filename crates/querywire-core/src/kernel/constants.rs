/// Application name
pub const APP_NAME: &str = "Querywire";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment used when the configuration names none
pub const DEFAULT_ENVIRONMENT: &str = "dev";
