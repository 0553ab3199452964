/// Database configuration and connection management
pub mod database;

/// Application settings and catalog seeding from config.toml
pub mod inventory;

/// Staff nickname configuration from environment variables
pub mod users;
