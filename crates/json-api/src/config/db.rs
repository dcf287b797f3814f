//! Database Config

use clap::{ArgAction, Args};

/// Database settings.
#[derive(Debug, Args)]
pub struct DatabaseConfig {
    /// `PostgreSQL` connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: String,

    /// Apply pending migrations before serving requests
    #[arg(
        long,
        env = "RUN_MIGRATIONS",
        default_value_t = true,
        action = ArgAction::Set
    )]
    pub run_migrations: bool,
}
