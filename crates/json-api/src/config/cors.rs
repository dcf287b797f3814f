//! CORS Config

use clap::Args;

/// Cross-origin access settings.
#[derive(Debug, Args)]
pub struct CorsConfig {
    /// Origin of the admin frontend allowed to call the API. When unset, no
    /// cross-origin requests are allowed.
    #[arg(long, env = "FRONTEND_URL")]
    pub frontend_url: Option<String>,
}
