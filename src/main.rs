//! freshkit - connectivity probe for Freshdesk and Freshservice accounts
//!
//! Loads the client configuration, sends one authenticated request and
//! reports the outcome through tracing.
//!
//! # Configuration
//!
//! Set the following environment variables (or use a `.env` file):
//!
//! - `FRESH_DOMAIN`: account domain, e.g. `acme.freshdesk.com`
//! - `FRESH_API_KEY`, or `FRESH_USERNAME` and `FRESH_PASSWORD`
//! - `FRESH_PRODUCT`: `freshdesk` (default) or `freshservice`
//!
//! # Usage
//!
//! ```bash
//! FRESH_DOMAIN=acme.freshservice.com FRESH_API_KEY=xxx FRESH_PRODUCT=freshservice ./freshkit
//! ```

use anyhow::{bail, Context, Result};
use tracing_subscriber::{fmt, EnvFilter};

use freshkit::freshdesk::Freshdesk;
use freshkit::freshservice::Freshservice;
use freshkit::Config;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("freshkit=info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    tracing::info!("Starting freshkit v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env().context("Failed to load configuration")?;
    let product = std::env::var("FRESH_PRODUCT").unwrap_or_else(|_| "freshdesk".to_string());

    tracing::debug!(base_url = %config.base_url(), product = %product, "Configuration loaded");

    let result = match product.trim().to_ascii_lowercase().as_str() {
        "freshdesk" => {
            let fd = Freshdesk::new(&config).context("Failed to create Freshdesk client")?;
            fd.client().test_connection().await
        }
        "freshservice" => {
            let fs = Freshservice::new(&config).context("Failed to create Freshservice client")?;
            fs.client().test_connection().await
        }
        other => bail!("FRESH_PRODUCT must be freshdesk or freshservice, got {:?}", other),
    };

    result.with_context(|| format!("Connection test against {} failed", config.domain))?;

    tracing::info!(domain = %config.domain, product = %product, "Account reachable");

    Ok(())
}
