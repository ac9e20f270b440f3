//! Print account stats.
//!
//! ```text
//! GENGO_PUBLIC_KEY=... GENGO_PRIVATE_KEY=... cargo run --example account_stats
//! ```
//!
//! Set `GENGO_PRODUCTION=1` to query the production API instead of the sandbox.

use gengo_client::observability::logging::init_logging;
use gengo_client::GengoClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging("info");

    let client = GengoClient::from_env()?;
    let stats = client.account_stats().await?;

    tracing::info!(user_since = %stats.user_since, "Account stats retrieved");
    println!("User since:    {}", stats.user_since);
    println!("Credits spent: {} {}", stats.credits_spent, stats.currency);
    if let Some(processing) = stats.processing {
        println!("Processing:    {} {}", processing, stats.currency);
    }
    Ok(())
}
