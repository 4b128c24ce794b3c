use anyhow::Result;
use tracing::{error, info};

use identity::scripts::login;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    identity::telemetry::init()?;

    info!("Starting login verification");

    let client = match identity::connect() {
        Ok(client) => client,
        Err(err) => {
            error!("{:#}", err);
            println!("Login failed: {:#}", err);
            return Ok(());
        }
    };

    let mut stdout = std::io::stdout().lock();
    match login::run(&client, &mut stdout).await {
        Ok(outcome) => info!("Login verification finished: {:?}", outcome),
        Err(err) => error!("Failed to write login report: {}", err),
    }

    Ok(())
}
