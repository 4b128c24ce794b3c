use anyhow::Result;
use tracing::{error, info};

use identity::scripts::provision;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    identity::telemetry::init()?;

    info!("Starting user provisioning");

    let client = match identity::connect() {
        Ok(client) => client,
        Err(err) => {
            error!("{:#}", err);
            println!("Error creating user: {:#}", err);
            return Ok(());
        }
    };

    let mut stdout = std::io::stdout().lock();
    match provision::run(&client, &mut stdout).await {
        Ok(outcome) => info!("Provisioning finished: {:?}", outcome),
        Err(err) => error!("Failed to write provisioning report: {}", err),
    }

    Ok(())
}
