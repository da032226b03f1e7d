use clap::Parser;
use oa_zendesk_sync::utils::{logger, validation::Validate};
use oa_zendesk_sync::{CliConfig, JsonRecordStore, SyncEngine, ZendeskClient};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting oa-zendesk-sync");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let stores = match JsonRecordStore::load(&config.records) {
        Ok(stores) => stores,
        Err(e) => {
            tracing::error!("❌ Failed to load record export {}: {}", config.records, e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let helpdesk = ZendeskClient::new(&config.email, &config.token, &config.uri);
    let ticket_id = config.ticket.clone();
    let engine = SyncEngine::new(stores, helpdesk, config);

    match engine.run(&ticket_id).await {
        Ok(outcome) => {
            tracing::info!(
                "✅ Synced {} to ZenDesk ticket {} (requester {})",
                outcome.external_id,
                outcome.zendesk_ticket_id,
                outcome.zendesk_user_id
            );
            println!(
                "✅ Synced {} to ZenDesk ticket {}",
                outcome.external_id, outcome.zendesk_ticket_id
            );
        }
        Err(e) => {
            tracing::error!("❌ Sync failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}
