use dotenv::dotenv;
use log::info;
use std::sync::Arc;

mod config;
mod error;
mod models;
mod services;
mod utils;
mod views;

use crate::config::Config;
use crate::services::clipboard::{
    ClickEvent, CommandClipboard, CopyHandlerCache, CopyOptions, LogNotifier,
};
use crate::services::feature_flags::StaticFeatureFlags;
use crate::services::node_rpc;
use crate::services::rewards::EstimatedRewards;
use crate::services::staking_queries::StakingQueries;
use crate::views::staking_summary::StakingSummaryScreen;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    env_logger::init();

    info!("Starting staking summary");
    let config = Config::from_env()?;

    let client = node_rpc::create_node_connections(&config.primary_rpc, &config.secondary_rpc);
    let mut queries = StakingQueries::new(Arc::new(client), &config.account_address);

    info!("Fetching staking data for {}...", config.account_address);
    queries.refresh().await;

    let mut screen = StakingSummaryScreen::new(
        EstimatedRewards,
        Box::new(StaticFeatureFlags::from_list(&config.feature_flags)),
        config.coin_decimals,
    );
    print!("{}", screen.view(&queries));

    if config.copy_address {
        let mut handlers = CopyHandlerCache::new(
            Arc::new(CommandClipboard::new(&config.copy_command)),
            Arc::new(LogNotifier),
        );
        let options = CopyOptions {
            copy_success_message: config.copy_success_message.clone(),
        };
        let handler = handlers.handler(&config.account_address, &options);
        info!("Copying {} to the clipboard", handler.text());
        handler.handle(&mut ClickEvent::default()).await;
    }

    Ok(())
}
