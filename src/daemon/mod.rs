mod api;

use colored::Colorize;
use macros_rs::{crashln, string};
use std::sync::Arc;
use taskmgr::{config::structs::Config, helpers, Native};

#[tokio::main]
pub async fn serve(config: Config) {
    println!("{} Starting API server (address={})", *helpers::SUCCESS, config.get_address());
    log::info!("api server starting on {}", config.get_address());

    if let Err(err) = api::start(Arc::new(Native), config).await {
        crashln!("{} API server stopped.\n{}", *helpers::FAIL, string!(err).white());
    }
}
