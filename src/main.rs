use portfolio_harness::application::client::Client;
use portfolio_harness::application::config::Config;
use portfolio_harness::application::demo::run_demo;
use portfolio_harness::application::harness::Harness;
use portfolio_harness::error::AppError;
use portfolio_harness::utils::setup_logger;
use std::io;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    setup_logger();

    let config = Config::new();
    info!(
        "Exercising portfolio service at {}",
        config.rest_api.base_url
    );

    let demo = config.demo.clone();
    let client = Client::new(config)?;
    let mut harness = Harness::new(client, io::stdout());

    run_demo(&mut harness, &demo).await;
    harness.print_summary();

    Ok(())
}
