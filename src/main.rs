use clap::Parser;
use post_client::config::{ActionCommand, CliConfig};
use post_client::core::actions::{Action, ActionRunner};
use post_client::core::RequestDraft;
use post_client::utils::{logger, validation::Validate};
use post_client::{ConsoleOutput, RemoteResourceClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting post-client CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let client = RemoteResourceClient::new(ConsoleOutput, config.api_base_url.clone());
    let runner = ActionRunner::new(client);

    let action = match config.action {
        ActionCommand::Fetch => Action::FetchItem,
        ActionCommand::FetchAlt => Action::FetchItemAlt,
        ActionCommand::Create { title, body } => Action::CreateItem(RequestDraft {
            id: None,
            title,
            body,
        }),
        ActionCommand::Update { id, title, body } => Action::UpdateItem(RequestDraft {
            id: Some(id),
            title,
            body,
        }),
    };

    runner.run(action).await;
    tracing::info!("Action completed");

    Ok(())
}
