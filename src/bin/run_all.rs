//! Runs all four actions in sequence against the live API, mirroring the
//! four demo triggers. Needs network access.

use post_client::core::actions::{Action, ActionRunner};
use post_client::core::RequestDraft;
use post_client::{ConsoleOutput, RemoteResourceClient};

const BASE_URL: &str = "https://jsonplaceholder.typicode.com";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let client = RemoteResourceClient::new(ConsoleOutput, BASE_URL.to_string());
    let runner = ActionRunner::new(client);

    runner.run(Action::FetchItem).await;
    runner.run(Action::FetchItemAlt).await;

    runner
        .run(Action::CreateItem(RequestDraft {
            id: None,
            title: "hello from post-client".to_string(),
            body: "created by the run_all demo".to_string(),
        }))
        .await;

    runner
        .run(Action::UpdateItem(RequestDraft {
            id: Some("1".to_string()),
            title: "updated title".to_string(),
            body: "updated body".to_string(),
        }))
        .await;

    Ok(())
}
