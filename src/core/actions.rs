use crate::core::client::RemoteResourceClient;
use crate::core::{OutputSink, RequestDraft};

/// One user-triggered action. The mutating variants carry the field values
/// read at trigger time.
#[derive(Debug, Clone)]
pub enum Action {
    FetchItem,
    FetchItemAlt,
    CreateItem(RequestDraft),
    UpdateItem(RequestDraft),
}

pub struct ActionRunner<O: OutputSink> {
    client: RemoteResourceClient<O>,
}

impl<O: OutputSink> ActionRunner<O> {
    pub fn new(client: RemoteResourceClient<O>) -> Self {
        Self { client }
    }

    /// Runs one action to completion and returns the rendered outcome, which
    /// has also replaced the content of the action's render target.
    pub async fn run(&self, action: Action) -> String {
        match action {
            Action::FetchItem => {
                tracing::info!("Fetching post 1 over the pooled transport");
                self.client.fetch_item().await
            }
            Action::FetchItemAlt => {
                tracing::info!("Fetching post 2 over the one-shot transport");
                self.client.fetch_item_alt().await
            }
            Action::CreateItem(draft) => {
                tracing::info!("Creating a post titled '{}'", draft.title);
                self.client.create_item(&draft).await
            }
            Action::UpdateItem(draft) => {
                tracing::info!("Updating post {:?}", draft.id);
                self.client.update_item(&draft).await
            }
        }
    }
}
