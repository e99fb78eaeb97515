//! Fetch / create / delete lifecycle for a screen showing a remote list.

use loom_core::collection::{Identified, RemoteCollection};
use loom_core::error::{LoomError, Result};
use loom_core::navigation::Confirm;
use loom_core::view::ListViewState;
use std::sync::Arc;

/// User-facing texts of one list screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListMessages {
    pub load_failed: String,
    pub create_failed: String,
    pub confirm_delete: String,
}

impl ListMessages {
    pub fn projects() -> Self {
        Self {
            load_failed: "Failed to fetch projects.".to_string(),
            create_failed: "Failed to create project.".to_string(),
            confirm_delete: "Are you sure you want to delete this project?".to_string(),
        }
    }
}

/// What happened to a delete request.
#[derive(Debug)]
pub enum RemoveOutcome {
    /// The server confirmed; the item is gone from the local list.
    Removed,
    /// The user declined the prompt; nothing was sent.
    Declined,
    /// The server call failed; the local list is unchanged.
    Failed(LoomError),
}

impl RemoveOutcome {
    pub fn is_removed(&self) -> bool {
        matches!(self, Self::Removed)
    }

    /// `Declined` becomes [`LoomError::ConfirmationDeclined`].
    pub fn into_result(self) -> Result<()> {
        match self {
            Self::Removed => Ok(()),
            Self::Declined => Err(LoomError::ConfirmationDeclined),
            Self::Failed(err) => Err(err),
        }
    }
}

/// Keeps a local copy of a [`RemoteCollection`] in step with the server.
///
/// - `load` replaces the local list with the server's, never merging.
/// - `create` appends the server-returned item without re-fetching.
/// - `remove` asks for confirmation, then filters the item out by id.
///
/// Load and create failures land in the view's error slot. Delete failures
/// are only logged and returned; the view error is left alone.
pub struct ResourceListController<C: RemoteCollection> {
    collection: Arc<C>,
    state: ListViewState<C::Item>,
    messages: ListMessages,
}

impl<C: RemoteCollection> ResourceListController<C> {
    /// A controller for a freshly mounted screen (loading indicator on).
    pub fn new(collection: Arc<C>, messages: ListMessages) -> Self {
        Self {
            collection,
            state: ListViewState::mounting(),
            messages,
        }
    }

    pub fn state(&self) -> &ListViewState<C::Item> {
        &self.state
    }

    pub fn items(&self) -> &[C::Item] {
        &self.state.items
    }

    pub fn messages(&self) -> &ListMessages {
        &self.messages
    }

    /// Reads the whole collection once. No retry.
    ///
    /// On success the local list becomes exactly the server's collection and
    /// any previous error is cleared. On failure the list is emptied and the
    /// load error message is shown.
    ///
    /// The loading indicator belongs to the initial fetch: it starts on in
    /// [`ResourceListController::new`] and the first `load` turns it off for
    /// good. Later reloads keep the current list visible until they finish.
    pub async fn load(&mut self) -> Result<()> {
        let result = self.collection.fetch_all().await;

        self.state.is_loading = false;
        match result {
            Ok(items) => {
                tracing::debug!("[ResourceList] Loaded {} items", items.len());
                self.state.items = items;
                self.state.error_message = None;
                Ok(())
            }
            Err(err) => {
                tracing::error!("[ResourceList] Load failed: {}", err);
                self.state.items.clear();
                self.state.error_message = Some(self.messages.load_failed.clone());
                Err(err)
            }
        }
    }

    /// Creates an item and appends the server's copy to the local list.
    ///
    /// The name is passed through as given; blank-name checks belong to the
    /// form that collects it.
    pub async fn create(&mut self, name: &str) -> Result<C::Item> {
        self.state.is_mutating = true;

        let result = self.collection.create(name).await;

        self.state.is_mutating = false;
        match result {
            Ok(item) => {
                tracing::debug!("[ResourceList] Created item {}", item.id());
                self.state.items.push(item.clone());
                Ok(item)
            }
            Err(err) => {
                tracing::error!("[ResourceList] Create failed: {}", err);
                self.state.error_message = Some(self.messages.create_failed.clone());
                Err(err)
            }
        }
    }

    /// Deletes an item after the user confirms.
    ///
    /// Removing an id that is not in the local list is a no-op filter once the
    /// server agrees.
    pub async fn remove(&mut self, id: &str, confirm: &dyn Confirm) -> RemoveOutcome {
        if !confirm.confirm(&self.messages.confirm_delete) {
            tracing::debug!("[ResourceList] Delete of {} declined", id);
            return RemoveOutcome::Declined;
        }

        match self.collection.delete(id).await {
            Ok(()) => {
                self.state.items.retain(|item| item.id() != id);
                tracing::debug!("[ResourceList] Deleted {}", id);
                RemoveOutcome::Removed
            }
            Err(err) => {
                // Not shown in the view; the diagnostic log is the only trace.
                tracing::warn!("[ResourceList] Error deleting {}: {}", id, err);
                RemoveOutcome::Failed(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FixedConfirm, MockProjects, project};
    use std::sync::atomic::Ordering;

    fn controller(server: Vec<loom_core::project::Project>) -> (
        ResourceListController<MockProjects>,
        Arc<MockProjects>,
    ) {
        let remote = Arc::new(MockProjects::with(server));
        (
            ResourceListController::new(remote.clone(), ListMessages::projects()),
            remote,
        )
    }

    #[tokio::test]
    async fn test_new_controller_is_loading() {
        let (list, _) = controller(vec![]);
        assert!(list.state().is_loading);
        assert!(!list.state().is_mutating);
        assert!(list.state().error_message.is_none());
    }

    #[tokio::test]
    async fn test_load_replaces_with_server_collection() {
        let (mut list, remote) = controller(vec![project("p1", "A", 1), project("p2", "B", 2)]);

        list.load().await.unwrap();
        assert_eq!(list.items(), remote.server_items().as_slice());

        // A second load drops local state that the server no longer has.
        remote.set_server_items(vec![project("p3", "C", 0)]);
        list.load().await.unwrap();
        assert_eq!(list.items(), &[project("p3", "C", 0)]);
    }

    #[tokio::test]
    async fn test_empty_load_clears_loading_without_error() {
        let (mut list, _) = controller(vec![]);

        list.load().await.unwrap();

        assert!(list.items().is_empty());
        assert!(!list.state().is_loading);
        assert!(list.state().error_message.is_none());
    }

    #[tokio::test]
    async fn test_reload_never_turns_loading_back_on() {
        let (mut list, remote) = controller(vec![project("p1", "A", 1)]);
        list.load().await.unwrap();

        list.load().await.unwrap();
        assert!(!list.state().is_loading);

        remote.fail_fetch.store(true, Ordering::SeqCst);
        assert!(list.load().await.is_err());
        assert!(!list.state().is_loading);
        assert_eq!(remote.fetch_calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_load_failure_sets_error_and_empty_list() {
        let (mut list, remote) = controller(vec![project("p1", "A", 1)]);
        remote.fail_fetch.store(true, Ordering::SeqCst);

        assert!(list.load().await.is_err());

        assert!(list.items().is_empty());
        assert!(!list.state().is_loading);
        assert_eq!(
            list.state().error_message.as_deref(),
            Some("Failed to fetch projects.")
        );
        assert_eq!(remote.fetch_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_create_appends_server_object() {
        let (mut list, remote) = controller(vec![project("p1", "A", 1)]);
        list.load().await.unwrap();
        let before = list.items().to_vec();

        let created = list.create("Parser").await.unwrap();

        assert_eq!(list.items().len(), before.len() + 1);
        assert_eq!(&list.items()[..before.len()], before.as_slice());
        assert_eq!(list.items().last(), Some(&created));
        assert_eq!(created.name, "Parser");
        assert!(!list.state().is_mutating);
        // No re-fetch after the write.
        assert_eq!(remote.fetch_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_create_failure_sets_error_and_keeps_list() {
        let (mut list, remote) = controller(vec![project("p1", "A", 1)]);
        list.load().await.unwrap();
        remote.fail_create.store(true, Ordering::SeqCst);

        assert!(list.create("Parser").await.is_err());

        assert_eq!(list.items(), &[project("p1", "A", 1)]);
        assert!(!list.state().is_mutating);
        assert_eq!(
            list.state().error_message.as_deref(),
            Some("Failed to create project.")
        );
    }

    #[tokio::test]
    async fn test_remove_confirmed_success() {
        let (mut list, remote) = controller(vec![project("p1", "A", 1), project("p2", "B", 1)]);
        list.load().await.unwrap();
        let confirm = FixedConfirm::yes();

        let outcome = list.remove("p1", &confirm).await;

        assert!(outcome.is_removed());
        assert!(list.items().iter().all(|p| p.id != "p1"));
        assert_eq!(list.items().len(), 1);
        assert_eq!(
            confirm.prompts(),
            vec!["Are you sure you want to delete this project?".to_string()]
        );
        assert_eq!(remote.delete_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_remove_declined_sends_nothing() {
        let (mut list, remote) = controller(vec![project("p1", "A", 1)]);
        list.load().await.unwrap();

        let outcome = list.remove("p1", &FixedConfirm::no()).await;

        assert!(matches!(outcome, RemoveOutcome::Declined));
        assert_eq!(list.items().len(), 1);
        assert_eq!(remote.delete_calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_remove_outcome_into_result() {
        assert!(RemoveOutcome::Removed.into_result().is_ok());
        assert!(RemoveOutcome::Declined.into_result().unwrap_err().is_declined());
        assert!(
            RemoveOutcome::Failed(LoomError::network("reset"))
                .into_result()
                .unwrap_err()
                .is_remote_failure()
        );
    }

    #[tokio::test]
    async fn test_remove_failure_is_silent_in_view() {
        let (mut list, remote) = controller(vec![project("p1", "A", 1)]);
        list.load().await.unwrap();
        remote.fail_delete.store(true, Ordering::SeqCst);

        let outcome = list.remove("p1", &FixedConfirm::yes()).await;

        assert!(matches!(outcome, RemoveOutcome::Failed(LoomError::Server { status: 403, .. })));
        assert_eq!(list.items(), &[project("p1", "A", 1)]);
        assert!(list.state().error_message.is_none());
    }

    #[tokio::test]
    async fn test_remove_unknown_id_is_noop() {
        let (mut list, _) = controller(vec![project("p1", "A", 1)]);
        list.load().await.unwrap();

        let outcome = list.remove("missing", &FixedConfirm::yes()).await;

        assert!(outcome.is_removed());
        assert_eq!(list.items(), &[project("p1", "A", 1)]);
    }
}
