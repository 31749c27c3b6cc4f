use std::future::Future;

use crate::client::api::ClientError;

#[derive(Debug, Clone, PartialEq)]
pub enum ListState<T> {
    Loading,
    Loaded(Vec<T>),
    Failed,
}

/// A list fetched once when its section mounts. A failed fetch only raises
/// an error flag; nothing retries.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteList<T> {
    state: ListState<T>,
}

impl<T> Default for RemoteList<T> {
    fn default() -> Self {
        RemoteList { state: ListState::Loading }
    }
}

impl<T> RemoteList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn load<F>(fetch: F) -> Self
    where
        F: Future<Output = Result<Vec<T>, ClientError>>,
    {
        let mut list = Self::new();
        list.apply(fetch.await);
        list
    }

    pub fn apply(&mut self, result: Result<Vec<T>, ClientError>) {
        self.state = match result {
            Ok(items) => ListState::Loaded(items),
            Err(e) => {
                tracing::warn!("List fetch failed: {}", e);
                ListState::Failed
            }
        };
    }

    pub fn state(&self) -> &ListState<T> {
        &self.state
    }

    pub fn items(&self) -> &[T] {
        match &self.state {
            ListState::Loaded(items) => items,
            _ => &[],
        }
    }

    pub fn has_error(&self) -> bool {
        matches!(self.state, ListState::Failed)
    }

    /// Text shown in place of the list, if any.
    pub fn placeholder(&self, noun: &str) -> Option<String> {
        match &self.state {
            ListState::Loading => Some(format!("Loading {noun}...")),
            ListState::Failed => Some(format!("Error fetching {noun}.")),
            ListState::Loaded(items) if items.is_empty() => Some(format!("No {noun} available.")),
            ListState::Loaded(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn loaded_list_exposes_items() {
        let list = RemoteList::load(async { Ok(vec![1, 2, 3]) }).await;

        assert_eq!(list.items(), &[1, 2, 3]);
        assert!(!list.has_error());
        assert_eq!(list.placeholder("projects"), None);
    }

    #[tokio::test]
    async fn empty_list_is_not_an_error() {
        let list: RemoteList<u8> = RemoteList::load(async { Ok(Vec::new()) }).await;

        assert!(!list.has_error());
        assert_eq!(list.placeholder("skills").as_deref(), Some("No skills available."));
    }

    #[tokio::test]
    async fn failed_fetch_sets_error_flag() {
        let list: RemoteList<u8> =
            RemoteList::load(async { Err(ClientError::Transport("connection refused".into())) }).await;

        assert!(list.has_error());
        assert!(list.items().is_empty());
        assert_eq!(list.placeholder("projects").as_deref(), Some("Error fetching projects."));
    }

    #[test]
    fn starts_loading() {
        let list: RemoteList<u8> = RemoteList::new();
        assert_eq!(list.state(), &ListState::Loading);
    }
}
