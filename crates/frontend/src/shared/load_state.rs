use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use contracts::shared::alert::AlertInfo;
use contracts::shared::error::FetchError;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::mount_guard::MountGuard;

/// Lifecycle of one page-level fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Idle,
    Loading,
    Ready(T),
    Failed(AlertInfo),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::Idle
    }
}

impl<T> LoadState<T> {
    /// Folds a fetch result in, turning any failure into the page's error alert.
    pub fn from_result(result: Result<T, FetchError>, title: &str, message: &str) -> Self {
        match result {
            Ok(value) => LoadState::Ready(value),
            Err(e) => {
                log::error!("{}: {}", title, e);
                LoadState::Failed(e.to_alert(title, message))
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            LoadState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn alert(&self) -> Option<&AlertInfo> {
        match self {
            LoadState::Failed(alert) => Some(alert),
            _ => None,
        }
    }

    /// Dismissing the error leaves the page empty rather than retrying.
    pub fn dismiss(&mut self) {
        if matches!(self, LoadState::Failed(_)) {
            *self = LoadState::Idle;
        }
    }
}

/// Runs `fetch` in the background and stores its outcome in `state`, unless
/// the page has been left in the meantime.
pub fn spawn_load<T, F>(
    state: RwSignal<LoadState<T>>,
    guard: MountGuard,
    title: &'static str,
    message: &'static str,
    fetch: F,
) where
    T: Send + Sync + 'static,
    F: Future<Output = Result<T, FetchError>> + 'static,
{
    state.set(LoadState::Loading);
    spawn_local(async move {
        let result = fetch.await;
        guard.run(|| state.set(LoadState::from_result(result, title, message)));
    });
}

/// Numbers the requests of a refetching page so only the newest may land.
#[derive(Clone, Debug, Default)]
pub struct LoadTicket(Arc<AtomicU64>);

impl LoadTicket {
    /// Starts a new request, outdating every earlier one.
    pub fn issue(&self) -> u64 {
        self.0.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.0.load(Ordering::Relaxed) == ticket
    }
}

/// Like [`spawn_load`], but a response that arrives after a newer request
/// was started is dropped instead of overwriting the newer result.
pub fn spawn_latest_load<T, F>(
    state: RwSignal<LoadState<T>>,
    guard: MountGuard,
    tickets: LoadTicket,
    title: &'static str,
    message: &'static str,
    fetch: F,
) where
    T: Send + Sync + 'static,
    F: Future<Output = Result<T, FetchError>> + 'static,
{
    let ticket = tickets.issue();
    state.set(LoadState::Loading);
    spawn_local(async move {
        let result = fetch.await;
        if !tickets.is_current(ticket) {
            log::debug!("Dropping stale response for request {}", ticket);
            return;
        }
        guard.run(|| state.set(LoadState::from_result(result, title, message)));
    });
}
