//! Hook wiring an [`api::Pager`] to Dioxus signals.
//!
//! The pager itself is a pure state machine; this hook owns it in a signal,
//! spawns one future per user action, and keeps the one-load-in-flight rule
//! intact by letting `begin_*` decide whether anything happens. Write guards
//! are always dropped before awaiting the source.

use dioxus::prelude::*;

use api::{LoadState, Pager, PagingSource, DEFAULT_PAGE_SIZE};

/// Handle returned by [`use_pager`]. Cheap to copy into event handlers.
pub struct UsePager<T: 'static, S: 'static> {
    pager: Signal<Pager<T>>,
    source: Signal<S>,
}

impl<T: 'static, S: 'static> Clone for UsePager<T, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static, S: 'static> Copy for UsePager<T, S> {}

/// Drive a paged listing. Performs the initial refresh on mount.
pub fn use_pager<T, S>(make_source: impl FnOnce() -> S) -> UsePager<T, S>
where
    T: Clone + 'static,
    S: PagingSource<T> + Clone + 'static,
{
    let pager = use_signal(|| Pager::new(DEFAULT_PAGE_SIZE));
    let source = use_signal(make_source);
    let handle = UsePager { pager, source };

    use_future(move || async move {
        handle.run_refresh().await;
    });

    handle
}

impl<T, S> UsePager<T, S>
where
    T: Clone + 'static,
    S: PagingSource<T> + Clone + 'static,
{
    /// Snapshot of the accumulated items.
    pub fn items(&self) -> Vec<T> {
        self.pager.read().items().to_vec()
    }

    pub fn refresh_state(&self) -> LoadState {
        self.pager.read().refresh_state().clone()
    }

    pub fn append_state(&self) -> LoadState {
        self.pager.read().append_state().clone()
    }

    pub fn end_reached(&self) -> bool {
        self.pager.read().end_reached()
    }

    /// Reload from the first page (initial load and pull-to-refresh).
    pub fn refresh(&self) {
        let handle = *self;
        spawn(async move {
            handle.run_refresh().await;
        });
    }

    /// Load the next page, if there is one and nothing is in flight.
    pub fn load_more(&self) {
        let handle = *self;
        spawn(async move {
            handle.run_append().await;
        });
    }

    async fn run_refresh(self) {
        let mut pager = self.pager;
        let Some(params) = pager.write().begin_refresh() else {
            return;
        };
        let source = self.source.read().clone();
        let result = source.load(params).await;
        pager.write().complete_refresh(result);
    }

    async fn run_append(self) {
        let mut pager = self.pager;
        let Some(params) = pager.write().begin_append() else {
            return;
        };
        let source = self.source.read().clone();
        let result = source.load(params).await;
        pager.write().complete_append(result);
    }
}
