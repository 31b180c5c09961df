//! # Pagination core — page keys, sources, and the page accumulator
//!
//! The backend paginates with `limit`/`offset` query parameters; the client
//! works in integer page keys starting at [`INITIAL_PAGE`]. This module holds
//! the key arithmetic, the [`PagingSource`] trait implemented once per
//! paginated list (see [`crate::sources`]), and [`Pager`], the accumulator
//! the UI drives.
//!
//! ## Key rules
//!
//! - `offset = (page - 1) * load_size`
//! - `prev_key` is `None` on the first page, else `page - 1`
//! - `next_key` is `None` when the returned page is short
//!   (`items.len() < load_size`), else `page + 1`
//!
//! The short-page rule is a heuristic end-of-data signal, not a server-sent
//! `has_more` flag: a server that returns a short page mid-stream (say,
//! because of server-side filtering) terminates pagination early. Known
//! fragile, intentionally preserved.
//!
//! ## [`Pager`]
//!
//! A pure state machine so UI signals can drive it without holding a borrow
//! across an `.await`: `begin_refresh`/`begin_append` hand out the
//! [`LoadParams`] to fetch (or `None` when a load is already in flight — at
//! most one load per pager), the caller awaits the source, then
//! `complete_refresh`/`complete_append` apply the outcome. Failures keep the
//! accumulated items; retry is a manual re-`begin`, never automatic.

use thiserror::Error;

use crate::error::ApiError;
use crate::result::{MSG_CONNECTION, MSG_GENERIC, MSG_SESSION_EXPIRED};

/// Opaque integer page number.
pub type PageKey = u32;

/// First page of every listing.
pub const INITIAL_PAGE: PageKey = 1;

/// Backend default page size.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// One load request: which page, how many items.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadParams {
    /// Requested page key; `None` means the first page.
    pub key: Option<PageKey>,
    pub load_size: usize,
}

impl LoadParams {
    pub fn page(&self) -> PageKey {
        self.key.unwrap_or(INITIAL_PAGE)
    }

    /// Offset sent on the wire: `(page - 1) * load_size`.
    pub fn offset(&self) -> usize {
        self.page().saturating_sub(INITIAL_PAGE) as usize * self.load_size
    }
}

/// One fetched page with its neighbor keys.
#[derive(Clone, Debug, PartialEq)]
pub struct LoadedPage<T> {
    pub items: Vec<T>,
    pub prev_key: Option<PageKey>,
    pub next_key: Option<PageKey>,
}

impl<T> LoadedPage<T> {
    /// Apply the key rules to a fetched batch.
    pub fn from_fetch(page: PageKey, load_size: usize, items: Vec<T>) -> Self {
        let prev_key = if page <= INITIAL_PAGE {
            None
        } else {
            Some(page - 1)
        };
        // Short page = end of data (heuristic, see module docs).
        let next_key = if items.len() < load_size {
            None
        } else {
            Some(page + 1)
        };
        Self {
            items,
            prev_key,
            next_key,
        }
    }
}

/// A failed page load, as rendered by the retry footer.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("couldn't reach the server")]
    Connectivity,
    #[error("server responded with HTTP {status}")]
    Http { status: u16 },
    #[error("{0}")]
    Unexpected(String),
}

impl LoadError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Http { status: 401 })
    }

    /// Message shown next to the retry affordance.
    pub fn user_message(&self) -> &str {
        match self {
            Self::Connectivity => MSG_CONNECTION,
            Self::Http { status: 401 } => MSG_SESSION_EXPIRED,
            _ => MSG_GENERIC,
        }
    }
}

impl From<ApiError> for LoadError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Connectivity(_) => Self::Connectivity,
            ApiError::Http { status } => Self::Http { status },
            ApiError::Unexpected(message) => Self::Unexpected(message),
        }
    }
}

/// Async interface for loading one page of a listing.
pub trait PagingSource<T> {
    fn load(
        &self,
        params: LoadParams,
    ) -> impl std::future::Future<Output = Result<LoadedPage<T>, LoadError>>;
}

/// State of one load slot (refresh or append).
#[derive(Clone, Debug, PartialEq)]
pub enum LoadState {
    NotLoading { end_reached: bool },
    Loading,
    Error(LoadError),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn error(&self) -> Option<&LoadError> {
        match self {
            Self::Error(err) => Some(err),
            _ => None,
        }
    }
}

/// Accumulates pages from a [`PagingSource`] and tracks load state.
#[derive(Clone, Debug)]
pub struct Pager<T> {
    page_size: usize,
    items: Vec<T>,
    next_key: Option<PageKey>,
    loaded_any: bool,
    refresh: LoadState,
    append: LoadState,
}

impl<T> Pager<T> {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size,
            items: Vec::new(),
            next_key: None,
            loaded_any: false,
            refresh: LoadState::NotLoading { end_reached: false },
            append: LoadState::NotLoading { end_reached: false },
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn refresh_state(&self) -> &LoadState {
        &self.refresh
    }

    pub fn append_state(&self) -> &LoadState {
        &self.append
    }

    /// Whether the listing has been exhausted.
    pub fn end_reached(&self) -> bool {
        self.loaded_any && self.next_key.is_none()
    }

    /// Start an initial load or pull-to-refresh. `None` when a load is
    /// already in flight.
    pub fn begin_refresh(&mut self) -> Option<LoadParams> {
        if self.refresh.is_loading() || self.append.is_loading() {
            return None;
        }
        self.refresh = LoadState::Loading;
        Some(LoadParams {
            key: None,
            load_size: self.page_size,
        })
    }

    /// Start loading the next page. `None` when a load is in flight, no
    /// refresh has succeeded yet, or the end was reached.
    pub fn begin_append(&mut self) -> Option<LoadParams> {
        if self.refresh.is_loading() || self.append.is_loading() || !self.loaded_any {
            return None;
        }
        let key = self.next_key?;
        self.append = LoadState::Loading;
        Some(LoadParams {
            key: Some(key),
            load_size: self.page_size,
        })
    }

    /// Apply a refresh outcome. Success replaces the accumulated items;
    /// failure keeps them and parks the error for the retry affordance.
    pub fn complete_refresh(&mut self, result: Result<LoadedPage<T>, LoadError>) {
        match result {
            Ok(page) => {
                self.items = page.items;
                self.next_key = page.next_key;
                self.loaded_any = true;
                let end_reached = self.next_key.is_none();
                self.refresh = LoadState::NotLoading { end_reached };
                self.append = LoadState::NotLoading { end_reached };
            }
            Err(err) => self.refresh = LoadState::Error(err),
        }
    }

    /// Apply an append outcome. Success extends the accumulated items.
    pub fn complete_append(&mut self, result: Result<LoadedPage<T>, LoadError>) {
        match result {
            Ok(page) => {
                self.items.extend(page.items);
                self.next_key = page.next_key;
                self.append = LoadState::NotLoading {
                    end_reached: self.next_key.is_none(),
                };
            }
            Err(err) => self.append = LoadState::Error(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_page(page: PageKey, size: usize) -> LoadedPage<u32> {
        LoadedPage::from_fetch(page, size, (0..size as u32).collect())
    }

    #[test]
    fn first_full_page_points_forward_only() {
        // Page 1, limit 10, server returns 10 items.
        let page = full_page(1, 10);
        assert_eq!(page.items.len(), 10);
        assert_eq!(page.prev_key, None);
        assert_eq!(page.next_key, Some(2));
    }

    #[test]
    fn short_page_ends_pagination() {
        // Page 2, limit 10, server returns 3 items.
        let page = LoadedPage::from_fetch(2, 10, vec![1u32, 2, 3]);
        assert_eq!(page.prev_key, Some(1));
        assert_eq!(page.next_key, None);
    }

    #[test]
    fn empty_page_ends_pagination() {
        let page: LoadedPage<u32> = LoadedPage::from_fetch(3, 10, Vec::new());
        assert_eq!(page.prev_key, Some(2));
        assert_eq!(page.next_key, None);
    }

    #[test]
    fn offset_arithmetic() {
        let params = LoadParams {
            key: None,
            load_size: 10,
        };
        assert_eq!(params.page(), 1);
        assert_eq!(params.offset(), 0);

        let params = LoadParams {
            key: Some(3),
            load_size: 10,
        };
        assert_eq!(params.offset(), 20);

        let params = LoadParams {
            key: Some(2),
            load_size: 25,
        };
        assert_eq!(params.offset(), 25);
    }

    #[test]
    fn pager_accumulates_across_pages() {
        let mut pager = Pager::new(2);

        let params = pager.begin_refresh().unwrap();
        assert_eq!(params.key, None);
        pager.complete_refresh(Ok(LoadedPage::from_fetch(1, 2, vec![10, 11])));
        assert_eq!(pager.items(), &[10, 11]);
        assert!(!pager.end_reached());

        let params = pager.begin_append().unwrap();
        assert_eq!(params.key, Some(2));
        pager.complete_append(Ok(LoadedPage::from_fetch(2, 2, vec![12])));
        assert_eq!(pager.items(), &[10, 11, 12]);
        assert!(pager.end_reached());

        // Exhausted: nothing more to append.
        assert_eq!(pager.begin_append(), None);
    }

    #[test]
    fn pager_allows_one_load_in_flight() {
        let mut pager: Pager<u32> = Pager::new(10);
        assert!(pager.begin_refresh().is_some());
        assert_eq!(pager.begin_refresh(), None);
        assert_eq!(pager.begin_append(), None);

        pager.complete_refresh(Ok(full_page(1, 10)));
        assert!(pager.begin_append().is_some());
        assert_eq!(pager.begin_refresh(), None);
    }

    #[test]
    fn append_requires_a_successful_refresh_first() {
        let mut pager: Pager<u32> = Pager::new(10);
        assert_eq!(pager.begin_append(), None);

        let _ = pager.begin_refresh().unwrap();
        pager.complete_refresh(Err(LoadError::Connectivity));
        assert_eq!(pager.begin_append(), None);
    }

    #[test]
    fn append_failure_keeps_items_and_supports_retry() {
        let mut pager = Pager::new(2);
        let _ = pager.begin_refresh().unwrap();
        pager.complete_refresh(Ok(LoadedPage::from_fetch(1, 2, vec![1, 2])));

        let first_try = pager.begin_append().unwrap();
        pager.complete_append(Err(LoadError::Http { status: 500 }));
        assert_eq!(pager.items(), &[1, 2]);
        assert!(pager.append_state().error().is_some());

        // Retry re-issues the same request.
        let retry = pager.begin_append().unwrap();
        assert_eq!(retry, first_try);
        pager.complete_append(Ok(LoadedPage::from_fetch(2, 2, vec![3])));
        assert_eq!(pager.items(), &[1, 2, 3]);
    }

    #[test]
    fn refresh_after_error_replaces_items() {
        let mut pager = Pager::new(2);
        let _ = pager.begin_refresh().unwrap();
        pager.complete_refresh(Ok(LoadedPage::from_fetch(1, 2, vec![1, 2])));

        let _ = pager.begin_refresh().unwrap();
        pager.complete_refresh(Err(LoadError::Connectivity));
        // Failure keeps what was on screen.
        assert_eq!(pager.items(), &[1, 2]);

        let _ = pager.begin_refresh().unwrap();
        pager.complete_refresh(Ok(LoadedPage::from_fetch(1, 2, vec![7])));
        assert_eq!(pager.items(), &[7]);
        assert!(pager.end_reached());
    }

    #[test]
    fn unauthorized_load_error_gets_the_distinct_message() {
        let unauthorized = LoadError::Http { status: 401 };
        assert!(unauthorized.is_unauthorized());
        let generic = LoadError::Http { status: 500 };
        assert_ne!(unauthorized.user_message(), generic.user_message());
        assert_eq!(
            LoadError::Connectivity.user_message(),
            "Couldn't reach server, check your internet connection."
        );
    }
}
