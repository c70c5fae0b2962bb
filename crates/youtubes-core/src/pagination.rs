//! Token-based pagination over list endpoints.
//!
//! A [`Pagination`] holds one page of data together with the continuation
//! tokens the API returned for it and a fetch closure that re-runs the
//! originating query with another token. Every navigation call is a fresh
//! remote call; nothing is cached.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use futures_util::future::BoxFuture;

use crate::error::{LikelyBugError, Result};
use crate::logger::Logger;

/// Message of the error returned when page metadata is absent.
pub const MISSING_PAGE_INFO_MESSAGE: &str =
    "The raw data is missing pageInfo. resultsPerPage and totalResults are expected to be included in the API response.";

/// Message of the error returned when a walk meets a token it already followed.
pub const REPEATED_PAGE_TOKEN_MESSAGE: &str =
    "The API returned a page token that was already followed. The listing would never end.";

/// Future resolving to another page of the same query.
pub type PageFuture<T> = BoxFuture<'static, Result<Pagination<T>>>;

/// Fetches the page identified by a continuation token.
pub type FetchPage<T> = Arc<dyn Fn(String) -> PageFuture<T> + Send + Sync>;

/// Inputs to [`Pagination::new`].
pub struct PaginationOptions<T> {
    /// Data of the current page.
    pub data: T,
    /// Logger of the component that produced the page.
    pub logger: Logger,
    /// Token of the previous page.
    pub prev_token: Option<String>,
    /// Token of the next page.
    pub next_token: Option<String>,
    /// `pageInfo.resultsPerPage` of the response.
    pub results_per_page: Option<u32>,
    /// `pageInfo.totalResults` of the response.
    pub total_results: Option<u32>,
    /// Re-runs the originating query with another token.
    pub fetch: FetchPage<T>,
}

/// One page of a paginated listing.
pub struct Pagination<T> {
    data: T,
    logger: Logger,
    results_per_page: u32,
    total_results: u32,
    prev_token: Option<String>,
    next_token: Option<String>,
    fetch: FetchPage<T>,
}

impl<T> Pagination<T> {
    /// Wrap a page.
    ///
    /// Empty tokens are treated as absent.
    ///
    /// # Errors
    ///
    /// Returns a [`LikelyBugError`] when `results_per_page` or `total_results`
    /// is missing; the API always reports both for list calls.
    pub fn new(options: PaginationOptions<T>) -> std::result::Result<Self, LikelyBugError> {
        let PaginationOptions {
            data,
            logger,
            prev_token,
            next_token,
            results_per_page,
            total_results,
            fetch,
        } = options;

        let (Some(results_per_page), Some(total_results)) = (results_per_page, total_results) else {
            let logger = logger.child("Pagination::new");
            logger.debug("resultsPerPage or totalResults is not provided");
            logger.debug(
                "resultsPerPage and totalResults are expected to be included in the API response",
            );
            return Err(LikelyBugError::new(MISSING_PAGE_INFO_MESSAGE));
        };

        Ok(Self {
            data,
            logger,
            results_per_page,
            total_results,
            prev_token: prev_token.filter(|t| !t.is_empty()),
            next_token: next_token.filter(|t| !t.is_empty()),
            fetch,
        })
    }

    /// Data of this page.
    pub const fn data(&self) -> &T {
        &self.data
    }

    /// Consume the page and return its data.
    pub fn into_data(self) -> T {
        self.data
    }

    /// Number of results included in this response.
    pub const fn results_per_page(&self) -> u32 {
        self.results_per_page
    }

    /// Total number of results in the result set.
    ///
    /// The API may count resources it never returns (the "Liked videos"
    /// playlist, for instance), so this can exceed what is retrievable.
    pub const fn total_results(&self) -> u32 {
        self.total_results
    }

    /// Token of the previous page, if any.
    pub fn prev_token(&self) -> Option<&str> {
        self.prev_token.as_deref()
    }

    /// Token of the next page, if any.
    pub fn next_token(&self) -> Option<&str> {
        self.next_token.as_deref()
    }

    /// Whether a previous page exists.
    pub const fn has_prev(&self) -> bool {
        self.prev_token.is_some()
    }

    /// Whether a next page exists.
    pub const fn has_next(&self) -> bool {
        self.next_token.is_some()
    }

    /// Fetch the previous page.
    ///
    /// Returns `None` on the first page. Each call costs the same quota as the
    /// request that produced this page.
    pub async fn prev(&self) -> Option<Result<Self>> {
        let token = self.prev_token.clone()?;
        Some((self.fetch)(token).await)
    }

    /// Fetch the next page.
    ///
    /// Returns `None` on the last page. Each call costs the same quota as the
    /// request that produced this page.
    pub async fn next(&self) -> Option<Result<Self>> {
        let token = self.next_token.clone()?;
        Some((self.fetch)(token).await)
    }

    /// Fetch the page behind `token` unless this walk already followed it.
    async fn follow(
        &self,
        token: Option<&str>,
        followed: &mut HashSet<String>,
    ) -> Option<Result<Self>> {
        let token = token?.to_string();
        if !followed.insert(token.clone()) {
            let logger = self.logger.child("Pagination::all");
            logger.debug(format!("Page token {token} was already followed"));
            return Some(Err(LikelyBugError::new(REPEATED_PAGE_TOKEN_MESSAGE).into()));
        }
        Some((self.fetch)(token).await)
    }
}

impl<T: Clone> Pagination<T> {
    /// Fetch every page of the listing, in order.
    ///
    /// Walks back to the first page, then forward to the last one, one call at
    /// a time. The first failing page aborts the walk and its error is
    /// returned; no partial result is kept. This spends quota on every page,
    /// so prefer [`next`](Self::next) driven by user actions.
    ///
    /// A token is followed at most once per direction.
    ///
    /// # Errors
    ///
    /// Returns the error of the first page that failed to load, or a
    /// likely-bug error when the API hands back a token already followed.
    pub async fn all(&self) -> Result<Vec<T>> {
        let mut pages = Vec::new();

        let mut followed = HashSet::new();
        let mut prev = self.follow(self.prev_token.as_deref(), &mut followed).await;
        while let Some(page) = prev {
            let page = page?;
            prev = page.follow(page.prev_token.as_deref(), &mut followed).await;
            pages.push(page.into_data());
        }
        pages.reverse();

        pages.push(self.data.clone());

        let mut followed = HashSet::new();
        let mut next = self.follow(self.next_token.as_deref(), &mut followed).await;
        while let Some(page) = next {
            let page = page?;
            next = page.follow(page.next_token.as_deref(), &mut followed).await;
            pages.push(page.into_data());
        }

        Ok(pages)
    }
}

impl<U: Clone> Pagination<Vec<U>> {
    /// [`all`](Self::all), flattened into a single list.
    ///
    /// # Errors
    ///
    /// Returns the error of the first page that failed to load.
    pub async fn all_items(&self) -> Result<Vec<U>> {
        Ok(self.all().await?.into_iter().flatten().collect())
    }
}

impl<T: Clone> Clone for Pagination<T> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            logger: self.logger.clone(),
            results_per_page: self.results_per_page,
            total_results: self.total_results,
            prev_token: self.prev_token.clone(),
            next_token: self.next_token.clone(),
            fetch: Arc::clone(&self.fetch),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Pagination<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pagination")
            .field("data", &self.data)
            .field("results_per_page", &self.results_per_page)
            .field("total_results", &self.total_results)
            .field("prev_token", &self.prev_token)
            .field("next_token", &self.next_token)
            .finish_non_exhaustive()
    }
}
