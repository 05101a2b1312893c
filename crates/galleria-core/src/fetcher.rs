//! Page fetcher trait and the live listing-client implementation.

use std::future::Future;
use std::pin::Pin;

use galleria_artic::{ArticClient, ArticError, ArtworkPage};

/// A paged listing source the selection manager can draw from.
///
/// The only collaborator of the bulk-select operation; tests implement it
/// with scripted in-memory datasets.
pub trait PageFetcher: Send + Sync {
    /// Fetch one page (1-based) of `page_size` records with the given
    /// payload fields populated.
    fn fetch_page<'a>(
        &'a self,
        page: u32,
        page_size: u32,
        fields: &'a [&'a str],
    ) -> Pin<Box<dyn Future<Output = Result<ArtworkPage, ArticError>> + Send + 'a>>;
}

impl PageFetcher for ArticClient {
    fn fetch_page<'a>(
        &'a self,
        page: u32,
        page_size: u32,
        fields: &'a [&'a str],
    ) -> Pin<Box<dyn Future<Output = Result<ArtworkPage, ArticError>> + Send + 'a>> {
        Box::pin(ArticClient::fetch_page(self, page, page_size, fields))
    }
}
