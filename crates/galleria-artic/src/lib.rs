//! Typed client for the Art Institute of Chicago paged artworks listing.
//!
//! Stateless request/response: each fetch returns one page of records plus
//! the dataset total at fetch time. Callers choose which payload fields the
//! API populates; selection-only callers request just the identifier field
//! to minimize transfer. Absent payload attributes are normalized to fixed
//! defaults so identical inputs always produce identical [`Artwork`] values.

mod client;
mod parse;

use thiserror::Error;

pub use client::{ArticClient, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};

/// Identifier of one artwork. Stable and unique across the entire remote
/// dataset and across repeated fetches of the same page.
pub type ArtworkId = u64;

#[derive(Error, Debug)]
pub enum ArticError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },
    #[error("malformed listing payload: {0}")]
    Parse(String),
}

/// One record of the remote listing.
///
/// Every field except `id` is display payload and irrelevant to selection.
#[derive(Debug, Clone, PartialEq)]
pub struct Artwork {
    pub id: ArtworkId,
    pub title: String,
    pub place_of_origin: String,
    pub artist_display: String,
    pub inscriptions: String,
    pub date_start: i32,
    pub date_end: i32,
}

/// One fetched batch of artworks plus the dataset total at fetch time.
///
/// Replaced wholesale on the next fetch; pages are never merged.
#[derive(Debug, Clone, PartialEq)]
pub struct ArtworkPage {
    pub artworks: Vec<Artwork>,
    pub total: u64,
}

/// Full payload field set for table display.
pub const FIELDS_FULL: &[&str] = &[
    "id",
    "title",
    "place_of_origin",
    "artist_display",
    "inscriptions",
    "date_start",
    "date_end",
];

/// Identifier-only field set for selection fetches.
pub const FIELDS_ID: &[&str] = &["id"];
