//! # Pagination Primitives
//!
//! A page is requested either by offset or by cursor (the `next_key` returned
//! with the previous page), never both.
//!
//! ```text
//! PageRequest { key: None,    offset: 0,  limit: 2 } -> [a, b]  next_key = c
//! PageRequest { key: Some(c), offset: 0,  limit: 2 } -> [c, d]  next_key = None
//! ```
//!
//! Cursor paging is stable under inserts that land after the cursor: the
//! cursor is a store key, not a position.

use serde::{Deserialize, Serialize};

use crate::errors::PaginationError;

/// Limit applied when a request asks for `limit == 0`.
pub const DEFAULT_PAGE_LIMIT: u64 = 100;

/// A request for one page of an ordered key space.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Resume from this key (inclusive). Mutually exclusive with `offset`.
    pub key: Option<Vec<u8>>,
    /// Number of entries to skip from the start of the key space.
    pub offset: u64,
    /// Maximum entries to return; `0` means [`DEFAULT_PAGE_LIMIT`].
    pub limit: u64,
    /// Compute the total entry count (offset paging only).
    pub count_total: bool,
}

impl PageRequest {
    /// First page of `limit` entries.
    pub fn first(limit: u64) -> Self {
        Self {
            limit,
            ..Default::default()
        }
    }

    /// Page of `limit` entries starting at `key`.
    pub fn after(key: Vec<u8>, limit: u64) -> Self {
        Self {
            key: Some(key),
            limit,
            ..Default::default()
        }
    }

    /// Page of `limit` entries after skipping `offset` entries.
    pub fn at_offset(offset: u64, limit: u64) -> Self {
        Self {
            offset,
            limit,
            ..Default::default()
        }
    }

    /// Request the total count alongside the page.
    pub fn counted(mut self) -> Self {
        self.count_total = true;
        self
    }

    /// Limit with the default applied.
    pub fn effective_limit(&self) -> u64 {
        if self.limit == 0 {
            DEFAULT_PAGE_LIMIT
        } else {
            self.limit
        }
    }

    /// Reject requests that mix cursor and offset paging.
    pub fn validate(&self) -> Result<(), PaginationError> {
        if self.key.is_some() && self.offset > 0 {
            return Err(PaginationError::KeyAndOffset);
        }
        Ok(())
    }
}

/// One page of results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageResponse<T> {
    /// Entries in key order.
    pub items: Vec<T>,
    /// Key to pass as [`PageRequest::key`] for the next page; `None` when exhausted.
    pub next_key: Option<Vec<u8>>,
    /// Total entries in the key space, when requested with offset paging.
    pub total: Option<u64>,
}

impl<T> PageResponse<T> {
    /// An empty, exhausted page.
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            next_key: None,
            total: None,
        }
    }

    /// Whether more pages follow this one.
    pub fn has_more(&self) -> bool {
        self.next_key.is_some()
    }

    /// Convert every item, keeping the paging metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PageResponse<U> {
        PageResponse {
            items: self.items.into_iter().map(f).collect(),
            next_key: self.next_key,
            total: self.total,
        }
    }
}
