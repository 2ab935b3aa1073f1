//! # Pagination over a prefixed key space
//!
//! Keys in requests and responses are relative to the prefix, so a cursor
//! returned for one prefix can never be replayed against another.

use crate::domain::errors::RegistryError;
use crate::ports::outbound::{KeyValueStore, ScanResult};
use shared_types::{PageRequest, PageResponse};

/// Fetch one page of raw `(relative_key, value)` entries under `prefix`.
///
/// - Cursor paging (`key` set): starts at `prefix || key`, inclusive.
/// - Offset paging: skips `offset` entries from the start of the prefix.
/// - `total` is only computed for offset paging with `count_total`.
///
/// One entry past the limit is read to decide `next_key`.
pub fn paginate<S: KeyValueStore + ?Sized>(
    store: &S,
    prefix: &[u8],
    request: &PageRequest,
) -> Result<PageResponse<(Vec<u8>, Vec<u8>)>, RegistryError> {
    request.validate()?;
    let limit = usize::try_from(request.effective_limit()).unwrap_or(usize::MAX);

    let (window, total) = match &request.key {
        Some(key) => {
            let start = [prefix, key.as_slice()].concat();
            let window = store.range_scan(prefix, &start, limit.saturating_add(1))?;
            (window, None)
        }
        None => {
            let offset = usize::try_from(request.offset).unwrap_or(usize::MAX);
            if request.count_total {
                let all = store.prefix_scan(prefix)?;
                let total = all.len() as u64;
                let window = all
                    .into_iter()
                    .skip(offset)
                    .take(limit.saturating_add(1))
                    .collect();
                (window, Some(total))
            } else {
                let needed = offset.saturating_add(limit).saturating_add(1);
                let window = store
                    .range_scan(prefix, prefix, needed)?
                    .into_iter()
                    .skip(offset)
                    .collect();
                (window, None)
            }
        }
    };

    Ok(split_page(prefix, window, limit, total))
}

fn split_page(
    prefix: &[u8],
    mut window: ScanResult,
    limit: usize,
    total: Option<u64>,
) -> PageResponse<(Vec<u8>, Vec<u8>)> {
    let next_key = if window.len() > limit {
        window.truncate(limit + 1);
        window.pop().map(|(key, _)| strip_prefix(prefix, key))
    } else {
        None
    };

    PageResponse {
        items: window
            .into_iter()
            .map(|(key, value)| (strip_prefix(prefix, key), value))
            .collect(),
        next_key,
        total,
    }
}

fn strip_prefix(prefix: &[u8], key: Vec<u8>) -> Vec<u8> {
    match key.strip_prefix(prefix) {
        Some(rest) => rest.to_vec(),
        None => key,
    }
}
