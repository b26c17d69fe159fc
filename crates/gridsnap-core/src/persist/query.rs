//! Page state <-> URL query string codec.
//!
//! The state lives as JSON in a single `pageState` parameter. Other
//! parameters in the query are carried through untouched.

use std::collections::HashSet;

use gridsnap_common::{GridConfig, PersistError};
use tracing::{debug, warn};

use crate::state::PageState;

pub const PAGE_STATE_PARAM: &str = "pageState";

/// Strip everything up to and including `?` and any `#fragment`.
fn query_part(input: &str) -> &str {
    let without_fragment = input.split_once('#').map_or(input, |(head, _)| head);
    match without_fragment.split_once('?') {
        Some((_, query)) => query,
        None if without_fragment.contains('=') => without_fragment,
        None => "",
    }
}

fn decode_component(raw: &str) -> Result<String, PersistError> {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|s| s.into_owned())
        .map_err(|e| PersistError::Decode(format!("invalid percent-encoding: {e}")))
}

/// Value of `key` in a query string, percent-decoded.
///
/// `Ok(None)` when the key is absent. A present value that does not decode to
/// UTF-8 is an error rather than a miss.
pub fn query_param(input: &str, key: &str) -> Result<Option<String>, PersistError> {
    for pair in query_part(input).split('&').filter(|pair| !pair.is_empty()) {
        let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
        if decode_component(k).ok().as_deref() == Some(key) {
            return decode_component(v).map(Some);
        }
    }
    Ok(None)
}

/// Write `state` into `query`, replacing any previous `pageState` value and
/// keeping every other parameter in order. Returns the new query string
/// without the leading `?`.
pub fn encode_page_state(query: &str, state: &PageState) -> Result<String, PersistError> {
    let json = serde_json::to_string(state).map_err(|e| PersistError::Encode(e.to_string()))?;
    let encoded = format!("{PAGE_STATE_PARAM}={}", urlencoding::encode(&json));

    let mut pairs: Vec<String> = query_part(query)
        .split('&')
        .filter(|pair| !pair.is_empty())
        .filter(|pair| {
            let key = pair.split_once('=').map_or(*pair, |(k, _)| k);
            decode_component(key).ok().as_deref() != Some(PAGE_STATE_PARAM)
        })
        .map(str::to_string)
        .collect();
    pairs.push(encoded);
    Ok(pairs.join("&"))
}

/// Read page state from a URL or query string.
///
/// A missing parameter yields an empty page on `defaults`. A parameter that
/// fails to decode or parse (bad encoding, bad JSON, zero columns or rows,
/// missing window ids) is logged and treated the same way: the page starts
/// fresh instead of failing. Repeated window ids keep their first entry.
pub fn load_page_state(input: &str, defaults: GridConfig) -> PageState {
    let raw = match query_param(input, PAGE_STATE_PARAM) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!("no persisted page state, starting empty");
            return PageState::with_grid(defaults);
        }
        Err(e) => {
            warn!(error = %e, "persisted page state is malformed, using defaults");
            return PageState::with_grid(defaults);
        }
    };

    match serde_json::from_str::<PageState>(&raw) {
        Ok(mut state) => {
            drop_duplicate_ids(&mut state);
            debug!(
                columns = state.columns.get(),
                rows = state.rows.get(),
                windows = state.windows.len(),
                "loaded persisted page state"
            );
            state
        }
        Err(e) => {
            warn!(error = %e, "persisted page state is malformed, using defaults");
            PageState::with_grid(defaults)
        }
    }
}

fn drop_duplicate_ids(state: &mut PageState) {
    let mut seen = HashSet::new();
    state.windows.retain(|window| {
        let first = seen.insert(window.id.clone());
        if !first {
            warn!(window = %window.id, "persisted page state repeats a window id, dropping the later entry");
        }
        first
    });
}
