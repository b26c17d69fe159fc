//! Where settled page state goes after each controller decision.

mod query;

pub use query::{encode_page_state, load_page_state, query_param, PAGE_STATE_PARAM};

use gridsnap_common::{GridConfig, PersistError};
use tracing::debug;

use crate::state::PageState;

/// Receives the full page state whenever it changes.
pub trait StateSink {
    fn persist(&mut self, state: &PageState) -> Result<(), PersistError>;
}

/// In-memory address bar. Each persist replaces the query in place, like
/// `history.replaceState`, so no history entries accumulate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlStateStore {
    path: String,
    query: String,
    fragment: Option<String>,
    writes: usize,
}

impl UrlStateStore {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    pub fn from_url(url: &str) -> Self {
        let (rest, fragment) = match url.split_once('#') {
            Some((rest, fragment)) => (rest, Some(fragment.to_string())),
            None => (url, None),
        };
        let (path, query) = rest.split_once('?').unwrap_or((rest, ""));
        Self {
            path: path.to_string(),
            query: query.to_string(),
            fragment,
            writes: 0,
        }
    }

    pub fn url(&self) -> String {
        let mut url = self.path.clone();
        if !self.query.is_empty() {
            url.push('?');
            url.push_str(&self.query);
        }
        if let Some(fragment) = &self.fragment {
            url.push('#');
            url.push_str(fragment);
        }
        url
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Number of persists received so far.
    pub fn writes(&self) -> usize {
        self.writes
    }

    /// Page state currently encoded in the URL, or an empty page on `defaults`.
    pub fn load(&self, defaults: GridConfig) -> PageState {
        load_page_state(&self.query, defaults)
    }
}

impl StateSink for UrlStateStore {
    fn persist(&mut self, state: &PageState) -> Result<(), PersistError> {
        self.query = encode_page_state(&self.query, state)?;
        self.writes += 1;
        debug!(windows = state.windows.len(), "page state written to url");
        Ok(())
    }
}
