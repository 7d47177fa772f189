//! Location - the single `code` query parameter echo.
//!
//! The portal never reads the query back into state; it only writes the
//! trimmed access code after a successful submit and removes it on "go back".

use url::Url;

use crate::error::PortalResult;

/// Name of the echoed query parameter.
pub const CODE_PARAM: &str = "code";

/// Write access to the current location's query string.
pub trait Location {
    /// Set `key` to `value`, replacing any previous value.
    fn set_query(&mut self, key: &str, value: &str);

    /// Remove every `key` pair from the query.
    fn remove_query(&mut self, key: &str);

    /// Current value of `key`, if present.
    fn query(&self, key: &str) -> Option<String>;

    /// Full location as a string.
    fn href(&self) -> String;
}

/// In-memory location backed by a parsed URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemoryLocation {
    url: Url,
}

impl MemoryLocation {
    pub fn new(base: &str) -> PortalResult<Self> {
        Ok(Self {
            url: Url::parse(base)?,
        })
    }

    // Rewrites the query from `pairs`, dropping the `?` entirely when empty.
    fn replace_pairs(&mut self, pairs: Vec<(String, String)>) {
        if pairs.is_empty() {
            self.url.set_query(None);
        } else {
            self.url.query_pairs_mut().clear().extend_pairs(pairs);
        }
    }
}

impl Default for MemoryLocation {
    fn default() -> Self {
        Self {
            url: Url::parse("http://localhost/").expect("static base URL is valid"),
        }
    }
}

impl Location for MemoryLocation {
    fn set_query(&mut self, key: &str, value: &str) {
        let mut pairs: Vec<(String, String)> = self
            .url
            .query_pairs()
            .filter(|(k, _)| k != key)
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        pairs.push((key.to_string(), value.to_string()));
        self.replace_pairs(pairs);
    }

    fn remove_query(&mut self, key: &str) {
        let pairs: Vec<(String, String)> = self
            .url
            .query_pairs()
            .filter(|(k, _)| k != key)
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        self.replace_pairs(pairs);
    }

    fn query(&self, key: &str) -> Option<String> {
        self.url
            .query_pairs()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
    }

    fn href(&self) -> String {
        self.url.to_string()
    }
}
