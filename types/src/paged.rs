//! The paged envelope wrapping every list response.

use serde::{Deserialize, Serialize};

/// Generic envelope carrying a `docs` array plus pagination metadata.
///
/// Nearly every endpoint returns this shape, including singular lookups
/// like `/book/{id}`; only `/quotes/random` yields a bare object. The order
/// of `docs` is the server-returned order and is preserved through decoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paged<T> {
    pub docs: Vec<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pages: Option<u64>,
}

impl<T> Paged<T> {
    /// Wrap a list of documents with no pagination metadata.
    #[must_use]
    pub fn from_docs(docs: Vec<T>) -> Self {
        Self {
            docs,
            total: None,
            limit: None,
            offset: None,
            page: None,
            pages: None,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.docs.len()
    }
}
