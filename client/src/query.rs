//! Optional query parameters shared by all list endpoints.

/// Pagination, sorting, and arbitrary filter parameters.
///
/// Every field is optional; absent parameters are omitted from the request
/// entirely rather than sent as empty values.
///
/// ```rust
/// use arda_client::Query;
///
/// let query = Query::new()
///     .limit(10)
///     .sort("name:asc")
///     .filter("race", "Hobbit");
/// # let _ = query;
/// ```
#[derive(Debug, Clone, Default)]
pub struct Query {
    limit: Option<u32>,
    page: Option<u32>,
    sort: Option<String>,
    filters: Vec<(String, String)>,
}

impl Query {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    #[must_use]
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    #[must_use]
    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    /// Add an arbitrary filter pair, e.g. `("race", "Hobbit")`.
    #[must_use]
    pub fn filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.push((key.into(), value.into()));
        self
    }

    /// Append every present parameter to the request.
    pub(crate) fn apply(&self, mut request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        if let Some(limit) = self.limit {
            request = request.query(&[("limit", limit)]);
        }
        if let Some(page) = self.page {
            request = request.query(&[("page", page)]);
        }
        if let Some(sort) = &self.sort {
            request = request.query(&[("sort", sort.as_str())]);
        }
        for (key, value) in &self.filters {
            request = request.query(&[(key.as_str(), value.as_str())]);
        }
        request
    }
}
