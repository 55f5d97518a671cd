//! Page-based listing over a countable, sliceable collection.
//!
//! The engine turns a `page`/`per_page` request into one bounded page of
//! serialized items plus `self`/`next`/`prev` navigation links. It issues
//! exactly one count query and one slice query against the backing
//! [`PageSource`] per call and performs no writes. The count and the slice
//! are two independent reads; under concurrent writes they may observe
//! different snapshots, and no guarantee beyond the store's own isolation
//! is made.

use async_trait::async_trait;
use serde::Serialize;
use std::fmt;
use utoipa::ToSchema;

use crate::constants::{
    DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE, ERR_INVALID_PAGE, ERR_PAGE_OUT_OF_RANGE, MAX_PAGE_SIZE,
};
use crate::errors::ApiError;

/// Errors raised by page validation and boundary checks.
///
/// Both variants are caller input errors and surface as 404 responses,
/// one consistent policy for every list endpoint.
#[derive(Debug, PartialEq, Eq)]
pub enum PageError {
    /// Requested page number is below 1.
    InvalidPage,
    /// Requested page starts at or beyond the total item count.
    OutOfRange,
}

impl fmt::Display for PageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageError::InvalidPage => write!(f, "{}", ERR_INVALID_PAGE),
            PageError::OutOfRange => write!(f, "{}", ERR_PAGE_OUT_OF_RANGE),
        }
    }
}

impl From<PageError> for ApiError {
    fn from(err: PageError) -> Self {
        ApiError::NotFound(err.to_string())
    }
}

/// Query parameters accepted by list endpoints.
#[derive(Debug, serde::Deserialize)]
pub struct PageQuery {
    pub page: Option<u64>,
    pub per_page: Option<u64>,
}

/// A validated page request. Constructed per incoming listing request and
/// discarded after producing one page; holds no state across requests.
///
/// Fields are private so `from_query` is the only way to build one and
/// the `per_page >= 1` invariant holds for every caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u64,
    per_page: u64,
}

impl PageRequest {
    /// Build a request from raw query parameters.
    ///
    /// Missing values fall back to the configured defaults. `per_page` is
    /// clamped to `[1, MAX_PAGE_SIZE]`; a page number of 0 is rejected.
    pub fn from_query(query: &PageQuery) -> Result<Self, PageError> {
        let page = query.page.unwrap_or(DEFAULT_PAGE_NUMBER);
        if page < 1 {
            return Err(PageError::InvalidPage);
        }
        let per_page = query.per_page.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE);
        Ok(Self { page, per_page })
    }

    // Saturates instead of overflowing; a saturated offset is past the
    // end of any collection and fails the out-of-range check in paginate.
    fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.per_page)
    }
}

/// Navigation links for a page. `next` and `prev` are omitted from the
/// JSON body when there is no adjacent page.
#[derive(Debug, Serialize, PartialEq, Eq, ToSchema)]
pub struct PageLinks {
    #[serde(rename = "self")]
    pub self_link: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,
}

/// One bounded slice of a larger collection plus navigation metadata.
#[derive(Debug, Serialize, ToSchema)]
#[schema(as = PageResponse)]
pub struct Page<T: Serialize> {
    /// Serialized items, at most `per_page` of them.
    pub results: Vec<T>,
    /// Total number of items in the underlying collection.
    pub total: u64,
    /// Current page number (1-based).
    pub page: u64,
    /// Items per page after clamping.
    pub per_page: u64,
    /// Total number of pages; 0 when the collection is empty.
    pub total_pages: u64,
    /// Navigation links for this page.
    pub links: PageLinks,
}

/// A collection the engine can count and slice.
///
/// Implementations must return slices in a stable, deterministic order
/// (repositories sort by `_id` ascending); the engine never reorders.
#[async_trait]
pub trait PageSource {
    type Item;

    /// Total number of items in the collection.
    async fn count(&self) -> Result<u64, ApiError>;

    /// Items in `[offset, offset + limit)` of the stable order.
    async fn slice(&self, offset: u64, limit: u64) -> Result<Vec<Self::Item>, ApiError>;
}

/// Produce one page of `source` for `request`.
///
/// `resource_path` is the list endpoint the links should point back at,
/// e.g. `/api/products`. `serialize` must be a pure function; it is
/// applied to each item of the slice in order.
pub async fn paginate<S, T, F>(
    source: &S,
    request: &PageRequest,
    resource_path: &str,
    serialize: F,
) -> Result<Page<T>, ApiError>
where
    S: PageSource,
    T: Serialize,
    F: Fn(S::Item) -> T,
{
    let total = source.count().await?;
    // from_query clamps per_page to at least 1; guard here as well so a
    // request built inside this module cannot divide by zero.
    let per_page = request.per_page.max(1);
    let total_pages = total.div_ceil(per_page);

    // Out-of-range only applies to non-empty collections; any page of an
    // empty collection yields an empty page.
    let offset = request.offset();
    if total > 0 && offset >= total {
        return Err(PageError::OutOfRange.into());
    }

    let items = source.slice(offset, per_page).await?;
    let results = items.into_iter().map(serialize).collect();

    let links = PageLinks {
        self_link: page_url(resource_path, request.page, per_page),
        next: (request.page < total_pages)
            .then(|| page_url(resource_path, request.page + 1, per_page)),
        prev: (request.page > 1)
            .then(|| page_url(resource_path, request.page - 1, per_page)),
    };

    Ok(Page {
        results,
        total,
        page: request.page,
        per_page,
        total_pages,
        links,
    })
}

fn page_url(resource_path: &str, page: u64, per_page: u64) -> String {
    format!("{}?page={}&per_page={}", resource_path, page, per_page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// In-memory source that records how many store calls it receives.
    struct VecSource {
        items: Vec<u64>,
        count_calls: AtomicUsize,
        slice_calls: AtomicUsize,
    }

    impl VecSource {
        fn with_len(len: u64) -> Self {
            Self {
                items: (0..len).collect(),
                count_calls: AtomicUsize::new(0),
                slice_calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl PageSource for VecSource {
        type Item = u64;

        async fn count(&self) -> Result<u64, ApiError> {
            self.count_calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.items.len() as u64)
        }

        async fn slice(&self, offset: u64, limit: u64) -> Result<Vec<u64>, ApiError> {
            self.slice_calls.fetch_add(1, Ordering::SeqCst);
            Ok(self
                .items
                .iter()
                .skip(offset as usize)
                .take(limit as usize)
                .copied()
                .collect())
        }
    }

    fn request(page: u64, per_page: u64) -> PageRequest {
        PageRequest { page, per_page }
    }

    #[test]
    fn test_per_page_clamped_to_maximum() {
        let query = PageQuery {
            page: Some(1),
            per_page: Some(1000),
        };
        let req = PageRequest::from_query(&query).unwrap();
        assert_eq!(req.per_page, MAX_PAGE_SIZE);
    }

    #[test]
    fn test_per_page_clamped_to_minimum() {
        let query = PageQuery {
            page: Some(1),
            per_page: Some(0),
        };
        let req = PageRequest::from_query(&query).unwrap();
        assert_eq!(req.per_page, 1);
    }

    #[test]
    fn test_defaults_applied_when_params_absent() {
        let query = PageQuery {
            page: None,
            per_page: None,
        };
        let req = PageRequest::from_query(&query).unwrap();
        assert_eq!(req.page, DEFAULT_PAGE_NUMBER);
        assert_eq!(req.per_page, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_page_zero_rejected() {
        let query = PageQuery {
            page: Some(0),
            per_page: None,
        };
        assert_eq!(
            PageRequest::from_query(&query).unwrap_err(),
            PageError::InvalidPage
        );
    }

    #[actix_web::test]
    async fn test_page_count_is_ceiling_of_total_over_per_page() {
        for (total, per_page, expected) in
            [(0, 25, 0), (1, 25, 1), (25, 25, 1), (26, 25, 2), (101, 25, 5)]
        {
            let source = VecSource::with_len(total);
            let page = paginate(&source, &request(1, per_page), "/api/items", |n| n)
                .await
                .unwrap();
            assert_eq!(page.total_pages, expected, "total={}", total);
        }
    }

    #[actix_web::test]
    async fn test_first_page_of_101_items() {
        let source = VecSource::with_len(101);
        let page = paginate(&source, &request(1, 25), "/api/items", |n| n)
            .await
            .unwrap();

        assert_eq!(page.results.len(), 25);
        assert_eq!(page.results[0], 0);
        assert_eq!(page.total, 101);
        assert_eq!(page.total_pages, 5);
        assert_eq!(page.links.self_link, "/api/items?page=1&per_page=25");
        assert_eq!(
            page.links.next.as_deref(),
            Some("/api/items?page=2&per_page=25")
        );
        assert_eq!(page.links.prev, None);
    }

    #[actix_web::test]
    async fn test_last_page_of_101_items() {
        let source = VecSource::with_len(101);
        let page = paginate(&source, &request(5, 25), "/api/items", |n| n)
            .await
            .unwrap();

        assert_eq!(page.results, vec![100]);
        assert_eq!(page.links.next, None);
        assert_eq!(
            page.links.prev.as_deref(),
            Some("/api/items?page=4&per_page=25")
        );
    }

    #[actix_web::test]
    async fn test_huge_page_number_is_out_of_range_not_overflow() {
        let source = VecSource::with_len(101);
        let query = PageQuery {
            page: Some(u64::MAX),
            per_page: Some(100),
        };
        let req = PageRequest::from_query(&query).unwrap();

        let err = paginate(&source, &req, "/api/items", |n| n)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[actix_web::test]
    async fn test_per_page_of_zero_does_not_divide_by_zero() {
        let source = VecSource::with_len(10);
        let page = paginate(&source, &request(1, 0), "/api/items", |n| n)
            .await
            .unwrap();

        assert_eq!(page.per_page, 1);
        assert_eq!(page.results, vec![0]);
        assert_eq!(page.total_pages, 10);
    }

    #[actix_web::test]
    async fn test_page_past_the_end_is_out_of_range() {
        let source = VecSource::with_len(101);
        let err = paginate(&source, &request(6, 25), "/api/items", |n| n)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[actix_web::test]
    async fn test_middle_page_has_both_links() {
        let source = VecSource::with_len(101);
        let page = paginate(&source, &request(3, 25), "/api/items", |n| n)
            .await
            .unwrap();

        assert_eq!(page.results.len(), 25);
        assert_eq!(page.results[0], 50);
        assert!(page.links.next.is_some());
        assert!(page.links.prev.is_some());
    }

    #[actix_web::test]
    async fn test_empty_collection_yields_empty_page() {
        let source = VecSource::with_len(0);
        let page = paginate(&source, &request(1, 25), "/api/items", |n| n)
            .await
            .unwrap();

        assert!(page.results.is_empty());
        assert_eq!(page.total, 0);
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.links.next, None);
        assert_eq!(page.links.prev, None);
    }

    #[actix_web::test]
    async fn test_empty_collection_accepts_any_page_number() {
        let source = VecSource::with_len(0);
        let page = paginate(&source, &request(7, 25), "/api/items", |n| n)
            .await
            .unwrap();
        assert!(page.results.is_empty());
    }

    #[actix_web::test]
    async fn test_exactly_one_count_and_one_slice_per_call() {
        let source = VecSource::with_len(50);
        paginate(&source, &request(2, 10), "/api/items", |n| n)
            .await
            .unwrap();

        assert_eq!(source.count_calls.load(Ordering::SeqCst), 1);
        assert_eq!(source.slice_calls.load(Ordering::SeqCst), 1);
    }

    #[actix_web::test]
    async fn test_identical_calls_yield_identical_pages() {
        let source = VecSource::with_len(42);
        let req = request(2, 10);
        let first = paginate(&source, &req, "/api/items", |n| n).await.unwrap();
        let second = paginate(&source, &req, "/api/items", |n| n).await.unwrap();

        assert_eq!(first.results, second.results);
        assert_eq!(first.total, second.total);
        assert_eq!(first.total_pages, second.total_pages);
        assert_eq!(first.links, second.links);
    }

    #[actix_web::test]
    async fn test_serializer_applied_in_order() {
        let source = VecSource::with_len(5);
        let page = paginate(&source, &request(1, 3), "/api/items", |n| format!("#{}", n))
            .await
            .unwrap();
        assert_eq!(page.results, vec!["#0", "#1", "#2"]);
    }
}
