use async_trait::async_trait;

use crate::domain::errors::RepositoryResult;
use crate::domain::shrinkage::{
    BranchIds, NewShrinkageDetailLine, NewShrinkageHeader, Product, ShrinkageDetailLine,
    ShrinkageReason, ShrinkageSummary,
};

/// Maximum number of products returned by a catalog search
pub const PRODUCT_SEARCH_LIMIT: i64 = 10;

/// Repository trait for shrinkage headers, their detail lines and the
/// reference data used to fill them in.
///
/// Every operation is a single statement with no state kept between calls.
/// Failures are always returned to the caller; an empty collection means
/// "no matching rows", never "storage unavailable".
#[async_trait]
pub trait ShrinkageRepository: Send + Sync {
    /// Headers belonging to any of the given branches with their aggregated
    /// detail total, newest first
    async fn list_by_branches(&self, branches: &BranchIds)
        -> RepositoryResult<Vec<ShrinkageSummary>>;

    /// Insert a header and return its storage-assigned id
    async fn create_header(&self, header: &NewShrinkageHeader) -> RepositoryResult<i64>;

    /// Attach a line item to an existing header
    ///
    /// A line without a unit price takes the product's catalog sale price;
    /// an unknown product is then rejected as `InvalidInput`.
    async fn add_detail_line(&self, line: &NewShrinkageDetailLine) -> RepositoryResult<()>;

    /// Line items of one header
    async fn list_detail_lines(&self, header_id: i64) -> RepositoryResult<Vec<ShrinkageDetailLine>>;

    /// All shrinkage reasons ordered by description
    async fn list_reasons(&self) -> RepositoryResult<Vec<ShrinkageReason>>;

    /// Up to `PRODUCT_SEARCH_LIMIT` products whose description or id contains `term`
    async fn search_products(&self, term: &str) -> RepositoryResult<Vec<Product>>;
}
