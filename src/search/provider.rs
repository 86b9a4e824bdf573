use crate::places::result::RawPlaceResult;
use crate::search::session::SearchRequest;
use crate::Result;
use async_trait::async_trait;

/// Port for the external geo-search service that answers nearby-place queries.
///
/// Implementations report transport or service failures as
/// [`Error::Provider`](crate::Error::Provider).
#[async_trait]
pub trait PlaceSearchProvider: Send + Sync {
    async fn search(&self, request: &SearchRequest) -> Result<Vec<RawPlaceResult>>;

    /// Name of this provider (for logging)
    fn name(&self) -> &'static str {
        "unnamed"
    }
}
