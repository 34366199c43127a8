use crate::aggregator::fetch_repository_details;
use crate::error::GitHubClientResult;
use crate::gate::ConcurrencyGate;
use crate::lister::list_repositories;
use crate::object_model::{RepositoryDetail, RepositorySummary};
use crate::upstream::Upstream;
use std::sync::Arc;

/// The two read pipelines behind the GraphQL query surface. Detail
/// aggregations go through the admission gate, listings do not.
#[derive(Clone)]
pub struct RepositoryService {
    upstream: Arc<dyn Upstream>,
    gate: ConcurrencyGate,
}

impl RepositoryService {
    pub fn new(upstream: Arc<dyn Upstream>, gate: ConcurrencyGate) -> Self {
        Self { upstream, gate }
    }

    pub fn gate(&self) -> &ConcurrencyGate {
        &self.gate
    }

    pub async fn repositories(&self) -> GitHubClientResult<Vec<RepositorySummary>> {
        list_repositories(self.upstream.as_ref()).await
    }

    pub async fn repository_details(
        &self,
        id: &str,
        file_path: &str,
    ) -> GitHubClientResult<Option<RepositoryDetail>> {
        let upstream = self.upstream.clone();
        let id = id.to_string();
        let file_path = file_path.to_string();
        self.gate
            .run(async move {
                fetch_repository_details(upstream.as_ref(), &id, &file_path).await
            })
            .await
    }
}
