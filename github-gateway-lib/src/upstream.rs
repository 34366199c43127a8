use crate::error::GitHubClientResult;
use async_trait::async_trait;
use serde_json::Value;

/// Raw access to the GitHub API. Paths are relative to the API root, e.g.
/// `repos/octo/hello/hooks`.
#[async_trait]
pub trait Upstream: Send + Sync {
    /// POSTs `{query, variables}` to the GraphQL endpoint and returns the
    /// whole response body, `data` and `errors` included
    async fn graphql(&self, query: &str, variables: Value) -> GitHubClientResult<Value>;

    async fn rest_get(&self, path: &str) -> GitHubClientResult<Value>;

    /// GETs a list endpoint and concatenates the items of every page
    async fn rest_get_paged(&self, path: &str) -> GitHubClientResult<Vec<Value>>;
}
