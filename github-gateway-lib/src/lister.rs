use crate::error::{GitHubClientError, GitHubClientResult};
use crate::object_model::{RepositoryNode, RepositorySummary};
use crate::upstream::Upstream;
use log::debug;
use serde_json::{json, Value};

const VIEWER_REPOSITORIES_QUERY: &str = r#"
query {
  viewer {
    repositories(last: 10) {
      nodes {
        id
        name
        diskUsage
        owner {
          login
        }
      }
    }
  }
}
"#;

/// Lists the last 10 repositories owned by the viewer. A response without
/// a node list is an error, unlike an empty one.
pub async fn list_repositories(
    upstream: &dyn Upstream,
) -> GitHubClientResult<Vec<RepositorySummary>> {
    let body = upstream
        .graphql(VIEWER_REPOSITORIES_QUERY, json!({}))
        .await?;

    let Some(nodes) = body
        .pointer("/data/viewer/repositories/nodes")
        .and_then(Value::as_array)
    else {
        return Err(GitHubClientError::MissingData(
            "data.viewer.repositories.nodes",
        ));
    };

    let repos = nodes
        .iter()
        .filter(|node| !node.is_null())
        .map(|node| {
            serde_json::from_value::<RepositoryNode>(node.clone()).map(RepositorySummary::from)
        })
        .collect::<Result<Vec<_>, _>>()?;
    debug!("listed {} viewer repositories", repos.len());
    Ok(repos)
}
