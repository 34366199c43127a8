use crate::error::GitHubClientResult;
use crate::object_model::{RepositoryDetail, RepositoryNode, RepositoryTree, Webhook};
use crate::upstream::Upstream;
use futures_util::future::try_join;
use log::{debug, warn};
use serde_json::{json, Value};

const REPOSITORY_DETAILS_QUERY: &str = r#"
query ($id: ID!, $expression: String!) {
  node(id: $id) {
    ... on Repository {
      id
      name
      isPrivate
      diskUsage
      owner {
        login
      }
      fileObject: object(expression: $expression) {
        ... on Blob {
          text
        }
      }
    }
  }
}
"#;

// The file blob is resolved against HEAD while the tree is read from this
// branch; the two disagree on repositories whose default branch differs.
const TREE_BRANCH: &str = "main";

const HOOKS_PER_PAGE: usize = 100;

/// Where phase two of the aggregation looks for the tree and webhooks
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RepositoryLocator {
    pub owner: String,
    pub name: String,
}

/// Builds the full record for one repository, or `None` when the ID does
/// not resolve to a repository visible to the viewer.
pub async fn fetch_repository_details(
    upstream: &dyn Upstream,
    id: &str,
    file_path: &str,
) -> GitHubClientResult<Option<RepositoryDetail>> {
    let Some(node) = fetch_repository_node(upstream, id, file_path).await? else {
        debug!("repository {} not found", id);
        return Ok(None);
    };

    let locator = RepositoryLocator {
        owner: node.owner.login.clone(),
        name: node.name.clone(),
    };
    let (files_amount, active_webhooks) = try_join(
        count_files(upstream, &locator),
        fetch_active_webhooks(upstream, &locator),
    )
    .await?;

    Ok(Some(RepositoryDetail {
        id: node.id,
        name: node.name,
        size: node.disk_usage,
        owner: node.owner.login,
        is_private: node.is_private,
        files_amount,
        yaml_content: node.file_object.and_then(|blob| blob.text),
        active_webhooks,
    }))
}

async fn fetch_repository_node(
    upstream: &dyn Upstream,
    id: &str,
    file_path: &str,
) -> GitHubClientResult<Option<RepositoryNode>> {
    let body = upstream
        .graphql(
            REPOSITORY_DETAILS_QUERY,
            json!({ "id": id, "expression": format!("HEAD:{file_path}") }),
        )
        .await?;

    match body.pointer("/data/node") {
        None | Some(Value::Null) => Ok(None),
        // Any other node type matches none of the fragment's fields
        Some(Value::Object(fields)) if fields.is_empty() => Ok(None),
        Some(node) => Ok(Some(serde_json::from_value(node.clone())?)),
    }
}

async fn count_files(
    upstream: &dyn Upstream,
    locator: &RepositoryLocator,
) -> GitHubClientResult<usize> {
    let body = upstream
        .rest_get(&format!(
            "repos/{}/{}/git/trees/{}?recursive=1",
            locator.owner, locator.name, TREE_BRANCH
        ))
        .await?;
    let tree = serde_json::from_value::<RepositoryTree>(body)?;
    if tree.truncated {
        warn!(
            "tree of {}/{} was truncated by GitHub, file count covers {} entries only",
            locator.owner,
            locator.name,
            tree.tree.len()
        );
    }
    Ok(tree.blob_count())
}

async fn fetch_active_webhooks(
    upstream: &dyn Upstream,
    locator: &RepositoryLocator,
) -> GitHubClientResult<Vec<Webhook>> {
    let items = upstream
        .rest_get_paged(&format!(
            "repos/{}/{}/hooks?per_page={}",
            locator.owner, locator.name, HOOKS_PER_PAGE
        ))
        .await?;

    let mut active = Vec::new();
    for item in items {
        let hook = serde_json::from_value::<Webhook>(item)?;
        if hook.active {
            active.push(hook);
        }
    }
    Ok(active)
}
