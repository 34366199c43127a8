use super::repository::RepositoryNode;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RepositorySummary {
    pub id: String,
    pub name: String,
    /// Upstream `diskUsage`
    pub size: Option<i32>,
    /// Owner login
    pub owner: String,
}

impl From<RepositoryNode> for RepositorySummary {
    fn from(node: RepositoryNode) -> Self {
        Self {
            id: node.id,
            name: node.name,
            size: node.disk_usage,
            owner: node.owner.login,
        }
    }
}
