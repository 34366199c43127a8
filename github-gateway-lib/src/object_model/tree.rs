use serde::Deserialize;

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct RepositoryTree {
    #[serde(rename = "sha")]
    pub sha: String,

    #[serde(rename = "url", default)]
    pub url: Option<String>,

    #[serde(rename = "tree")]
    pub tree: Vec<TreeEntry>,

    #[serde(rename = "truncated", default)]
    pub truncated: bool,
}

impl RepositoryTree {
    pub fn blob_count(&self) -> usize {
        self.tree
            .iter()
            .filter(|entry| entry.kind == TreeEntryKind::Blob)
            .count()
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct TreeEntry {
    #[serde(rename = "path")]
    pub path: String,

    #[serde(rename = "mode")]
    pub mode: String,

    #[serde(rename = "type")]
    pub kind: TreeEntryKind,

    #[serde(rename = "sha")]
    pub sha: String,

    #[serde(rename = "size", default)]
    pub size: Option<u64>,

    #[serde(rename = "url", default)]
    pub url: Option<String>,
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TreeEntryKind {
    Blob,
    Tree,
    /// Submodule
    Commit,
    #[serde(other)]
    Unknown,
}
