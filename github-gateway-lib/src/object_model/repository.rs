use super::owner::Owner;
use serde::Deserialize;

/// `Repository` node as returned by the GitHub GraphQL API. The lister
/// requests a subset of these fields, so the optional ones default.
#[derive(Debug, Deserialize)]
pub struct RepositoryNode {
    #[serde(rename = "id")]
    pub id: String,

    #[serde(rename = "name")]
    pub name: String,

    #[serde(rename = "diskUsage")]
    pub disk_usage: Option<i32>,

    #[serde(rename = "owner")]
    pub owner: Owner,

    #[serde(rename = "isPrivate", default)]
    pub is_private: bool,

    #[serde(rename = "fileObject", default)]
    pub file_object: Option<BlobObject>,
}

/// Result of `object(expression: ...) { ... on Blob { text } }`. Trees come
/// back as an empty object and binary blobs with a null `text`.
#[derive(Debug, Deserialize)]
pub struct BlobObject {
    #[serde(rename = "text", default)]
    pub text: Option<String>,
}
