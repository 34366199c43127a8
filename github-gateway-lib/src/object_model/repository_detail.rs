use super::webhook::Webhook;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RepositoryDetail {
    pub id: String,
    pub name: String,
    pub size: Option<i32>,
    pub owner: String,
    pub is_private: bool,
    /// Number of `blob` entries in the recursive tree
    pub files_amount: usize,
    pub yaml_content: Option<String>,
    pub active_webhooks: Vec<Webhook>,
}
