mod owner;
mod repository;
mod repository_detail;
mod repository_summary;
mod tree;
mod webhook;

pub use self::owner::Owner;
pub use self::repository::{BlobObject, RepositoryNode};
pub use self::repository_detail::RepositoryDetail;
pub use self::repository_summary::RepositorySummary;
pub use self::tree::{RepositoryTree, TreeEntry, TreeEntryKind};
pub use self::webhook::{Webhook, WebhookConfig, WebhookLastResponse};
