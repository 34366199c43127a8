mod aggregator;
mod error;
mod gate;
mod github_client;
mod link_urls;
mod lister;
mod logging_middleware;
mod object_model;
mod schema;
mod service;
mod upstream;

#[cfg(test)]
mod testing;

pub use self::aggregator::{fetch_repository_details, RepositoryLocator};
pub use self::error::{GitHubClientError, GitHubClientResult};
pub use self::gate::ConcurrencyGate;
pub use self::github_client::{GitHubClient, DEFAULT_API_URL};
pub use self::lister::list_repositories;
pub use self::logging_middleware::LoggingMiddleware;
pub use self::object_model::{
    BlobObject, Owner, RepositoryDetail, RepositoryNode, RepositorySummary, RepositoryTree,
    TreeEntry, TreeEntryKind, Webhook, WebhookConfig, WebhookLastResponse,
};
pub use self::schema::{create_schema, QueryRoot, RepositorySchema};
pub use self::service::RepositoryService;
pub use self::upstream::Upstream;
