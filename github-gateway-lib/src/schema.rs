use crate::error::GitHubClientError;
use crate::object_model::{RepositoryDetail, RepositorySummary, Webhook, WebhookLastResponse};
use crate::service::RepositoryService;
use async_graphql::{
    Context, EmptyMutation, EmptySubscription, Error, ErrorExtensions, Object, Result, Schema, ID,
};

pub type RepositorySchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

pub fn create_schema(service: RepositoryService) -> RepositorySchema {
    Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
        .data(service)
        .finish()
}

impl ErrorExtensions for GitHubClientError {
    fn extend(&self) -> Error {
        Error::new(self.to_string()).extend_with(|_, e| {
            e.set("code", self.code());
            if let GitHubClientError::Rejected { status, .. } = self {
                e.set("status", i32::from(status.as_u16()));
            }
        })
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Last 10 repositories owned by the authenticated viewer
    async fn repositories(&self, ctx: &Context<'_>) -> Result<Vec<RepositorySummary>> {
        ctx.data::<RepositoryService>()?
            .repositories()
            .await
            .map_err(|e| e.extend())
    }

    /// File count, one file's content and active webhooks of a repository.
    /// `filePath` is resolved against the default branch head.
    async fn repository_details(
        &self,
        ctx: &Context<'_>,
        id: ID,
        file_path: String,
    ) -> Result<Option<RepositoryDetail>> {
        ctx.data::<RepositoryService>()?
            .repository_details(&id, &file_path)
            .await
            .map_err(|e| e.extend())
    }
}

#[Object]
impl RepositorySummary {
    async fn id(&self) -> ID {
        ID(self.id.clone())
    }

    async fn name(&self) -> &str {
        &self.name
    }

    /// Disk usage as reported by GitHub
    async fn size(&self) -> Option<i32> {
        self.size
    }

    /// Owner login
    async fn owner(&self) -> &str {
        &self.owner
    }
}

#[Object]
impl RepositoryDetail {
    async fn id(&self) -> ID {
        ID(self.id.clone())
    }

    async fn name(&self) -> &str {
        &self.name
    }

    async fn size(&self) -> Option<i32> {
        self.size
    }

    async fn owner(&self) -> &str {
        &self.owner
    }

    async fn is_private(&self) -> bool {
        self.is_private
    }

    /// Number of files (blobs) in the `main` branch tree
    async fn files_amount(&self) -> Result<i32> {
        Ok(i32::try_from(self.files_amount)?)
    }

    async fn yaml_content(&self) -> Option<&str> {
        self.yaml_content.as_deref()
    }

    async fn active_webhooks(&self) -> &[Webhook] {
        &self.active_webhooks
    }
}

#[Object]
impl Webhook {
    async fn id(&self) -> ID {
        ID(self.id.to_string())
    }

    #[graphql(name = "type")]
    async fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    async fn name(&self) -> &str {
        &self.name
    }

    async fn url(&self) -> &str {
        &self.url
    }

    async fn active(&self) -> bool {
        self.active
    }

    async fn events(&self) -> &[String] {
        &self.events
    }

    /// Delivery target
    async fn config_url(&self) -> Option<&str> {
        self.config.url.as_deref()
    }

    async fn content_type(&self) -> Option<&str> {
        self.config.content_type.as_deref()
    }

    async fn insecure_ssl(&self) -> Option<&str> {
        self.config.insecure_ssl.as_deref()
    }

    async fn created_at(&self) -> &str {
        &self.created_at
    }

    async fn updated_at(&self) -> &str {
        &self.updated_at
    }

    async fn last_response(&self) -> Option<&WebhookLastResponse> {
        self.last_response.as_ref()
    }
}

#[Object]
impl WebhookLastResponse {
    async fn code(&self) -> Option<i32> {
        self.code
    }

    async fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    async fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
