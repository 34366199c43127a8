use crate::error::{GitHubClientError, GitHubClientResult};
use crate::link_urls::PageLinks;
use crate::logging_middleware::LoggingMiddleware;
use crate::upstream::Upstream;
use anyhow::anyhow;
use async_trait::async_trait;
use futures_util::future::try_join_all;
use log::warn;
use reqwest::header::{HeaderMap, ACCEPT, USER_AGENT};
use reqwest::{Client, IntoUrl, Url};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware, RequestBuilder};
use serde_json::{json, Value};

pub const DEFAULT_API_URL: &str = "https://api.github.com/";

pub struct GitHubClient {
    client: ClientWithMiddleware,
    url: Url,
    token: String,
}

impl GitHubClient {
    pub fn new<U>(url: U, token: &str) -> GitHubClientResult<Self>
    where
        U: IntoUrl,
    {
        let client = ClientBuilder::new(Client::new())
            .with(LoggingMiddleware::default())
            .build();
        Self::with_client(client, url, token)
    }

    pub fn with_client<U>(
        client: ClientWithMiddleware,
        url: U,
        token: &str,
    ) -> GitHubClientResult<Self>
    where
        U: IntoUrl,
    {
        let mut url = url
            .into_url()
            .map_err(|e| GitHubClientError::Other(anyhow!(e)))?;
        // Relative joins replace the last segment unless the base is a directory
        if !url.path().ends_with('/') {
            url.set_path(&format!("{}/", url.path()));
        }

        Ok(Self {
            client,
            url,
            token: String::from(token),
        })
    }

    fn join(&self, path: &str) -> GitHubClientResult<Url> {
        self.url
            .join(path)
            .map_err(|e| GitHubClientError::Other(anyhow!(e)))
    }

    /// Sends the request and returns headers plus the parsed body of a 2xx
    /// response. Any other status becomes `Rejected` before the body is
    /// interpreted.
    async fn send(
        &self,
        url: &Url,
        request_builder: RequestBuilder,
    ) -> GitHubClientResult<(HeaderMap, Value)> {
        let response = request_builder
            .header(USER_AGENT, "github-gateway")
            .header(ACCEPT, "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(|e| GitHubClientError::unreachable(url, e))?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .bytes()
            .await
            .map_err(|e| GitHubClientError::unreachable(url, e))?;

        if !status.is_success() {
            return Err(GitHubClientError::Rejected {
                url: url.clone(),
                status,
                message: error_message(&body),
            });
        }

        Ok((headers, serde_json::from_slice(&body)?))
    }

    async fn get_page(
        &self,
        url: &Url,
        page_number: Option<usize>,
    ) -> GitHubClientResult<(HeaderMap, Value)> {
        let mut request_builder = self.client.get(url.clone());
        if let Some(x) = page_number {
            request_builder = request_builder.query(&[("page", x)]);
        }
        self.send(url, request_builder).await
    }
}

#[async_trait]
impl Upstream for GitHubClient {
    async fn graphql(&self, query: &str, variables: Value) -> GitHubClientResult<Value> {
        let url = self.join("graphql")?;
        let request_builder = self
            .client
            .post(url.clone())
            .json(&json!({ "query": query, "variables": variables }));
        let (_, body) = self.send(&url, request_builder).await?;

        if let Some(errors) = body.get("errors").and_then(Value::as_array) {
            for error in errors {
                warn!(
                    "GraphQL error from {}: {}",
                    url,
                    error
                        .get("message")
                        .and_then(Value::as_str)
                        .unwrap_or("(no message)")
                );
            }
        }

        Ok(body)
    }

    async fn rest_get(&self, path: &str) -> GitHubClientResult<Value> {
        let url = self.join(path)?;
        let (_, body) = self.get_page(&url, None).await?;
        Ok(body)
    }

    async fn rest_get_paged(&self, path: &str) -> GitHubClientResult<Vec<Value>> {
        fn into_items(url: &Url, body: Value) -> GitHubClientResult<Vec<Value>> {
            match body {
                Value::Array(items) => Ok(items),
                _ => Err(GitHubClientError::Other(anyhow!(
                    "expected a JSON array from {url}"
                ))),
            }
        }

        let url = self.join(path)?;
        let (headers, body) = self.get_page(&url, None).await?;
        let mut all_items = into_items(&url, body)?;

        let Some(page_links) = PageLinks::from_headers(&headers)? else {
            return Ok(all_items);
        };

        for (_, body) in try_join_all(
            page_links
                .remaining()
                .map(|i| self.get_page(&url, Some(i))),
        )
        .await?
        {
            all_items.extend(into_items(&url, body)?);
        }

        Ok(all_items)
    }
}

fn error_message(body: &[u8]) -> String {
    serde_json::from_slice::<Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(Value::as_str).map(String::from))
        .unwrap_or_else(|| String::from_utf8_lossy(body).trim().to_string())
}
