//! Scripted in-memory `Upstream` for tests

use crate::error::{GitHubClientError, GitHubClientResult};
use crate::upstream::Upstream;
use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

#[derive(Default)]
struct InFlight {
    current: usize,
    max: usize,
}

#[derive(Default)]
pub(crate) struct FakeUpstream {
    graphql: Vec<(&'static str, Value)>,
    rest: HashMap<String, Value>,
    rest_paged: HashMap<String, Vec<Value>>,
    latency: Option<Duration>,
    calls: Mutex<Vec<String>>,
    queries: Mutex<Vec<String>>,
    variables: Mutex<Vec<Value>>,
    in_flight: Mutex<HashMap<&'static str, InFlight>>,
}

impl FakeUpstream {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Answers any GraphQL query containing `needle` with `body`
    pub(crate) fn with_graphql(mut self, needle: &'static str, body: Value) -> Self {
        self.graphql.push((needle, body));
        self
    }

    pub(crate) fn with_rest(mut self, path: &str, body: Value) -> Self {
        self.rest.insert(path.to_string(), body);
        self
    }

    pub(crate) fn with_rest_paged(mut self, path: &str, items: Vec<Value>) -> Self {
        self.rest_paged.insert(path.to_string(), items);
        self
    }

    pub(crate) fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn graphql_queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }

    pub(crate) fn graphql_variables(&self) -> Vec<Value> {
        self.variables.lock().unwrap().clone()
    }

    /// Highest number of simultaneous calls seen for `kind` (`graphql`,
    /// `rest` or `rest_paged`)
    pub(crate) fn max_in_flight(&self, kind: &str) -> usize {
        self.in_flight
            .lock()
            .unwrap()
            .get(kind)
            .map_or(0, |x| x.max)
    }

    async fn call(&self, kind: &'static str, key: &str) {
        self.calls.lock().unwrap().push(format!("{kind}:{key}"));
        {
            let mut in_flight = self.in_flight.lock().unwrap();
            let entry = in_flight.entry(kind).or_default();
            entry.current += 1;
            entry.max = entry.max.max(entry.current);
        }
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        if let Some(entry) = self.in_flight.lock().unwrap().get_mut(kind) {
            entry.current -= 1;
        }
    }

    fn not_found(path: &str) -> GitHubClientError {
        GitHubClientError::Rejected {
            url: Url::parse("https://api.github.com/")
                .and_then(|u| u.join(path))
                .unwrap(),
            status: StatusCode::NOT_FOUND,
            message: String::from("Not Found"),
        }
    }
}

#[async_trait]
impl Upstream for FakeUpstream {
    async fn graphql(&self, query: &str, variables: Value) -> GitHubClientResult<Value> {
        let Some((needle, body)) = self
            .graphql
            .iter()
            .find(|(needle, _)| query.contains(needle))
        else {
            return Err(Self::not_found("graphql"));
        };
        self.queries.lock().unwrap().push(query.to_string());
        self.variables.lock().unwrap().push(variables);
        self.call("graphql", needle).await;
        Ok(body.clone())
    }

    async fn rest_get(&self, path: &str) -> GitHubClientResult<Value> {
        self.call("rest", path).await;
        self.rest
            .get(path)
            .cloned()
            .ok_or_else(|| Self::not_found(path))
    }

    async fn rest_get_paged(&self, path: &str) -> GitHubClientResult<Vec<Value>> {
        self.call("rest_paged", path).await;
        self.rest_paged
            .get(path)
            .cloned()
            .ok_or_else(|| Self::not_found(path))
    }
}

/// `Repository` node for `octocat/hello`, optionally with a file blob
pub(crate) fn repository_node(text: Option<&str>) -> Value {
    let mut node = json!({
        "id": "R1",
        "name": "hello",
        "isPrivate": true,
        "diskUsage": 2048,
        "owner": { "login": "octocat" },
        "fileObject": null
    });
    if let Some(text) = text {
        node["fileObject"] = json!({ "text": text });
    }
    node
}

pub(crate) fn tree(kinds: &[&str]) -> Value {
    json!({
        "sha": "9fb037999f264ba9a7fc6274d15fa3ae2ab98312",
        "url": "https://api.github.com/repos/octocat/hello/git/trees/9fb037999f264ba9a7fc6274d15fa3ae2ab98312",
        "truncated": false,
        "tree": kinds
            .iter()
            .enumerate()
            .map(|(i, kind)| json!({
                "path": format!("entry-{i}"),
                "mode": "100644",
                "type": kind,
                "sha": format!("{i:040}"),
            }))
            .collect::<Vec<_>>()
    })
}

pub(crate) fn hook(id: u64, active: bool) -> Value {
    json!({
        "type": "Repository",
        "id": id,
        "name": "web",
        "active": active,
        "events": ["push"],
        "config": {
            "content_type": "json",
            "insecure_ssl": "0",
            "url": format!("https://example.com/hooks/{id}")
        },
        "updated_at": "2024-01-02T00:00:00Z",
        "created_at": "2024-01-01T00:00:00Z",
        "url": format!("https://api.github.com/repos/octocat/hello/hooks/{id}"),
        "last_response": { "code": 200, "status": "active", "message": "OK" }
    })
}
