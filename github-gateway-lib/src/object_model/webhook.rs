use serde::Deserialize;

/// Repository webhook as listed by `GET /repos/{owner}/{repo}/hooks`
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Webhook {
    #[serde(rename = "id")]
    pub id: u64,

    #[serde(rename = "type", default)]
    pub kind: Option<String>,

    #[serde(rename = "name")]
    pub name: String,

    #[serde(rename = "active")]
    pub active: bool,

    #[serde(rename = "events", default)]
    pub events: Vec<String>,

    #[serde(rename = "config", default)]
    pub config: WebhookConfig,

    #[serde(rename = "url")]
    pub url: String,

    #[serde(rename = "test_url", default)]
    pub test_url: Option<String>,

    #[serde(rename = "ping_url", default)]
    pub ping_url: Option<String>,

    #[serde(rename = "deliveries_url", default)]
    pub deliveries_url: Option<String>,

    #[serde(rename = "created_at")]
    pub created_at: String,

    #[serde(rename = "updated_at")]
    pub updated_at: String,

    #[serde(rename = "last_response", default)]
    pub last_response: Option<WebhookLastResponse>,
}

/// Delivery settings. `secret` is never exposed.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct WebhookConfig {
    #[serde(rename = "url", default)]
    pub url: Option<String>,

    #[serde(rename = "content_type", default)]
    pub content_type: Option<String>,

    #[serde(rename = "insecure_ssl", default)]
    pub insecure_ssl: Option<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct WebhookLastResponse {
    #[serde(rename = "code", default)]
    pub code: Option<i32>,

    #[serde(rename = "status", default)]
    pub status: Option<String>,

    #[serde(rename = "message", default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::Webhook;
    use serde_json::json;

    #[test]
    fn parses_github_payload_without_secret() {
        let hook = serde_json::from_value::<Webhook>(json!({
            "type": "Repository",
            "id": 12345678,
            "name": "web",
            "active": true,
            "events": ["push", "pull_request"],
            "config": {
                "content_type": "json",
                "insecure_ssl": "0",
                "secret": "********",
                "url": "https://example.com/webhook"
            },
            "updated_at": "2019-06-03T00:57:16Z",
            "created_at": "2019-06-03T00:57:16Z",
            "url": "https://api.github.com/repos/octocat/Hello-World/hooks/12345678",
            "test_url": "https://api.github.com/repos/octocat/Hello-World/hooks/12345678/test",
            "ping_url": "https://api.github.com/repos/octocat/Hello-World/hooks/12345678/pings",
            "deliveries_url": "https://api.github.com/repos/octocat/Hello-World/hooks/12345678/deliveries",
            "last_response": { "code": null, "status": "unused", "message": null }
        }))
        .unwrap();

        assert_eq!(hook.id, 12345678);
        assert_eq!(hook.kind.as_deref(), Some("Repository"));
        assert_eq!(hook.events, vec!["push", "pull_request"]);
        assert_eq!(
            hook.config.url.as_deref(),
            Some("https://example.com/webhook")
        );
        assert_eq!(
            hook.last_response.and_then(|r| r.status).as_deref(),
            Some("unused")
        );
    }
}
