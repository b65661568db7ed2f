use async_trait::async_trait;
use nr_core::{Error, PublishRequest, PublishedPost, Publisher, Result};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt;
use std::time::Duration;
use tracing::{error, info};

pub const DEFAULT_API_URL: &str = "https://gql.hashnode.com/";

const PUBLISH_POST_MUTATION: &str = r#"
mutation PublishPost($input: PublishPostInput!) {
    publishPost(input: $input) {
        post {
            id
            title
            slug
            url
        }
    }
}
"#;

#[derive(Clone, Serialize, Deserialize)]
pub struct HashnodeConfig {
    pub api_url: String,
    pub api_token: String,
    pub publication_id: String,
}

impl fmt::Debug for HashnodeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashnodeConfig")
            .field("api_url", &self.api_url)
            .field("api_token", &"<redacted>")
            .field("publication_id", &self.publication_id)
            .finish()
    }
}

impl HashnodeConfig {
    pub fn new(api_token: impl Into<String>, publication_id: impl Into<String>) -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_token: api_token.into(),
            publication_id: publication_id.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Option<Value>,
}

/// Publishes digests as Hashnode posts.
#[derive(Debug, Clone)]
pub struct HashnodePublisher {
    client: Client,
    config: HashnodeConfig,
}

impl HashnodePublisher {
    pub fn new(config: HashnodeConfig) -> Result<Self> {
        if config.api_token.is_empty() || config.publication_id.is_empty() {
            return Err(Error::Config("Hashnode token and publication id are required".to_string()));
        }
        let client = Client::builder().timeout(Duration::from_secs(60)).build()?;
        Ok(Self { client, config })
    }

    /// GraphQL variables for a `publishPost` call.
    pub fn variables(&self, request: &PublishRequest) -> Value {
        let cover = request
            .cover_image
            .as_ref()
            .map(|url| json!({ "coverImageURL": url }));
        json!({
            "input": {
                "title": request.title,
                "contentMarkdown": request.markdown_body,
                "slug": request.slug,
                "publicationId": self.config.publication_id,
                "tags": request.tags,
                "disableComments": false,
                "coverImageOptions": cover,
            }
        })
    }
}

/// Interprets a GraphQL response body.
fn parse_response(body: &str) -> Result<PublishedPost> {
    let response: GraphQlResponse = serde_json::from_str(body)?;
    if let Some(errors) = response.errors.filter(|e| !e.is_null()) {
        let pretty = serde_json::to_string_pretty(&errors)?;
        return Err(Error::Publish(format!("Hashnode API Error:\n{}", pretty)));
    }
    let post = response
        .data
        .as_ref()
        .and_then(|data| data.pointer("/publishPost/post"))
        .filter(|post| !post.is_null())
        .ok_or_else(|| Error::Publish("response did not contain a post".to_string()))?;
    Ok(serde_json::from_value(post.clone())?)
}

#[async_trait]
impl Publisher for HashnodePublisher {
    async fn publish(&self, request: &PublishRequest) -> Result<PublishedPost> {
        info!(slug = %request.slug, "📤 Publishing to Hashnode");
        let response = self
            .client
            .post(&self.config.api_url)
            .header("Authorization", &self.config.api_token)
            .json(&json!({
                "query": PUBLISH_POST_MUTATION,
                "variables": self.variables(request),
            }))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if status != StatusCode::OK {
            error!(%status, "Hashnode publish failed");
            return Err(Error::Publish(format!("HTTP {}: {}", status.as_u16(), body)));
        }
        parse_response(&body)
    }
}
