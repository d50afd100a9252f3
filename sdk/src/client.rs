use {
    crate::{error::McpClientError, types::*},
    reqwest::Client,
    serde::de::DeserializeOwned,
    std::time::Duration,
};

/// Health probes answer fast or not at all.
pub const HEALTH_TIMEOUT: Duration = Duration::from_secs(5);
/// Tool invocations proxy a WooCommerce REST call, so they get a generous
/// timeout.
pub const CALL_TOOL_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for one WooCommerce MCP server base URL.
///
/// The client holds no state beyond the connection pool; each method issues a
/// single bounded request and there are no retries. Point it at a mock server
/// in tests by constructing it with the mock's URL.
#[derive(Debug)]
pub struct McpClient {
    client: Client,
    base_url: String,
}

impl McpClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Probe `GET {base}/health`. Only a success status counts as healthy;
    /// the body is ignored.
    pub async fn health(&self) -> Result<(), McpClientError> {
        let response = self
            .client
            .get(format!("{}/health", self.base_url))
            .timeout(HEALTH_TIMEOUT)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(McpClientError::Status(response.status()));
        }

        Ok(())
    }

    /// Fetch the tool listing from `GET {base}/list_tools`.
    pub async fn list_tools(&self) -> Result<ToolListing, McpClientError> {
        let response = self
            .client
            .get(format!("{}/list_tools", self.base_url))
            .send()
            .await?;

        Self::decode(response).await
    }

    /// Invoke a tool by name via `POST {base}/call_tool`. The `isError` flag
    /// of the result is not interpreted here; surfacing it is the caller's
    /// concern.
    pub async fn call_tool(&self, call: &ToolCall) -> Result<ToolResult, McpClientError> {
        let response = self
            .client
            .post(format!("{}/call_tool", self.base_url))
            .timeout(CALL_TOOL_TIMEOUT)
            .json(call)
            .send()
            .await?;

        Self::decode(response).await
    }

    // Read the body before parsing so a bad status and a bad shape map to
    // distinct error variants.
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, McpClientError> {
        let status = response.status();

        if !status.is_success() {
            return Err(McpClientError::Status(status));
        }

        let text = response.text().await?;

        Ok(serde_json::from_str(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        assert_matches::assert_matches,
        mockito::{Matcher, Server, ServerGuard},
        serde_json::json,
    };

    async fn create_server_and_client() -> (ServerGuard, McpClient) {
        let server = Server::new_async().await;
        let client = McpClient::new(&server.url());
        (server, client)
    }

    #[test]
    fn test_base_url_is_normalized() {
        let client = McpClient::new("http://localhost:8000/");
        assert_eq!(client.base_url(), "http://localhost:8000");
    }

    #[tokio::test]
    async fn test_health_ok_on_200() {
        let (mut server, client) = create_server_and_client().await;

        let mock = server
            .mock("GET", "/health")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({ "status": "ok" }).to_string())
            .create_async()
            .await;

        assert_matches!(client.health().await, Ok(()));

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_health_surfaces_bad_status() {
        let (mut server, client) = create_server_and_client().await;

        let mock = server
            .mock("GET", "/health")
            .with_status(503)
            .create_async()
            .await;

        assert_matches!(
            client.health().await,
            Err(McpClientError::Status(status)) if status.as_u16() == 503
        );

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_health_surfaces_transport_failure() {
        // Nothing listens on port 1.
        let client = McpClient::new("http://127.0.0.1:1");

        assert_matches!(client.health().await, Err(McpClientError::Transport(_)));
    }

    #[tokio::test]
    async fn test_list_tools_parses_listing() {
        let (mut server, client) = create_server_and_client().await;

        let mock = server
            .mock("GET", "/list_tools")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "tools": [
                        {
                            "name": "search_products",
                            "description": "Search for products in WooCommerce store.",
                            "inputSchema": {
                                "type": "object",
                                "required": ["base_url", "consumer_key", "consumer_secret"]
                            }
                        }
                    ]
                })
                .to_string(),
            )
            .create_async()
            .await;

        let listing = client.list_tools().await.unwrap();

        assert_eq!(listing.tools.len(), 1);
        assert!(listing.contains(SEARCH_PRODUCTS_TOOL));

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_list_tools_surfaces_bad_status() {
        let (mut server, client) = create_server_and_client().await;

        let mock = server
            .mock("GET", "/list_tools")
            .with_status(500)
            .create_async()
            .await;

        assert_matches!(
            client.list_tools().await,
            Err(McpClientError::Status(status)) if status.as_u16() == 500
        );

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_list_tools_surfaces_malformed_body() {
        let (mut server, client) = create_server_and_client().await;

        let mock = server
            .mock("GET", "/list_tools")
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;

        assert_matches!(client.list_tools().await, Err(McpClientError::Parse(_)));

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_call_tool_posts_name_and_arguments() {
        let (mut server, client) = create_server_and_client().await;

        let mock = server
            .mock("POST", "/call_tool")
            .match_body(Matcher::Json(json!({
                "name": "search_products",
                "arguments": {
                    "base_url": "http://wordpress.localhost:8000",
                    "consumer_key": "ck_test",
                    "consumer_secret": "cs_test",
                    "search": "low sneakers",
                    "per_page": "10"
                }
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "content": [{ "type": "text", "text": "[]" }]
                })
                .to_string(),
            )
            .create_async()
            .await;

        let filters = SearchFilters {
            search: Some("low sneakers".into()),
            ..Default::default()
        };
        let call = ToolCall {
            name: SEARCH_PRODUCTS_TOOL.into(),
            arguments: filters.into_arguments(StoreCredentials {
                base_url: "http://wordpress.localhost:8000".into(),
                consumer_key: "ck_test".into(),
                consumer_secret: "cs_test".into(),
            }),
        };

        let result = client.call_tool(&call).await.unwrap();

        assert!(!result.is_error);
        assert_eq!(result.first_text(), Some("[]"));

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_call_tool_carries_error_flag_through() {
        let (mut server, client) = create_server_and_client().await;

        let mock = server
            .mock("POST", "/call_tool")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "isError": true,
                    "content": [{ "type": "text", "text": "boom" }]
                })
                .to_string(),
            )
            .create_async()
            .await;

        let call = ToolCall {
            name: SEARCH_PRODUCTS_TOOL.into(),
            arguments: Default::default(),
        };

        let result = client.call_tool(&call).await.unwrap();

        assert!(result.is_error);
        assert_eq!(result.first_text(), Some("boom"));

        mock.assert_async().await;
    }
}
