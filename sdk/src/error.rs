use thiserror::Error;

/// Failures the MCP endpoint client can produce. The server is an external
/// collaborator so there are only two real kinds: the transport failed, or
/// the server answered and the answer was unusable.
#[derive(Debug, Error)]
pub enum McpClientError {
    /// Connection refused, timeout, DNS failure and friends.
    #[error("cannot reach the MCP server: {0}")]
    Transport(#[from] reqwest::Error),
    /// The endpoint answered with a non-success status code.
    #[error("the MCP server responded with status {0}")]
    Status(reqwest::StatusCode),
    /// The response body was not the JSON shape the endpoint promises.
    #[error("malformed MCP server response: {0}")]
    Parse(#[from] serde_json::Error),
}
