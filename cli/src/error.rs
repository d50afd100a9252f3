use {
    crate::{display::*, prelude::*},
    thiserror::Error,
    woomcp_sdk::McpClientError,
};

/// Custom error definitions for the Woomcp CLI. Takes care of displaying
/// a pretty summary in the console.
#[derive(Debug, Error)]
pub(crate) enum WoomcpCliError {
    #[error("{error}{separator}\n{0}", error = "Syntax Error".red().bold(), separator = separator())]
    Syntax(clap::error::Error),
    #[error("{error}{separator}\n{0}", error = "HTTP Error".red().bold(), separator = separator())]
    Http(#[from] McpClientError),
    #[error("{error}{separator}\n{0}", error = "Error".red().bold(), separator = separator())]
    Any(anyhow::Error),
}
