use {
    crate::{check::probe_server, command_title, display::json_output, item, loading, prelude::*},
    woomcp_sdk::ToolListing,
};

#[derive(Args, Clone, Debug)]
pub(crate) struct ToolsCommand {
    #[command(flatten)]
    pub(crate) server: ServerArgs,
}

/// Handle the `$ woomcp tools` command: probe the server and display the
/// tools it exposes.
pub(crate) async fn handle_tools(command: ToolsCommand) -> AnyResult<(), WoomcpCliError> {
    command_title!("Listing tools exposed by the WooCommerce MCP server");

    let conf = CliConf::load_from_path(&command.server.conf_path)
        .await
        .unwrap_or_else(|_| CliConf::default());

    let (primary, fallback) = command.server.pick_urls(&conf);

    let client = probe_server(&primary, &fallback).await?;

    let listing = fetch_tools(&client).await?;

    json_output(&listing)?;

    Ok(())
}

/// Fetch the tool listing and print one item line per tool. The listing is
/// returned so callers can check for a specific tool by name.
pub(crate) async fn fetch_tools(client: &McpClient) -> AnyResult<ToolListing, WoomcpCliError> {
    let tools_handle = loading!("Fetching tools from '{url}'...", url = client.base_url());

    let listing = match client.list_tools().await {
        Ok(listing) => {
            tools_handle.success();

            listing
        }
        Err(error) => {
            tools_handle.error();

            return Err(WoomcpCliError::Http(error));
        }
    };

    for tool in &listing.tools {
        item!(
            "{name}: {description}",
            name = tool.name.bold(),
            description = tool.description.truecolor(100, 100, 100)
        );
    }

    Ok(listing)
}

#[cfg(test)]
mod tests {
    use {super::*, assert_matches::assert_matches, mockito::Server, serde_json::json};

    #[tokio::test]
    async fn test_fetch_tools_returns_parsed_listing() {
        let mut server = Server::new_async().await;

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
                            "inputSchema": { "type": "object" }
                        }
                    ]
                })
                .to_string(),
            )
            .create_async()
            .await;

        let client = McpClient::new(&server.url());
        let listing = fetch_tools(&client).await.unwrap();

        assert!(listing.contains(SEARCH_PRODUCTS_TOOL));

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_tools_aborts_on_bad_status() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/list_tools")
            .with_status(500)
            .create_async()
            .await;

        let client = McpClient::new(&server.url());

        assert_matches!(
            fetch_tools(&client).await,
            Err(WoomcpCliError::Http(_))
        );

        mock.assert_async().await;
    }
}
