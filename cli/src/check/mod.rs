use crate::{
    command_title, display::json_output, loading, notify_error, notify_success, notify_warning,
    prelude::*,
};

#[derive(Args, Clone, Debug)]
pub(crate) struct CheckCommand {
    #[command(flatten)]
    pub(crate) server: ServerArgs,
}

/// Handle the `$ woomcp check` command: probe the configured URLs and report
/// which one answered.
pub(crate) async fn handle(command: CheckCommand) -> AnyResult<(), WoomcpCliError> {
    command_title!("Checking WooCommerce MCP server connectivity");

    let conf = CliConf::load_from_path(&command.server.conf_path)
        .await
        .unwrap_or_else(|_| CliConf::default());

    let (primary, fallback) = command.server.pick_urls(&conf);

    let client = probe_server(&primary, &fallback).await?;

    notify_success!(
        "MCP server is reachable at '{url}'",
        url = client.base_url().bold()
    );

    json_output(&serde_json::json!({ "url": client.base_url() }))?;

    Ok(())
}

/// Health-probe the primary URL, then the fallback. Returns a client bound to
/// whichever base URL answered with a success status; errors when neither
/// does.
pub(crate) async fn probe_server(
    primary: &str,
    fallback: &str,
) -> AnyResult<McpClient, WoomcpCliError> {
    let primary_handle = loading!("Probing MCP server at '{primary}'...");

    let client = McpClient::new(primary);

    match client.health().await {
        Ok(()) => {
            primary_handle.success();

            return Ok(client);
        }
        Err(_) => primary_handle.error(),
    }

    let fallback_handle = loading!("Probing fallback MCP server at '{fallback}'...");

    let client = McpClient::new(fallback);

    match client.health().await {
        Ok(()) => {
            fallback_handle.success();

            // The primary is the reverse proxy route; reaching only the
            // container port usually means the proxy routing needs fixing.
            notify_warning!("Using the direct container URL, the reverse proxy route looks broken");

            Ok(client)
        }
        Err(error) => {
            fallback_handle.error();

            notify_error!("Cannot connect to the MCP server at '{primary}' nor '{fallback}': {error}");

            Err(WoomcpCliError::Any(anyhow!(
                "The MCP server is unreachable. Please ensure it is running before retrying."
            )))
        }
    }
}
