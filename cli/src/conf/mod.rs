use crate::{command_title, display::json_output, loading, prelude::*};

#[derive(Args, Clone, Debug)]
pub(crate) struct ConfCommand {
    #[arg(
        long = "server.url",
        help = "Set the MCP server base URL",
        value_name = "URL"
    )]
    server_url: Option<String>,
    #[arg(
        long = "server.fallback-url",
        help = "Set the fallback MCP server base URL",
        value_name = "URL"
    )]
    server_fallback_url: Option<String>,
    #[arg(
        long = "store.base-url",
        help = "Set the WooCommerce store base URL",
        value_name = "URL"
    )]
    store_base_url: Option<String>,
    #[arg(
        long = "store.consumer-key",
        help = "Set the WooCommerce REST API consumer key",
        value_name = "KEY"
    )]
    store_consumer_key: Option<String>,
    #[arg(
        long = "store.consumer-secret",
        help = "Set the WooCommerce REST API consumer secret",
        value_name = "SECRET"
    )]
    store_consumer_secret: Option<String>,
    /// Hidden argument used for testing to set the path of the configuration
    /// file.
    #[arg(
        long = "conf-path",
        hide = true,
        default_value = CLI_CONF_PATH,
        value_parser = ValueParser::from(expand_tilde)
    )]
    conf_path: PathBuf,
}

/// Handle the provided conf command. The [ConfCommand] instance is passed
/// from [crate::main].
pub(crate) async fn handle(
    ConfCommand {
        server_url,
        server_fallback_url,
        store_base_url,
        store_consumer_key,
        store_consumer_secret,
        conf_path,
    }: ConfCommand,
) -> AnyResult<(), WoomcpCliError> {
    let mut conf = CliConf::load_from_path(&conf_path)
        .await
        .unwrap_or_else(|_| CliConf::default());

    // If all fields are None, we just want to display the current
    // configuration.
    if server_url.is_none()
        && server_fallback_url.is_none()
        && store_base_url.is_none()
        && store_consumer_key.is_none()
        && store_consumer_secret.is_none()
    {
        command_title!("Current Woomcp CLI Configuration");

        if !JSON_MODE.load(Ordering::Relaxed) {
            println!("{:#?}", conf);
        }

        json_output(&conf)?;

        return Ok(());
    }

    command_title!("Updating Woomcp CLI Configuration");

    let conf_handle = loading!("Updating configuration...");

    conf.server.url = server_url.unwrap_or(conf.server.url);
    conf.server.fallback_url = server_fallback_url.unwrap_or(conf.server.fallback_url);
    conf.store.base_url = store_base_url.unwrap_or(conf.store.base_url);
    conf.store.consumer_key = store_consumer_key.unwrap_or(conf.store.consumer_key);
    conf.store.consumer_secret = store_consumer_secret.unwrap_or(conf.store.consumer_secret);

    match conf.save(&conf_path).await {
        Ok(()) => {
            conf_handle.success();

            Ok(())
        }
        Err(e) => {
            conf_handle.error();

            Err(WoomcpCliError::Any(e))
        }
    }
}
