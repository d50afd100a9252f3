pub(crate) use {
    crate::error::WoomcpCliError,
    anyhow::{anyhow, Result as AnyResult},
    clap::{builder::ValueParser, Args, Parser, Subcommand},
    colored::Colorize,
    serde::{Deserialize, Serialize},
    std::{
        path::PathBuf,
        sync::atomic::{AtomicBool, Ordering},
    },
    woomcp_sdk::{McpClient, StoreCredentials, SEARCH_PRODUCTS_TOOL},
};

// Where to find config file.
pub(crate) const CLI_CONF_PATH: &str = "~/.woomcp/conf.toml";

// The reverse proxy route and the direct container port of the MCP server.
pub(crate) const DEFAULT_SERVER_URL: &str = "http://localhost:8000";
pub(crate) const DEFAULT_FALLBACK_URL: &str = "http://localhost:8080";

pub(crate) const DEFAULT_STORE_URL: &str = "http://wordpress.localhost:8000";

// Sentinels meaning "not yet configured". Invocations with these still run,
// they just warn first.
pub(crate) const PLACEHOLDER_CONSUMER_KEY: &str = "your_consumer_key_here";
pub(crate) const PLACEHOLDER_CONSUMER_SECRET: &str = "your_consumer_secret_here";

/// Whether the CLI output should be JSON. Set once in [crate::main] based on
/// the `--json` flag and read by the display macros.
pub(crate) static JSON_MODE: AtomicBool = AtomicBool::new(false);

/// Struct holding the config structure.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub(crate) struct CliConf {
    #[serde(default)]
    pub(crate) server: ServerConf,
    #[serde(default)]
    pub(crate) store: StoreConf,
}

impl CliConf {
    pub(crate) async fn load_from_path(path: &PathBuf) -> AnyResult<Self> {
        let conf = tokio::fs::read_to_string(path).await?;

        Ok(toml::from_str(&conf)?)
    }

    pub(crate) async fn save(&self, path: &PathBuf) -> AnyResult<()> {
        let parent_folder = path.parent().expect("Parent folder must exist.");
        let conf = toml::to_string_pretty(&self)?;

        tokio::fs::create_dir_all(parent_folder).await?;
        tokio::fs::write(path, conf).await?;

        Ok(())
    }
}

/// MCP server connection targets. The fallback is tried when the primary
/// health probe fails.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub(crate) struct ServerConf {
    #[serde(default = "default_server_url")]
    pub(crate) url: String,
    #[serde(default = "default_fallback_url")]
    pub(crate) fallback_url: String,
}

impl Default for ServerConf {
    fn default() -> Self {
        Self {
            url: default_server_url(),
            fallback_url: default_fallback_url(),
        }
    }
}

/// WooCommerce store coordinates passed through to the `search_products`
/// tool.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub(crate) struct StoreConf {
    #[serde(default = "default_store_url")]
    pub(crate) base_url: String,
    #[serde(default = "default_consumer_key")]
    pub(crate) consumer_key: String,
    #[serde(default = "default_consumer_secret")]
    pub(crate) consumer_secret: String,
}

impl Default for StoreConf {
    fn default() -> Self {
        Self {
            base_url: default_store_url(),
            consumer_key: default_consumer_key(),
            consumer_secret: default_consumer_secret(),
        }
    }
}

impl StoreConf {
    pub(crate) fn credentials(&self) -> StoreCredentials {
        StoreCredentials {
            base_url: self.base_url.clone(),
            consumer_key: self.consumer_key.clone(),
            consumer_secret: self.consumer_secret.clone(),
        }
    }

    /// Whether either credential still carries its placeholder sentinel.
    pub(crate) fn has_placeholder_credentials(&self) -> bool {
        self.consumer_key == PLACEHOLDER_CONSUMER_KEY
            || self.consumer_secret == PLACEHOLDER_CONSUMER_SECRET
    }
}

/// Shared connection arguments for the commands that talk to the MCP server.
/// Flags win over the conf file, which wins over the defaults.
#[derive(Args, Clone, Debug)]
pub(crate) struct ServerArgs {
    #[arg(
        long = "url",
        short = 'u',
        help = "The MCP server base URL",
        value_name = "URL"
    )]
    pub(crate) url: Option<String>,
    #[arg(
        long = "fallback-url",
        help = "The fallback MCP server base URL, tried when the primary is unreachable",
        value_name = "URL"
    )]
    pub(crate) fallback_url: Option<String>,
    /// Hidden argument used for testing to set the path of the configuration
    /// file.
    #[arg(
        long = "conf-path",
        hide = true,
        default_value = CLI_CONF_PATH,
        value_parser = ValueParser::from(expand_tilde)
    )]
    pub(crate) conf_path: PathBuf,
}

impl ServerArgs {
    pub(crate) fn pick_urls(&self, conf: &CliConf) -> (String, String) {
        (
            self.url.clone().unwrap_or_else(|| conf.server.url.clone()),
            self.fallback_url
                .clone()
                .unwrap_or_else(|| conf.server.fallback_url.clone()),
        )
    }
}

// == Used by clap ==

/// Expands `~/` to the user's home directory in path arguments.
pub(crate) fn expand_tilde(path: &str) -> AnyResult<PathBuf> {
    if let Some(path) = path.strip_prefix("~/") {
        match home::home_dir() {
            Some(home) => return Ok(home.join(path)),
            None => return Err(anyhow!("Could not find home directory")),
        }
    }

    Ok(path.into())
}

// == Used by serde ==

fn default_server_url() -> String {
    DEFAULT_SERVER_URL.to_string()
}

fn default_fallback_url() -> String {
    DEFAULT_FALLBACK_URL.to_string()
}

fn default_store_url() -> String {
    DEFAULT_STORE_URL.to_string()
}

fn default_consumer_key() -> String {
    PLACEHOLDER_CONSUMER_KEY.to_string()
}

fn default_consumer_secret() -> String {
    PLACEHOLDER_CONSUMER_SECRET.to_string()
}
