use {
    crate::{
        check::probe_server, command_title, display::json_output, loading, notify_success,
        notify_warning, prelude::*, tool::fetch_tools,
    },
    woomcp_sdk::{Product, SearchFilters, ToolCall},
};

/// Rendered in place of any product field the server did not return.
const PRODUCT_FIELD_PLACEHOLDER: &str = "N/A";
const UNNAMED_PRODUCT_PLACEHOLDER: &str = "Unnamed Product";
/// Short descriptions are previewed, not dumped.
const DESCRIPTION_PREVIEW_CHARS: usize = 100;

#[derive(Args, Clone, Debug)]
pub(crate) struct SearchCommand {
    #[command(flatten)]
    pub(crate) server: ServerArgs,
    #[command(flatten)]
    pub(crate) store: StoreArgs,
    #[command(flatten)]
    pub(crate) filters: SearchFilterArgs,
}

/// WooCommerce store coordinates, overriding the conf file values for one
/// run.
#[derive(Args, Clone, Debug, Default)]
pub(crate) struct StoreArgs {
    #[arg(
        long = "store-url",
        help = "The WooCommerce store base URL",
        value_name = "URL"
    )]
    pub(crate) base_url: Option<String>,
    #[arg(
        long = "consumer-key",
        help = "The WooCommerce REST API consumer key",
        value_name = "KEY"
    )]
    pub(crate) consumer_key: Option<String>,
    #[arg(
        long = "consumer-secret",
        help = "The WooCommerce REST API consumer secret",
        value_name = "SECRET"
    )]
    pub(crate) consumer_secret: Option<String>,
}

impl StoreArgs {
    fn merge(self, conf: StoreConf) -> StoreConf {
        StoreConf {
            base_url: self.base_url.unwrap_or(conf.base_url),
            consumer_key: self.consumer_key.unwrap_or(conf.consumer_key),
            consumer_secret: self.consumer_secret.unwrap_or(conf.consumer_secret),
        }
    }
}

/// The optional `search_products` filters, mirroring the tool input schema.
/// Only the set ones are sent.
#[derive(Args, Clone, Debug, Default)]
pub(crate) struct SearchFilterArgs {
    #[arg(
        long = "search",
        short = 's',
        help = "Search term to filter products by name, description or SKU",
        value_name = "TERM"
    )]
    pub(crate) search: Option<String>,
    #[arg(
        long = "category",
        help = "Category ID or slug to filter products",
        value_name = "CATEGORY"
    )]
    pub(crate) category: Option<String>,
    #[arg(
        long = "tag",
        help = "Tag ID or slug to filter products",
        value_name = "TAG"
    )]
    pub(crate) tag: Option<String>,
    #[arg(
        long = "status",
        help = "Product status filter (draft, pending, private, publish)",
        value_name = "STATUS"
    )]
    pub(crate) status: Option<String>,
    #[arg(
        long = "type",
        help = "Product type filter (simple, grouped, external, variable)",
        value_name = "TYPE"
    )]
    pub(crate) product_type: Option<String>,
    #[arg(
        long = "featured",
        help = "Filter by featured products (true/false)",
        value_name = "BOOL"
    )]
    pub(crate) featured: Option<String>,
    #[arg(
        long = "on-sale",
        help = "Filter by products on sale (true/false)",
        value_name = "BOOL"
    )]
    pub(crate) on_sale: Option<String>,
    #[arg(long = "min-price", help = "Minimum price filter", value_name = "PRICE")]
    pub(crate) min_price: Option<String>,
    #[arg(long = "max-price", help = "Maximum price filter", value_name = "PRICE")]
    pub(crate) max_price: Option<String>,
    #[arg(
        long = "stock-status",
        help = "Stock status filter (instock, outofstock, onbackorder)",
        value_name = "STATUS"
    )]
    pub(crate) stock_status: Option<String>,
    #[arg(
        long = "per-page",
        help = "Number of products per page (default: 10, server caps at 100)",
        value_name = "N"
    )]
    pub(crate) per_page: Option<String>,
    #[arg(long = "page", help = "Page number for pagination", value_name = "N")]
    pub(crate) page: Option<String>,
    #[arg(long = "order", help = "Sort order (asc, desc)", value_name = "ORDER")]
    pub(crate) order: Option<String>,
    #[arg(
        long = "orderby",
        help = "Sort by field (date, id, title, slug, price, popularity, rating)",
        value_name = "FIELD"
    )]
    pub(crate) orderby: Option<String>,
}

impl SearchFilterArgs {
    fn into_filters(self) -> SearchFilters {
        SearchFilters {
            search: self.search,
            category: self.category,
            tag: self.tag,
            status: self.status,
            product_type: self.product_type,
            featured: self.featured,
            on_sale: self.on_sale,
            min_price: self.min_price,
            max_price: self.max_price,
            stock_status: self.stock_status,
            per_page: self.per_page,
            page: self.page,
            order: self.order,
            orderby: self.orderby,
        }
    }
}

/// Handle the `$ woomcp search` command. Runs the full smoke-test sequence:
/// probe, list tools, verify the search tool exists, warn about placeholder
/// credentials, invoke and render.
pub(crate) async fn handle_search(command: SearchCommand) -> AnyResult<(), WoomcpCliError> {
    command_title!("Searching for products via the WooCommerce MCP server");

    let conf = CliConf::load_from_path(&command.server.conf_path)
        .await
        .unwrap_or_else(|_| CliConf::default());

    let (primary, fallback) = command.server.pick_urls(&conf);
    let store = command.store.merge(conf.store);

    let client = probe_server(&primary, &fallback).await?;

    let listing = fetch_tools(&client).await?;

    if !listing.contains(SEARCH_PRODUCTS_TOOL) {
        return Err(WoomcpCliError::Any(anyhow!(
            "The '{SEARCH_PRODUCTS_TOOL}' tool is not exposed by the MCP server"
        )));
    }

    notify_success!("Found the '{name}' tool", name = SEARCH_PRODUCTS_TOOL.bold());

    if store.has_placeholder_credentials() {
        notify_warning!(
            "The WooCommerce credentials are still placeholders, set real ones with 'woomcp conf'"
        );
    }

    let products = invoke_search(
        &client,
        store.credentials(),
        command.filters.into_filters(),
    )
    .await?;

    if let Some(products) = &products {
        json_output(products)?;
    }

    notify_success!("Search completed");

    Ok(())
}

/// Invoke `search_products` and render the outcome. Returns the decoded
/// products when the nested payload was a JSON product array; `None` when the
/// response was empty or fell back to raw-text display.
async fn invoke_search(
    client: &McpClient,
    store: StoreCredentials,
    filters: SearchFilters,
) -> AnyResult<Option<Vec<Product>>, WoomcpCliError> {
    let call = ToolCall {
        name: SEARCH_PRODUCTS_TOOL.into(),
        arguments: filters.into_arguments(store),
    };

    let invoke_handle = loading!("Invoking '{name}'...", name = SEARCH_PRODUCTS_TOOL);

    let result = match client.call_tool(&call).await {
        Ok(result) => {
            invoke_handle.success();

            result
        }
        Err(error) => {
            invoke_handle.error();

            return Err(WoomcpCliError::Http(error));
        }
    };

    if result.is_error {
        let reason = result.first_text().unwrap_or("Unknown error");

        return Err(WoomcpCliError::Any(anyhow!("Search failed: {reason}")));
    }

    let Some(text) = result.first_text() else {
        notify_warning!("Empty response or no products found");

        return Ok(None);
    };

    match Product::decode_list(text) {
        Ok(products) => {
            notify_success!("Found {count} product(s)", count = products.len());

            if !JSON_MODE.load(Ordering::Relaxed) {
                for (i, product) in products.iter().enumerate() {
                    println!("\n{}", render_product(i + 1, product));
                }
            }

            Ok(Some(products))
        }
        Err(_) => {
            // Real servers are known to wrap the product array in a
            // human-readable preamble, so a non-JSON payload is displayed,
            // not treated as a failure.
            notify_warning!("The tool response was not a JSON product array, printing it raw");

            if !JSON_MODE.load(Ordering::Relaxed) {
                println!("{text}");
            }

            Ok(None)
        }
    }
}

/// Best-effort rendering of one product record: absent fields display as
/// placeholders, prices display as-is and the short description is previewed.
fn render_product(position: usize, product: &Product) -> String {
    let placeholder = || PRODUCT_FIELD_PLACEHOLDER.to_string();

    let mut lines = vec![
        format!(
            "{position}. {name}",
            name = product
                .name
                .clone()
                .unwrap_or_else(|| UNNAMED_PRODUCT_PLACEHOLDER.into())
        ),
        format!(
            "   ID: {id}",
            id = product
                .id
                .map(|id| id.to_string())
                .unwrap_or_else(placeholder)
        ),
        format!(
            "   Price: ${price}",
            price = product.price.clone().unwrap_or_else(placeholder)
        ),
        format!(
            "   Status: {status}",
            status = product.status.clone().unwrap_or_else(placeholder)
        ),
        format!(
            "   Stock: {stock}",
            stock = product.stock_status.clone().unwrap_or_else(placeholder)
        ),
    ];

    if let Some(description) = product
        .short_description
        .as_deref()
        .filter(|description| !description.is_empty())
    {
        let preview: String = description.chars().take(DESCRIPTION_PREVIEW_CHARS).collect();

        lines.push(format!("   Description: {preview}..."));
    }

    lines.join("\n")
}
