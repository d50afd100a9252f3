use {
    serde::{Deserialize, Serialize},
    serde_json::{Map, Value},
};

/// Name of the product search tool the WooCommerce MCP server exposes.
pub const SEARCH_PRODUCTS_TOOL: &str = "search_products";

/// A tool descriptor as returned by `GET /list_tools`. The input schema is
/// carried verbatim; the client never interprets it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Tool {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "inputSchema", default)]
    pub input_schema: Value,
}

/// The `GET /list_tools` response body.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ToolListing {
    #[serde(default)]
    pub tools: Vec<Tool>,
}

impl ToolListing {
    /// Find a tool descriptor by name.
    pub fn find(&self, name: &str) -> Option<&Tool> {
        self.tools.iter().find(|tool| tool.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }
}

/// The `POST /call_tool` request body: a tool name plus a flat string-keyed
/// argument map.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ToolCall {
    pub name: String,
    pub arguments: Map<String, Value>,
}

/// One content item of a tool result. Only the text is ever consumed.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Content {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub text: String,
}

/// The `POST /call_tool` response body. When `is_error` is set, the first
/// content item's text is the error message. Otherwise the first content
/// item's text is conventionally a JSON-encoded payload.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ToolResult {
    #[serde(rename = "isError", default)]
    pub is_error: bool,
    #[serde(default)]
    pub content: Vec<Content>,
}

impl ToolResult {
    /// The first content item's text, if there is one and it is non-empty.
    pub fn first_text(&self) -> Option<&str> {
        self.content
            .first()
            .map(|content| content.text.as_str())
            .filter(|text| !text.is_empty())
    }
}

/// A product record decoded from the nested JSON array in a `search_products`
/// result. Every field is optional; absence is tolerated and rendered with a
/// placeholder by the caller. Prices are arbitrary strings, passed through
/// without numeric validation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub stock_status: Option<String>,
    #[serde(default)]
    pub short_description: Option<String>,
}

impl Product {
    /// Decode a JSON-encoded product array, as embedded in
    /// `ToolResult::first_text`. Callers are expected to fall back to
    /// displaying the raw text when this fails; servers are known to wrap
    /// the array in a human-readable preamble.
    pub fn decode_list(text: &str) -> Result<Vec<Self>, serde_json::Error> {
        serde_json::from_str(text)
    }
}

/// WooCommerce REST API credentials, passed through to the server inside the
/// tool argument map. Never validated client-side.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StoreCredentials {
    pub base_url: String,
    pub consumer_key: String,
    pub consumer_secret: String,
}

/// Optional `search_products` filters. Only the set ones are sent; all values
/// travel as strings, matching the tool's input schema. The wire mapping
/// happens in [`Self::into_arguments`], so this struct carries no serde.
#[derive(Clone, Debug, Default)]
pub struct SearchFilters {
    pub search: Option<String>,
    pub category: Option<String>,
    pub tag: Option<String>,
    pub status: Option<String>,
    /// Wire name `type`: simple, grouped, external or variable.
    pub product_type: Option<String>,
    pub featured: Option<String>,
    pub on_sale: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    /// Stock status filter: instock, outofstock or onbackorder.
    pub stock_status: Option<String>,
    /// Products per page, defaults to `"10"`; the server caps at 100.
    pub per_page: Option<String>,
    pub page: Option<String>,
    pub order: Option<String>,
    pub orderby: Option<String>,
}

impl SearchFilters {
    /// Merge the credentials and the set filters into the flat argument map
    /// expected by the `search_products` tool.
    pub fn into_arguments(self, store: StoreCredentials) -> Map<String, Value> {
        let mut arguments = Map::new();

        arguments.insert("base_url".into(), store.base_url.into());
        arguments.insert("consumer_key".into(), store.consumer_key.into());
        arguments.insert("consumer_secret".into(), store.consumer_secret.into());

        let filters = [
            ("search", self.search),
            ("category", self.category),
            ("tag", self.tag),
            ("status", self.status),
            ("type", self.product_type),
            ("featured", self.featured),
            ("on_sale", self.on_sale),
            ("min_price", self.min_price),
            ("max_price", self.max_price),
            ("stock_status", self.stock_status),
            ("per_page", self.per_page.or_else(|| Some("10".into()))),
            ("page", self.page),
            ("order", self.order),
            ("orderby", self.orderby),
        ];

        for (key, value) in filters {
            if let Some(value) = value {
                arguments.insert(key.into(), value.into());
            }
        }

        arguments
    }
}

#[cfg(test)]
mod tests {
    use {super::*, serde_json::json};

    fn test_credentials() -> StoreCredentials {
        StoreCredentials {
            base_url: "http://wordpress.localhost:8000".into(),
            consumer_key: "ck_test".into(),
            consumer_secret: "cs_test".into(),
        }
    }

    #[test]
    fn test_tool_listing_membership() {
        let listing: ToolListing = serde_json::from_value(json!({
            "tools": [
                {
                    "name": "search_products",
                    "description": "Search for products in WooCommerce store.",
                    "inputSchema": { "type": "object" }
                }
            ]
        }))
        .unwrap();

        assert!(listing.contains(SEARCH_PRODUCTS_TOOL));
        assert!(!listing.contains("search_posts"));
        assert_eq!(
            listing.find(SEARCH_PRODUCTS_TOOL).unwrap().description,
            "Search for products in WooCommerce store."
        );
    }

    #[test]
    fn test_tool_result_defaults() {
        // `isError` and `content` may both be absent.
        let result: ToolResult = serde_json::from_value(json!({})).unwrap();

        assert!(!result.is_error);
        assert_eq!(result.first_text(), None);
    }

    #[test]
    fn test_tool_result_first_text_skips_empty() {
        let result: ToolResult = serde_json::from_value(json!({
            "content": [{ "type": "text", "text": "" }]
        }))
        .unwrap();

        assert_eq!(result.first_text(), None);

        let result: ToolResult = serde_json::from_value(json!({
            "isError": true,
            "content": [{ "type": "text", "text": "boom" }]
        }))
        .unwrap();

        assert!(result.is_error);
        assert_eq!(result.first_text(), Some("boom"));
    }

    #[test]
    fn test_product_decode_list_tolerates_missing_fields() {
        let products =
            Product::decode_list(r#"[{"name":"Shoe","id":1,"price":"9.99"}]"#).unwrap();

        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name.as_deref(), Some("Shoe"));
        assert_eq!(products[0].id, Some(1));
        assert_eq!(products[0].price.as_deref(), Some("9.99"));
        assert_eq!(products[0].stock_status, None);
        assert_eq!(products[0].short_description, None);
    }

    #[test]
    fn test_product_decode_list_rejects_wrapped_payload() {
        // The Go server wraps the array in a preamble; that must surface as
        // a parse error so callers can fall back to the raw text.
        let result = Product::decode_list("Found 1 product(s):\n\n[{\"id\":1}]");

        assert!(result.is_err());
    }

    #[test]
    fn test_filters_always_carry_credentials_and_per_page() {
        let arguments = SearchFilters::default().into_arguments(test_credentials());

        assert_eq!(
            arguments.get("base_url"),
            Some(&json!("http://wordpress.localhost:8000"))
        );
        assert_eq!(arguments.get("consumer_key"), Some(&json!("ck_test")));
        assert_eq!(arguments.get("consumer_secret"), Some(&json!("cs_test")));
        assert_eq!(arguments.get("per_page"), Some(&json!("10")));
        assert_eq!(arguments.len(), 4);
    }

    #[test]
    fn test_filters_merge_only_set_values() {
        let filters = SearchFilters {
            search: Some("low sneakers".into()),
            status: Some("publish".into()),
            product_type: Some("simple".into()),
            per_page: Some("25".into()),
            ..Default::default()
        };

        let arguments = filters.into_arguments(test_credentials());

        assert_eq!(arguments.get("search"), Some(&json!("low sneakers")));
        assert_eq!(arguments.get("status"), Some(&json!("publish")));
        assert_eq!(arguments.get("type"), Some(&json!("simple")));
        assert_eq!(arguments.get("per_page"), Some(&json!("25")));
        assert!(!arguments.contains_key("category"));
        assert!(!arguments.contains_key("orderby"));
    }
}
