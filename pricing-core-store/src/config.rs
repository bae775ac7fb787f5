/// Settings of the in-memory store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Load the supplier catalog when the store is created
    pub seed_catalog: bool,
    /// Default page size for history listings
    pub history_page_size: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            seed_catalog: true,
            history_page_size: 20,
        }
    }
}

impl StoreConfig {
    /// Read `PRICING_SEED_CATALOG` and `PRICING_HISTORY_PAGE_SIZE`.
    ///
    /// Missing or unparsable values keep their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let seed_catalog = lookup("PRICING_SEED_CATALOG")
            .and_then(|v| parse_bool(&v))
            .unwrap_or(defaults.seed_catalog);

        let history_page_size = lookup("PRICING_HISTORY_PAGE_SIZE")
            .and_then(|v| v.trim().parse::<usize>().ok())
            .filter(|size| *size > 0)
            .unwrap_or(defaults.history_page_size);

        Self {
            seed_catalog,
            history_page_size,
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
