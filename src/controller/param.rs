use serde::Deserialize;

/// Query parameters for paginated listings.
#[derive(Deserialize)]
pub struct PaginationParam {
    /// Zero-based page index.
    #[serde(default)]
    pub page: u64,
    /// Number of entries per page.
    #[serde(default = "default_per_page")]
    pub per_page: u64,
}

fn default_per_page() -> u64 {
    10
}
