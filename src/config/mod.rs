//! Configuration management.
//!
//! Every option has a built-in default, so running without a configuration
//! file produces the stock page.
//!
//! # Configuration File Format
//!
//! ```toml
//! [query]
//! endpoint = "http://export.arxiv.org/api/query"
//! author = "Ganardi_Ray"
//! max_results = 100
//!
//! [filter]
//! author_whitelist = ["Ray Ganardi", "Ray F. Ganardi"]
//! id_blacklist = ["2302.08120v1"]
//!
//! [page]
//! title = "Ray Ganardi – Publications"
//! heading = "Publications"
//! stylesheet = "main.css"
//! search_url = "https://arxiv.org/search/?searchtype=author&query=Ganardi%2C+R"
//! ```
//!
//! Environment variables prefixed with `PUBLIST_` override file values, using
//! `__` between table and key (e.g. `PUBLIST_QUERY__MAX_RESULTS=50`). List
//! values are comma-separated.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "publist.toml";

/// Prefix for environment overrides
const ENV_PREFIX: &str = "PUBLIST";

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Feed query settings
    #[serde(default)]
    pub query: QueryConfig,

    /// Record filters
    #[serde(default)]
    pub filter: FilterConfig,

    /// Page boilerplate
    #[serde(default)]
    pub page: PageConfig,
}

/// arXiv API query settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryConfig {
    /// Query endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Author search term (arXiv `au:` syntax)
    #[serde(default = "default_author")]
    pub author: String,

    /// Result cap for the single request
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            author: default_author(),
            max_results: default_max_results(),
        }
    }
}

fn default_endpoint() -> String {
    "http://export.arxiv.org/api/query".to_string()
}

fn default_author() -> String {
    "Ganardi_Ray".to_string()
}

fn default_max_results() -> usize {
    100
}

/// Author whitelist and identifier blacklist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// A record is kept only if one of these appears in its author string
    #[serde(default = "default_author_whitelist")]
    pub author_whitelist: Vec<String>,

    /// Identifiers dropped even when the authors match
    #[serde(default = "default_id_blacklist")]
    pub id_blacklist: Vec<String>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            author_whitelist: default_author_whitelist(),
            id_blacklist: default_id_blacklist(),
        }
    }
}

fn default_author_whitelist() -> Vec<String> {
    vec!["Ray Ganardi".to_string(), "Ray F. Ganardi".to_string()]
}

fn default_id_blacklist() -> Vec<String> {
    vec!["2302.08120v1".to_string()]
}

/// Static parts of the rendered page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageConfig {
    /// Document `<title>`
    #[serde(default = "default_title")]
    pub title: String,

    /// `<h1>` heading
    #[serde(default = "default_heading")]
    pub heading: String,

    /// Stylesheet href
    #[serde(default = "default_stylesheet")]
    pub stylesheet: String,

    /// Backlink to the author's arXiv search page
    #[serde(default = "default_search_url")]
    pub search_url: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            heading: default_heading(),
            stylesheet: default_stylesheet(),
            search_url: default_search_url(),
        }
    }
}

fn default_title() -> String {
    "Ray Ganardi – Publications".to_string()
}

fn default_heading() -> String {
    "Publications".to_string()
}

fn default_stylesheet() -> String {
    "main.css".to_string()
}

fn default_search_url() -> String {
    "https://arxiv.org/search/?searchtype=author&query=Ganardi%2C+R".to_string()
}

/// Load configuration from an optional file layered under environment overrides
pub fn load_config(path: Option<&Path>) -> Result<Config, config::ConfigError> {
    let mut builder = config::Config::builder();

    if let Some(path) = path {
        builder = builder.add_source(config::File::from(path));
    }

    let settings = builder
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("filter.author_whitelist")
                .with_list_parse_key("filter.id_blacklist"),
        )
        .build()?;

    settings.try_deserialize()
}

/// Find a configuration file in the default locations
///
/// Checks `./publist.toml` first, then `<config dir>/publist/config.toml`.
pub fn find_config_file() -> Option<PathBuf> {
    find_config_file_in(Path::new("."), dirs::config_dir().as_deref())
}

fn find_config_file_in(work_dir: &Path, config_dir: Option<&Path>) -> Option<PathBuf> {
    let local = work_dir.join(CONFIG_FILE_NAME);
    if local.is_file() {
        return Some(local);
    }

    config_dir
        .map(|dir| dir.join("publist").join("config.toml"))
        .filter(|path| path.is_file())
}
