// src/config.rs
use std::net::{AddrParseError, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Local root holding `assets/`. Always served at `/assets`.
    pub asset_dir: PathBuf,
    /// When set, JSON documents are fetched over HTTP from here instead.
    pub asset_base_url: Option<String>,
    pub fallback_image: String,
    pub cache_capacity: u64,
    pub load_deadline: Duration,
    pub fetch_timeout: Duration,
    pub page_size: usize,
    pub admin_username: String,
    pub admin_password: String,
    pub site_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            asset_dir: PathBuf::from("public"),
            asset_base_url: None,
            fallback_image: "/assets/images/placeholder.svg".to_string(),
            cache_capacity: 256,
            load_deadline: Duration::from_millis(1500),
            fetch_timeout: Duration::from_secs(10),
            page_size: 6,
            admin_username: "admin".to_string(),
            admin_password: "admin123".to_string(),
            site_name: "Karuna Foundation".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        let defaults = Self::default();

        let fallback_image = std::env::var("FALLBACK_IMAGE").unwrap_or(defaults.fallback_image);
        check_fallback_image(&fallback_image)?;

        Ok(Self {
            host: std::env::var("HOST").unwrap_or(defaults.host),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()?,
            asset_dir: std::env::var("ASSET_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.asset_dir),
            asset_base_url: std::env::var("ASSET_BASE_URL")
                .ok()
                .filter(|url| !url.trim().is_empty()),
            fallback_image,
            cache_capacity: std::env::var("CACHE_CAPACITY")
                .unwrap_or_else(|_| "256".to_string())
                .parse()?,
            load_deadline: Duration::from_millis(
                std::env::var("LOAD_DEADLINE_MS")
                    .unwrap_or_else(|_| "1500".to_string())
                    .parse()?,
            ),
            fetch_timeout: Duration::from_secs(
                std::env::var("FETCH_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "10".to_string())
                    .parse()?,
            ),
            page_size: std::env::var("PAGE_SIZE")
                .unwrap_or_else(|_| "6".to_string())
                .parse::<usize>()?
                .max(1),
            admin_username: std::env::var("ADMIN_USERNAME").unwrap_or(defaults.admin_username),
            admin_password: std::env::var("ADMIN_PASSWORD").unwrap_or(defaults.admin_password),
            site_name: std::env::var("SITE_NAME").unwrap_or(defaults.site_name),
        })
    }

    pub fn server_addr(&self) -> Result<SocketAddr, AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }
}

/// The fallback URL ends up inside a quoted script string in every `<img>`
/// tag, so quotes, backslashes and control characters are refused.
fn check_fallback_image(url: &str) -> Result<(), String> {
    if url.is_empty() {
        return Err("FALLBACK_IMAGE must not be empty".to_string());
    }
    match url
        .chars()
        .find(|c| matches!(c, '\'' | '"' | '\\' | '`') || c.is_control())
    {
        Some(c) => Err(format!("FALLBACK_IMAGE contains {:?}", c)),
        None => Ok(()),
    }
}
