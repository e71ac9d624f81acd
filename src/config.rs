use std::env;

pub const DEFAULT_ZONE_FILE: &str = "data";
pub const DEFAULT_ZONE_NAME: &str = "example.com.";
pub const DEFAULT_ZONE_LIST_LIMIT: usize = 2000;
/// tinydns publishes records without an explicit ttl at one day.
pub const DEFAULT_TTL: u32 = 86400;

#[derive(Clone, Debug)]
pub struct Config {
    pub api_url: String,
    pub zone_file: String,
    pub zone_name: String,
    pub zone_list_limit: usize,
    pub default_ttl: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, env::VarError> {
        Ok(Config {
            api_url: env::var("DNS_API_URL")?,
            zone_file: env::var("ZONE_FILE").unwrap_or_else(|_| DEFAULT_ZONE_FILE.to_string()),
            zone_name: env::var("ZONE_NAME").unwrap_or_else(|_| DEFAULT_ZONE_NAME.to_string()),
            zone_list_limit: env::var("ZONE_LIST_LIMIT")
                .unwrap_or_else(|_| DEFAULT_ZONE_LIST_LIMIT.to_string())
                .parse()
                .unwrap_or(DEFAULT_ZONE_LIST_LIMIT),
            default_ttl: env::var("DEFAULT_TTL")
                .unwrap_or_else(|_| DEFAULT_TTL.to_string())
                .parse()
                .unwrap_or(DEFAULT_TTL),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_url: String::from("http://127.0.0.1:8080"),
            zone_file: String::from(DEFAULT_ZONE_FILE),
            zone_name: String::from(DEFAULT_ZONE_NAME),
            zone_list_limit: DEFAULT_ZONE_LIST_LIMIT,
            default_ttl: DEFAULT_TTL,
        }
    }
}
