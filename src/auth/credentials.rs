use crate::error::Error;
use std::collections::HashMap;
use std::env;

pub const API_TOKEN_KEY: &str = "dns_api_token";

pub trait CredentialManager: Send + Sync {
    fn get(&self, key: &str) -> Result<String, Error>;
}

/// Environment-backed credential provider.
///
/// Keys are looked up as upper-cased environment variables, so
/// `dns_api_token` reads `DNS_API_TOKEN`.
pub struct EnvCredentialManager;

impl CredentialManager for EnvCredentialManager {
    fn get(&self, key: &str) -> Result<String, Error> {
        let var = key.to_uppercase();
        env::var(&var).map_err(|e| Error::CredentialError(format!("{var}: {e}")))
    }
}

/// Fixed credentials, for callers that already hold them.
pub struct StaticCredentialManager {
    data: HashMap<String, String>,
}

impl StaticCredentialManager {
    pub fn new<K: Into<String>, V: Into<String>>(pairs: impl IntoIterator<Item = (K, V)>) -> Self {
        Self {
            data: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl CredentialManager for StaticCredentialManager {
    fn get(&self, key: &str) -> Result<String, Error> {
        self.data
            .get(key)
            .cloned()
            .ok_or_else(|| Error::CredentialError(format!("Unknown key: {key}")))
    }
}
