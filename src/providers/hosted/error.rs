use crate::providers::hosted::types::ApiError;
use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HostedProviderError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Credential error: {0}")]
    Credential(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Rate limited")]
    RateLimited,
}

impl From<ApiError> for HostedProviderError {
    fn from(err: ApiError) -> Self {
        match err.code.as_str() {
            "zone_not_found" | "rrset_not_found" => HostedProviderError::NotFound(err.message),
            "invalid_request" | "invalid_rrset" => HostedProviderError::InvalidInput(err.message),
            "invalid_token" | "access_denied" => HostedProviderError::Credential(err.message),
            "throttled" => HostedProviderError::RateLimited,
            _ => HostedProviderError::Provider(format!("{}: {}", err.code, err.message)),
        }
    }
}

impl HostedProviderError {
    /// Maps an error response. A known error code wins; otherwise the HTTP
    /// status decides.
    pub fn from_response(status: StatusCode, err: ApiError) -> Self {
        match HostedProviderError::from(err) {
            HostedProviderError::Provider(msg) => match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    HostedProviderError::Credential(msg)
                }
                StatusCode::NOT_FOUND => HostedProviderError::NotFound(msg),
                StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                    HostedProviderError::InvalidInput(msg)
                }
                StatusCode::TOO_MANY_REQUESTS => HostedProviderError::RateLimited,
                _ => HostedProviderError::Provider(msg),
            },
            mapped => mapped,
        }
    }
}

use crate::error::Error;

pub fn map_error(e: HostedProviderError) -> Error {
    use HostedProviderError::*;
    match e {
        Http(err) => Error::ProviderError(err.to_string()),
        Credential(msg) => Error::CredentialError(msg),
        NotFound(msg) => Error::NotFound(msg),
        InvalidInput(msg) => Error::InvalidInput(msg),
        Provider(msg) => Error::ProviderError(msg),
        RateLimited => Error::ProviderError("Rate limited".to_string()),
    }
}
