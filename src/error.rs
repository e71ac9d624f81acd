use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

#[allow(clippy::enum_variant_names)]
#[derive(Debug)]
pub enum Error {
    Usage(String),
    Io(std::io::Error),
    MissingSoa,
    ProviderError(String),
    CredentialError(String),
    NotFound(String),
    InvalidInput(String),
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Usage(msg) => write!(f, "Usage error: {msg}"),
            Error::Io(e) => write!(f, "I/O error: {e}"),
            Error::MissingSoa => write!(
                f,
                "Zone file has no start-of-authority (Z) record; cannot determine the domain"
            ),
            Error::ProviderError(msg) => write!(f, "Provider error: {msg}"),
            Error::CredentialError(msg) => write!(f, "Credential error: {msg}"),
            Error::NotFound(msg) => write!(f, "Not found: {msg}"),
            Error::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<getopts::Fail> for Error {
    fn from(err: getopts::Fail) -> Self {
        Error::Usage(err.to_string())
    }
}
