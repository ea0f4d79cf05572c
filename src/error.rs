use thiserror::Error as ThisError;

#[derive(ThisError, Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("Clipboard command `{0}` could not be started: {1}")]
    Spawn(String, String),
    #[error("Clipboard command exited with status {0}")]
    Exit(i32),
    #[error("Clipboard write failed: {0}")]
    Write(String),
}

#[derive(ThisError, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Missing field `{0}` in validator state")]
    MissingField(String),
    #[error("Invalid value for `{field}`: {value}")]
    InvalidField { field: String, value: String },
}

#[derive(ThisError, Debug)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },
    #[error("Unexpected response: {0}")]
    Decode(String),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

#[derive(ThisError, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },
}
