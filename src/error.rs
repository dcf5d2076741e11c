//! Error taxonomy.
//!
//! Only `FetchError` and `SelectorError` abort a run. `InputError` is turned
//! into an empty outcome by the solver dispatch, and delivery failures are
//! reported through `DeliveryReport` instead of an error.

#[derive(thiserror::Error, Debug)]
pub enum TransportError {
    #[error("request timed out")]
    Timeout,
    #[error("request failed: {0}")]
    Connect(String),
    #[error("failed to read response body: {0}")]
    Body(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            TransportError::Timeout
        } else if e.is_body() || e.is_decode() {
            TransportError::Body(e.to_string())
        } else {
            TransportError::Connect(e.to_string())
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    #[error("failed to encode request body: {0}")]
    Encode(serde_json::Error),
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("fetch endpoint answered with status {0}")]
    Status(u16),
    #[error("fetch response has no JSON object body")]
    MissingBody,
    #[error("fetch response is missing required field: {0}")]
    MissingField(&'static str),
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum InputError {
    #[error("no user list found in dataset")]
    MissingUsers,
    #[error("missing required parameter: {0}")]
    MissingParameter(&'static str),
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum SelectorError {
    #[error("registration number must end in two decimal digits: {0:?}")]
    InvalidRegistration(String),
}
