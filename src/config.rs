use crate::domain::constants::{
    DEFAULT_BACKOFF_STEP_MS, DEFAULT_MAX_ATTEMPTS, DEFAULT_REQUEST_TIMEOUT_MS, FETCH_ENDPOINT,
    IDENTITY_EMAIL, IDENTITY_NAME, IDENTITY_REG_NO,
};
use crate::domain::models::Identity;
use crate::services::delivery::RetryPolicy;
use std::time::Duration;

/// Everything a run needs that is not fetched. Built from the fixed
/// constants; there is no external source for these values.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub fetch_endpoint: String,
    pub identity: Identity,
    pub retry: RetryPolicy,
    pub request_timeout: Duration,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            fetch_endpoint: FETCH_ENDPOINT.to_string(),
            identity: Identity {
                name: IDENTITY_NAME.to_string(),
                reg_no: IDENTITY_REG_NO.to_string(),
                email: IDENTITY_EMAIL.to_string(),
            },
            retry: RetryPolicy {
                max_attempts: DEFAULT_MAX_ATTEMPTS,
                backoff_step: Duration::from_millis(DEFAULT_BACKOFF_STEP_MS),
            },
            request_timeout: Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS),
        }
    }
}
