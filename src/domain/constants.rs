pub const FETCH_ENDPOINT: &str = "https://bfhldevapigw.healthrx.co.in/hiring/generateWebhook";

pub const IDENTITY_NAME: &str = "John Doe";
pub const IDENTITY_REG_NO: &str = "REG12347";
pub const IDENTITY_EMAIL: &str = "john@example.com";

pub const DEFAULT_MAX_ATTEMPTS: u32 = 4;
pub const DEFAULT_BACKOFF_STEP_MS: u64 = 1000;
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;
