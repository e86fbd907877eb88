// Pod phases
pub const POD_PHASE_RUNNING: &str = "Running";
pub const POD_PHASE_PENDING: &str = "Pending";

// Env vars
pub const POD_WAIT_LOG_ENV_VAR: &str = "POD_WAIT_LOG";

// Defaults
pub const DEFAULT_LOG_FILTER: &str = "info";
pub const DEFAULT_MIN_PODS: usize = 1;

// Timing
pub const DEFAULT_WAIT_TIMEOUT_SECONDS: u64 = 300;
pub const DEFAULT_RETRY_DELAY_SECONDS: u64 = 5;

// HTTP status codes that will never succeed on retry
pub const NON_RETRYABLE_STATUS_CODES: [u16; 3] = [400, 401, 403];
