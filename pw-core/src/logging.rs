use crate::constants::*;

// Integration suites call this from every test, so a subscriber that's already installed
// is not an error here.  The filter comes from POD_WAIT_LOG, falling back to "info".
pub fn setup_for_tests() {
    let env_filter = std::env::var(POD_WAIT_LOG_ENV_VAR).unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_file(true)
        .with_line_number(true)
        .with_target(false)
        .with_env_filter(env_filter)
        .without_time()
        .compact()
        .try_init();
}
