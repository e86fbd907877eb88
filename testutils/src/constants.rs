pub const TEST_NAMESPACE: &str = "test-namespace";
pub const TEST_POD: &str = "the-pod";
pub const TEST_LABEL_SELECTOR: &str = "app=foo";
pub const TEST_FIELD_SELECTOR: &str = "status.phase=Running";
pub const TEST_APP_LABEL_KEY: &str = "app";
pub const TEST_APP_LABEL_VALUE: &str = "foo";
