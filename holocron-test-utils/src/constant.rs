//! Shared constant values for test configuration.

/// Signing secret used for every test token. Not a real credential.
pub static TEST_TOKEN_SECRET: &str = "holocron-test-token-secret";

/// Email used for the default test user.
pub static TEST_USER_EMAIL: &str = "luke@rebellion.org";

/// Password used for the default test user.
pub static TEST_USER_PASSWORD: &str = "nerfherder";
