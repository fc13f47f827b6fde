//! Database configuration from environment variables.

use std::env;

use crate::errors::domain::DomainError;

/// Database profile enum for different environments
#[derive(Debug, Clone, PartialEq)]
pub enum DbProfile {
    /// Production database profile
    Prod,
    /// Test database profile - enforces safety rules
    Test,
}

/// Builds the sqlite connection URL based on the profile.
///
/// - Prod: `RRBOT_DB` file path, defaulting to `rrbot_data.sqlite`.
/// - Test: `RRBOT_TEST_DB` file path, defaulting to in-memory; a file path
///   must end with `_test.sqlite` so tests can never open the prod database.
pub fn db_url(profile: DbProfile) -> Result<String, DomainError> {
    let path = match profile {
        DbProfile::Prod => env::var("RRBOT_DB").unwrap_or_else(|_| "rrbot_data.sqlite".to_string()),
        DbProfile::Test => {
            let path = env::var("RRBOT_TEST_DB").unwrap_or_else(|_| ":memory:".to_string());
            if path != ":memory:" && !path.ends_with("_test.sqlite") {
                return Err(DomainError::validation(format!(
                    "Test profile requires a database file ending with '_test.sqlite', but got: '{path}'"
                )));
            }
            path
        }
    };

    if path == ":memory:" {
        Ok("sqlite::memory:".to_string())
    } else {
        Ok(format!("sqlite://{path}?mode=rwc"))
    }
}
