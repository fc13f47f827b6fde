//! Confirmation codes for destructive commands.

use rand::Rng;

/// A random 4-digit code, asked back verbatim before `/start` and `/endgame`
/// take effect.
pub fn confirmation_code() -> String {
    rand::rng().random_range(1000..10000).to_string()
}
