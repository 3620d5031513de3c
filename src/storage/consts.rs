use std::time::Duration;

/// Rounds untouched for this long are dropped when another round starts.
pub const ROUND_IDLE_TIMEOUT: Duration = Duration::from_secs(30 * 60);
