use std::{env, str::FromStr};

use tracing::warn;

/// First parseable value among `keys`, or `default`. Set-but-invalid values
/// are reported and skipped.
pub fn read_env_any<T>(keys: &[&str], default: T) -> T
where
    T: FromStr,
{
    keys.iter()
        .find_map(|key| {
            let raw = env::var(key).ok()?;
            match raw.parse::<T>() {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!(key, value = %raw, "ignoring unparseable environment value");
                    None
                }
            }
        })
        .unwrap_or(default)
}
