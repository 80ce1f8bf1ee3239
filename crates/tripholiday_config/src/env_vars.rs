//! Environment variable handling for the Trip Holiday backend.
//!
//! Configuration values can be overridden with `TRIPHOLIDAY__SECTION__KEY`
//! variables. Values marked `"secret_from_env"` in a config file are resolved
//! from `TRIPHOLIDAY_SECRET_SECTION_KEY`, falling back to the plain
//! `SECTION_KEY` names the deployment scripts already export
//! (`RAZORPAY_KEY_SECRET`, `JWT_SECRET`, `SMTP_PASS`, ...).

use std::env;
use tracing::warn;

/// The default prefix for configuration environment variables
pub const DEFAULT_PREFIX: &str = "TRIPHOLIDAY";

/// The prefix for secret environment variables
pub const SECRET_PREFIX: &str = "TRIPHOLIDAY_SECRET";

/// The separator for configuration environment variables
pub const CONFIG_SEPARATOR: &str = "__";

/// The separator for secret environment variables
pub const SECRET_SEPARATOR: &str = "_";

/// Marker value that asks the loader to pull a value from the environment.
pub const SECRET_MARKER: &str = "secret_from_env";

/// Get the prefix for configuration environment variables
pub fn get_config_prefix() -> String {
    env::var("PREFIX").unwrap_or_else(|_| DEFAULT_PREFIX.to_string())
}

/// Convert a configuration path to an environment variable name
///
/// `"server.port"` becomes `"TRIPHOLIDAY__SERVER__PORT"`.
pub fn config_path_to_env_var(path: &str) -> String {
    let prefix = get_config_prefix();
    let path = path.replace('.', CONFIG_SEPARATOR);
    format!("{}{}{}", prefix, CONFIG_SEPARATOR, path).to_uppercase()
}

/// Convert a secret path to an environment variable name
///
/// `"razorpay.key_secret"` becomes `"TRIPHOLIDAY_SECRET_RAZORPAY_KEY_SECRET"`.
pub fn secret_path_to_env_var(path: &str) -> String {
    let path = path.replace('.', SECRET_SEPARATOR);
    format!("{}{}{}", SECRET_PREFIX, SECRET_SEPARATOR, path).to_uppercase()
}

/// Convert a secret path to its short legacy name
///
/// `"razorpay.key_secret"` becomes `"RAZORPAY_KEY_SECRET"`.
pub fn legacy_secret_path_to_env_var(path: &str) -> String {
    path.replace('.', SECRET_SEPARATOR).to_uppercase()
}

/// Look up a secret, trying the prefixed name first and the legacy name second.
pub fn get_secret_env_var(path: &str) -> Option<String> {
    if let Ok(value) = env::var(secret_path_to_env_var(path)) {
        return Some(value);
    }
    env::var(legacy_secret_path_to_env_var(path)).ok()
}

/// Check if a path names a secret.
///
/// Used to keep credentials out of the startup log.
pub fn is_secret_path(path: &str) -> bool {
    let path_lower = path.to_lowercase();
    path_lower.contains("secret")
        || path_lower.contains("pass")
        || path_lower.contains("token")
        || path_lower.contains("sid")
}

/// Replace every `"secret_from_env"` marker in `value` with the matching
/// environment variable. Returns `true` if anything was replaced.
pub fn inject_env_vars(value: &mut serde_json::Value) -> bool {
    use serde_json::Value;

    fn walk(path: Vec<String>, obj: &mut Value) -> bool {
        let mut replaced = false;

        match obj {
            Value::Object(map) => {
                for (k, v) in map.iter_mut() {
                    let mut new_path = path.clone();
                    new_path.push(k.to_string());
                    replaced |= walk(new_path, v);
                }
            }
            Value::String(s) if s == SECRET_MARKER => {
                let path_str = path.join(".");
                if let Some(env_val) = get_secret_env_var(&path_str) {
                    *s = env_val;
                    replaced = true;
                } else {
                    warn!(
                        "No environment value for {} (tried {} and {})",
                        path_str,
                        secret_path_to_env_var(&path_str),
                        legacy_secret_path_to_env_var(&path_str)
                    );
                }
            }
            _ => {}
        }

        replaced
    }

    walk(vec![], value)
}

/// Return a copy of `value` with every secret-looking leaf masked.
pub fn redact_secrets(value: &serde_json::Value) -> serde_json::Value {
    use serde_json::Value;

    fn walk(path: &str, obj: &Value) -> Value {
        match obj {
            Value::Object(map) => Value::Object(
                map.iter()
                    .map(|(k, v)| {
                        let child = if path.is_empty() {
                            k.clone()
                        } else {
                            format!("{}.{}", path, k)
                        };
                        (k.clone(), walk(&child, v))
                    })
                    .collect(),
            ),
            Value::String(_) if is_secret_path(path) => Value::String("***".to_string()),
            other => other.clone(),
        }
    }

    walk("", value)
}
