//! Env parsing helpers shared by the config loaders.

use std::env;

use anyhow::Context;

/// Accepts 1/0, true/false, yes/no, on/off (any case, surrounding spaces ignored). Empty is false.
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

/// Reads a boolean env var; `default` when unset, an error when set to anything [`parse_bool`] rejects.
pub fn env_bool(name: &str, default: bool) -> anyhow::Result<bool> {
    match env::var(name) {
        Ok(raw) => parse_bool(&raw)
            .with_context(|| format!("{name} must be true or false, got {raw:?}")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bool() {
        assert_eq!(parse_bool("TRUE"), Some(true));
        assert_eq!(parse_bool(" on "), Some(true));
        assert_eq!(parse_bool(" 0 "), Some(false));
        assert_eq!(parse_bool(""), Some(false));
        assert_eq!(parse_bool("nope"), None);
    }

    #[test]
    fn test_env_bool() {
        let name = "SHOP_CORE_CONFIG_TEST_FLAG";
        env::remove_var(name);
        assert!(env_bool(name, true).unwrap());
        assert!(!env_bool(name, false).unwrap());

        env::set_var(name, "yes");
        assert!(env_bool(name, false).unwrap());

        env::set_var(name, "maybe");
        let err = env_bool(name, false).unwrap_err();
        assert!(err.to_string().contains(name));
        env::remove_var(name);
    }
}
